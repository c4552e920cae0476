//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor estático con soporte
//! para argumentos CLI y variables de entorno. Ningún argumento es
//! obligatorio: correr el binario sin flags usa los defaults.
//!
//! La raíz servida NO es configurable: siempre es el directorio donde vive
//! el ejecutable (no el directorio de trabajo del shell). Eso hace que el
//! servidor exponga el proyecto junto al que se instaló, sin importar desde
//! dónde se invoque.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./static_server --port 8000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! SERVE_PORT=9000 ./static_server
//! ```

use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Configuración del servidor de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "static_server")]
#[command(about = "Servidor HTTP de archivos estáticos para desarrollo local")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8000", env = "SERVE_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "SERVE_HOST")]
    pub host: String,

    /// No abrir el navegador al iniciar
    #[arg(long = "no-browser", env = "SERVE_NO_BROWSER")]
    pub no_browser: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL navegable del servidor
    ///
    /// Siempre usa `localhost`: el bind es wildcard pero el navegador local
    /// llega por loopback.
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.url(), "http://localhost:8000/");
    /// ```
    pub fn url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }

    /// Determina la raíz servida: el directorio que contiene el ejecutable
    ///
    /// Se canonicaliza para que symlinks al binario no cambien la raíz
    /// efectiva. Un error aquí es terminal para la corrida.
    pub fn server_root(&self) -> io::Result<PathBuf> {
        let exe = std::env::current_exe()?.canonicalize()?;
        let root = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "el ejecutable no tiene directorio padre",
            )
        })?;
        Ok(root.to_path_buf())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            no_browser: false,
        }
    }
}
