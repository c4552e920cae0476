//! # Static Server
//! src/lib.rs
//!
//! Servidor HTTP de archivos estáticos para desarrollo local: expone el
//! directorio donde vive el ejecutable en un puerto fijo y abre el
//! navegador por defecto apuntando a esa dirección.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing y manejo del protocolo HTTP/1.x (GET/HEAD)
//! - `files`: Resolución de paths URL → archivos bajo la raíz
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `config`: Configuración (puerto, host) y descubrimiento de la raíz
//! - `browser`: Apertura best-effort del navegador del sistema
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use static_server::config::Config;
//! use static_server::files::FileResolver;
//! use static_server::server::Server;
//!
//! let config = Config::default();
//! let resolver = FileResolver::new(config.server_root().expect("raíz"));
//! let server = Server::bind(&config.address(), resolver).expect("bind");
//! server.run().expect("Error del servidor");
//! ```

pub mod browser;
pub mod config;
pub mod files;
pub mod http;
pub mod server;
