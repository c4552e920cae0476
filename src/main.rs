//! # Static Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de archivos estáticos.
//!
//! Secuencia: banner → descubrir raíz → bind → instalar Ctrl+C →
//! abrir navegador (best-effort) → serve loop → despedida.

use static_server::browser;
use static_server::config::Config;
use static_server::files::FileResolver;
use static_server::server::Server;
use std::io::ErrorKind;
use std::process;

fn main() {
    println!("========================================");
    println!("  Servidor de desarrollo local");
    println!("========================================\n");

    let config = Config::new();

    // La raíz es el directorio del ejecutable, nunca el CWD
    let root = match config.server_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("❌ No se pudo determinar la raíz servida: {}", e);
            process::exit(1);
        }
    };

    let resolver = FileResolver::new(root.clone());

    let server = match Server::bind(config.address(), resolver) {
        Ok(server) => server,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            eprintln!("❌ El puerto {} ya está en uso", config.port);
            eprintln!("💡 Pruebe con otro puerto (--port) o cierre la aplicación que lo ocupa");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Error al iniciar el servidor: {}", e);
            process::exit(1);
        }
    };

    println!("✅ Servidor corriendo en {}", config.url());
    println!("📁 Sirviendo archivos desde: {}", root.display());
    println!("❌ Presione Ctrl+C para detener el servidor\n");

    // Ctrl+C detiene el serve loop de forma ordenada
    match server.shutdown_handle() {
        Ok(handle) => {
            if let Err(e) = ctrlc::set_handler(move || handle.stop()) {
                eprintln!("⚠️  No se pudo instalar el handler de Ctrl+C: {}", e);
            }
        }
        Err(e) => {
            eprintln!("⚠️  No se pudo preparar el shutdown: {}", e);
        }
    }

    if !config.no_browser {
        println!("🚀 Abriendo navegador...");
        browser::launch(&config.url());
    }

    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        process::exit(1);
    }

    println!("\n🛑 Servidor detenido");
}
