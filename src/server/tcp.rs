//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que atiende múltiples conexiones usando
//! threads: cada conexión se procesa en su propio thread. No hay pools ni
//! colas; el único estado compartido es el resolver (inmutable) y la
//! bandera de shutdown.

use crate::files::{listing, mime, FileResolver, Resolution};
use crate::http::{Method, ParseError, Request, Response, StatusCode};
use percent_encoding::percent_decode_str;
use std::io::{self, Read, Write};
use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Servidor HTTP de archivos estáticos
pub struct Server {
    listener: TcpListener,
    resolver: Arc<FileResolver>,
    running: Arc<AtomicBool>,
}

/// Handle para detener el servidor desde otro thread (ej: handler de Ctrl+C)
///
/// `stop()` baja la bandera y despierta al `accept` con una conexión
/// loopback, así el serve loop termina en tiempo acotado en vez de quedarse
/// bloqueado esperando la próxima conexión.
#[derive(Clone)]
pub struct ShutdownHandle {
    running: Arc<AtomicBool>,
    wake_addr: SocketAddr,
}

impl ShutdownHandle {
    /// Detiene el serve loop. Idempotente.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        // Conexión de despertar: si falla, el loop igual saldrá en el
        // próximo accept
        let _ = TcpStream::connect(self.wake_addr);
    }
}

impl Server {
    /// Hace bind del listener y deja el servidor listo para `run()`
    ///
    /// A lo sumo un listener vive por proceso; si el puerto ya está
    /// ocupado el error (`AddrInUse`) es terminal y lo reporta `main`.
    pub fn bind(address: impl ToSocketAddrs, resolver: FileResolver) -> io::Result<Self> {
        let listener = TcpListener::bind(address)?;
        Ok(Self {
            listener,
            resolver: Arc::new(resolver),
            running: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Dirección real del listener (útil con puerto 0 en tests)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Crea un handle para detener este servidor
    pub fn shutdown_handle(&self) -> io::Result<ShutdownHandle> {
        let mut wake_addr = self.listener.local_addr()?;
        // Con bind wildcard (0.0.0.0) la conexión de despertar va por loopback
        if wake_addr.ip().is_unspecified() {
            wake_addr.set_ip(IpAddr::V4(Ipv4Addr::LOCALHOST));
        }
        Ok(ShutdownHandle {
            running: Arc::clone(&self.running),
            wake_addr,
        })
    }

    /// Serve loop: acepta conexiones hasta que `ShutdownHandle::stop()`
    /// baje la bandera
    ///
    /// Los errores por-request nunca llegan acá: se convierten en status
    /// HTTP dentro del thread de la conexión.
    pub fn run(self) -> io::Result<()> {
        for stream in self.listener.incoming() {
            if !self.running.load(Ordering::SeqCst) {
                break;
            }

            match stream {
                Ok(stream) => {
                    let resolver = Arc::clone(&self.resolver);
                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, resolver) {
                            eprintln!("   ❌ Error en conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: leer, parsear, resolver, responder
    fn handle_connection(mut stream: TcpStream, resolver: Arc<FileResolver>) -> io::Result<()> {
        let mut buffer = [0u8; 8192];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            // El peer cerró sin mandar nada (ej: la conexión de despertar)
            return Ok(());
        }

        let response = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                println!("   ✅ {} {}", request.method().as_str(), request.path());
                let response = Self::respond(&resolver, &request);
                match request.method() {
                    Method::Head => response.into_head(),
                    Method::Get => response,
                }
            }
            // Un método desconocido es un request bien formado que no
            // servimos: 405, no 400
            Err(ParseError::UnsupportedMethod(m)) => {
                println!("   ❌ Método no soportado: {}", m);
                Response::error(
                    StatusCode::MethodNotAllowed,
                    &format!("Método no soportado: {}", m),
                )
                .with_header("Allow", "GET, HEAD")
            }
            Err(e) => {
                println!("   ❌ Parse error: {}", e);
                Response::error(StatusCode::BadRequest, &format!("Request inválido: {}", e))
            }
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        println!("   ✅ {}", response.status());

        Ok(())
    }

    /// Mapea un request ya parseado a su response
    fn respond(resolver: &FileResolver, request: &Request) -> Response {
        match resolver.resolve(request.path()) {
            Resolution::File(path) => Self::file_response(&path, request.path()),
            Resolution::Directory(dir) => {
                let shown = percent_decode_str(request.path())
                    .decode_utf8_lossy()
                    .into_owned();
                match listing::render(&shown, &dir) {
                    Ok(html) => Response::new(StatusCode::Ok)
                        .with_header("Content-Type", "text/html; charset=utf-8")
                        .with_body(&html),
                    Err(_) => Response::error(
                        StatusCode::InternalServerError,
                        &format!("No se pudo listar: {}", request.path()),
                    ),
                }
            }
            Resolution::Traversal => Response::error(
                StatusCode::Forbidden,
                "El path intenta salir de la raíz servida",
            ),
            Resolution::BadPath => Response::error(
                StatusCode::BadRequest,
                &format!("Path indecodificable: {}", request.path()),
            ),
            Resolution::NotFound => Response::error(
                StatusCode::NotFound,
                &format!("No existe: {}", request.path()),
            ),
        }
    }

    /// Sirve los bytes de un archivo ya resuelto
    ///
    /// `shown` es el path de la URL, solo para los mensajes de error. La
    /// lectura puede fallar aunque el resolve haya clasificado `path` como
    /// archivo: desapareció (404) o no se pudo leer (permisos, I/O → 500).
    fn file_response(path: &Path, shown: &str) -> Response {
        match std::fs::read(path) {
            Ok(bytes) => {
                let extension = path.extension().and_then(|e| e.to_str());
                Response::new(StatusCode::Ok)
                    .with_header("Content-Type", mime::from_extension(extension))
                    .with_body_bytes(bytes)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Response::error(StatusCode::NotFound, &format!("No existe: {}", shown))
            }
            Err(_) => Response::error(
                StatusCode::InternalServerError,
                &format!("No se pudo leer: {}", shown),
            ),
        }
    }
}
