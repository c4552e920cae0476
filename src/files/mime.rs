//! # Tabla de Media Types
//! src/files/mime.rs
//!
//! Mapea extensiones de archivo a su `Content-Type`. La tabla cubre lo que
//! aparece en un proyecto web estático típico; cualquier extensión
//! desconocida se sirve como `application/octet-stream`.

/// Retorna el media type para una extensión de archivo
///
/// # Ejemplo
/// ```
/// use static_server::files::mime;
///
/// assert_eq!(mime::from_extension(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(mime::from_extension(None), "application/octet-stream");
/// ```
pub fn from_extension(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain; charset=utf-8",
        Some("md") => "text/markdown; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        Some("pdf") => "application/pdf",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}
