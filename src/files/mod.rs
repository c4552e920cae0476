//! # Módulo de Archivos
//! src/files/mod.rs
//!
//! Este módulo mapea paths de URL a archivos bajo la raíz servida:
//!
//! - `resolver`: decodificación, sanitización anti-traversal y resolución
//! - `mime`: tabla extensión → media type
//! - `listing`: página HTML de listado de directorio
//!
//! ```text
//! "/docs/gu%C3%ADa.html" → FileResolver → Resolution::File(root/docs/guía.html)
//! ```

pub mod listing;
pub mod mime;
pub mod resolver;

// Re-exportar para facilitar el uso
pub use resolver::{FileResolver, Resolution};
