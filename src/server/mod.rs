//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Hace bind en un puerto
//! 2. Acepta conexiones entrantes
//! 3. Lee y parsea requests HTTP
//! 4. Resuelve el archivo pedido y envía la response
//!
//! Cada conexión se atiende en su propio thread; no hay estado compartido
//! mutable entre requests.

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{Server, ShutdownHandle};
