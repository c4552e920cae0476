//! # Resolución de Paths
//! src/files/resolver.rs
//!
//! El corazón del servidor estático: convertir el path de una URL en un
//! archivo bajo la raíz servida, sin dejar nunca que un path escape de esa
//! raíz.
//!
//! ## Pipeline
//!
//! ```text
//! "/docs/gu%C3%ADa.html"
//!   → percent-decode           ("/docs/guía.html")
//!   → sanitizar componentes    (rechaza "..", prefijos, raíces)
//!   → unir a la raíz servida   (root/docs/guía.html)
//!   → clasificar               (File / Directory / NotFound)
//! ```
//!
//! La sanitización trabaja componente por componente en vez de buscar
//! substrings: `..` ya decodificado no puede colarse como `%2e%2e` ni
//! mezclado con separadores alternativos.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// Resultado de resolver un path de URL contra la raíz
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Archivo existente listo para servir (incluye el `index.html` de un
    /// directorio que lo tenga)
    File(PathBuf),

    /// Directorio existente sin `index.html`: se responde con un listado
    Directory(PathBuf),

    /// El path decodificado intenta escapar de la raíz (`..`, raíz
    /// absoluta, prefijo de drive)
    Traversal,

    /// El path no se pudo decodificar (UTF-8 inválido, NUL embebido)
    BadPath,

    /// Nada existe en esa ubicación bajo la raíz
    NotFound,
}

/// Resuelve paths de URL contra una raíz fija
///
/// La raíz se entrega al construir y no cambia durante la vida del proceso.
/// No hay estado mutable: el mismo resolver se comparte entre todas las
/// conexiones.
#[derive(Debug, Clone)]
pub struct FileResolver {
    root: PathBuf,
}

/// Nombre convencional del archivo índice de un directorio
const INDEX_FILE: &str = "index.html";

impl FileResolver {
    /// Crea un resolver para la raíz dada
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// La raíz servida
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resuelve el path crudo de una URL a un resultado servible
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::files::{FileResolver, Resolution};
    ///
    /// let resolver = FileResolver::new("/srv/site");
    /// assert_eq!(resolver.resolve("/../etc/passwd"), Resolution::Traversal);
    /// ```
    pub fn resolve(&self, raw_path: &str) -> Resolution {
        // 1. Decodificar %XX. Un path que no es UTF-8 válido después de
        // decodificar no corresponde a ningún archivo servible.
        let decoded = match percent_decode_str(raw_path).decode_utf8() {
            Ok(s) => s.into_owned(),
            Err(_) => return Resolution::BadPath,
        };

        if decoded.contains('\0') {
            return Resolution::BadPath;
        }

        // 2. Sanitizar componente por componente
        let relative = match Self::sanitize(&decoded) {
            Some(rel) => rel,
            None => return Resolution::Traversal,
        };

        // 3. Unir a la raíz y clasificar
        let full = self.root.join(relative);

        if full.is_dir() {
            let index = full.join(INDEX_FILE);
            if index.is_file() {
                Resolution::File(index)
            } else {
                Resolution::Directory(full)
            }
        } else if full.is_file() {
            Resolution::File(full)
        } else {
            Resolution::NotFound
        }
    }

    /// Construye un path relativo seguro a partir del path decodificado
    ///
    /// Retorna `None` si algún componente intenta subir (`..`) o anclar el
    /// path fuera de la raíz (raíz absoluta re-inyectada, prefijo de drive
    /// en Windows). Componentes `.` y separadores repetidos se descartan.
    fn sanitize(decoded: &str) -> Option<PathBuf> {
        let trimmed = decoded.trim_start_matches('/');
        let mut relative = PathBuf::new();

        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return None;
                }
            }
        }

        Some(relative)
    }
}
