//! # Listado de Directorio
//! src/files/listing.rs
//!
//! Genera la página HTML que se sirve cuando un directorio no tiene
//! `index.html`, al estilo de los listados por defecto de cualquier
//! servidor estático: un `<ul>` de links, directorios con `/` final.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fs;
use std::io;
use std::path::Path;

/// Caracteres que deben escaparse dentro de un segmento de path en un href
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'?')
    .add(b'%');

/// Genera el HTML del listado para `dir`
///
/// `url_path` es el path decodificado de la URL que llegó (se muestra como
/// título y se usa como base de los links). Los errores de lectura del
/// directorio se propagan: el servidor los convierte en 500.
pub fn render(url_path: &str, dir: &Path) -> io::Result<String> {
    let mut entries: Vec<(String, bool)> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type()?.is_dir();
        entries.push((name, is_dir));
    }

    // Directorios primero, luego archivos, ambos en orden alfabético
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    // La base del href se re-encodea segmento por segmento: el path llega
    // ya decodificado, y un directorio llamado "mis docs" debe linkear
    // como "/mis%20docs/", no crudo
    let mut base: String = url_path
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/");
    if !base.ends_with('/') {
        base.push('/');
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">");
    html.push_str(&format!(
        "<title>Listado de {}</title></head>\n<body>\n",
        escape_html(url_path)
    ));
    html.push_str(&format!("<h1>Listado de {}</h1>\n<hr>\n<ul>\n", escape_html(url_path)));

    for (name, is_dir) in &entries {
        let suffix = if *is_dir { "/" } else { "" };
        let href = format!(
            "{}{}{}",
            base,
            utf8_percent_encode(name, PATH_SEGMENT),
            suffix
        );
        html.push_str(&format!(
            "<li><a href=\"{}\">{}{}</a></li>\n",
            href,
            escape_html(name),
            suffix
        ));
    }

    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}

/// Escapa lo mínimo para incrustar un nombre de archivo en HTML,
/// incluyendo dentro de un atributo entre comillas
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_lists_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let html = render("/media", dir.path()).unwrap();

        assert!(html.contains("<title>Listado de /media</title>"));
        assert!(html.contains("<a href=\"/media/a.txt\">a.txt</a>"));
        assert!(html.contains("<a href=\"/media/b.txt\">b.txt</a>"));
        assert!(html.contains("<a href=\"/media/sub/\">sub/</a>"));
    }

    #[test]
    fn test_render_directories_first() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("aaa.txt"), "").unwrap();
        fs::create_dir(dir.path().join("zzz")).unwrap();

        let html = render("/", dir.path()).unwrap();
        let dir_pos = html.find("zzz/").unwrap();
        let file_pos = html.find("aaa.txt").unwrap();
        assert!(dir_pos < file_pos, "los directorios van primero");
    }

    #[test]
    fn test_render_encodes_hrefs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("nota final.txt"), "").unwrap();

        let html = render("/", dir.path()).unwrap();

        assert!(html.contains("href=\"/nota%20final.txt\""));
        assert!(html.contains(">nota final.txt<"));
    }

    #[test]
    fn test_render_escapes_html_in_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a<b>&c.txt"), "").unwrap();

        let html = render("/", dir.path()).unwrap();

        assert!(html.contains("a&lt;b&gt;&amp;c.txt"));
        assert!(!html.contains(">a<b>"));
    }

    #[test]
    fn test_render_encodes_base_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("archivo.txt"), "").unwrap();

        // El path de la URL llega decodificado; los hrefs lo re-encodean
        let html = render("/mis docs", dir.path()).unwrap();

        assert!(html.contains("href=\"/mis%20docs/archivo.txt\""));
        assert!(!html.contains("href=\"/mis docs/"));
        // El título sí muestra el nombre legible
        assert!(html.contains("<h1>Listado de /mis docs</h1>"));
    }

    #[test]
    fn test_render_escapes_quotes_in_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a\"b.txt"), "").unwrap();

        let html = render("/", dir.path()).unwrap();

        // En el href la comilla va percent-encodeada; en el texto, como
        // entidad. Nunca una comilla cruda que rompa el atributo.
        assert!(html.contains("href=\"/a%22b.txt\""));
        assert!(html.contains(">a&quot;b.txt<"));
    }

    #[test]
    fn test_render_missing_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        assert!(render("/nope", &missing).is_err());
    }
}
