//! # Apertura del Navegador
//! src/browser.rs
//!
//! Abre el navegador por defecto del sistema apuntando a la URL del
//! servidor. Es una operación best-effort: si el sistema no tiene con qué
//! abrir URLs o el opener falla, se imprime la sugerencia manual y el
//! servidor sigue corriendo como si nada.

/// Intenta abrir `url` en el navegador por defecto
///
/// El fallo se captura acá mismo y se reduce a una sugerencia impresa;
/// nunca se propaga.
pub fn launch(url: &str) {
    if let Err(e) = open::that(url) {
        eprintln!("   ⚠️  No se pudo abrir el navegador: {}", e);
        println!("   💡 Abra manualmente: {}", url);
    }
}
