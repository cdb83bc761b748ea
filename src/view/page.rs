//! Full status page.

use std::fmt::Write;

use crate::status::state::ConnectionState;
use crate::view::fragment::Fragment;

pub const TITLE: &str = "Mini SaaS - Gestión de Tareas";
pub const CARD_HEADING: &str = "Estado del Backend";
pub const FOOTER_NOTE: &str =
    "Esta es una aplicación de ejemplo que muestra la comunicación entre el frontend y el backend.";

/// Render the page for `state`: title, status card with one fragment, footer.
pub fn render_page(state: &ConnectionState) -> String {
    let rule = "-".repeat(TITLE.chars().count());
    let fragment = Fragment::select(state);

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);
    let _ = writeln!(out, "[{CARD_HEADING}]");
    let _ = write!(out, "{fragment}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{FOOTER_NOTE}");
    out
}
