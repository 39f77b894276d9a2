//! HTML page templates.
//!
//! Templates are stored in `templates/pages/` and use Jinja2 syntax. Every page
//! extends `layout.jinja`.

pub mod engine;

pub use engine::{render_page, TemplateError};
