//! Templated page rendering.
//!
//! The two shipped views only need `{{key}}` substitution, so rendering
//! is a plain string replace over templates compiled into the binary.

use actix_web::http::StatusCode;

const INDEX_TEMPLATE: &str = include_str!("../views/index.html");
const ERROR_TEMPLATE: &str = include_str!("../views/error.html");

fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_owned();
    for (key, value) in values {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

/// The HTML shell embedding the game canvas and wasm glue
pub fn index_page(title: &str) -> String {
    render(INDEX_TEMPLATE, &[("title", title)])
}

/// Generic error page carrying the failing status code
pub fn error_page(status: StatusCode) -> String {
    let code = status.as_u16().to_string();
    let message = status.canonical_reason().unwrap_or("Internal Server Error");
    render(ERROR_TEMPLATE, &[("code", &code), ("message", message)])
}
