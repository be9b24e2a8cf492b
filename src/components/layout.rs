//! Document wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps head and body markup in a complete HTML document.
///
/// # Arguments
///
/// * `head`: Children of the `<head>` element
/// * `body`: Children of the `<body>` element
///
/// # Returns
///
/// Document markup starting with the doctype declaration
pub fn document(head: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (head)
            }
            body {
                (body)
            }
        }
    }
}
