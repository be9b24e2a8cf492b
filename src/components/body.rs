//! Body components: mount point and script tags

use maud::{Markup, PreEscaped, html};

use crate::site::SiteMeta;

/// Renders the client mount element.
///
/// # Arguments
///
/// * `outlet`: Prerendered router outlet content, if any
///
/// # Returns
///
/// `div#root` markup, empty when nothing was prerendered
pub fn mount_point(outlet: Option<Markup>) -> Markup {
    html! {
        div id="root" {
            @if let Some(content) = outlet {
                (content)
            }
        }
    }
}

/// Renders the print view injection: inline print styles plus a script
/// that opens the print dialog once the page has loaded.
pub fn print_injection(site: &SiteMeta<'_>) -> Markup {
    html! {
        style media="print" { (PreEscaped(site.print_style)) }
        script { (PreEscaped(site.print_script)) }
    }
}

/// Renders page scripts.
///
/// Print pages only get the print injection. All other pages load the
/// client bundles in their configured order.
pub fn scripts(site: &SiteMeta<'_>, print: bool) -> Markup {
    html! {
        @if print {
            (print_injection(site))
        } @else {
            @for bundle in site.bundles {
                script src=(bundle) {}
            }
        }
    }
}
