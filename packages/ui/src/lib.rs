//! This crate contains the server-rendered pages.
//!
//! Each page is a dioxus component rendered to a complete HTML document by
//! [`dioxus_ssr`]. Handlers call the `*_page` functions and wrap the string in an
//! HTML response.

use dioxus::dioxus_core::{ComponentFunction, VirtualDom};

mod navbar;

pub mod views;
pub use views::{compose_page, home_page, login_page, users_page};

/// Render a page component with its props into an HTML document.
pub(crate) fn render<P, M>(page: impl ComponentFunction<P, M>, props: P) -> String
where
    P: Clone + 'static,
    M: 'static,
{
    let mut dom = VirtualDom::new_with_props(page, props);
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}
