//! DOM-side helpers for the feed form.
//!
//! The settings panels and the send-mode checkboxes are addressed by stable
//! element ids; everything here is a thin adapter between the pure visibility
//! logic in `visibility.rs` and the live document. A missing element means
//! the page markup disagrees with the form and is reported once via the
//! console; there is no recovery path at this layer.

use gloo_console::error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use super::visibility::{PanelVisibility, SendModeChecks};

pub const CHECKBOX_SEND_AS_EMBED: &str = "send_as_embed";
pub const CHECKBOX_SEND_AS_TEXT: &str = "send_as_text";
pub const CHECKBOX_SEND_AS_LINK: &str = "send_as_link";

pub const PANEL_EMBED_SETTINGS: &str = "embed_settings";
pub const PANEL_TEXT_SETTINGS: &str = "text_settings";
pub const PANEL_LINK_SETTINGS: &str = "link_settings";

/// Applies a visibility verdict to the three settings panels by mutating
/// their inline `display` style. `None` entries leave the panel untouched.
pub fn apply_panel_visibility(visibility: &PanelVisibility) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(visible) = visibility.embed {
        set_panel_display(&document, PANEL_EMBED_SETTINGS, visible);
    }
    if let Some(visible) = visibility.text {
        set_panel_display(&document, PANEL_TEXT_SETTINGS, visible);
    }
    if let Some(visible) = visibility.link {
        set_panel_display(&document, PANEL_LINK_SETTINGS, visible);
    }
}

fn set_panel_display(document: &Document, id: &str, visible: bool) {
    let Some(panel) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        error!("Settings panel is missing from the document:", id);
        return;
    };
    let display = if visible { "block" } else { "none" };
    panel.style().set_property("display", display).ok();
}

/// Reads the checked state of the three send-mode checkboxes from the
/// document. Returns `None` (and logs) if any of them is missing.
pub fn read_send_mode_checks() -> Option<SendModeChecks> {
    let document = web_sys::window().and_then(|w| w.document())?;
    Some(SendModeChecks {
        embed: checkbox_checked(&document, CHECKBOX_SEND_AS_EMBED)?,
        text: checkbox_checked(&document, CHECKBOX_SEND_AS_TEXT)?,
        link: checkbox_checked(&document, CHECKBOX_SEND_AS_LINK)?,
    })
}

fn checkbox_checked(document: &Document, id: &str) -> Option<bool> {
    let checkbox = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    if checkbox.is_none() {
        error!("Send-mode checkbox is missing from the document:", id);
    }
    checkbox.map(|c| c.checked())
}

/// Displays a temporary notification message at the bottom of the screen.
/// The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
