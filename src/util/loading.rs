//! Loading-spinner and empty-state swaps for list containers.
//!
//! Page markup owns the container IDs; these helpers only replace the
//! container's children and silently skip missing elements.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

pub const LOADING_MARKUP: &str = concat!(
    r#"<div class="text-center py-8">"#,
    r#"<div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto"></div>"#,
    r#"<p class="text-gray-600 mt-4">Loading...</p>"#,
    "</div>",
);

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn empty_state_markup(message: &str) -> String {
    format!(r#"<div class="text-center py-8"><p class="text-gray-500">{}</p></div>"#, escape_html(message))
}

pub fn show_loading(element_id: &str) {
    set_inner_html(element_id, LOADING_MARKUP);
}

pub fn hide_loading(element_id: &str) {
    set_inner_html(element_id, "");
}

/// Replace the container with a centered "nothing here" message.
pub fn show_empty(element_id: &str, message: &str) {
    set_inner_html(element_id, &empty_state_markup(message));
}

/// Replace the children of `element_id`; returns whether the element exists.
pub(crate) fn set_inner_html(element_id: &str, html: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
        else {
            return false;
        };
        el.set_inner_html(html);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (element_id, html);
        false
    }
}
