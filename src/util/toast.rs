//! Transient toast notifications.
//!
//! A toast is a fixed-position `<div>` appended to `<body>`. It stays for
//! `TOAST_VISIBLE_MS`, fades to transparent, and is removed `TOAST_FADE_MS`
//! later. Requires a browser environment; SSR calls are no-ops.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

pub const TOAST_VISIBLE_MS: u32 = 3000;
pub const TOAST_FADE_MS: u32 = 300;

const TOAST_BASE_CLASS: &str =
    "fixed top-4 right-4 px-6 py-3 rounded-lg shadow-lg text-white z-50 transition-opacity";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

pub fn toast_class(kind: ToastKind) -> String {
    let color = match kind {
        ToastKind::Success => "bg-green-500",
        ToastKind::Error => "bg-red-500",
    };
    format!("{TOAST_BASE_CLASS} {color}")
}

/// Show `message` as a toast that dismisses itself.
pub fn show_notification(message: &str, kind: ToastKind) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = doc.body() else {
            return;
        };
        let Ok(toast) = doc.create_element("div") else {
            return;
        };
        toast.set_class_name(&toast_class(kind));
        toast.set_text_content(Some(message));
        if body.append_child(&toast).is_err() {
            return;
        }

        Timeout::new(TOAST_VISIBLE_MS, move || {
            if let Some(el) = toast.dyn_ref::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("opacity", "0");
            }
            Timeout::new(TOAST_FADE_MS, move || toast.remove()).forget();
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, kind);
    }
}
