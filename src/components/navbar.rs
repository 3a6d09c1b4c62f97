//! Navigation links that depend on login state.
//!
//! DESIGN
//! ======
//! `nav_items` is the single source of which links a visitor sees. Static
//! pages get it rendered into their `#navButtons` container through
//! `update_navbar`; Leptos views use the `NavButtons` component.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::config::{ClientConfig, PagePaths};
use crate::net::storage::SessionStore;
use crate::state::session::{Session, SessionState};
use crate::util::loading::{escape_html, set_inner_html};
#[cfg(feature = "hydrate")]
use crate::util::auth::navigate_to;

pub const NAV_CONTAINER_ID: &str = "navButtons";
pub const LOGOUT_BUTTON_ID: &str = "logoutBtn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStyle {
    Link,
    Primary,
    Danger,
}

impl NavStyle {
    pub fn class(self) -> &'static str {
        match self {
            Self::Link => "text-gray-700 hover:text-blue-600",
            Self::Primary => "bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700",
            Self::Danger => "bg-red-600 text-white px-4 py-2 rounded-lg hover:bg-red-700",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Href(String),
    Logout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
    pub style: NavStyle,
}

impl NavItem {
    fn link(label: &'static str, href: &str, style: NavStyle) -> Self {
        Self { label, target: NavTarget::Href(href.to_owned()), style }
    }
}

/// Links for the current session: signed-in visitors (token and profile)
/// get doctors, their role's home, and logout; everyone else gets login
/// and register.
pub fn nav_items(state: &SessionState, pages: &PagePaths) -> Vec<NavItem> {
    let Some(user) = state.user.as_ref().filter(|_| state.is_authenticated()) else {
        return vec![
            NavItem::link("Login", &pages.login, NavStyle::Link),
            NavItem::link("Register", &pages.register, NavStyle::Primary),
        ];
    };
    let home = if user.is_admin() {
        NavItem::link("Dashboard", &pages.admin_dashboard, NavStyle::Link)
    } else {
        NavItem::link("My Appointments", &pages.appointments, NavStyle::Link)
    };
    vec![
        NavItem::link("Doctors", &pages.doctors, NavStyle::Link),
        home,
        NavItem { label: "Logout", target: NavTarget::Logout, style: NavStyle::Danger },
    ]
}

pub fn render_nav_html(items: &[NavItem]) -> String {
    items
        .iter()
        .map(|item| match &item.target {
            NavTarget::Href(href) => format!(
                r#"<a href="{}" class="{}">{}</a>"#,
                escape_html(href),
                item.style.class(),
                item.label
            ),
            NavTarget::Logout => format!(
                r#"<button id="{LOGOUT_BUTTON_ID}" class="{}">{}</button>"#,
                item.style.class(),
                item.label
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Re-render `#navButtons` from the stored session. No-op when the page has
/// no such container.
pub fn update_navbar<S: SessionStore + Clone + 'static>(session: &Session<S>) {
    let html = render_nav_html(&nav_items(&session.snapshot(), session.pages()));
    if !set_inner_html(NAV_CONTAINER_ID, &html) {
        return;
    }
    #[cfg(feature = "hydrate")]
    wire_logout_button(session.clone());
}

#[cfg(feature = "hydrate")]
fn wire_logout_button<S: SessionStore + 'static>(session: Session<S>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(button) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(LOGOUT_BUTTON_ID))
    else {
        return;
    };
    let Ok(button) = button.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let on_click = Closure::<dyn FnMut()>::new(move || session.logout(navigate_to));
    button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
    on_click.forget();
}

/// Reactive navbar driven by the `RwSignal<SessionState>` context.
///
/// Without `on_logout`, clicking Logout clears browser storage, resets the
/// session signal, and navigates to the login page.
#[component]
pub fn NavButtons(#[prop(optional)] on_logout: Option<Callback<()>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let pages = config.pages.clone();

    let logout = on_logout.unwrap_or_else(|| Callback::new(move |()| reset_session(session, &config)));

    view! {
        <div id=NAV_CONTAINER_ID class="flex items-center gap-4">
            {move || {
                nav_items(&session.get(), &pages)
                    .into_iter()
                    .map(|item| nav_item_view(item, logout))
                    .collect_view()
            }}
        </div>
    }
}

/// Default logout for `NavButtons`: clears browser storage and navigates to
/// the login page (browser only), then resets the signal to anonymous.
fn reset_session(session: RwSignal<SessionState>, config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    Session::new(crate::net::storage::LocalStorageStore, config).logout(navigate_to);
    #[cfg(not(feature = "hydrate"))]
    let _ = config;
    session.set(SessionState::default());
}

fn nav_item_view(item: NavItem, on_logout: Callback<()>) -> AnyView {
    let class = item.style.class();
    match item.target {
        NavTarget::Href(href) => view! { <a href=href class=class>{item.label}</a> }.into_any(),
        NavTarget::Logout => view! {
            <button id=LOGOUT_BUTTON_ID class=class on:click=move |_| on_logout.run(())>
                {item.label}
            </button>
        }
        .into_any(),
    }
}
