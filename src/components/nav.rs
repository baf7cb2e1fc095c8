//! Top navigation bar.
//!
//! Highlights the link for the current view and shows the active colour
//! scheme. Clicking the scheme icon flips dark mode for the session.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::{ViewId, to_hash};

stylance::import_crate_style!(css, "src/components/layout.module.css");

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let active_view = Memo::new(move |_| ctx.navigation.with(|n| n.as_ref().ok().map(|s| s.view)));

    let toggle_scheme = move |_: leptos::ev::MouseEvent| {
        ctx.dark_mode.update(|dark| *dark = !*dark);
    };
    let scheme_title = Signal::derive(move || {
        if ctx.dark_mode.get() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    });

    view! {
        <header class=css::nav>
            <a class=css::brand href=to_hash("/")>
                {APP_NAME}
                <span class=css::version>{format!("v{}", APP_VERSION)}</span>
            </a>
            <nav class=css::flexBetween>
                <NavLink path="/" label="Home" icon=ic::HOME target=ViewId::Home active=active_view />
                <NavLink
                    path="/platforms"
                    label="Platforms"
                    icon=ic::LIST
                    target=ViewId::PlatformList
                    active=active_view
                />
                <NavLink
                    path="/history"
                    label="History"
                    icon=ic::HISTORY
                    target=ViewId::HistoryQuery
                    active=active_view
                />
            </nav>
            <button class=css::schemeButton on:click=toggle_scheme title=scheme_title>
                {move || if ctx.dark_mode.get() {
                    view! { <Icon icon=ic::MOON /> }.into_any()
                } else {
                    view! { <Icon icon=ic::SUN /> }.into_any()
                }}
            </button>
        </header>
    }
}

#[component]
fn NavLink(
    path: &'static str,
    label: &'static str,
    icon: icondata::Icon,
    target: ViewId,
    active: Memo<Option<ViewId>>,
) -> impl IntoView {
    let class = move || {
        if active.get() == Some(target) {
            css::navLinkActive
        } else {
            css::navLink
        }
    };

    view! {
        <a class=class href=to_hash(path)>
            <Icon icon=icon />
            <span>{label}</span>
        </a>
    }
}
