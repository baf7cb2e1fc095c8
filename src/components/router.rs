//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: navigation state is derived from `#/path`
//! - **Navigation bar never re-renders on navigation**: only the content area switches
//! - **One outcome signal**: `AppContext::navigation` holds either the matched
//!   state or `NotFound`, and the content area renders whichever it holds
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::nav::NavBar;
use crate::components::views::{HistoryQuery, Home, NotFound, PlatformDetail, PlatformList};
use crate::core::RouteError;
use crate::models::{NavigationState, ViewId};

stylance::import_crate_style!(css, "src/components/layout.module.css");

/// Main application router.
///
/// Route table (see `config::ROUTES`):
/// - `#/` → Home
/// - `#/platforms` → PlatformList
/// - `#/platform/:name` → PlatformDetail (receives `name`)
/// - `#/history` → HistoryQuery
/// - anything else → NotFound
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Resolve whatever address the page was opened with
    let _ = ctx.sync_with_location();

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let _ = ctx.sync_with_location();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let outcome = Memo::new(move |_| ctx.navigation.get());

    view! {
        <div class=css::shell>
            <NavBar />
            <main class=css::content>
                {move || match outcome.get() {
                    Ok(state) => render_view(&state),
                    Err(RouteError::NotFound { path }) => view! { <NotFound path=path /> }.into_any(),
                    Err(err) => view! { <p class=css::textPrimary>{err.to_string()}</p> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Map a matched state to its view, forwarding path props when configured.
fn render_view(state: &NavigationState) -> AnyView {
    match state.view {
        ViewId::Home => view! { <Home /> }.into_any(),
        ViewId::PlatformList => view! { <PlatformList /> }.into_any(),
        ViewId::PlatformDetail => {
            let name = match state.props() {
                Some(_) => state.param("name").unwrap_or_default().to_string(),
                None => String::new(),
            };
            view! { <PlatformDetail name=name /> }.into_any()
        }
        ViewId::HistoryQuery => view! { <HistoryQuery query=state.query.clone() /> }.into_any(),
    }
}
