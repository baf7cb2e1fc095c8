//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that owns the
//! router for the lifetime of the page.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::config::{APP_NAME, DARK_CLASS, DARK_SCHEME_QUERY};
use crate::core::{RouteError, Router};
use crate::models::{NavigationState, Params, RouteTable, same_address, to_hash};
use crate::utils::dom;

/// Whether browser APIs are reachable (false in native unit tests).
const IN_BROWSER: bool = cfg!(target_arch = "wasm32");

/// Outcome of the latest navigation: a matched state or `NotFound`.
pub type Navigation = Result<NavigationState, RouteError>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Constructed once by `main` and handed to [`App`], which provides it to
/// the component tree. Child components access it with
/// `use_context::<AppContext>()`.
///
/// The router is held in a [`StoredValue`]; the outcome of each navigation
/// is published through the single `navigation` signal, so observers never
/// see a partially updated state.
#[derive(Clone, Copy)]
pub struct AppContext {
    router: StoredValue<Router>,

    /// Latest navigation outcome.
    pub navigation: RwSignal<Navigation>,

    /// Dark colour scheme active. Follows the system preference.
    pub dark_mode: RwSignal<bool>,
}

impl AppContext {
    /// Creates a context over `table`, resolved at the root path.
    pub fn new(table: RouteTable) -> Self {
        let mut router = Router::new(table);
        let navigation = router.navigate("/");

        Self {
            router: StoredValue::new(router),
            navigation: RwSignal::new(navigation),
            dark_mode: RwSignal::new(false),
        }
    }

    /// Resolve `path` and publish the outcome.
    ///
    /// Does not touch the address; see [`AppContext::push`].
    pub fn navigate(&self, path: &str) -> Navigation {
        let outcome = self
            .router
            .try_update_value(|router| router.navigate(path))
            .unwrap_or_else(|| Err(RouteError::not_found(path)));

        if IN_BROWSER {
            match &outcome {
                Ok(state) => dom::set_title(&format!("{} · {}", state.view.title(), APP_NAME)),
                Err(err) if err.is_not_found() => web_sys::console::warn_1(&err.to_string().into()),
                Err(err) => web_sys::console::error_1(&err.to_string().into()),
            }
        }

        self.navigation.set(outcome.clone());
        outcome
    }

    /// Navigate to `path` and record it in the address.
    ///
    /// Writing a new hash fires `hashchange`, which the [`AppRouter`]
    /// listener turns into [`AppContext::navigate`]. When the address is
    /// already `path` (compared decoded, as browsers report the hash
    /// percent-encoded), no event fires, so resolve directly.
    pub fn push(&self, path: &str) {
        if IN_BROWSER && !same_address(&dom::get_hash(), path) {
            dom::set_hash(&to_hash(path));
            return;
        }
        let _ = self.navigate(path);
    }

    /// Re-resolve from the browser address.
    ///
    /// An empty hash is rewritten to `#/` without a history entry.
    pub fn sync_with_location(&self) -> Navigation {
        if !IN_BROWSER {
            return self.navigation.get_untracked();
        }

        let hash = dom::get_hash();
        if hash.is_empty() {
            dom::replace_hash(&to_hash("/"));
        }
        self.navigate(&hash)
    }

    /// Last successfully resolved state.
    pub fn current_state(&self) -> Option<NavigationState> {
        self.router
            .with_value(|router| router.current_state().cloned())
    }

    /// Fragment href for a named route, e.g. `#/platform/weibo`.
    pub fn href_for(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        self.router
            .with_value(|router| router.href_for(name, params))
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Provides the AppContext built by `main`
/// - Mirrors the system colour scheme onto the `<body>` class list
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    provide_context(ctx);

    let prefers_dark = use_media_query(DARK_SCHEME_QUERY);
    Effect::new(move |_| ctx.dark_mode.set(prefers_dark.get()));

    Effect::new(move |_| {
        let dark = ctx.dark_mode.get();
        if IN_BROWSER {
            dom::toggle_body_class(DARK_CLASS, dark);
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ef4444; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #6b7280;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #3b82f6;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
