//! Routed views.
//!
//! Each view renders the routing contract it was given. Platform data and
//! history queries come from the backend API and are not rendered here.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons::{self as ic, by_name};
use crate::config::{PLATFORM_DETAIL_ROUTE, PLATFORMS};
use crate::models::{Params, to_hash};

stylance::import_crate_style!(css, "src/components/views.module.css");
stylance::import_crate_style!(layout, "src/components/layout.module.css");

/// Entry points shown on the home view: `(title, path, icon name)`.
const HOME_CARDS: &[(&str, &str, &str)] = &[
    ("Platforms", "/platforms", "list"),
    ("History", "/history", "history"),
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class=css::view>
            <h1 class=css::title>"Hot search, all in one place"</h1>
            <p class=css::subtitle>
                {format!("Trending lists from {} platforms.", PLATFORMS.len())}
            </p>
            <div class=css::cards>
                {HOME_CARDS
                    .iter()
                    .map(|(title, path, icon)| {
                        view! {
                            <a class=css::card href=to_hash(path)>
                                {by_name(icon).map(|icon| view! { <Icon icon=icon /> })}
                                <span>{*title}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn PlatformList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let links = PLATFORMS
        .iter()
        .filter_map(|name| {
            let mut params = Params::new();
            params.insert("name".to_string(), name.to_string());
            let href = ctx.href_for(PLATFORM_DETAIL_ROUTE, &params).ok()?;
            Some(view! {
                <li>
                    <a class=css::platformLink href=href>
                        <Icon icon=ic::PLATFORM />
                        <span>{*name}</span>
                    </a>
                </li>
            })
        })
        .collect::<Vec<_>>();

    view! {
        <section class=css::view>
            <h1 class=css::title>"Platforms"</h1>
            <ul class=css::platformGrid>{links}</ul>
        </section>
    }
}

/// Detail view for one platform; `name` comes from the `:name` path segment.
#[component]
pub fn PlatformDetail(name: String) -> impl IntoView {
    let known = PLATFORMS.contains(&name.as_str());

    view! {
        <section class=css::view>
            <a class=css::back href=to_hash("/platforms")>
                <Icon icon=ic::CHEVRON_LEFT />
                <span>"All platforms"</span>
            </a>
            <h1 class=css::title>{name.clone()}</h1>
            <Show
                when=move || known
                fallback=|| view! { <p class=css::muted>"This platform is not served by the backend."</p> }
            >
                <p class=css::subtitle>"Latest trending entries for this platform."</p>
            </Show>
        </section>
    }
}

/// History search view. Query parameters act as the search filters.
#[component]
pub fn HistoryQuery(query: Params) -> impl IntoView {
    let filters = query
        .into_iter()
        .map(|(key, value)| {
            view! {
                <li class=css::filter>
                    <span class=layout::textPrimary>{key}</span>
                    <span>{value}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let unfiltered = filters.is_empty();

    view! {
        <section class=css::view>
            <h1 class=css::title>
                <Icon icon=ic::SEARCH />
                <span>"History"</span>
            </h1>
            <Show when=move || unfiltered>
                <p class=css::muted>"No filters applied."</p>
            </Show>
            <ul class=css::filters>{filters}</ul>
        </section>
    }
}

/// Terminal state for addresses that match no route.
///
/// Offers a way back to the last page that did resolve.
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let previous = ctx.current_state().map(|state| {
        view! {
            <a class=css::back href=state.to_hash()>
                <Icon icon=ic::CHEVRON_LEFT />
                <span>{format!("Return to {}", state.path)}</span>
            </a>
        }
    });

    view! {
        <section class=format!("{} {}", css::view, layout::flexCenter)>
            <div class=css::notFound>
                <h1 class=css::title>"404"</h1>
                <p class=css::muted>{format!("Nothing lives at {}", path)}</p>
                {previous}
                <button class=css::back on:click=move |_| ctx.push("/")>
                    <Icon icon=ic::HOME />
                    <span>"Back home"</span>
                </button>
            </div>
        </section>
    }
}
