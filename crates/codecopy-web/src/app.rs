use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Wire the copy buttons once the client has hydrated. Effects only run
    // on the client, so this never executes during SSR. `wire_document` is
    // idempotent, so a stray re-run cannot double-attach handlers.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        match crate::copy_buttons::wire_document(&document) {
            Ok(count) => {
                web_sys::console::log_1(&format!("[copy] wired {count} trigger(s)").into());
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("[copy] wiring failed: {err}").into());
            }
        }
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
