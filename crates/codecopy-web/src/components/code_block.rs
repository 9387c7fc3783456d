use leptos::prelude::*;

use crate::copy_buttons::IDLE_LABEL;

/// Clipboard icon, inlined so the button needs no asset fetch.
#[component]
fn CopyIcon() -> impl IntoView {
    view! {
        <svg
            class="copy-svg"
            stroke="currentColor"
            fill="none"
            stroke-width="2"
            viewBox="0 0 24 24"
            stroke-linecap="round"
            stroke-linejoin="round"
            height="1em"
            width="1em"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"></path>
            <rect x="8" y="2" width="8" height="4" rx="1" ry="1"></rect>
        </svg>
    }
}

/// A code sample with its copy trigger.
///
/// The markup shape is load-bearing: the wiring in `copy_buttons` expects
/// the trigger's immediate next sibling to wrap a `<code>` element, so the
/// `<pre>` must come right after the `<button>`.
#[component]
pub fn CodeBlock(#[prop(into)] code: String) -> impl IntoView {
    view! {
        <div class="code-block">
            <CopyIcon />
            <button type="button" class="copy-button">{IDLE_LABEL}</button>
            <pre>
                <code>{code}</code>
            </pre>
        </div>
    }
}
