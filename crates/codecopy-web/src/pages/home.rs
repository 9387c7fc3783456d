use leptos::prelude::*;

use crate::components::CodeBlock;
use crate::config::CONFIG;

const SAMPLE_HELLO: &str = r#"// Code block 1
function helloWorld() {
    console.log("Hello, world!");
}"#;

const SAMPLE_LOOP: &str = r#"// Code block 2
for (let i = 0; i < 5; i++) {
    console.log(i);
}"#;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <header class="page-header">
                <h1>{CONFIG.name}</h1>
                <div class="tagline">{CONFIG.tagline}</div>
            </header>

            <div class="code-container">
                <CodeBlock code=SAMPLE_HELLO />
                <CodeBlock code=SAMPLE_LOOP />
            </div>
        </main>
    }
}
