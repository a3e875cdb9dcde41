use leptos::prelude::*;

/// Shown for any path other than the program list.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>
                <a href="/">"Back to the programs"</a>
            </p>
        </div>
    }
}
