//! Placeholders shown instead of the program list.

use irrigo_app::services::loader::LoadError;
use leptos::prelude::*;

/// A loading indicator with an animated spinner and optional message.
#[component]
pub fn Loading(
    #[prop(default = "Loading\u{2026}".into(), into)] message: String,
) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}

/// Aggregated load failure with a retry button.
#[component]
pub fn LoadFailed(error: LoadError, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-error">
            <p class="error">"Could not reach the controller."</p>
            <ul>
                {error
                    .failures()
                    .iter()
                    .map(|(resource, err)| {
                        view! {
                            <li>
                                <strong>{resource.to_string()}</strong>
                                ": "
                                {err.to_string()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="btn" on:click=move |_| on_retry.run(())>"Retry"</button>
        </div>
    }
}
