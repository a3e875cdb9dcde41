//! Checkbox switch for automatic scheduling.

use leptos::prelude::*;

/// Shows `checked` and reports the requested position through `on_toggle`.
/// The switch itself does not move; the caller updates `checked`.
#[component]
pub fn AutomationSwitch(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="switch">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="slider"></span>
            <span class="switch-label">{label}</span>
        </label>
    }
}
