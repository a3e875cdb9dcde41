//! Toast notifications for action outcomes.

use irrigo_app::ports::{Notice, NoticeLevel};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    pub level: NoticeLevel,
    pub text: String,
}

impl ToastMessage {
    fn class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "toast toast-success",
            NoticeLevel::Error => "toast toast-error",
        }
    }
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    set_toasts: WriteSignal<Vec<ToastMessage>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl ToastProvider {
    /// Show `notice`. Successes dismiss after 3 seconds, errors after 5.
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id + 1);

        let timeout_ms = match notice.level {
            NoticeLevel::Success => 3_000,
            NoticeLevel::Error => 5_000,
        };
        self.set_toasts.update(|list| {
            list.push(ToastMessage {
                id,
                level: notice.level,
                text: notice.text,
            });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
            set_toasts.update(|list| {
                list.retain(|t| t.id != id);
            });
        });
    }

    /// Dismiss a toast immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| {
            list.retain(|t| t.id != id);
        });
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    expect_context::<ToastProvider>()
}

/// Provides toast context and renders active toasts.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastMessage>::new());
    let (next_id, set_next_id) = signal(0_u32);

    let provider = ToastProvider {
        set_toasts,
        next_id,
        set_next_id,
    };
    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.class()>
                                <button
                                    class="toast-dismiss"
                                    on:click=move |_| provider.dismiss(id)
                                >
                                    "\u{00D7}"
                                </button>
                                {toast.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
