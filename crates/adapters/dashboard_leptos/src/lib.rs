use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;
pub mod storage;
pub mod timer;
pub mod view;

use components::ToastContainer;
use pages::{NotFound, Programs};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Programs/>
                        <Route path=path!("index.html") view=Programs/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
