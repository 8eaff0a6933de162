//! DocQA web UI - Leptos frontend
//!
//! Log in, upload a PDF and ask questions about it from the browser.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;
pub mod storage;

use docqa_core::Route as AppRoute;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);
    provide_meta_context();

    view! {
        <Title text="DocQA" />
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                // Unknown paths go home, which redirects on to /login without a session
                <Routes fallback=|| view! { <Redirect path=AppRoute::Home.path() /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                </Routes>
            </main>
        </Router>
    }
}
