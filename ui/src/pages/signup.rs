//! Signup page

use crate::components::{AuthPanel, Navbar};
use docqa_core::AuthMode;
use leptos::prelude::*;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Navbar />
            <AuthPanel mode=AuthMode::Signup />
        </div>
    }
}
