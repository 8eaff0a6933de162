//! Email/password form shared by the login and signup pages

use crate::components::LoadingSpinner;
use crate::state::AppState;
use docqa_core::{AuthForm, AuthMode, OpState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Credentials form for `mode`.
///
/// On success the message stays up for the redirect delay, then the page
/// navigates on, unless it was left in the meantime.
#[component]
pub fn AuthPanel(mode: AuthMode) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let form = RwSignal::new(AuthForm::new(mode));

    // Results arriving after the page is gone must not touch anything
    on_cleanup(move || {
        form.try_update(|f| f.teardown());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(pending) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let state = state.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            let result = mode.dispatch(&state.gateway, &pending.request).await;
            let applied = form
                .try_update(|f| f.finish(pending, result, &state.session))
                .unwrap_or(false);
            if !applied {
                return;
            }

            let redirect = form
                .try_with_untracked(|f| f.state().success().map(|s| s.redirect))
                .flatten();
            if let Some(redirect) = redirect {
                TimeoutFuture::new(redirect.after.as_millis() as u32).await;
                if form.try_with_untracked(|_| ()).is_some() {
                    navigate(redirect.to.path(), Default::default());
                }
            }
        });
    };

    let is_busy = move || form.with(|f| f.state().is_in_flight());
    let message = move || form.with(|f| f.message());
    let is_error = move || form.with(|f| matches!(f.state(), OpState::Failed(_)));

    let (title, button, busy_label, alt_prompt, alt_link, alt_href) = match mode {
        AuthMode::Login => (
            "Login",
            "Login",
            "Logging in...",
            "Don't have an account? ",
            "Sign up",
            "/signup",
        ),
        AuthMode::Signup => (
            "Sign Up",
            "Sign Up",
            "Signing up...",
            "Already have an account? ",
            "Login",
            "/login",
        ),
    };

    view! {
        <main class="auth-container flex-1">
            <div class="w-full max-w-md px-4">
                <div class="auth-card">
                    <div class="auth-header">
                        <h1 class="auth-title text-gradient">{title}</h1>
                    </div>

                    <form on:submit=on_submit class="auth-form">
                        <div class="auth-input-group">
                            <label class="auth-label">"Email"</label>
                            <input
                                type="email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                placeholder="you@example.com"
                                required=true
                                class="input"
                            />
                        </div>

                        <div class="auth-input-group">
                            <label class="auth-label">"Password"</label>
                            <input
                                type="password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                placeholder="••••••••"
                                required=true
                                class="input"
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=is_busy
                            class="btn btn-primary w-full py-3"
                        >
                            <Show when=is_busy>
                                <LoadingSpinner />
                            </Show>
                            {move || if is_busy() { busy_label } else { button }}
                        </button>
                    </form>

                    <Show when=move || message().is_some()>
                        <p class=move || {
                            if is_error() { "auth-message text-red-500" } else { "auth-message text-green-500" }
                        }>
                            {move || message().unwrap_or_default()}
                        </p>
                    </Show>

                    <div class="auth-footer">
                        {alt_prompt}
                        <a href=alt_href class="auth-link">{alt_link}</a>
                    </div>
                </div>
            </div>
        </main>
    }
}
