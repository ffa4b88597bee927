//! Login and registration pages.
//!
//! Each form drives its own [`AuthHandle`]: the success alert is shown for a
//! moment before navigating, error alerts hide themselves.

use autocaption::{submit_login, submit_register, AuthForm, AuthKind, RegisterInput};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos::ev::SubmitEvent;

use crate::config::{ALERT_DISMISS_MS, APP_NAME, AUTH_REDIRECT_DELAY_MS, BACKEND_URL};
use crate::services::{navigate_to, BrowserApi};
use crate::types::{AuthHandle, Shared};

#[component]
pub fn LoginPage() -> impl IntoView {
    let form: AuthHandle = Shared::new(AuthForm::new(AuthKind::Login));
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (remember, set_remember) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let api = BrowserApi::new(BACKEND_URL);
            let result = submit_login(
                &api,
                &form,
                &email.get_untracked(),
                &password.get_untracked(),
                remember.get_untracked(),
            )
            .await;
            after_submit(form, result.is_ok()).await;
        });
    };

    view! {
        <AuthCard form=form title="Welcome back">
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <label class="remember">
                    <input
                        type="checkbox"
                        on:change=move |ev| set_remember.set(event_target_checked(&ev))
                    />
                    "Remember me"
                </label>
                <SubmitButton form=form label="Sign in"/>
            </form>
            <p class="auth-switch">
                "No account yet? " <a href="/auth/register">"Create one"</a>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form: AuthHandle = Shared::new(AuthForm::new(AuthKind::Register));
    let (input, set_input) = create_signal(RegisterInput::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let api = BrowserApi::new(BACKEND_URL);
            let result = submit_register(&api, &form, &input.get_untracked()).await;
            after_submit(form, result.is_ok()).await;
        });
    };

    view! {
        <AuthCard form=form title="Create your account">
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    on:input=move |ev| set_input.update(|i| i.email = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Username"
                    required=true
                    on:input=move |ev| set_input.update(|i| i.username = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    on:input=move |ev| set_input.update(|i| i.password = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    required=true
                    on:input=move |ev| set_input.update(|i| i.confirm_password = event_target_value(&ev))
                />
                <SubmitButton form=form label="Create account"/>
            </form>
            <p class="auth-switch">
                "Already registered? " <a href="/auth/login">"Sign in"</a>
            </p>
        </AuthCard>
    }
}

/// Redirect after success, or let the error alert expire.
async fn after_submit(form: AuthHandle, succeeded: bool) {
    use autocaption::StateCell;

    if succeeded {
        TimeoutFuture::new(AUTH_REDIRECT_DELAY_MS).await;
        if let Some(target) = form.read(|f| f.redirect().map(str::to_string)) {
            navigate_to(&target);
        }
    } else {
        let attempt = form.read(|f| f.attempt());
        TimeoutFuture::new(ALERT_DISMISS_MS).await;
        form.with_mut(|f| f.dismiss_error(attempt));
    }
}

#[component]
fn AuthCard(form: AuthHandle, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-container">
            <div class="auth-card">
                <a href="/" class="logo">{APP_NAME}</a>
                <h1>{title}</h1>

                {move || form.read(|f| f.error().map(str::to_string)).map(|message| view! {
                    <div class="alert alert-error">{message}</div>
                })}
                {move || form.read(|f| f.success().map(str::to_string)).map(|message| view! {
                    <div class="alert alert-success">{message}</div>
                })}

                {children()}
            </div>
        </div>
    }
}

#[component]
fn SubmitButton(form: AuthHandle, label: &'static str) -> impl IntoView {
    // Stays disabled after success until the page navigates away.
    let busy = move || form.read(|f| f.is_submitting());

    view! {
        <button class="btn btn-primary" type="submit" disabled=busy>
            <Show when=busy fallback=move || view! { {label} }>
                <span class="loader"></span>
            </Show>
        </button>
    }
}
