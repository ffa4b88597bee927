use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                {APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-links">
                <a href="/auth/login" class="footer-link">"Sign in"</a>
                <a href="/auth/register" class="footer-link">"Create account"</a>
            </div>
        </footer>
    }
}
