use autocaption::refresh_usage;
use leptos::*;

use crate::config::{APP_NAME, BACKEND_URL, LOGOUT_URL};
use crate::services::BrowserApi;
use crate::types::WorkflowHandle;

#[component]
pub fn Header(workflow: WorkflowHandle) -> impl IntoView {
    // Counters for the badge; a failure leaves the badge on its placeholder.
    spawn_local(async move {
        refresh_usage(&BrowserApi::new(BACKEND_URL), &workflow).await;
    });

    let remaining = move || {
        workflow.read(|c| match &c.usage().videos_remaining {
            Some(remaining) => format!("{} videos left", remaining),
            None => "-- videos left".to_string(),
        })
    };

    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
                <span class="badge" id="videosRemaining">{remaining}</span>
            </div>
            <div class="header-right">
                <span class="user-name">
                    {move || workflow.read(|c| c.username().unwrap_or_default().to_string())}
                </span>
                <a href=LOGOUT_URL class="btn btn-secondary" rel="external">"Log out"</a>
            </div>
        </header>
    }
}
