//! Error section with retry.

use autocaption::config::UPGRADE_HINT;
use autocaption::StateCell;
use leptos::*;

use crate::types::WorkflowHandle;

#[component]
pub fn ErrorSection(workflow: WorkflowHandle) -> impl IntoView {
    // Retry always starts over from the upload.
    let on_retry = move |_| {
        log::info!("🔁 Retry requested");
        workflow.with_mut(|c| c.reset());
    };

    view! {
        <Show when=move || workflow.read(|c| c.sections().error) fallback=|| view! { }>
            <div class="error-section" id="errorSection">
                <div class="error-icon">"⚠️"</div>
                <div class="error-message" id="errorMessage">
                    {move || workflow.read(|c| c.error().unwrap_or_default().to_string())}
                </div>
                <Show when=move || workflow.read(|c| c.upgrade_required()) fallback=|| view! { }>
                    <div class="upgrade-hint">{UPGRADE_HINT}</div>
                </Show>
                <button class="btn btn-secondary" id="retryBtn" on:click=on_retry>
                    "Try again"
                </button>
            </div>
        </Show>
    }
}
