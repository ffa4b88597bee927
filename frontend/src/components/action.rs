//! Generate button: runs upload then process.

use autocaption::{run_workflow, StateCell};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{BACKEND_URL, RESULTS_REVEAL_DELAY_MS};
use crate::services::BrowserApi;
use crate::types::WorkflowHandle;

#[component]
pub fn ActionSection(workflow: WorkflowHandle) -> impl IntoView {
    let on_generate = move |_| {
        spawn_local(async move {
            let api = BrowserApi::new(BACKEND_URL);
            match run_workflow(&api, &workflow).await {
                Ok(()) => {
                    TimeoutFuture::new(RESULTS_REVEAL_DELAY_MS).await;
                    workflow.with_mut(|c| c.reveal_results());
                }
                // Already on screen via the error section.
                Err(e) => log::error!("Caption generation failed: {}", e),
            }
        });
    };

    view! {
        <Show when=move || workflow.read(|c| c.sections().action) fallback=|| view! { }>
            <div class="action-section">
                <button
                    class="btn btn-primary btn-large"
                    id="generateBtn"
                    disabled=move || !workflow.read(|c| c.trigger_enabled())
                    on:click=on_generate
                >
                    "✨ Generate captions"
                </button>
            </div>
        </Show>
    }
}
