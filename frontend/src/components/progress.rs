//! Progress bar shown while a run is in flight.

use leptos::*;

use crate::types::WorkflowHandle;

#[component]
pub fn ProgressSection(workflow: WorkflowHandle) -> impl IntoView {
    let percent = move || workflow.read(|c| c.progress().percent);

    view! {
        <Show when=move || workflow.read(|c| c.sections().progress) fallback=|| view! { }>
            <div class="progress-section show" id="progressSection">
                <div class="progress-title">
                    {move || if percent() < 100 { "⏳ Generating captions" } else { "✅ Done" }}
                </div>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        id="progressBar"
                        style=move || format!("width: {}%;", percent())
                    ></div>
                </div>
                <div class="progress-text">
                    {move || workflow.read(|c| c.progress().message.clone())}
                </div>
            </div>
        </Show>
    }
}
