//! Results view: one section per generated style, with a short preview
//! and a download button.

use autocaption::{start_over, CaptionApi, StylePreview};
use leptos::*;

use crate::config::BACKEND_URL;
use crate::services::{navigate_to, BrowserApi};
use crate::types::WorkflowHandle;

#[component]
pub fn ResultsSection(workflow: WorkflowHandle) -> impl IntoView {
    let previews = move || {
        let api = BrowserApi::new(BACKEND_URL);
        workflow.read(|c| c.previews(|id| api.download_url(id)))
    };

    let on_new_video = move |_| {
        log::info!("🎬 New video");
        spawn_local(async move {
            start_over(&BrowserApi::new(BACKEND_URL), &workflow).await;
        });
    };

    view! {
        <Show when=move || workflow.read(|c| c.sections().results) fallback=|| view! { }>
            <div class="results-section show" id="resultsSection">
                <div class="results-header">
                    <div class="results-title">"🎉 Your captions are ready"</div>
                    <button class="btn btn-secondary" id="newVideoBtn" on:click=on_new_video>
                        "New video"
                    </button>
                </div>

                <For
                    each=previews
                    key=|preview| preview.subtitle_file.clone()
                    children=move |preview| view! { <StyleResultCard preview=preview/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn StyleResultCard(preview: StylePreview) -> impl IntoView {
    let download_url = preview.download_url.clone();
    let on_download = move |_| {
        log::info!("⬇️ Downloading {}", download_url);
        navigate_to(&download_url);
    };

    view! {
        <div class="result-card">
            <div class="result-stats">
                <div class="stat">
                    <span class="stat-label">"Style"</span>
                    <span class="stat-value">{preview.style.label()}</span>
                </div>
                <div class="stat">
                    <span class="stat-label">"Captions"</span>
                    <span class="stat-value">{preview.total_captions}</span>
                </div>
                <div class="stat">
                    <span class="stat-label">"Language"</span>
                    <span class="stat-value">{preview.language.clone()}</span>
                </div>
            </div>

            <div class="preview-list">
                {preview
                    .lines
                    .into_iter()
                    .map(|line| view! {
                        <div class="preview-item" title=line.time_range.clone()>
                            {line.label()}
                        </div>
                    })
                    .collect_view()}
            </div>

            <button class="btn btn-primary" on:click=on_download>
                "Download " {preview.style.label()} " SRT"
            </button>
        </div>
    }
}
