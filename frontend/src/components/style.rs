//! Caption style cards. Several styles can be selected at once.

use autocaption::{CaptionStyle, StateCell};
use leptos::*;

use crate::types::WorkflowHandle;

#[component]
pub fn StyleSection(workflow: WorkflowHandle) -> impl IntoView {
    view! {
        <Show when=move || workflow.read(|c| c.sections().style) fallback=|| view! { }>
            <div class="style-section">
                <h2 class="section-title">"Choose caption styles"</h2>
                <div class="style-grid">
                    {CaptionStyle::ALL
                        .into_iter()
                        .map(|style| view! { <StyleCard workflow=workflow style=style/> })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn StyleCard(workflow: WorkflowHandle, style: CaptionStyle) -> impl IntoView {
    let selected = move || workflow.read(|c| c.is_style_selected(style));

    let on_toggle = move |_| {
        let now_selected = workflow.with_mut(|c| c.toggle_style(style));
        log::debug!("Style {} selected: {}", style, now_selected);
    };

    view! {
        <label class="style-card" class:selected=selected>
            <input
                type="checkbox"
                name="captionStyle"
                value=style.id()
                prop:checked=selected
                disabled=move || !workflow.read(|c| c.trigger_enabled())
                on:change=on_toggle
            />
            <div class="style-name">{style.name()}</div>
            <div class="style-description">{style.description()}</div>
        </label>
    }
}
