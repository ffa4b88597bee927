//! Video picker with drag & drop support.
//!
//! Handles file selection and validation; the upload itself starts from
//! the action section.

use autocaption::config::ACCEPT_ATTRIBUTE;
use autocaption::{format_file_size, StateCell};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::types::{video_from_file, WorkflowHandle};

const FILE_INPUT_ID: &str = "videoInput";

#[component]
pub fn UploadSection(workflow: WorkflowHandle) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);

    let handle_file = move |file: File| {
        // Rejections are shown by the error section.
        let _ = workflow.with_mut(|c| c.select_file(video_from_file(file)));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // Picking the same file again must fire `change` again.
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(file);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let sections = move || workflow.read(|c| c.sections());

    view! {
        <input
            type="file"
            id=FILE_INPUT_ID
            accept=ACCEPT_ATTRIBUTE
            style="display:none"
            on:change=on_file_change
        />

        <Show when=move || sections().upload_prompt fallback=|| view! { }>
            <div
                class="upload-area"
                class:drag-over=move || drag_over.get()
                on:click=move |_| open_file_picker()
                on:dragover=on_drag_over
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=on_drop
            >
                <div class="upload-icon">"🎬"</div>
                <div class="upload-text">"Drag & drop your video here"</div>
                <div class="upload-hint">"MP4, MOV, AVI, MKV or WebM • up to 100MB"</div>
                <button class="btn btn-primary" type="button">"Select video"</button>
            </div>
        </Show>

        <Show when=move || sections().file_info fallback=|| view! { }>
            <div class="file-info">
                <div class="file-details">
                    <span class="file-name">
                        {move || workflow.read(|c| {
                            c.state().uploaded_file.as_ref().map(|f| f.name.clone()).unwrap_or_default()
                        })}
                    </span>
                    <span class="file-size">
                        {move || workflow.read(|c| {
                            c.state().uploaded_file.as_ref().map(|f| format_file_size(f.size)).unwrap_or_default()
                        })}
                    </span>
                </div>
                <button
                    class="btn btn-secondary"
                    type="button"
                    disabled=move || !workflow.read(|c| c.trigger_enabled())
                    on:click=move |_| open_file_picker()
                >
                    "Change file"
                </button>
            </div>
        </Show>
    }
}

/// Click the hidden file input.
fn open_file_picker() {
    if let Some(input) = document()
        .get_element_by_id(FILE_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.click();
    }
}
