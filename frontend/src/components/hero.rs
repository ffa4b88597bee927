//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Captions for your videos"</h1>
            <p class="subtitle">
                "Upload a clip, pick one or more caption styles and a language, "
                "and download ready-to-use SRT subtitles."
            </p>
        </div>
    }
}
