//! Transcription language selector.

use autocaption::{StateCell, LANGUAGES};
use leptos::*;
use web_sys::Event;

use crate::types::WorkflowHandle;

#[component]
pub fn LanguageSection(workflow: WorkflowHandle) -> impl IntoView {
    let on_change = move |ev: Event| {
        let code = event_target_value(&ev);
        if let Err(e) = workflow.with_mut(|c| c.select_language(&code)) {
            log::warn!("{}", e);
        }
    };

    view! {
        <Show when=move || workflow.read(|c| c.sections().language) fallback=|| view! { }>
            <div class="language-section">
                <label class="section-title" for="languageSelect">"Video language"</label>
                // Selected per option: the options don't exist yet when the
                // select's own props are applied.
                <select
                    id="languageSelect"
                    disabled=move || !workflow.read(|c| c.trigger_enabled())
                    on:change=on_change
                >
                    {LANGUAGES
                        .iter()
                        .map(|lang| {
                            let code = lang.code;
                            let selected = move || is_selected(workflow, code);
                            view! { <option value=lang.code prop:selected=selected>{lang.name}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
        </Show>
    }
}

fn is_selected(workflow: WorkflowHandle, code: &str) -> bool {
    workflow.read(|c| c.state().selected_language == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autocaption::config::DEFAULT_LANGUAGE;
    use autocaption::WorkflowController;

    use crate::types::Shared;

    fn selected_codes(workflow: WorkflowHandle) -> Vec<&'static str> {
        LANGUAGES
            .iter()
            .map(|lang| lang.code)
            .filter(|code| is_selected(workflow, code))
            .collect()
    }

    #[test]
    fn test_exactly_the_controller_language_is_selected() {
        let runtime = create_runtime();
        let workflow: WorkflowHandle = Shared::new(WorkflowController::new());
        assert_eq!(selected_codes(workflow), vec![DEFAULT_LANGUAGE]);

        workflow.with_mut(|c| c.select_language("hi")).unwrap();
        assert_eq!(selected_codes(workflow), vec!["hi"]);

        workflow.with_mut(|c| c.reset());
        assert_eq!(selected_codes(workflow), vec![DEFAULT_LANGUAGE]);
        runtime.dispose();
    }
}
