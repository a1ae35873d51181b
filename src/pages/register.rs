//! Registration page with a three-field device form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::mcp::McpType;
use crate::state::register::{FormPatch, RegisterForm};
use crate::util::notify;

/// Registration page — local form state only.
///
/// Submit logs the constructed record, shows a blocking acknowledgment,
/// and navigates back to the list. Nothing is persisted and the list
/// page's sample data is untouched; the form is not wired to a store.
/// Empty required fields are rejected by the browser before the submit
/// handler runs.
#[component]
pub fn McpRegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let record = form.get().record();
        notify::log_registration(&record);
        notify::acknowledge("MCP registered successfully!");
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="register-page">
            <header class="register-page__header">
                <a class="register-page__back" href="/">
                    "\u{2190} Back to list"
                </a>
                <h2>"Register MCP"</h2>
            </header>

            <form class="register-page__form" on:submit=on_submit>
                <label class="register-page__label">
                    "Name *"
                    <input
                        class="register-page__input"
                        type="text"
                        required
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.apply(FormPatch::Name(event_target_value(&ev))));
                        }
                    />
                </label>

                <label class="register-page__label">
                    "Location *"
                    <input
                        class="register-page__input"
                        type="text"
                        required
                        prop:value=move || form.get().location
                        on:input=move |ev| {
                            form.update(|f| {
                                f.apply(FormPatch::Location(event_target_value(&ev)));
                            });
                        }
                    />
                </label>

                <label class="register-page__label">
                    "Type *"
                    <select
                        class="register-page__select"
                        required
                        prop:value=move || form.get().kind.as_str()
                        on:change=move |ev| {
                            let kind = McpType::parse(&event_target_value(&ev));
                            form.update(|f| f.apply(FormPatch::Kind(kind)));
                        }
                    >
                        <option value="production">"Production"</option>
                        <option value="logistics">"Logistics"</option>
                        <option value="office">"Office"</option>
                        <option value="other">"Other"</option>
                    </select>
                </label>

                <div class="register-page__actions">
                    <a class="btn btn--secondary" href="/">
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit">
                        "Register"
                    </button>
                </div>
            </form>
        </div>
    }
}
