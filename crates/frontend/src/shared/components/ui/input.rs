use leptos::prelude::*;

/// Text field with label, helper text and a field-level error message
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Helper text under the field
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Validation message; replaces nothing, rendered under the helper text
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autofocus when mounted
    #[prop(optional)]
    autofocus: bool,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group" class:form__group--invalid=has_error>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type="text"
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                autofocus=autofocus
                aria-invalid=move || if has_error() { "true" } else { "false" }
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || description.get().map(|d| view! {
                <p class="form__description">{d}</p>
            })}
            {move || error.get().map(|e| view! {
                <p class="form__message" role="alert">{e}</p>
            })}
        </div>
    }
}
