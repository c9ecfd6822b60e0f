use leptos::prelude::*;

/// Labelled input bound to a string signal.
///
/// Numbers and dates are plain `type="number"` / `type="date"` inputs; the
/// caller parses the string in `on_input`.
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
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "number", "date"...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// Shows the required marker after the label
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] maxlength: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                maxlength=move || maxlength.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
