use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>{l}</label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
