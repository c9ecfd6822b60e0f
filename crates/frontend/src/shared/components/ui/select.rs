use leptos::prelude::*;

/// Labelled select. `options` are `(value, label)` pairs; an empty value is
/// the "no selection" option.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Label of the leading empty option; no empty option when absent
    #[prop(optional, into)]
    empty_label: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || empty_label.get().map(|l| view! {
                    <option value="" selected=move || value.get().is_empty()>{l}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
