use crate::shared::components::page_header::ErrorBanner;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Frame of a details form: compact header, error banner, fields, and the
/// save / cancel actions. Without `can_edit` the fields are shown read-only
/// and only "Fechar" is offered.
#[component]
pub fn DetailsForm(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] is_edit: Signal<bool>,
    #[prop(into)] can_edit: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("details-container {class}")>
            <div class="details-header">
                <h3>{move || title.get()}</h3>
            </div>

            <ErrorBanner message=error />

            <fieldset class="details-form" disabled=move || !can_edit.get()>
                {children()}
            </fieldset>

            <div class="details-actions">
                <Show when=move || can_edit.get()>
                    <button
                        class="button button--primary"
                        on:click=move |_| on_save.run(())
                        disabled=move || busy.get()
                    >
                        {icon("save")}
                        {move || match (busy.get(), is_edit.get()) {
                            (true, _) => "Salvando...",
                            (false, true) => "Salvar",
                            (false, false) => "Criar",
                        }}
                    </button>
                </Show>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {move || if can_edit.get() { "Cancelar" } else { "Fechar" }}
                </button>
            </div>
        </div>
    }
}
