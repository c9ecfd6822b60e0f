use crate::domain::a010_document::api;
use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::{cancel_callback, non_empty, DetailsForm};
use crate::system::auth::context::use_auth;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a005_unit::aggregate::Unit;
use contracts::domain::a010_document::aggregate::{Document, DOCUMENT_KINDS};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use web_sys::{File, HtmlInputElement};

pub fn kind_options() -> Vec<(String, String)> {
    DOCUMENT_KINDS
        .iter()
        .map(|k| (k.to_string(), k.to_string()))
        .collect()
}

/// New document: metadata plus the file, sent in one multipart request.
#[component]
pub fn DocumentUpload(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let form = RwSignal::new(Document::default());
    let file = StoredValue::new_local(None::<File>);
    let file_name = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let (auth_state, _) = use_auth();
    let can_edit =
        Signal::derive(move || auth_state.with(|s| s.can_edit(Document::collection_name())));

    let on_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        let name = picked.as_ref().map(|f| f.name());
        // Title defaults to the file name without extension
        if let Some(name) = &name {
            form.update(|d| {
                if d.title.trim().is_empty() {
                    d.title = name
                        .rsplit_once('.')
                        .map(|(stem, _)| stem.to_string())
                        .unwrap_or_else(|| name.clone());
                }
            });
        }
        file.set_value(picked);
        file_name.set(name);
    };

    let on_saved = StoredValue::new_local(on_saved);
    let submit = Callback::new(move |_| {
        let document = form.get_untracked();
        if let Err(msg) = document.validate() {
            error.set(Some(msg));
            return;
        }
        let Some(picked) = file.get_value() else {
            error.set(Some("Selecione um arquivo".into()));
            return;
        };
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = api::upload_document(&document, picked).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.with_value(|f| f(())),
                Err(e) => {
                    log::warn!("document upload failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <DetailsForm
            title="Enviar documento".to_string()
            error=error
            busy=saving
            is_edit=false
            can_edit=can_edit
            on_save=submit
            on_cancel=cancel_callback(on_cancel)
            class="document-upload"
        >
            <div class="form__group">
                <label class="form__label">"Arquivo" <span class="form__required">"*"</span></label>
                <input type="file" class="form__input" on:change=on_file />
                {move || file_name.get().map(|n| view! { <span class="form__hint">{n}</span> })}
            </div>
            <Input
                label="Título"
                required=true
                value=Signal::derive(move || form.with(|f| f.title.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.title = v))
            />
            <Select
                label="Tipo"
                value=Signal::derive(move || form.with(|f| f.kind.clone().unwrap_or_default()))
                on_change=Callback::new(move |v| form.update(|f| f.kind = non_empty(v)))
                options=kind_options()
                empty_label="—"
            />
            <div class="form__row">
                <ResourceSelect<Development>
                    label="Empreendimento"
                    value=Signal::derive(move || form.with(|f| f.development_id))
                    on_change=Callback::new(move |v| form.update(|f| f.development_id = v))
                />
                <ResourceSelect<Unit>
                    label="Unidade"
                    value=Signal::derive(move || form.with(|f| f.unit_id))
                    on_change=Callback::new(move |v| form.update(|f| f.unit_id = v))
                />
            </div>
        </DetailsForm>
    }
}
