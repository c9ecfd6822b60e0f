use super::upload::{kind_options, DocumentUpload};
use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::{cancel_callback, non_empty, DetailsForm, DetailsViewModel};
use crate::system::auth::context::use_auth;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a005_unit::aggregate::Unit;
use contracts::domain::a010_document::aggregate::Document;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

/// Creating a document means uploading a file; existing ones only edit
/// their metadata.
pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    match id {
        None => view! { <DocumentUpload on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
        Some(id) => {
            view! { <DocumentDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        }
    }
}

#[component]
pub fn DocumentDetails(
    id: EntityId,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Document>::new();
    vm.load_if_needed(Some(id));

    let (auth_state, _) = use_auth();
    let can_edit =
        Signal::derive(move || auth_state.with(|s| s.can_edit(Document::collection_name())));

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=true
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
            class="document-details"
        >
            <Input
                label="Título"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.title.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.title = v))
            />
            <Select
                label="Tipo"
                value=Signal::derive(move || vm.form.with(|f| f.kind.clone().unwrap_or_default()))
                on_change=Callback::new(move |v| vm.update(|f| f.kind = non_empty(v)))
                options=kind_options()
                empty_label="—"
            />
            <div class="form__row">
                <ResourceSelect<Development>
                    label="Empreendimento"
                    value=Signal::derive(move || vm.form.with(|f| f.development_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.development_id = v))
                />
                <ResourceSelect<Unit>
                    label="Unidade"
                    value=Signal::derive(move || vm.form.with(|f| f.unit_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.unit_id = v))
                />
            </div>
            {move || vm.form.with(|f| f.url.clone()).map(|url| view! {
                <a class="button button--secondary" href=url target="_blank" rel="noopener">
                    "Abrir arquivo"
                </a>
            })}
        </DetailsForm>
    }
}
