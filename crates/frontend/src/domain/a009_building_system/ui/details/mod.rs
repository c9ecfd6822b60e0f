use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{cancel_callback, non_empty, DetailsForm, DetailsViewModel};
use crate::system::auth::context::use_auth;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a009_building_system::aggregate::BuildingSystem;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <BuildingSystemDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn BuildingSystemDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<BuildingSystem>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || {
        auth_state.with(|s| s.can_edit(BuildingSystem::collection_name()))
    });

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
            class="building-system-details"
        >
            <div class="form__row">
                <Input
                    label="Nome"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.name = v))
                />
                <Input
                    label="Categoria"
                    placeholder="Ex.: Hidráulica, Elétrica"
                    value=Signal::derive(move || vm.form.with(|f| f.category.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.category = non_empty(v)))
                />
            </div>
            <ResourceSelect<Development>
                label="Empreendimento"
                value=Signal::derive(move || vm.form.with(|f| f.development_id))
                on_change=Callback::new(move |v| vm.update(|f| f.development_id = v))
            />
            <Textarea
                label="Descrição"
                rows=4
                value=Signal::derive(move || vm.form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.description = non_empty(v)))
            />
        </DetailsForm>
    }
}
