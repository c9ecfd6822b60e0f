use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Select};
use crate::shared::crud::{
    cancel_callback, non_empty, opt_to_string, parse_opt, DetailsForm, DetailsViewModel,
};
use crate::system::auth::context::use_auth;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a005_unit::aggregate::{Unit, UNIT_KINDS};
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <UnitDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn UnitDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Unit>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.with(|s| s.can_edit(Unit::collection_name())));

    let kind_options: Vec<(String, String)> = UNIT_KINDS
        .iter()
        .map(|k| (k.to_string(), k.to_string()))
        .collect();

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
        >
            <ResourceSelect<Development>
                label="Empreendimento"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.development_id))
                on_change=Callback::new(move |v| vm.update(|f| f.development_id = v))
            />
            <div class="form__row">
                <Input
                    label="Bloco / Torre"
                    value=Signal::derive(move || vm.form.with(|f| f.block.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.block = non_empty(v)))
                />
                <Input
                    label="Número"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.number.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.number = v))
                />
                <Input
                    label="Andar"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| opt_to_string(&f.floor)))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.floor = parse_opt(&v)))
                />
            </div>
            <div class="form__row">
                <Select
                    label="Tipo"
                    value=Signal::derive(move || vm.form.with(|f| f.kind.clone().unwrap_or_default()))
                    on_change=Callback::new(move |v| vm.update(|f| f.kind = non_empty(v)))
                    options=kind_options
                    empty_label="—"
                />
                <Input
                    label="Área (m²)"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| opt_to_string(&f.area_m2)))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.area_m2 = parse_opt(&v)))
                />
            </div>
            <Input
                label="Proprietário"
                value=Signal::derive(move || vm.form.with(|f| f.owner.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.owner = non_empty(v)))
            />
        </DetailsForm>
    }
}
