use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{cancel_callback, non_empty, DetailsForm, DetailsViewModel};
use crate::system::auth::context::use_auth;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_contact::aggregate::Contact;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <ContactDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn ContactDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Contact>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.with(|s| s.can_edit(Contact::collection_name())));

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
            <div class="form__row">
                <Input
                    label="Nome"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.name = v))
                />
                <Input
                    label="Cargo"
                    placeholder="Síndico, zelador, técnico..."
                    value=Signal::derive(move || vm.form.with(|f| f.role.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.role = non_empty(v)))
                />
            </div>
            <div class="form__row">
                <Input
                    label="Telefone"
                    input_type="tel"
                    value=Signal::derive(move || vm.form.with(|f| f.phone.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.phone = non_empty(v)))
                />
                <Input
                    label="E-mail"
                    input_type="email"
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.email = non_empty(v)))
                />
            </div>
            <div class="form__row">
                <ResourceSelect<Supplier>
                    label="Fornecedor"
                    value=Signal::derive(move || vm.form.with(|f| f.supplier_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.supplier_id = v))
                />
                <ResourceSelect<Development>
                    label="Empreendimento"
                    value=Signal::derive(move || vm.form.with(|f| f.development_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.development_id = v))
                />
            </div>
            <Textarea
                label="Observações"
                value=Signal::derive(move || vm.form.with(|f| f.notes.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.notes = non_empty(v)))
            />
        </DetailsForm>
    }
}
