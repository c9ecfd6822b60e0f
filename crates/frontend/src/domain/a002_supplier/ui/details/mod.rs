use crate::shared::components::ui::Input;
use crate::shared::crud::{cancel_callback, non_empty, DetailsForm, DetailsViewModel};
use crate::system::auth::context::use_auth;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <SupplierDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn SupplierDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Supplier>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.with(|s| s.can_edit(Supplier::collection_name())));

    // Optional text fields share one shape: (label, getter, setter)
    let optional_field = move |label: &'static str,
                               get: fn(&Supplier) -> Option<String>,
                               set: fn(&mut Supplier, Option<String>)| {
        view! {
            <Input
                label=label
                value=Signal::derive(move || vm.form.with(|f| get(f).unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| set(f, non_empty(v))))
            />
        }
    };

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
            class="supplier-details"
        >
            <Input
                label="Nome"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.name = v))
            />
            <div class="form__row">
                <Input
                    label="CNPJ"
                    placeholder="00.000.000/0000-00"
                    maxlength="18"
                    value=Signal::derive(move || vm.form.with(|f| f.cnpj.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.cnpj = non_empty(v)))
                />
                {optional_field("Ramo", |f| f.segment.clone(), |f, v| f.segment = v)}
            </div>
            <div class="form__row">
                {optional_field("Responsável", |f| f.contact_person.clone(), |f, v| f.contact_person = v)}
                {optional_field("Telefone", |f| f.phone.clone(), |f, v| f.phone = v)}
                <Input
                    label="E-mail"
                    input_type="email"
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.email = non_empty(v)))
                />
            </div>
            {optional_field("Endereço", |f| f.address.clone(), |f, v| f.address = v)}
        </DetailsForm>
    }
}
