use crate::shared::components::ui::Input;
use crate::shared::crud::{
    cancel_callback, non_empty, opt_to_string, parse_opt, DetailsForm, DetailsViewModel,
};
use crate::shared::date_utils::to_input_value;
use crate::system::auth::context::use_auth;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <DevelopmentDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn DevelopmentDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Development>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit =
        Signal::derive(move || auth_state.with(|s| s.can_edit(Development::collection_name())));

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
            class="development-details"
        >
            <Input
                label="Nome"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.name = v))
            />
            <Input
                label="Endereço"
                value=Signal::derive(move || vm.form.with(|f| f.address.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.address = non_empty(v)))
            />
            <div class="form__row">
                <Input
                    label="Cidade"
                    value=Signal::derive(move || vm.form.with(|f| f.city.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.city = non_empty(v)))
                />
                <Input
                    label="UF"
                    maxlength="2"
                    value=Signal::derive(move || vm.form.with(|f| f.state.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.state = non_empty(v.to_uppercase())))
                />
            </div>
            <div class="form__row">
                <Input
                    label="Construtora"
                    value=Signal::derive(move || vm.form.with(|f| f.builder.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.builder = non_empty(v)))
                />
                <Input
                    label="Data de entrega"
                    input_type="date"
                    value=Signal::derive(move || vm.form.with(|f| to_input_value(f.delivery_date.as_deref())))
                    on_input=Callback::new(move |v| vm.update(|f| f.delivery_date = non_empty(v)))
                />
                <Input
                    label="Total de unidades"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| opt_to_string(&f.total_units)))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.total_units = parse_opt(&v)))
                />
            </div>
        </DetailsForm>
    }
}
