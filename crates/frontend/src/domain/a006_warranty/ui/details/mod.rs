use super::list::status_badge;
use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{
    cancel_callback, non_empty, opt_to_string, parse_opt, DetailsForm, DetailsViewModel,
};
use crate::shared::date_utils::{format_naive, to_input_value, today};
use crate::system::auth::context::use_auth;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a005_unit::aggregate::Unit;
use contracts::domain::a006_warranty::aggregate::Warranty;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <WarrantyDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn WarrantyDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Warranty>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.with(|s| s.can_edit(Warranty::collection_name())));

    // Recomputed on every edit so the user sees the effect of dates / months
    let computed_end = Signal::derive(move || vm.form.with(|f| f.effective_end_date()));
    let computed_status = Signal::derive(move || vm.form.with(|f| f.status(today())));

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
            class="warranty-details"
        >
            <ResourceSelect<Product>
                label="Produto"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.product_id))
                on_change=Callback::new(move |v| vm.update(|f| f.product_id = v))
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
            <Input
                label="Descrição"
                value=Signal::derive(move || vm.form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.description = non_empty(v)))
            />
            <div class="form__row">
                <Input
                    label="Início"
                    input_type="date"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| to_input_value(f.start_date.as_deref())))
                    on_input=Callback::new(move |v| vm.update(|f| f.start_date = non_empty(v)))
                />
                <Input
                    label="Prazo (meses)"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| opt_to_string(&f.months)))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.months = parse_opt(&v)))
                />
                <Input
                    label="Término"
                    input_type="date"
                    value=Signal::derive(move || vm.form.with(|f| to_input_value(f.end_date.as_deref())))
                    on_input=Callback::new(move |v| vm.update(|f| f.end_date = non_empty(v)))
                />
            </div>
            <div class="form__summary">
                "Vigência até "
                <strong>{move || computed_end.get().map(format_naive).unwrap_or_else(|| "—".into())}</strong>
                " "
                {move || status_badge(computed_status.get())}
            </div>
            <Textarea
                label="Condições"
                rows=4
                value=Signal::derive(move || vm.form.with(|f| f.terms.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.terms = non_empty(v)))
            />
        </DetailsForm>
    }
}
