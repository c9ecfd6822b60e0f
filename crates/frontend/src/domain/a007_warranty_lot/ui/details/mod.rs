use crate::domain::a006_warranty::ui::list::status_badge;
use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{
    cancel_callback, non_empty, opt_to_string, parse_opt, DetailsForm, DetailsViewModel,
};
use crate::shared::date_utils::{format_naive, to_input_value, today};
use crate::system::auth::context::use_auth;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a007_warranty_lot::aggregate::WarrantyLot;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <WarrantyLotDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn WarrantyLotDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<WarrantyLot>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit =
        Signal::derive(move || auth_state.with(|s| s.can_edit(WarrantyLot::collection_name())));

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
                    label="Lote"
                    required=true
                    placeholder="Torre A, Lote 03..."
                    value=Signal::derive(move || vm.form.with(|f| f.lot.clone()))
                    on_input=Callback::new(move |v| vm.update(|f| f.lot = v))
                />
                <Input
                    label="Sistema"
                    value=Signal::derive(move || vm.form.with(|f| f.building_system.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.building_system = non_empty(v)))
                />
            </div>
            <ResourceSelect<Development>
                label="Empreendimento"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.development_id))
                on_change=Callback::new(move |v| vm.update(|f| f.development_id = v))
            />
            <div class="form__row">
                <ResourceSelect<Product>
                    label="Produto"
                    value=Signal::derive(move || vm.form.with(|f| f.product_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.product_id = v))
                />
                <ResourceSelect<Supplier>
                    label="Fornecedor"
                    value=Signal::derive(move || vm.form.with(|f| f.supplier_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.supplier_id = v))
                />
            </div>
            <div class="form__row">
                <Input
                    label="Data de entrega"
                    input_type="date"
                    value=Signal::derive(move || vm.form.with(|f| to_input_value(f.delivery_date.as_deref())))
                    on_input=Callback::new(move |v| vm.update(|f| f.delivery_date = non_empty(v)))
                />
                <Input
                    label="Prazo (meses)"
                    input_type="number"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| opt_to_string(&f.months)))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.months = parse_opt(&v)))
                />
                <Input
                    label="Quantidade"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| opt_to_string(&f.quantity)))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.quantity = parse_opt(&v)))
                />
            </div>
            <div class="form__summary">
                "Término da garantia: "
                <strong>
                    {move || vm.form.with(|f| f.end_date()).map(format_naive).unwrap_or_else(|| "—".into())}
                </strong>
                " "
                {move || status_badge(vm.form.with(|f| f.status(today())))}
            </div>
            <Textarea
                label="Descrição"
                value=Signal::derive(move || vm.form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.description = non_empty(v)))
            />
        </DetailsForm>
    }
}
