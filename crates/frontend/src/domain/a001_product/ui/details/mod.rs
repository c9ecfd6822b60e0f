use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{cancel_callback, non_empty, opt_to_string, parse_opt, DetailsForm, DetailsViewModel};
use crate::system::auth::context::use_auth;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <ProductDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn ProductDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Product>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.with(|s| s.can_edit(Product::collection_name())));

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
            class="product-details"
        >
            <Input
                label="Nome"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.name = v))
            />
            <div class="form__row">
                <Input
                    label="Categoria"
                    placeholder="Ex.: Hidráulica, Elétrica"
                    value=Signal::derive(move || vm.form.with(|f| f.category.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.category = non_empty(v)))
                />
                <Input
                    label="Marca"
                    value=Signal::derive(move || vm.form.with(|f| f.brand.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.brand = non_empty(v)))
                />
                <Input
                    label="Modelo"
                    value=Signal::derive(move || vm.form.with(|f| f.model.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.model = non_empty(v)))
                />
            </div>
            <div class="form__row">
                <ResourceSelect<Supplier>
                    label="Fornecedor"
                    value=Signal::derive(move || vm.form.with(|f| f.supplier_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.supplier_id = v))
                />
                <Input
                    label="Prazo de garantia (meses)"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| opt_to_string(&f.warranty_months)))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.warranty_months = parse_opt(&v)))
                />
            </div>
            <Textarea
                label="Descrição"
                rows=4
                value=Signal::derive(move || vm.form.with(|f| f.description.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.description = non_empty(v)))
            />
        </DetailsForm>
    }
}
