use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{
    cancel_callback, non_empty, opt_to_string, parse_opt, DetailsForm, DetailsViewModel,
};
use crate::system::auth::context::use_auth;
use contracts::domain::a011_faq::aggregate::Faq;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <FaqDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn FaqDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Faq>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.with(|s| s.can_edit(Faq::collection_name())));

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
            class="faq-details"
        >
            <Input
                label="Pergunta"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.question.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.question = v))
            />
            <Textarea
                label="Resposta"
                rows=6
                value=Signal::derive(move || vm.form.with(|f| f.answer.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.answer = v))
            />
            <div class="form__row">
                <Input
                    label="Categoria"
                    value=Signal::derive(move || vm.form.with(|f| f.category.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.category = non_empty(v)))
                />
                <Input
                    label="Ordem"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| opt_to_string(&f.order)))
                    on_input=Callback::new(move |v: String| vm.update(|f| f.order = parse_opt(&v)))
                />
            </div>
        </DetailsForm>
    }
}
