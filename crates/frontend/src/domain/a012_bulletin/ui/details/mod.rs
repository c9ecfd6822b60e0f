use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{cancel_callback, non_empty, DetailsForm, DetailsViewModel};
use crate::shared::date_utils::{to_input_value, today};
use crate::system::auth::context::use_auth;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a012_bulletin::aggregate::Bulletin;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <BulletinDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn BulletinDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Bulletin>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit =
        Signal::derive(move || auth_state.with(|s| s.can_edit(Bulletin::collection_name())));

    // New bulletins default to today and the signed-in author
    if id.is_none() {
        let author = auth_state.with_untracked(|s| s.user.as_ref().map(|u| u.display_name().to_string()));
        vm.update(|f| {
            f.published_at = Some(today().format("%Y-%m-%d").to_string());
            f.author = author;
        });
    }

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved)
            on_cancel=cancel_callback(on_cancel)
            class="bulletin-details"
        >
            <Input
                label="Título"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.title.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.title = v))
            />
            <div class="form__row">
                <Input
                    label="Data de publicação"
                    input_type="date"
                    value=Signal::derive(move || vm.form.with(|f| to_input_value(f.published_at.as_deref())))
                    on_input=Callback::new(move |v| vm.update(|f| f.published_at = non_empty(v)))
                />
                <Input
                    label="Autor"
                    value=Signal::derive(move || vm.form.with(|f| f.author.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.author = non_empty(v)))
                />
            </div>
            <ResourceSelect<Development>
                label="Empreendimento"
                value=Signal::derive(move || vm.form.with(|f| f.development_id))
                on_change=Callback::new(move |v| vm.update(|f| f.development_id = v))
            />
            <Textarea
                label="Conteúdo"
                rows=8
                value=Signal::derive(move || vm.form.with(|f| f.content.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.content = v))
            />
        </DetailsForm>
    }
}
