use super::attachments::PreventiveAttachments;
use super::list::preventive_status_badge;
use crate::shared::components::resource_select::ResourceSelect;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::crud::{cancel_callback, non_empty, DetailsForm, DetailsViewModel};
use crate::shared::date_utils::{format_naive, to_input_value, today};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a008_preventive::aggregate::Preventive;
use contracts::domain::a008_preventive::schedule::Periodicity;
use contracts::domain::a009_building_system::aggregate::BuildingSystem;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use std::rc::Rc;

pub fn open_details(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> AnyView {
    view! { <PreventiveDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

fn periodicity_options() -> Vec<(String, String)> {
    Periodicity::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect()
}

#[component]
pub fn PreventiveDetails(
    id: Option<EntityId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Preventive>::new();
    vm.load_if_needed(id);

    let (auth_state, _) = use_auth();
    let can_edit =
        Signal::derive(move || auth_state.with(|s| s.can_edit(Preventive::collection_name())));

    let on_saved = StoredValue::new_local(on_saved);

    // Stamp today's execution, schedule the next one and PUT the record
    let register_execution = move |_| {
        let mut record = vm.form.get_untracked();
        if let Err(e) = record.register_execution(today()) {
            vm.error.set(Some(e.to_string()));
            return;
        }
        let next = record.next_execution.clone().unwrap_or_default();
        log::info!("preventivo {:?}: execution registered, next {}", record.id, next);
        vm.form.set(record);
        vm.save_command(on_saved.get_value());
    };

    // Attachments need a persisted record; the memo keeps edits from
    // remounting the panel
    let saved_id = Memo::new(move |_| vm.form.with(|f| f.id));

    // Periodicity select shows the canonical value even when the backend
    // stored a label like "Mensal"
    let periodicity_value = Signal::derive(move || {
        vm.form.with(|f| {
            f.periodicity()
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| f.periodicity.clone())
        })
    });

    view! {
        <DetailsForm
            title=Signal::derive(move || vm.title())
            error=vm.error
            busy=vm.saving
            is_edit=Signal::derive(move || vm.is_edit_mode())
            can_edit=can_edit
            on_save=vm.save_callback(on_saved.get_value())
            on_cancel=cancel_callback(on_cancel)
            class="preventive-details"
        >
            <Input
                label="Atividade"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.activity.clone()))
                on_input=Callback::new(move |v| vm.update(|f| f.activity = v))
            />
            <div class="form__row">
                <ResourceSelect<BuildingSystem>
                    label="Sistema predial"
                    value=Signal::derive(move || vm.form.with(|f| f.building_system_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.building_system_id = v))
                />
                <ResourceSelect<Development>
                    label="Empreendimento"
                    value=Signal::derive(move || vm.form.with(|f| f.development_id))
                    on_change=Callback::new(move |v| vm.update(|f| f.development_id = v))
                />
            </div>
            <div class="form__row">
                <Select
                    label="Periodicidade"
                    required=true
                    value=periodicity_value
                    on_change=Callback::new(move |v| vm.update(|f| f.periodicity = v))
                    options=periodicity_options()
                    empty_label="— selecione —"
                />
                <Input
                    label="Responsável"
                    value=Signal::derive(move || vm.form.with(|f| f.responsible.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.update(|f| f.responsible = non_empty(v)))
                />
            </div>
            <div class="form__row">
                <Input
                    label="Última execução"
                    input_type="date"
                    value=Signal::derive(move || vm.form.with(|f| to_input_value(f.last_execution.as_deref())))
                    on_input=Callback::new(move |v| vm.update(|f| f.last_execution = non_empty(v)))
                />
                <Input
                    label="Próxima execução"
                    input_type="date"
                    value=Signal::derive(move || vm.form.with(|f| to_input_value(f.next_execution.as_deref())))
                    on_input=Callback::new(move |v| vm.update(|f| f.next_execution = non_empty(v)))
                />
            </div>
            <div class="form__summary">
                "Situação: "
                {move || preventive_status_badge(vm.form.with(|f| f.effective_status(today())))}
                <Show when=move || vm.is_edit_mode() && can_edit.get()>
                    <button
                        type="button"
                        class="button button--primary form__summary-action"
                        disabled=move || vm.saving.get()
                        title=move || format!("Registra a execução em {}", format_naive(today()))
                        on:click=register_execution
                    >
                        {icon("check")}
                        "Registrar execução"
                    </button>
                </Show>
            </div>
            <Textarea
                label="Observações"
                value=Signal::derive(move || vm.form.with(|f| f.notes.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| vm.update(|f| f.notes = non_empty(v)))
            />
        </DetailsForm>

        {move || saved_id.get().map(|preventive_id| view! {
            <PreventiveAttachments preventive_id=preventive_id can_edit=can_edit />
        })}
    }
}
