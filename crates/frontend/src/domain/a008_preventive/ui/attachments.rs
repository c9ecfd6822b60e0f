use crate::domain::a008_preventive::api;
use crate::shared::crud::list::alert;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::a008_preventive::aggregate::PreventiveAttachment;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

/// "1,5 MB" style size
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    let text = if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    };
    text.replace('.', ",")
}

/// Error banners of the attachments panel. Listing and uploading fail
/// independently, so a reload never hides a rejected upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachmentErrors {
    load: Option<String>,
    upload: Option<String>,
}

impl AttachmentErrors {
    pub fn loaded(&mut self) {
        self.load = None;
    }

    pub fn load_failed(&mut self, message: String) {
        self.load = Some(message);
    }

    pub fn upload_started(&mut self) {
        self.upload = None;
    }

    pub fn upload_failed(&mut self, file_name: &str, message: String) {
        self.upload = Some(format!("Falha ao enviar \"{}\": {}", file_name, message));
    }

    pub fn messages(&self) -> Vec<String> {
        self.upload.iter().chain(self.load.iter()).cloned().collect()
    }
}

/// Files attached to one preventive task: list, upload and delete.
#[component]
pub fn PreventiveAttachments(
    preventive_id: EntityId,
    #[prop(into)] can_edit: Signal<bool>,
) -> impl IntoView {
    let items = RwSignal::new(Vec::<PreventiveAttachment>::new());
    let errors = RwSignal::new(AttachmentErrors::default());
    let uploading = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            match api::fetch_attachments(preventive_id).await {
                Ok(rows) => {
                    items.set(rows);
                    errors.update(AttachmentErrors::loaded);
                }
                Err(e) => {
                    log::error!("preventivos {}: attachments failed: {}", preventive_id, e);
                    errors.update(|errs| errs.load_failed(e.to_string()));
                }
            }
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Reset so picking the same file again still fires `change`
        input.set_value("");
        let file_name = file.name();
        uploading.set(true);
        errors.update(AttachmentErrors::upload_started);
        spawn_local(async move {
            let result = api::upload_attachment(preventive_id, file).await;
            uploading.set(false);
            match result {
                Ok(_) => load(),
                Err(e) => {
                    log::warn!("preventivos {}: upload of {} failed: {}", preventive_id, file_name, e);
                    errors.update(|errs| errs.upload_failed(&file_name, e.to_string()));
                }
            }
        });
    };

    let remove = move |attachment: PreventiveAttachment| {
        let Some(attachment_id) = attachment.id else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Excluir o anexo \"{}\"?", attachment.file_name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            if let Err(e) = api::delete_attachment(preventive_id, attachment_id).await {
                alert(&format!("Não foi possível excluir o anexo: {}", e));
            }
            load();
        });
    };

    load();

    view! {
        <div class="attachments">
            <div class="attachments__header">
                <h4>{icon("paperclip")} " Anexos"</h4>
                <Show when=move || can_edit.get()>
                    <label class="button button--secondary attachments__upload">
                        {icon("upload")}
                        {move || if uploading.get() { "Enviando..." } else { "Anexar arquivo" }}
                        <input
                            type="file"
                            style="display: none;"
                            disabled=move || uploading.get()
                            on:change=on_file
                        />
                    </label>
                </Show>
            </div>

            {move || errors.with(AttachmentErrors::messages).into_iter()
                .map(|e| view! { <div class="alert alert--error">{e}</div> })
                .collect_view()}

            <Show
                when=move || !items.with(|i| i.is_empty())
                fallback=|| view! { <div class="attachments__empty">"Nenhum anexo."</div> }
            >
                <ul class="attachments__list">
                    {move || items.get().into_iter().map(|attachment| {
                        let for_remove = attachment.clone();
                        let name = attachment.file_name.clone();
                        let link = match attachment.url.clone() {
                            Some(url) => view! {
                                <a href=url target="_blank" rel="noopener">{icon("download")} " " {name}</a>
                            }.into_any(),
                            None => view! { <span>{name}</span> }.into_any(),
                        };
                        view! {
                            <li class="attachments__item">
                                {link}
                                <span class="attachments__meta">
                                    {attachment.size_bytes.map(format_size).unwrap_or_default()}
                                    " "
                                    {attachment.uploaded_at.as_deref().map(format_datetime).unwrap_or_default()}
                                </span>
                                <Show when=move || can_edit.get()>
                                    <button
                                        class="button button--ghost"
                                        title="Excluir anexo"
                                        on:click={
                                            let a = for_remove.clone();
                                            move |_| remove(a.clone())
                                        }
                                    >
                                        {icon("delete")}
                                    </button>
                                </Show>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1,5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3,0 MB");
    }

    #[test]
    fn test_reload_keeps_upload_error() {
        let mut errors = AttachmentErrors::default();
        errors.upload_started();
        errors.upload_failed("laudo.exe", "Requisição inválida.".into());
        errors.loaded();
        assert_eq!(
            errors.messages(),
            vec!["Falha ao enviar \"laudo.exe\": Requisição inválida.".to_string()]
        );

        errors.upload_started();
        assert!(errors.messages().is_empty());
    }

    #[test]
    fn test_load_error_cleared_by_reload() {
        let mut errors = AttachmentErrors::default();
        errors.load_failed("Não foi possível conectar ao servidor.".into());
        assert_eq!(errors.messages().len(), 1);
        errors.loaded();
        assert!(errors.messages().is_empty());
    }
}
