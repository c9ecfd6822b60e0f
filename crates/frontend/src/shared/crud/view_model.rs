use crate::shared::api_client;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// Form state of a details screen bound to one REST record.
pub struct DetailsViewModel<R: Resource + Default + Send + Sync> {
    pub form: RwSignal<R>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl<R: Resource + Default + Send + Sync> Clone for DetailsViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource + Default + Send + Sync> Copy for DetailsViewModel<R> {}

impl<R: Resource + Default + Send + Sync> Default for DetailsViewModel<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource + Default + Send + Sync> DetailsViewModel<R> {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(R::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id().is_some())
    }

    pub fn busy(&self) -> bool {
        self.loading.get() || self.saving.get()
    }

    /// Title for the details header: "Editar Produto" / "Novo registro".
    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            format!("Editar {}", R::element_name().to_lowercase())
        } else {
            format!("{}: novo registro", R::element_name())
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut R)) {
        self.form.update(f);
    }

    /// Load the record from the server if an ID is provided
    pub fn load_if_needed(&self, id: Option<EntityId>) {
        let Some(id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api_client::fetch_one::<R>(id).await {
                Ok(record) => vm.form.set(record),
                Err(e) => {
                    log::error!("{} {}: load failed: {}", R::collection_name(), id, e);
                    vm.error.set(Some(format!("Erro ao carregar: {}", e)));
                }
            }
            vm.loading.set(false);
        });
    }

    /// Validate and send the form (POST for new records, PUT otherwise).
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get_untracked();
        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            match api_client::save(&current).await {
                Ok(()) => {
                    vm.saving.set(false);
                    on_saved(());
                }
                Err(e) => {
                    vm.saving.set(false);
                    vm.error.set(Some(e.to_string()));
                }
            }
        });
    }
}

impl<R: Resource + Default + Send + Sync> DetailsViewModel<R> {
    /// Save button callback. The `Rc` from the modal is kept in local
    /// storage so the callback itself stays `Send + Sync`.
    pub fn save_callback(&self, on_saved: Rc<dyn Fn(())>) -> Callback<()> {
        let vm = *self;
        let on_saved = StoredValue::new_local(on_saved);
        Callback::new(move |_| vm.save_command(on_saved.get_value()))
    }
}

pub fn cancel_callback(on_cancel: Rc<dyn Fn(())>) -> Callback<()> {
    let on_cancel = StoredValue::new_local(on_cancel);
    Callback::new(move |_| on_cancel.with_value(|f| f(())))
}

/// Empty or whitespace input becomes `None`.
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Number input to optional number; invalid input becomes `None`.
pub fn parse_opt<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().replace(',', ".").parse().ok()
}

/// Optional value as input text.
pub fn opt_to_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty("Bloco A".into()), Some("Bloco A".into()));
    }

    #[test]
    fn test_parse_opt() {
        assert_eq!(parse_opt::<u32>("24"), Some(24));
        assert_eq!(parse_opt::<f64>("52,5"), Some(52.5));
        assert_eq!(parse_opt::<u32>(""), None);
        assert_eq!(parse_opt::<i32>("x"), None);
    }

    #[test]
    fn test_opt_to_string() {
        assert_eq!(opt_to_string(&Some(3)), "3");
        assert_eq!(opt_to_string::<i64>(&None), "");
    }
}
