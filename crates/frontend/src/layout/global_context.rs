use super::tabs::tab_labels::tab_label;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Key of the tab opened when nothing else is
pub const HOME_TAB: &str = "d400_summary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// UI state shared by the whole shell: open tabs, active tab, sidebar.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// `?active=<key>` → key
pub fn parse_active_key(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

/// key → `?active=<key>`
pub fn active_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

/// Tab that becomes active after `closed` is removed: its right neighbour,
/// else the left one.
fn next_after_close(tabs: &[Tab], closed: &str) -> Option<String> {
    let pos = tabs.iter().position(|t| t.key == closed)?;
    tabs.get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|i| tabs.get(i)))
        .map(|t| t.key.clone())
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from the URL (or opens the dashboard) and
    /// keeps `?active=` in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = parse_active_key(&search).unwrap_or_else(|| HOME_TAB.to_string());
        self.open_tab(&initial, tab_label(&initial));

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab '{}'", key);
        let next_active = self.opened.with_untracked(|tabs| next_after_close(tabs, key));
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            self.active.set(next_active);
        }
    }

    /// Closes every tab; used on logout.
    pub fn reset(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_active_key_round_trips_through_query() {
        assert_eq!(active_query("a005_unit"), "?active=a005_unit");
        assert_eq!(parse_active_key("?active=a005_unit").as_deref(), Some("a005_unit"));
        assert_eq!(parse_active_key("?other=1"), None);
        assert_eq!(parse_active_key(""), None);
        assert_eq!(parse_active_key("?active="), None);
    }

    #[test]
    fn test_closing_picks_right_then_left_neighbour() {
        let open = tabs(&["a", "b", "c"]);
        assert_eq!(next_after_close(&open, "b").as_deref(), Some("c"));
        assert_eq!(next_after_close(&open, "c").as_deref(), Some("b"));
        assert_eq!(next_after_close(&tabs(&["a"]), "a"), None);
        assert_eq!(next_after_close(&open, "zzz"), None);
    }
}
