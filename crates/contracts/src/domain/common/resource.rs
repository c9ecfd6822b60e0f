use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Backend primary keys are plain integers.
pub type EntityId = i64;

/// A record mirrored from one REST collection.
///
/// The client never owns these records: they are fetched per page load,
/// edited in a form and sent back. The static part of the trait tells the
/// generic HTTP helpers where the collection lives and how the UI names it.
pub trait Resource: Serialize + DeserializeOwned + Clone + 'static {
    /// Index of the resource in the system (e.g. "a001")
    fn resource_index() -> &'static str;

    /// REST collection path without slashes (e.g. "produtos")
    fn collection_name() -> &'static str;

    /// Element name for the UI (singular, e.g. "Produto")
    fn element_name() -> &'static str;

    /// List name for the UI (plural, e.g. "Produtos")
    fn list_name() -> &'static str;

    /// Identifier of the record, `None` until the backend assigns one.
    fn id(&self) -> Option<EntityId>;

    /// Short human label used in pickers and confirmation prompts.
    fn label(&self) -> String;

    /// Patch field names the backend spells differently per endpoint.
    fn normalize(raw: Value) -> Value {
        raw
    }

    /// Decode a raw backend row after normalization.
    fn from_raw(raw: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Self::normalize(raw))
    }

    /// Form validation before submit.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
