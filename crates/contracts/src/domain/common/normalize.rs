//! Reconciliation of inconsistent field names returned by the backend.
//!
//! Different endpoints return the same logical field under different names
//! (`id` vs `id_produto`, `numero` vs `numero_unidade`). After reconciliation
//! both names are present and carry the same value, so every consumer can
//! read the canonical one.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

fn is_missing(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).map_or(true, Value::is_null)
}

/// Make `canonical` and `legacy` both present when at least one of them is.
///
/// A missing (or `null`) side is filled from the other one; when both sides
/// already hold a value nothing is touched. Non-object values pass through.
pub fn reconcile_alias(mut raw: Value, canonical: &str, legacy: &str) -> Value {
    if let Value::Object(map) = &mut raw {
        let canonical_missing = is_missing(map, canonical);
        let legacy_missing = is_missing(map, legacy);
        match (canonical_missing, legacy_missing) {
            (true, false) => {
                let value = map[legacy].clone();
                map.insert(canonical.to_string(), value);
            }
            (false, true) => {
                let value = map[canonical].clone();
                map.insert(legacy.to_string(), value);
            }
            _ => {}
        }
    }
    raw
}

/// Apply several alias pairs in order.
pub fn reconcile_all(raw: Value, pairs: &[(&str, &str)]) -> Value {
    pairs
        .iter()
        .fold(raw, |acc, (canonical, legacy)| reconcile_alias(acc, canonical, legacy))
}

/// List endpoints answer either with a bare array or with `{"data": [...]}`.
pub fn unwrap_collection(raw: Value) -> Option<Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Field deserializer that reads an explicit `null` like a missing key.
///
/// `#[serde(default)]` only covers absent keys; pair it with
/// `deserialize_with = "null_as_default"` on non-`Option` fields.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fills_canonical_from_legacy() {
        let out = reconcile_alias(json!({"id_produto": 7, "nome": "Torneira"}), "id", "id_produto");
        assert_eq!(out["id"], json!(7));
        assert_eq!(out["id_produto"], json!(7));
        assert_eq!(out["nome"], json!("Torneira"));
    }

    #[test]
    fn test_fills_legacy_from_canonical() {
        let out = reconcile_alias(json!({"id": 3}), "id", "id_fornecedor");
        assert_eq!(out["id_fornecedor"], json!(3));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let out = reconcile_alias(json!({"id": null, "id_unidade": 9}), "id", "id_unidade");
        assert_eq!(out["id"], json!(9));
    }

    #[test]
    fn test_both_present_untouched() {
        let out = reconcile_alias(json!({"id": 1, "id_produto": 2}), "id", "id_produto");
        assert_eq!(out["id"], json!(1));
        assert_eq!(out["id_produto"], json!(2));
    }

    #[test]
    fn test_neither_present_adds_nothing() {
        let out = reconcile_alias(json!({"nome": "x"}), "id", "id_produto");
        assert!(out.get("id").is_none());
        assert!(out.get("id_produto").is_none());
    }

    #[test]
    fn test_non_object_passthrough() {
        assert_eq!(reconcile_alias(json!([1, 2]), "id", "id_x"), json!([1, 2]));
    }

    #[test]
    fn test_unwrap_collection() {
        assert_eq!(unwrap_collection(json!([{"id": 1}])).map(|v| v.len()), Some(1));
        assert_eq!(
            unwrap_collection(json!({"data": [{"id": 1}, {"id": 2}]})).map(|v| v.len()),
            Some(2)
        );
        assert!(unwrap_collection(json!({"rows": []})).is_none());
        assert!(unwrap_collection(json!("x")).is_none());
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "null_as_default")]
        nome: String,
        #[serde(deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_as_default_reads_null_as_missing() {
        let row: Row = serde_json::from_value(json!({"nome": null, "tags": null})).unwrap();
        assert_eq!(row.nome, "");
        assert!(row.tags.is_empty());

        let row: Row = serde_json::from_value(json!({"tags": ["a"]})).unwrap();
        assert_eq!(row.nome, "");
        assert_eq!(row.tags, vec!["a".to_string()]);
    }
}
