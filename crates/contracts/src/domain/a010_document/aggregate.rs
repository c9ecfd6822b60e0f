use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{null_as_default, EntityId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DOCUMENT_KINDS: &[&str] = &[
    "Manual do proprietário",
    "Manual de uso e manutenção",
    "Projeto",
    "Nota fiscal",
    "Certificado",
    "Laudo",
    "Outro",
];

/// Multipart field names expected by `POST /documentos`
pub mod upload_fields {
    pub const FILE: &str = "arquivo";
    pub const TITLE: &str = "titulo";
    pub const KIND: &str = "tipo";
    pub const DEVELOPMENT_ID: &str = "empreendimento_id";
    pub const UNIT_ID: &str = "unidade_id";
}

/// Uploaded document. Created only through the multipart upload; the JSON
/// routes are used to list, fetch and delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "titulo", deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(rename = "tipo")]
    pub kind: Option<String>,

    pub url: Option<String>,

    #[serde(rename = "nome_arquivo")]
    pub file_name: Option<String>,

    #[serde(rename = "empreendimento_id")]
    pub development_id: Option<EntityId>,

    #[serde(rename = "unidade_id")]
    pub unit_id: Option<EntityId>,

    #[serde(rename = "criado_em")]
    pub uploaded_at: Option<String>,
}

pub fn normalize_document(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_documento")
}

impl Document {
    /// Text fields of the upload form, in submission order.
    pub fn upload_text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![(upload_fields::TITLE, self.title.trim().to_string())];
        if let Some(kind) = self.kind.as_ref().filter(|k| !k.trim().is_empty()) {
            fields.push((upload_fields::KIND, kind.clone()));
        }
        if let Some(id) = self.development_id {
            fields.push((upload_fields::DEVELOPMENT_ID, id.to_string()));
        }
        if let Some(id) = self.unit_id {
            fields.push((upload_fields::UNIT_ID, id.to_string()));
        }
        fields
    }
}

impl Resource for Document {
    fn resource_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "documentos"
    }

    fn element_name() -> &'static str {
        "Documento"
    }

    fn list_name() -> &'static str {
        "Documentos"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn normalize(raw: Value) -> Value {
        normalize_document(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Título do documento é obrigatório".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_legacy_id() {
        let doc = Document::from_raw(json!({
            "id_documento": 9,
            "titulo": "Manual",
            "url": "/uploads/manual.pdf"
        }))
        .unwrap();
        assert_eq!(doc.id, Some(9));
        assert_eq!(doc.url.as_deref(), Some("/uploads/manual.pdf"));
    }

    #[test]
    fn test_upload_text_fields_skip_empty() {
        let doc = Document {
            title: " Laudo estrutural ".into(),
            kind: Some("".into()),
            development_id: Some(2),
            ..Default::default()
        };
        assert_eq!(
            doc.upload_text_fields(),
            vec![
                ("titulo", "Laudo estrutural".to_string()),
                ("empreendimento_id", "2".to_string())
            ]
        );
    }
}
