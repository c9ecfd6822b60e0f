use crate::domain::common::{null_as_default, parse_iso_date, EntityId, Resource};
use serde::{Deserialize, Serialize};

/// Notice published to residents of a development (or to all, when
/// `development_id` is empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bulletin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "titulo", deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(rename = "conteudo", deserialize_with = "null_as_default")]
    pub content: String,

    #[serde(rename = "data_publicacao")]
    pub published_at: Option<String>,

    #[serde(rename = "empreendimento_id")]
    pub development_id: Option<EntityId>,

    #[serde(rename = "autor")]
    pub author: Option<String>,
}

impl Bulletin {
    /// First characters of the content, for list rows.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = self.content.trim();
        if text.chars().count() <= max_chars {
            return text.to_string();
        }
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

impl Resource for Bulletin {
    fn resource_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "informativos"
    }

    fn element_name() -> &'static str {
        "Informativo"
    }

    fn list_name() -> &'static str {
        "Informativos"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Título é obrigatório".into());
        }
        if self.content.trim().is_empty() {
            return Err("Conteúdo é obrigatório".into());
        }
        if let Some(date) = self.published_at.as_deref().filter(|d| !d.trim().is_empty()) {
            if parse_iso_date(date).is_none() {
                return Err("Data de publicação inválida".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt() {
        let bulletin = Bulletin {
            content: "Manutenção da piscina na segunda-feira".into(),
            ..Default::default()
        };
        assert_eq!(bulletin.excerpt(100), "Manutenção da piscina na segunda-feira");
        assert_eq!(bulletin.excerpt(10), "Manutenção…");
    }

    #[test]
    fn test_validate_date() {
        let bulletin = Bulletin {
            title: "Aviso".into(),
            content: "Texto".into(),
            published_at: Some("31/12/2024".into()),
            ..Default::default()
        };
        assert_eq!(bulletin.validate(), Err("Data de publicação inválida".to_string()));
    }
}
