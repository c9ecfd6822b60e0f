use crate::domain::common::{null_as_default, EntityId, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "pergunta", deserialize_with = "null_as_default")]
    pub question: String,

    #[serde(rename = "resposta", deserialize_with = "null_as_default")]
    pub answer: String,

    #[serde(rename = "categoria")]
    pub category: Option<String>,

    /// Display position, lower first
    #[serde(rename = "ordem")]
    pub order: Option<i32>,
}

impl Resource for Faq {
    fn resource_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "faqs"
    }

    fn element_name() -> &'static str {
        "Pergunta frequente"
    }

    fn list_name() -> &'static str {
        "FAQ"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        self.question.clone()
    }

    fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("Pergunta é obrigatória".into());
        }
        if self.answer.trim().is_empty() {
            return Err("Resposta é obrigatória".into());
        }
        Ok(())
    }
}

/// Sort by `ordem` (missing last), then by question.
pub fn sort_faqs(items: &mut [Faq]) {
    items.sort_by(|a, b| {
        let ka = a.order.unwrap_or(i32::MAX);
        let kb = b.order.unwrap_or(i32::MAX);
        ka.cmp(&kb).then_with(|| a.question.cmp(&b.question))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(question: &str, order: Option<i32>) -> Faq {
        Faq {
            question: question.into(),
            answer: "x".into(),
            order,
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_faqs() {
        let mut items = vec![faq("C", None), faq("B", Some(2)), faq("A", Some(1)), faq("D", Some(2))];
        sort_faqs(&mut items);
        let order: Vec<_> = items.iter().map(|f| f.question.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn test_validate() {
        let mut item = faq("Como abrir um chamado?", None);
        assert!(item.validate().is_ok());
        item.answer = " ".into();
        assert_eq!(item.validate(), Err("Resposta é obrigatória".to_string()));
    }
}
