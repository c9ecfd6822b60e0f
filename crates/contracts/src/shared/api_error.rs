use serde_json::Value;
use thiserror::Error;

pub const MSG_BAD_REQUEST: &str = "Requisição inválida. Verifique os dados informados.";
pub const MSG_UNAUTHORIZED: &str = "Sessão expirada ou acesso não autorizado. Faça login novamente.";
pub const MSG_NOT_FOUND: &str = "Registro não encontrado.";
pub const MSG_SERVER: &str = "Erro interno do servidor. Tente novamente mais tarde.";
pub const MSG_NETWORK: &str = "Não foi possível conectar ao servidor.";

/// Failure of a REST call, already carrying the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{message}")]
    Unexpected { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx response. A message supplied by the server wins over
    /// the static one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let server_message = server_message(body);
        let pick = |default: &str| server_message.clone().unwrap_or_else(|| default.to_string());
        match status {
            400 | 422 => ApiError::BadRequest(pick(MSG_BAD_REQUEST)),
            401 | 403 => ApiError::Unauthorized(pick(MSG_UNAUTHORIZED)),
            404 => ApiError::NotFound(pick(MSG_NOT_FOUND)),
            500..=599 => ApiError::Server {
                status,
                message: pick(MSG_SERVER),
            },
            _ => ApiError::Unexpected {
                status,
                message: pick(&format!("Erro inesperado (HTTP {}).", status)),
            },
        }
    }

    pub fn network() -> Self {
        ApiError::Network(MSG_NETWORK.to_string())
    }

    pub fn decode(detail: impl std::fmt::Display) -> Self {
        ApiError::Decode(detail.to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::NotFound(_) => Some(404),
            ApiError::Server { status, .. } | ApiError::Unexpected { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Error text from a JSON body: `error`, `erro`, `message` or `mensagem`.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "erro", "message", "mensagem"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_defaults() {
        assert_eq!(ApiError::from_response(400, "").to_string(), MSG_BAD_REQUEST);
        assert_eq!(ApiError::from_response(422, "").to_string(), MSG_BAD_REQUEST);
        assert_eq!(ApiError::from_response(401, "").to_string(), MSG_UNAUTHORIZED);
        assert_eq!(ApiError::from_response(403, "").to_string(), MSG_UNAUTHORIZED);
        assert_eq!(ApiError::from_response(404, "not json").to_string(), MSG_NOT_FOUND);
        assert_eq!(ApiError::from_response(500, "").to_string(), MSG_SERVER);
        assert_eq!(ApiError::from_response(503, "").to_string(), MSG_SERVER);
        assert_eq!(
            ApiError::from_response(418, "").to_string(),
            "Erro inesperado (HTTP 418)."
        );
    }

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::from_response(400, r#"{"erro": "CNPJ já cadastrado"}"#);
        assert_eq!(err, ApiError::BadRequest("CNPJ já cadastrado".into()));

        let err = ApiError::from_response(500, r#"{"message": "  ", "mensagem": "Falha no banco"}"#);
        assert_eq!(err.to_string(), "Falha no banco");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_network_and_decode() {
        assert_eq!(ApiError::network().to_string(), MSG_NETWORK);
        assert_eq!(ApiError::network().status(), None);
        assert_eq!(
            ApiError::decode("missing field `nome`").to_string(),
            "Resposta inválida do servidor: missing field `nome`"
        );
    }

    #[test]
    fn test_unauthorized_flag() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(!ApiError::from_response(404, "").is_unauthorized());
    }
}
