use crate::domain::common::{null_as_default, EntityId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Admin,
    Gestor,
    Tecnico,
    #[default]
    Visualizador,
}

/// Backend labels vary in case and accents ("Admin", "TÉCNICO").
impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Profile::from_str_lossy(&raw))
    }
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::Admin,
        Profile::Gestor,
        Profile::Tecnico,
        Profile::Visualizador,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Admin => "admin",
            Profile::Gestor => "gestor",
            Profile::Tecnico => "tecnico",
            Profile::Visualizador => "visualizador",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Profile::Admin => "Administrador",
            Profile::Gestor => "Gestor",
            Profile::Tecnico => "Técnico",
            Profile::Visualizador => "Visualizador",
        }
    }

    pub fn from_str_lossy(value: &str) -> Profile {
        match value.trim().to_lowercase().as_str() {
            "admin" | "administrador" => Profile::Admin,
            "gestor" => Profile::Gestor,
            "tecnico" | "técnico" => Profile::Tecnico,
            _ => Profile::Visualizador,
        }
    }

    /// Actions granted to the profile on every resource.
    fn default_grants(&self, resource: &str, action: &str) -> bool {
        match self {
            Profile::Admin => true,
            Profile::Gestor => matches!(action, ACTION_READ | ACTION_EDIT),
            Profile::Tecnico => {
                action == ACTION_READ || (resource == "preventivos" && action == ACTION_EDIT)
            }
            Profile::Visualizador => action == ACTION_READ,
        }
    }
}

pub const ACTION_READ: &str = "ler";
pub const ACTION_EDIT: &str = "editar";

pub fn read_permission(resource: &str) -> String {
    format!("{}:{}", resource, ACTION_READ)
}

pub fn edit_permission(resource: &str) -> String {
    format!("{}:{}", resource, ACTION_EDIT)
}

/// Logged-in user, as returned by the login route and kept in storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: EntityId,
    #[serde(deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub perfil: Profile,
    #[serde(deserialize_with = "null_as_default")]
    pub permissoes: Vec<String>,
}

impl SessionUser {
    /// Accepts the user bare or wrapped in `usuario` / `user`.
    pub fn from_login_response(raw: Value) -> Result<Self, serde_json::Error> {
        let raw = match raw {
            Value::Object(mut map) => {
                match map.remove("usuario").or_else(|| map.remove("user")) {
                    Some(inner) if inner.is_object() => inner,
                    _ => Value::Object(map),
                }
            }
            other => other,
        };
        serde_json::from_value(raw)
    }

    pub fn is_admin(&self) -> bool {
        self.perfil == Profile::Admin
    }

    /// `permission` is `recurso:acao`. Admins always pass; then the explicit
    /// list (with `recurso:*` wildcards); then the profile defaults.
    pub fn has_permission(&self, permission: &str) -> bool {
        if self.is_admin() {
            return true;
        }
        let Some((resource, action)) = permission.split_once(':') else {
            return false;
        };
        let wildcard = format!("{}:*", resource);
        if self
            .permissoes
            .iter()
            .any(|p| p == permission || *p == wildcard)
        {
            return true;
        }
        self.perfil.default_grants(resource, action)
    }

    pub fn can_read(&self, resource: &str) -> bool {
        self.has_permission(&read_permission(resource))
    }

    pub fn can_edit(&self, resource: &str) -> bool {
        self.has_permission(&edit_permission(resource))
    }

    pub fn display_name(&self) -> &str {
        if self.nome.trim().is_empty() {
            &self.email
        } else {
            &self.nome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(perfil: Profile, permissoes: &[&str]) -> SessionUser {
        SessionUser {
            id: 1,
            nome: "Ana".into(),
            email: "ana@cca.com".into(),
            perfil,
            permissoes: permissoes.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_admin_passes_everything() {
        let admin = user(Profile::Admin, &[]);
        assert!(admin.has_permission("usuarios:excluir"));
        assert!(admin.has_permission("qualquer"));
    }

    #[test]
    fn test_profile_defaults() {
        let gestor = user(Profile::Gestor, &[]);
        assert!(gestor.can_read("produtos"));
        assert!(gestor.can_edit("produtos"));
        assert!(!gestor.has_permission("usuarios:excluir"));

        let tecnico = user(Profile::Tecnico, &[]);
        assert!(tecnico.can_read("garantias"));
        assert!(tecnico.can_edit("preventivos"));
        assert!(!tecnico.can_edit("garantias"));

        let viewer = user(Profile::Visualizador, &[]);
        assert!(viewer.can_read("documentos"));
        assert!(!viewer.can_edit("documentos"));
    }

    #[test]
    fn test_explicit_and_wildcard_permissions() {
        let viewer = user(Profile::Visualizador, &["documentos:editar", "usuarios:*"]);
        assert!(viewer.can_edit("documentos"));
        assert!(viewer.has_permission("usuarios:excluir"));
        assert!(!viewer.can_edit("produtos"));
        assert!(!viewer.has_permission("malformado"));
    }

    #[test]
    fn test_from_login_response_wrappers() {
        let bare = json!({"id": 3, "nome": "Bia", "email": "b@x.com", "perfil": "gestor"});
        let wrapped = json!({"token": "abc", "usuario": bare.clone()});
        let english = json!({"user": bare.clone()});
        for raw in [bare, wrapped, english] {
            let u = SessionUser::from_login_response(raw).unwrap();
            assert_eq!(u.id, 3);
            assert_eq!(u.perfil, Profile::Gestor);
            assert!(u.permissoes.is_empty());
        }
    }

    #[test]
    fn test_unknown_profile_is_viewer() {
        let u = SessionUser::from_login_response(json!({"id": 1, "perfil": "sindico"})).unwrap();
        assert_eq!(u.perfil, Profile::Visualizador);
        assert_eq!(Profile::from_str_lossy("Técnico"), Profile::Tecnico);
    }

    #[test]
    fn test_profile_label_is_case_insensitive() {
        for (raw, expected) in [
            ("Admin", Profile::Admin),
            ("ADMINISTRADOR", Profile::Admin),
            ("GESTOR", Profile::Gestor),
            ("técnico", Profile::Tecnico),
            ("TÉCNICO", Profile::Tecnico),
        ] {
            let u = SessionUser::from_login_response(json!({"id": 1, "perfil": raw})).unwrap();
            assert_eq!(u.perfil, expected, "{}", raw);
        }
        let admin = SessionUser::from_login_response(json!({"id": 1, "perfil": "Admin"})).unwrap();
        assert!(admin.has_permission("usuarios:excluir"));
    }

    #[test]
    fn test_null_fields_decode_as_missing() {
        let u = SessionUser::from_login_response(json!({
            "id": 1,
            "nome": null,
            "email": "a@cca.com",
            "perfil": null,
            "permissoes": null
        }))
        .unwrap();
        assert_eq!(u.nome, "");
        assert_eq!(u.perfil, Profile::Visualizador);
        assert!(u.permissoes.is_empty());

        let admin = SessionUser::from_login_response(json!({
            "usuario": {"id": 2, "perfil": "admin", "permissoes": null}
        }))
        .unwrap();
        assert!(admin.is_admin());
    }

    #[test]
    fn test_serialized_profile_reads_back() {
        let u = user(Profile::Tecnico, &["preventivos:*"]);
        let back: SessionUser = serde_json::from_value(serde_json::to_value(&u).unwrap()).unwrap();
        assert_eq!(back, u);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut u = user(Profile::Gestor, &[]);
        u.nome = " ".into();
        assert_eq!(u.display_name(), "ana@cca.com");
    }
}
