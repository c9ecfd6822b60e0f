use crate::domain::common::{null_as_default, EntityId};
use crate::system::auth::Profile;
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 6;

/// User account as listed by `GET /usuarios`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: EntityId,
    #[serde(deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub perfil: Profile,
    #[serde(deserialize_with = "null_as_default")]
    pub ativo: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub permissoes: Vec<String>,
    pub criado_em: Option<String>,
    pub ultimo_acesso: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub perfil: Profile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub nome: String,
    pub email: String,
    pub perfil: Profile,
    pub ativo: bool,
}

/// Body of `PUT /usuarios/{id}/senha`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordDto {
    pub senha: String,
}

fn validate_identity(nome: &str, email: &str) -> Result<(), String> {
    if nome.trim().is_empty() {
        return Err("Nome é obrigatório".into());
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("E-mail inválido".into());
    }
    Ok(())
}

pub fn validate_password(senha: &str) -> Result<(), String> {
    if senha.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "A senha deve ter pelo menos {} caracteres",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_identity(&self.nome, &self.email)?;
        validate_password(&self.senha)
    }
}

impl UpdateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_identity(&self.nome, &self.email)
    }
}

impl From<&User> for UpdateUserDto {
    fn from(user: &User) -> Self {
        Self {
            nome: user.nome.clone(),
            email: user.email.clone(),
            perfil: user.perfil,
            ativo: user.ativo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_validation() {
        let mut dto = CreateUserDto {
            nome: "Carlos".into(),
            email: "carlos@cca.com".into(),
            senha: "123".into(),
            perfil: Profile::Tecnico,
        };
        assert_eq!(
            dto.validate(),
            Err("A senha deve ter pelo menos 6 caracteres".to_string())
        );
        dto.senha = "segredo".into();
        assert!(dto.validate().is_ok());
        dto.email = "carlos".into();
        assert_eq!(dto.validate(), Err("E-mail inválido".to_string()));
    }

    #[test]
    fn test_update_from_user() {
        let user = User {
            id: 5,
            nome: "Dora".into(),
            email: "dora@cca.com".into(),
            perfil: Profile::Gestor,
            ativo: true,
            ..Default::default()
        };
        let dto = UpdateUserDto::from(&user);
        assert_eq!(dto.perfil, Profile::Gestor);
        assert!(dto.ativo);
        assert!(dto.validate().is_ok());
    }
}
