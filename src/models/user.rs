use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registro de usuário mantido em memória
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct User {
    pub id: u64,
    /// `null` quando omitido na criação
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body do POST /api/users - nenhum campo é obrigatório.
///
/// Só aceita objeto JSON: o derive do serde também aceitaria um array
/// posicional (`["Ann", "ann@x.com"]`).
#[derive(Debug, Clone, Default, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl<'de> Deserialize<'de> for CreateUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CreateUserRequestVisitor)
    }
}

struct CreateUserRequestVisitor;

impl<'de> Visitor<'de> for CreateUserRequestVisitor {
    type Value = CreateUserRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object with optional `name` and `email`")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = CreateUserRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => request.name = map.next_value()?,
                "email" => request.email = map.next_value()?,
                // Campos desconhecidos são ignorados
                _ => {
                    map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        Ok(request)
    }
}
