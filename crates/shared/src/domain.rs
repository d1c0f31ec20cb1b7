use std::fmt;

use serde::{Deserialize, Serialize};

pub const NOT_PROVIDED: &str = "No proporcionado";

/// Every field is optional so that a missing value surfaces as a
/// validation failure instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationForm {
    pub nombre: Option<String>,
    pub rut: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub empresa: Option<String>,
    pub colaboradores: Option<String>,
    pub problemas: Option<Vec<String>>,
    pub otro_problema: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub nombre: String,
    pub rut: Option<String>,
    pub email: String,
    pub telefono: Option<String>,
    pub empresa: Option<String>,
    pub colaboradores: String,
    pub problemas: Option<Vec<String>>,
    pub otro_problema: Option<String>,
}

impl ConsultationRequest {
    pub fn rut_or_placeholder(&self) -> &str {
        or_placeholder(&self.rut)
    }

    pub fn telefono_or_placeholder(&self) -> &str {
        or_placeholder(&self.telefono)
    }

    pub fn empresa_or_placeholder(&self) -> &str {
        or_placeholder(&self.empresa)
    }

    pub fn otro_problema_or_placeholder(&self) -> &str {
        or_placeholder(&self.otro_problema)
    }

    pub fn problemas_joined(&self) -> String {
        match self.problemas.as_deref() {
            Some(tags) if !tags.is_empty() => tags.join(", "),
            _ => NOT_PROVIDED.to_string(),
        }
    }
}

fn or_placeholder(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_PROVIDED)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    Nombre,
    Email,
    Colaboradores,
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::Email => "email",
            Self::Colaboradores => "colaboradores",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientRole {
    Admin,
    Customer,
}

impl fmt::Display for RecipientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Customer => f.write_str("customer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
