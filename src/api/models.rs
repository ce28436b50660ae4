//! User record returned by the endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user object; only a few fields are known; others are kept as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Any other fields the endpoint returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Best human-readable label for the user
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match &self.id {
            Some(Value::String(id)) => id.clone(),
            Some(id) => id.to_string(),
            None => "unknown user".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_keeps_unknown_fields() {
        let json = r#"{"id":7,"name":"Ada","email":"ada@example.com","role":"admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.extra.get("role"), Some(&Value::String("admin".into())));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let user: User = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(user.display_name(), "42");
    }
}
