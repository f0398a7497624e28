use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Session - the signed-in customer, passed explicitly to whoever needs it
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Uuid,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Session {
    pub fn new(user_id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builder() {
        let id = Uuid::new_v4();
        let session = Session::new(id, "Asha").with_phone("+91 90000 00000");
        assert_eq!(session.user_id, id);
        assert_eq!(session.phone.as_deref(), Some("+91 90000 00000"));
    }

    #[test]
    fn test_session_deserializes_without_phone() {
        let payload = format!(r#"{{"userId": "{}", "displayName": "Ravi"}}"#, Uuid::nil());
        let session: Session = serde_json::from_str(&payload).unwrap();
        assert_eq!(session.display_name, "Ravi");
        assert!(session.phone.is_none());
    }
}
