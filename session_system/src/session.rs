use serde::{Deserialize, Serialize};

/// An ephemeral user session. It exists only as a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub email: String,
    /// Empty when the email did not resolve to a person
    pub business_unit_id: String,
}

impl Session {
    pub fn new(id: impl Into<String>, email: impl Into<String>, business_unit_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            business_unit_id: business_unit_id.into(),
        }
    }

    pub fn has_business_unit(&self) -> bool {
        !self.business_unit_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let session = Session::new("abc", "a@b.com", "bu-1");
        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            json!({"id": "abc", "email": "a@b.com", "businessUnitId": "bu-1"})
        );
    }

    #[test]
    fn test_unresolved_business_unit() {
        assert!(!Session::new("abc", "a@b.com", "").has_business_unit());
    }
}
