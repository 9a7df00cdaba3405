use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default = "active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The `{ id, name }` team stub embedded in missions and rewards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    pub name: String,
}

fn active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_deserialize() {
        let json = r#"{
            "id": "1",
            "name": "Comercial",
            "isActive": false,
            "createdAt": "2024-03-01T12:00:00.000Z",
            "updatedAt": "2024-03-02T12:00:00.000Z"
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.id, "1");
        assert_eq!(team.name, "Comercial");
        assert!(!team.is_active);
        assert!(team.created_at.is_some());
    }

    #[test]
    fn test_embedded_team_defaults() {
        let team: Team = serde_json::from_str(r#"{"id": 3, "name": "TI"}"#).unwrap();
        assert_eq!(team.id, "3");
        assert!(team.is_active);
        assert!(team.created_at.is_none());
    }
}
