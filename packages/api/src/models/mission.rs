use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TeamRef;

/// A task definition that pays out `points`. Missions without a team are
/// individual missions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_deserialize() {
        let json = r#"{
            "id": "m1",
            "name": "Fechar 5 vendas",
            "description": "Feche cinco vendas no mês",
            "points": 20,
            "isActive": true,
            "createdAt": "2024-05-20T00:00:00.000Z",
            "team": { "id": "1", "name": "Comercial" }
        }"#;
        let mission: Mission = serde_json::from_str(json).unwrap();
        assert_eq!(mission.points, 20);
        assert!(mission.is_active);
        assert_eq!(mission.team.unwrap().name, "Comercial");
        assert!(mission.updated_at.is_none());
    }
}
