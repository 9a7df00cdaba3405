use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TeamRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "points_cost", default)]
    pub points_cost: i64,
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
    fn test_points_cost_keeps_snake_case() {
        let json = r#"{
            "id": "r1",
            "name": "Vale Almoço",
            "description": "Um almoço por nossa conta",
            "points_cost": 300,
            "isActive": true
        }"#;
        let reward: Reward = serde_json::from_str(json).unwrap();
        assert_eq!(reward.points_cost, 300);
        assert!(reward.is_active);

        let value = serde_json::to_value(&reward).unwrap();
        assert_eq!(value["points_cost"], 300);
        assert_eq!(value["isActive"], true);
    }
}
