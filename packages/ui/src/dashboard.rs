use api::{Mission, Reward, User};

/// Headline numbers for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub active_users: usize,
    pub total_users: usize,
    pub active_missions: usize,
    pub available_rewards: usize,
    /// Mean points over active users, rounded down.
    pub average_points: i64,
}

impl DashboardSummary {
    pub fn compute(users: &[User], missions: &[Mission], rewards: &[Reward]) -> Self {
        let active: Vec<&User> = users.iter().filter(|u| u.is_active).collect();
        let average_points = if active.is_empty() {
            0
        } else {
            active.iter().map(|u| u.points).sum::<i64>() / active.len() as i64
        };
        Self {
            active_users: active.len(),
            total_users: users.len(),
            active_missions: missions.iter().filter(|m| m.is_active).count(),
            available_rewards: rewards.iter().filter(|r| r.is_active).count(),
            average_points,
        }
    }
}

/// The `limit` users with the most points, highest first.
pub fn top_performers(users: &[User], limit: usize) -> Vec<&User> {
    let mut ranked: Vec<&User> = users.iter().filter(|u| u.is_active).collect();
    ranked.sort_by(|a, b| b.points.cmp(&a.points));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{mission, reward, user};

    #[test]
    fn test_summary_counts_active_records() {
        let mut inactive = user("3", "carla", 900, None);
        inactive.is_active = false;
        let users = vec![user("1", "ana", 100, None), user("2", "bruno", 51, None), inactive];
        let missions = vec![mission("1", "A", 10, true, None), mission("2", "B", 10, false, None)];
        let rewards = vec![reward("1", "R", 5, true)];

        let summary = DashboardSummary::compute(&users, &missions, &rewards);
        assert_eq!(summary.active_users, 2);
        assert_eq!(summary.total_users, 3);
        assert_eq!(summary.active_missions, 1);
        assert_eq!(summary.available_rewards, 1);
        assert_eq!(summary.average_points, 75);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(DashboardSummary::compute(&[], &[], &[]), DashboardSummary::default());
    }

    #[test]
    fn test_top_performers() {
        let users = vec![
            user("1", "ana", 10, None),
            user("2", "bruno", 30, None),
            user("3", "carla", 20, None),
        ];
        let top: Vec<&str> = top_performers(&users, 2).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(top, vec!["2", "3"]);
    }
}
