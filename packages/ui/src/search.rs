//! Case-insensitive search and tab filters used by the list pages.

use api::{Mission, Reward, User};

use crate::catalog::RewardCategory;
use crate::ranking::TeamStanding;

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Users whose name, email or team name contains `term`.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            contains(&u.name, &term)
                || contains(&u.email, &term)
                || u.team_name().is_some_and(|t| contains(t, &term))
        })
        .collect()
}

pub fn filter_teams<'a>(teams: &'a [TeamStanding], term: &str) -> Vec<&'a TeamStanding> {
    let term = term.trim().to_lowercase();
    teams.iter().filter(|t| contains(&t.name, &term)).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissionFilter {
    #[default]
    All,
    Active,
    Inactive,
    Team,
    Individual,
}

impl MissionFilter {
    pub const TABS: [MissionFilter; 5] = [
        MissionFilter::All,
        MissionFilter::Active,
        MissionFilter::Inactive,
        MissionFilter::Team,
        MissionFilter::Individual,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MissionFilter::All => "Todas",
            MissionFilter::Active => "Ativas",
            MissionFilter::Inactive => "Inativas",
            MissionFilter::Team => "Por Time",
            MissionFilter::Individual => "Individuais",
        }
    }

    pub fn matches(&self, mission: &Mission) -> bool {
        match self {
            MissionFilter::All => true,
            MissionFilter::Active => mission.is_active,
            MissionFilter::Inactive => !mission.is_active,
            MissionFilter::Team => mission.team.is_some(),
            MissionFilter::Individual => mission.team.is_none(),
        }
    }
}

/// Missions passing `filter` whose name, description or team name contains `term`.
pub fn filter_missions<'a>(missions: &'a [Mission], term: &str, filter: MissionFilter) -> Vec<&'a Mission> {
    let term = term.trim().to_lowercase();
    missions
        .iter()
        .filter(|m| filter.matches(m))
        .filter(|m| {
            contains(&m.name, &term)
                || contains(&m.description, &term)
                || m.team.as_ref().is_some_and(|t| contains(&t.name, &term))
        })
        .collect()
}

/// Active rewards in `category` (all when `None`) whose title or description
/// contains `term`.
pub fn filter_rewards<'a>(
    rewards: &'a [Reward],
    term: &str,
    category: Option<RewardCategory>,
) -> Vec<&'a Reward> {
    let term = term.trim().to_lowercase();
    rewards
        .iter()
        .filter(|r| r.is_active)
        .filter(|r| category.is_none_or(|c| RewardCategory::of(r) == c))
        .filter(|r| contains(&r.name, &term) || contains(&r.description, &term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{mission, reward, user};

    fn user_ids<'a>(users: &[&'a User]) -> Vec<&'a str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    fn mission_ids<'a>(missions: &[&'a Mission]) -> Vec<&'a str> {
        missions.iter().map(|m| m.id.as_str()).collect()
    }

    fn reward_ids<'a>(rewards: &[&'a Reward]) -> Vec<&'a str> {
        rewards.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filter_users_by_name_email_or_team() {
        let mut ana = user("1", "ana", 0, Some(("t1", "Comercial")));
        ana.name = "Ana Silva".to_string();
        let mut bruno = user("2", "bruno", 0, Some(("t2", "Suporte")));
        bruno.email = "b.costa@TRADE.com".to_string();
        let carla = user("3", "carla", 0, None);
        let users = vec![ana, bruno, carla];

        let by_name = filter_users(&users, "SILVA");
        assert_eq!(user_ids(&by_name), vec!["1"]);

        let by_email = filter_users(&users, "trade.com");
        assert_eq!(user_ids(&by_email), vec!["2"]);

        let by_team = filter_users(&users, "suporte");
        assert_eq!(user_ids(&by_team), vec!["2"]);

        assert_eq!(filter_users(&users, "").len(), 3);
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn test_filter_missions_tabs_and_search() {
        let missions = vec![
            mission("1", "Vender", 10, true, Some("Comercial")),
            mission("2", "Estudar", 20, false, None),
            mission("3", "Atender", 30, true, None),
        ];

        let active = filter_missions(&missions, "", MissionFilter::Active);
        assert_eq!(mission_ids(&active), vec!["1", "3"]);

        let inactive = filter_missions(&missions, "", MissionFilter::Inactive);
        assert_eq!(mission_ids(&inactive), vec!["2"]);

        let team = filter_missions(&missions, "", MissionFilter::Team);
        assert_eq!(mission_ids(&team), vec!["1"]);

        let individual = filter_missions(&missions, "", MissionFilter::Individual);
        assert_eq!(mission_ids(&individual), vec!["2", "3"]);

        let by_team_name = filter_missions(&missions, "comerc", MissionFilter::All);
        assert_eq!(mission_ids(&by_team_name), vec!["1"]);

        let by_description = filter_missions(&missions, "descrição de atender", MissionFilter::All);
        assert_eq!(mission_ids(&by_description), vec!["3"]);
    }

    #[test]
    fn test_filter_rewards_hides_inactive() {
        let rewards = vec![
            reward("1", "Vale Almoço", 300, true),
            reward("2", "Curso online", 800, true),
            reward("3", "Jantar", 500, false),
        ];

        let all = filter_rewards(&rewards, "", None);
        assert_eq!(reward_ids(&all), vec!["1", "2"]);

        let food = filter_rewards(&rewards, "", Some(RewardCategory::Food));
        assert_eq!(reward_ids(&food), vec!["1"]);

        let searched = filter_rewards(&rewards, "CURSO", None);
        assert_eq!(reward_ids(&searched), vec!["2"]);
    }
}
