//! Team standings derived from the user list.
//!
//! Teams are never ranked by the backend: [`aggregate_teams`] groups users by
//! team, totals their points and orders both teams and members. Sorting is
//! stable, so equal totals keep the order in which the API returned them.

use std::collections::HashMap;

use api::User;

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub points: i64,
    /// 1-based rank within the team.
    pub position: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamStanding {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub total_points: i64,
    pub members: Vec<TeamMember>,
}

pub fn avatar_url(username: &str) -> String {
    format!("/avatars/{username}.jpg")
}

pub fn aggregate_teams(users: &[User]) -> Vec<TeamStanding> {
    let mut teams: Vec<TeamStanding> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for user in users {
        let Some(team) = user.team.as_ref() else {
            continue;
        };
        let slot = *index.entry(team.id.as_str()).or_insert_with(|| {
            teams.push(TeamStanding {
                id: team.id.clone(),
                name: team.name.clone(),
                is_active: team.is_active,
                total_points: 0,
                members: Vec::new(),
            });
            teams.len() - 1
        });
        let standing = &mut teams[slot];
        standing.total_points += user.points;
        standing.members.push(TeamMember {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: avatar_url(&user.username),
            points: user.points,
            position: 0,
        });
    }

    teams.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for team in &mut teams {
        team.members.sort_by(|a, b| b.points.cmp(&a.points));
        for (i, member) in team.members.iter_mut().enumerate() {
            member.position = i + 1;
        }
    }
    teams
}

pub fn medal_class(position: usize) -> &'static str {
    match position {
        1 => "medal gold",
        2 => "medal silver",
        3 => "medal bronze",
        _ => "medal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::user;

    #[test]
    fn test_totals_match_member_sums() {
        let users = vec![
            user("1", "ana", 100, Some(("t1", "Comercial"))),
            user("2", "bruno", 250, Some(("t2", "TI"))),
            user("3", "carla", 50, Some(("t1", "Comercial"))),
            user("4", "davi", 30, None),
        ];
        let teams = aggregate_teams(&users);

        assert_eq!(teams.len(), 2);
        for team in &teams {
            let sum: i64 = team.members.iter().map(|m| m.points).sum();
            assert_eq!(team.total_points, sum);
        }
        // Users without a team are skipped
        assert!(teams.iter().all(|t| t.members.iter().all(|m| m.id != "4")));
    }

    #[test]
    fn test_teams_sorted_by_total_descending() {
        let users = vec![
            user("1", "ana", 100, Some(("t1", "Comercial"))),
            user("2", "bruno", 250, Some(("t2", "TI"))),
            user("3", "carla", 50, Some(("t1", "Comercial"))),
        ];
        let teams = aggregate_teams(&users);
        assert_eq!(teams[0].name, "TI");
        assert_eq!(teams[0].total_points, 250);
        assert_eq!(teams[1].name, "Comercial");
        assert_eq!(teams[1].total_points, 150);
    }

    #[test]
    fn test_members_ranked_with_stable_ties() {
        let users = vec![
            user("1", "ana", 10, Some(("t1", "Comercial"))),
            user("2", "bruno", 40, Some(("t1", "Comercial"))),
            user("3", "carla", 10, Some(("t1", "Comercial"))),
            user("4", "davi", 25, Some(("t1", "Comercial"))),
        ];
        let teams = aggregate_teams(&users);
        let members = &teams[0].members;

        let order: Vec<(&str, usize)> =
            members.iter().map(|m| (m.id.as_str(), m.position)).collect();
        assert_eq!(order, vec![("2", 1), ("4", 2), ("1", 3), ("3", 4)]);
    }

    #[test]
    fn test_tied_teams_keep_first_seen_order() {
        let users = vec![
            user("1", "ana", 50, Some(("t2", "TI"))),
            user("2", "bruno", 50, Some(("t1", "Comercial"))),
        ];
        let teams = aggregate_teams(&users);
        assert_eq!(teams[0].id, "t2");
        assert_eq!(teams[1].id, "t1");
    }

    #[test]
    fn test_member_avatar_from_username() {
        let teams = aggregate_teams(&[user("1", "ana.silva", 5, Some(("t1", "Comercial")))]);
        assert_eq!(teams[0].members[0].avatar, "/avatars/ana.silva.jpg");
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_teams(&[]).is_empty());
    }
}
