//! Record builders shared by unit tests.

use api::{Mission, Reward, Role, Team, TeamRef, User};

pub fn team(id: &str, name: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn user(id: &str, username: &str, points: i64, team_of: Option<(&str, &str)>) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        name: username.to_string(),
        email: format!("{username}@x.com"),
        role: Role::User,
        points,
        is_active: true,
        created_at: None,
        updated_at: None,
        team: team_of.map(|(tid, tname)| team(tid, tname)),
    }
}

pub fn mission(id: &str, name: &str, points: i64, is_active: bool, team_name: Option<&str>) -> Mission {
    Mission {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Descrição de {name}"),
        points,
        is_active,
        created_at: None,
        updated_at: None,
        team: team_name.map(|n| TeamRef {
            id: format!("team-{n}"),
            name: n.to_string(),
        }),
    }
}

pub fn reward(id: &str, name: &str, points_cost: i64, is_active: bool) -> Reward {
    Reward {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Resgate {name}"),
        points_cost,
        is_active,
        created_at: None,
        updated_at: None,
        team: None,
    }
}
