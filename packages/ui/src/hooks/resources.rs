use api::{Mission, Reward, Team, User};

use super::fetch::{use_fetch, Fetch};
use crate::client::use_users_revision;
use crate::ranking::{aggregate_teams, TeamStanding};
use crate::session::use_session;

/// All users. Refetches on its own after any user mutation.
pub fn use_all_users() -> Fetch<Vec<User>> {
    let revision = use_users_revision();
    use_fetch(move |api| {
        // Reading the revision subscribes this fetch to it.
        let _ = revision.get();
        async move { api.list_users().await }
    })
}

/// Full record of the logged-in user; `None` when nobody is logged in.
pub fn use_current_user() -> Fetch<Option<User>> {
    let session = use_session();
    use_fetch(move |api| {
        let id = session.user_id();
        async move {
            match id {
                Some(id) => api.get_user(&id).await.map(Some),
                None => Ok(None),
            }
        }
    })
}

pub fn use_teams() -> Fetch<Vec<Team>> {
    use_fetch(|api| async move { api.list_teams().await })
}

/// Teams ranked by the summed points of their members.
pub fn use_teams_with_members() -> Fetch<Vec<TeamStanding>> {
    let revision = use_users_revision();
    use_fetch(move |api| {
        let _ = revision.get();
        async move { api.list_users().await.map(|users| aggregate_teams(&users)) }
    })
}

pub fn use_missions() -> Fetch<Vec<Mission>> {
    use_fetch(|api| async move { api.list_missions().await })
}

/// The request is skipped for an empty id.
pub fn use_mission(id: String) -> Fetch<Option<Mission>> {
    use_fetch(move |api| {
        let id = id.clone();
        async move {
            if id.is_empty() {
                return Ok(None);
            }
            api.get_mission(&id).await.map(Some)
        }
    })
}

pub fn use_rewards() -> Fetch<Vec<Reward>> {
    use_fetch(|api| async move { api.list_rewards().await })
}

/// The request is skipped for an empty id.
pub fn use_reward(id: String) -> Fetch<Option<Reward>> {
    use_fetch(move |api| {
        let id = id.clone();
        async move {
            if id.is_empty() {
                return Ok(None);
            }
            api.get_reward(&id).await.map(Some)
        }
    })
}
