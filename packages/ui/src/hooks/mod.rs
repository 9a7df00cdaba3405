//! Data hooks.
//!
//! Each hook fetches on mount through the shared [`api::ApiClient`] and
//! exposes a [`Fetch`] handle with `data`, `loading`, `error` and `refetch`.
//! The request runs as a resource owned by the calling component, so it is
//! dropped if the component unmounts first.

mod fetch;
mod mutations;
mod resources;

pub use fetch::{use_fetch, Fetch, FetchState, FetchStatus};
pub use mutations::{use_user_mutations, UserMutations};
pub use resources::{
    use_all_users, use_current_user, use_mission, use_missions, use_reward, use_rewards,
    use_teams, use_teams_with_members,
};
