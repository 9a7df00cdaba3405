//! Wire types for the rewards API.
//!
//! JSON field names are camelCase (`isActive`, `createdAt`, `teamId`) with the
//! single exception of a reward's `points_cost`.

mod auth;
mod mission;
mod reward;
mod team;
mod user;

pub use auth::{LoginCredentials, LoginResponse};
pub use mission::Mission;
pub use reward::Reward;
pub use team::{Team, TeamRef};
pub use user::{Role, User, UserCreate, UserUpdate};

/// Ids arrive as strings from most endpoints but as numbers from some; accept
/// both and keep them as strings on the client.
pub(crate) mod id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match RawId::deserialize(d)? {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
        })
    }
}
