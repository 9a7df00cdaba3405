//! # Rewards API client
//!
//! Typed access to the rewards REST API. All calls go through one
//! [`ApiClient`]; each resource adds its operations in its own module:
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | `auth` | `POST /auth/login` |
//! | `users` | `GET /users`, `GET /users/:id`, `POST /users`, `PATCH /users/:id`, `DELETE /users/:id` |
//! | `teams` | `GET /teams` |
//! | `missions` | `GET /missions`, `GET /missions/:id` |
//! | `rewards` | `GET /rewards`, `GET /rewards/:id` |
//!
//! Failures are reported as [`ApiError`], whose message is the user-facing
//! Portuguese text for the attempted action.

mod auth;
mod client;
mod error;
mod missions;
pub mod models;
mod rewards;
mod teams;
mod users;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use models::*;
pub use users::UserService;
