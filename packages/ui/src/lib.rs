//! This crate contains all shared UI for the workspace: context providers,
//! data hooks, derived view logic and the page views the platform crates
//! mount under their routers.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{make_storage, SharedStorage};

mod client;
pub use client::{use_api, use_users_revision, RewardsProvider, UsersRevision};

mod session;
pub use session::{use_login, use_logout, use_session, SessionContext, UseLogin};

pub mod hooks;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle, RecentActivity};

mod sidebar;
pub use sidebar::{AppSidebar, NavIcon, NavItem, ADMIN_NAV, USER_NAV};

pub mod catalog;
pub mod dashboard;
pub mod format;
pub mod ranking;
pub mod search;
pub mod user_form;

mod user_dialog;
pub use user_dialog::UserDialog;

pub mod views;

#[cfg(test)]
mod fixtures;
