mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod page_header;
pub use page_header::PageHeader;

mod layouts;
pub use layouts::{AdminLayoutView, PublicLayoutView, UserLayoutView};

mod login;
pub use login::LoginView;

mod home;
pub use home::HomeView;

mod ranking;
pub use ranking::RankingView;

mod missions;
pub use missions::MissionsView;

mod rewards;
pub use rewards::RewardsView;

mod settings;
pub use settings::SettingsView;

mod not_found;
pub use not_found::NotFoundView;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod admin_users;
pub use admin_users::AdminUsersView;

mod admin_teams;
pub use admin_teams::AdminTeamsView;

mod admin_missions;
pub use admin_missions::AdminMissionsView;
