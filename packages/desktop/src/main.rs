use dioxus::prelude::*;

use store::RewardsConfig;
use views::{
    AdminDashboard, AdminLayout, AdminLogin, AdminMissions, AdminSettings, AdminTeams, AdminUsers,
    Home, Login, Missions, NotFound, Ranking, Rewards, Settings, UserLayout,
};

mod settings;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/admin/login")]
    AdminLogin {},
    #[layout(UserLayout)]
        #[route("/home")]
        Home {},
        #[route("/ranking")]
        Ranking {},
        #[route("/missions")]
        Missions {},
        #[route("/rewards")]
        Rewards {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[layout(AdminLayout)]
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/teams")]
        AdminTeams {},
        #[route("/admin/missions")]
        AdminMissions {},
        #[route("/admin/settings")]
        AdminSettings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
    {
        eprintln!("tracing already initialised: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        settings::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid settings, using defaults");
            RewardsConfig::default()
        })
    });

    rsx! {
        ui::RewardsProvider {
            config: config.api.clone(),
            Router::<Route> {}
        }
    }
}
