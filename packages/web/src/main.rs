use dioxus::prelude::*;

use store::RewardsConfig;
use views::{
    AdminDashboard, AdminLayout, AdminLogin, AdminMissions, AdminSettings, AdminTeams, AdminUsers,
    Home, Login, Missions, NotFound, Ranking, Rewards, Settings, UserLayout,
};

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

const FAVICON: Asset = asset!("/assets/favicon.svg");

/// API location baked in at build time, e.g.
/// `REWARDS_API_URL=https://api.example.com dx build --platform web`.
fn api_config() -> RewardsConfig {
    match option_env!("REWARDS_API_URL") {
        Some(url) if !url.trim().is_empty() => RewardsConfig::default().with_base_url(url.trim()),
        _ => RewardsConfig::default(),
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(api_config);
    tracing::info!(base_url = %config.api.base_url, "starting web client");

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        ui::RewardsProvider {
            config: config.api.clone(),
            Router::<Route> {}
        }
    }
}
