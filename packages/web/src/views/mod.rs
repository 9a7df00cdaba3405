//! Route components. Each one mounts the shared view from `ui::views` and
//! turns its callbacks into navigation.

use dioxus::prelude::*;

use crate::Route;

/// Where every logout lands.
pub(crate) fn logged_out_route() -> Route {
    Route::Login {}
}

/// Sidebar click handler: pushes the route for a nav path, ignoring paths the
/// router does not know.
fn use_sidebar_navigation() -> Callback<&'static str> {
    let nav = use_navigator();
    use_callback(move |path: &'static str| match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::warn!(path, error = %e, "unknown sidebar path"),
    })
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::LoginView {
            on_success: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

#[component]
pub fn AdminLogin() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::LoginView {
            admin: true,
            on_success: move |_| {
                nav.push(Route::AdminDashboard {});
            },
        }
    }
}

#[component]
pub fn UserLayout() -> Element {
    let nav = use_navigator();
    let navigate = use_sidebar_navigation();
    let route = use_route::<Route>();

    rsx! {
        ui::views::UserLayoutView {
            active_path: route.to_string(),
            on_navigate: navigate,
            on_logged_out: move |_| {
                nav.replace(logged_out_route());
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    let nav = use_navigator();
    let navigate = use_sidebar_navigation();
    let route = use_route::<Route>();

    rsx! {
        ui::views::AdminLayoutView {
            active_path: route.to_string(),
            on_navigate: navigate,
            on_logged_out: move |_| {
                nav.replace(logged_out_route());
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { ui::views::HomeView {} }
}

#[component]
pub fn Ranking() -> Element {
    rsx! { ui::views::RankingView {} }
}

#[component]
pub fn Missions() -> Element {
    rsx! { ui::views::MissionsView {} }
}

#[component]
pub fn Rewards() -> Element {
    rsx! { ui::views::RewardsView {} }
}

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::SettingsView {
            section: "Configurações",
            on_logged_out: move |_| {
                nav.replace(logged_out_route());
            },
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { ui::views::AdminDashboardView {} }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! { ui::views::AdminUsersView {} }
}

#[component]
pub fn AdminTeams() -> Element {
    rsx! { ui::views::AdminTeamsView {} }
}

#[component]
pub fn AdminMissions() -> Element {
    rsx! { ui::views::AdminMissionsView {} }
}

#[component]
pub fn AdminSettings() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::SettingsView {
            section: "Administração",
            on_logged_out: move |_| {
                nav.replace(logged_out_route());
            },
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::NotFoundView {
            path: segments.join("/"),
            on_home: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_lands_on_root() {
        assert_eq!(logged_out_route().to_string(), "/");
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Login {}));
    }

    #[test]
    fn test_every_sidebar_path_is_a_route() {
        for item in ui::USER_NAV.iter().chain(ui::ADMIN_NAV.iter()) {
            let route = item.path.parse::<Route>();
            assert!(route.is_ok(), "{} has no route", item.path);
            assert_eq!(route.map(|r| r.to_string()).ok().as_deref(), Some(item.path));
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            "/admin/relatorios".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["admin".to_string(), "relatorios".to_string()]
            })
        );
    }
}
