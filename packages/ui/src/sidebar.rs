use dioxus::prelude::*;

use crate::icons::{
    FaBullseye, FaChartLine, FaGear, FaGift, FaHouse, FaPeopleGroup, FaRightFromBracket,
    FaRocket, FaTrophy, FaUsers,
};
use crate::session::{use_session, GUEST_AVATAR, GUEST_EMAIL, GUEST_NAME};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavIcon {
    Home,
    Ranking,
    Missions,
    Rewards,
    Settings,
    Dashboard,
    Users,
    Teams,
    Targets,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

pub const USER_NAV: [NavItem; 5] = [
    NavItem { label: "Início", path: "/home", icon: NavIcon::Home },
    NavItem { label: "Ranking", path: "/ranking", icon: NavIcon::Ranking },
    NavItem { label: "Missões", path: "/missions", icon: NavIcon::Missions },
    NavItem { label: "Recompensas", path: "/rewards", icon: NavIcon::Rewards },
    NavItem { label: "Configurações", path: "/settings", icon: NavIcon::Settings },
];

pub const ADMIN_NAV: [NavItem; 5] = [
    NavItem { label: "Dashboard", path: "/admin/dashboard", icon: NavIcon::Dashboard },
    NavItem { label: "Usuários", path: "/admin/users", icon: NavIcon::Users },
    NavItem { label: "Times", path: "/admin/teams", icon: NavIcon::Teams },
    NavItem { label: "Missões", path: "/admin/missions", icon: NavIcon::Targets },
    NavItem { label: "Configurações", path: "/admin/settings", icon: NavIcon::Settings },
];

#[component]
fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon { icon: FaHouse, width: 16, height: 16 } },
        NavIcon::Ranking => rsx! { Icon { icon: FaTrophy, width: 16, height: 16 } },
        NavIcon::Missions => rsx! { Icon { icon: FaRocket, width: 16, height: 16 } },
        NavIcon::Rewards => rsx! { Icon { icon: FaGift, width: 16, height: 16 } },
        NavIcon::Settings => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
        NavIcon::Dashboard => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        NavIcon::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavIcon::Teams => rsx! { Icon { icon: FaPeopleGroup, width: 16, height: 16 } },
        NavIcon::Targets => rsx! { Icon { icon: FaBullseye, width: 16, height: 16 } },
    }
}

/// Navigation column shared by the user and admin shells.
#[component]
pub fn AppSidebar(
    title: String,
    items: Vec<NavItem>,
    active_path: String,
    on_navigate: EventHandler<&'static str>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "sidebar",
            div {
                class: "sidebar-brand",
                Icon { icon: FaTrophy, width: 18, height: 18 }
                span { "{title}" }
            }

            ul {
                class: "sidebar-menu",
                for item in items {
                    li {
                        key: "{item.path}",
                        button {
                            class: if active_path == item.path { "sidebar-item active" } else { "sidebar-item" },
                            onclick: move |_| on_navigate.call(item.path),
                            NavIconView { icon: item.icon }
                            span { "{item.label}" }
                        }
                    }
                }
            }

            NavUser { on_logout: on_logout }
        }
    }
}

#[component]
fn NavUser(on_logout: EventHandler<()>) -> Element {
    let session = use_session();
    let (name, email) = match session.user() {
        Some(user) => (user.name, user.email),
        None => (GUEST_NAME.to_string(), GUEST_EMAIL.to_string()),
    };

    rsx! {
        div {
            class: "sidebar-user",
            img { class: "sidebar-user-avatar", src: GUEST_AVATAR, alt: "{name}" }
            div {
                class: "sidebar-user-info",
                span { class: "sidebar-user-name", "{name}" }
                span { class: "sidebar-user-email", "{email}" }
            }
            button {
                class: "sidebar-logout",
                title: "Sair",
                onclick: move |_| on_logout.call(()),
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            }
        }
    }
}
