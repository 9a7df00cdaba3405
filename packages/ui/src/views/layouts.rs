use dioxus::prelude::*;

use crate::session::use_logout;
use crate::sidebar::{AppSidebar, ADMIN_NAV, USER_NAV};
use crate::{ActivityLogPanel, ActivityLogToggle};

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

/// Shell for the user route group. Platform packages pass the router outlet
/// as children and translate `on_navigate` paths into routes.
#[component]
pub fn UserLayoutView(
    active_path: String,
    on_navigate: EventHandler<&'static str>,
    on_logged_out: EventHandler<()>,
    children: Element,
) -> Element {
    let logout = use_logout(on_logged_out);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div {
            class: "app-shell",
            AppSidebar {
                title: "Trade Rewards",
                items: USER_NAV.to_vec(),
                active_path: active_path,
                on_navigate: on_navigate,
                on_logout: logout,
            }
            main { class: "app-main", {children} }
        }
    }
}

/// Shell for the admin route group, with the activity log overlay.
#[component]
pub fn AdminLayoutView(
    active_path: String,
    on_navigate: EventHandler<&'static str>,
    on_logged_out: EventHandler<()>,
    children: Element,
) -> Element {
    let logout = use_logout(on_logged_out);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div {
            class: "app-shell admin",
            AppSidebar {
                title: "Trade Rewards Admin",
                items: ADMIN_NAV.to_vec(),
                active_path: active_path,
                on_navigate: on_navigate,
                on_logout: logout,
            }
            main {
                class: "app-main",
                div { class: "admin-toolbar", ActivityLogToggle {} }
                {children}
            }
            ActivityLogPanel {}
        }
    }
}

/// Bare shell for the login pages.
#[component]
pub fn PublicLayoutView(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "public-shell", {children} }
    }
}
