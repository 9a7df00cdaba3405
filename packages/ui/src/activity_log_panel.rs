use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogEntry, LogLevel};
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaClockRotateLeft, FaTriangleExclamation};
use crate::Icon;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

fn level_class(level: &LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-log-entry error",
        LogLevel::Warning => "activity-log-entry warning",
        LogLevel::Success => "activity-log-entry success",
        LogLevel::Info => "activity-log-entry info",
    }
}

#[component]
fn LevelIcon(level: LogLevel) -> Element {
    match level {
        LogLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 12, height: 12 } },
        LogLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 12, height: 12 } },
        LogLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 12, height: 12 } },
        LogLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 12, height: 12 } },
    }
}

#[component]
fn EntryRow(entry: LogEntry) -> Element {
    rsx! {
        li {
            class: level_class(&entry.level),
            LevelIcon { level: entry.level.clone() }
            span { class: "activity-log-time", "{entry.timestamp}" }
            span { "{entry.message}" }
        }
    }
}

/// Floating panel in the admin shell: logins, user changes and failed
/// requests of this run.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let mut errors_only = use_signal(|| false);

    if !log.read().visible {
        return rsx! {};
    }

    let (entries, successes, errors) = {
        let current = log.read();
        let entries: Vec<LogEntry> = current.visible_entries(errors_only()).into_iter().cloned().collect();
        (entries, current.count(LogLevel::Success), current.count(LogLevel::Error))
    };

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        section {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                span { "Registro de atividades" }
                span { class: "activity-log-summary", "{successes} concluídas · {errors} com erro" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        class: if errors_only() { "active" } else { "" },
                        onclick: move |_| errors_only.toggle(),
                        "Somente erros"
                    }
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Limpar"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Fechar"
                    }
                }
            }
            if entries.is_empty() {
                p {
                    class: "activity-log-empty",
                    if errors_only() { "Nenhum erro registrado." } else { "Nenhuma atividade registrada." }
                }
            }
            ul {
                class: "activity-log-entries",
                for (i, entry) in entries.into_iter().enumerate() {
                    EntryRow { key: "{i}", entry: entry }
                }
            }
        }
    }
}

/// Toolbar button opening the panel; turns red while the log holds errors.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let errors = log.read().count(LogLevel::Error);

    rsx! {
        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Registro de atividades",
            onclick: move |_| {
                let mut current = log.write();
                current.visible = !current.visible;
            },
            Icon { icon: FaClockRotateLeft, width: 12, height: 12 }
            if errors > 0 {
                span { " {errors}" }
            }
        }
    }
}

/// Compact newest-first list for the dashboard card.
#[component]
pub fn RecentActivity(#[props(default = 5)] limit: usize) -> Element {
    let log = use_activity_log();
    let entries: Vec<LogEntry> = log.read().recent(limit).cloned().collect();

    rsx! {
        if entries.is_empty() {
            p { class: "muted", "Nenhuma atividade nesta sessão." }
        }
        ul {
            class: "recent-activity",
            for (i, entry) in entries.into_iter().enumerate() {
                EntryRow { key: "{i}", entry: entry }
            }
        }
    }
}
