use api::Mission;
use dioxus::prelude::*;

use crate::catalog::{Difficulty, MissionStatus};
use crate::components::{Badge, BadgeVariant, Card, EmptyState, ErrorState, LoadingState, TabItem, Tabs};
use crate::format::format_date;
use crate::hooks::{use_missions, FetchStatus};
use crate::icons::{FaCircleCheck, FaClock};
use crate::views::PageHeader;
use crate::Icon;

/// The user's missions split into active and completed tabs.
#[component]
pub fn MissionsView() -> Element {
    let mut missions = use_missions();
    let mut tab = use_signal(|| "active".to_string());
    let state = missions.state();

    let list = match state.status() {
        FetchStatus::Idle | FetchStatus::Loading => {
            return rsx! { LoadingState { message: "Carregando missões..." } };
        }
        FetchStatus::Failed(_) => {
            return rsx! {
                ErrorState {
                    title: "Erro ao carregar missões",
                    on_retry: move |_| missions.refetch(),
                }
            };
        }
        FetchStatus::Ready(list) => list.clone(),
    };

    let (active, completed): (Vec<Mission>, Vec<Mission>) = list
        .into_iter()
        .partition(|m| MissionStatus::of(m) == MissionStatus::Active);

    let tabs = vec![
        TabItem::new("active", format!("Ativas ({})", active.len())),
        TabItem::new("completed", format!("Enviadas ({})", completed.len())),
    ];
    let showing_active = tab() == "active";
    let shown = if showing_active { active.clone() } else { completed.clone() };

    rsx! {
        div {
            class: "page",
            PageHeader { section: "Missões", title: "Minhas Missões" }

            Card {
                title: "Progresso",
                div {
                    class: "progress-summary",
                    div {
                        span { class: "stat-value", "{active.len()}" }
                        span { class: "muted", "Missões Ativas" }
                    }
                    div {
                        span { class: "stat-value", "{completed.len()}" }
                        span { class: "muted", "Missões Concluídas" }
                    }
                }
            }

            Tabs { items: tabs, active: tab(), on_change: move |key| tab.set(key) }

            if shown.is_empty() {
                if showing_active {
                    EmptyState { title: "Nenhuma missão ativa" }
                } else {
                    EmptyState {
                        title: "Sem missões concluídas",
                        message: "Complete missões para ver seu histórico aqui",
                    }
                }
            }

            div {
                class: "card-grid",
                for mission in shown {
                    MissionCard { key: "{mission.id}", mission: mission.clone() }
                }
            }
        }
    }
}

#[component]
fn MissionCard(mission: Mission) -> Element {
    let difficulty = Difficulty::from_points(mission.points);
    let status = MissionStatus::of(&mission);

    rsx! {
        div {
            class: "card mission-card",
            div {
                class: "mission-card-header",
                h3 { class: "card-title", "{mission.name}" }
                span { class: "{difficulty.class()}", "{difficulty.label()}" }
            }
            p { class: "muted", "{mission.description}" }
            div {
                class: "mission-card-footer",
                Badge { variant: BadgeVariant::Outline, "{mission.points} pts" }
                if let Some(team) = &mission.team {
                    Badge { variant: BadgeVariant::Muted, "{team.name}" }
                }
                span {
                    class: "mission-date",
                    match status {
                        MissionStatus::Active => rsx! { Icon { icon: FaClock, width: 12, height: 12 } },
                        MissionStatus::Completed => rsx! { Icon { icon: FaCircleCheck, width: 12, height: 12 } },
                    }
                    " {format_date(mission.created_at.as_ref())}"
                }
            }
        }
    }
}
