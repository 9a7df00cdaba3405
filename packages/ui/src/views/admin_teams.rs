use dioxus::prelude::*;

use crate::components::{Badge, BadgeVariant, EmptyState, ErrorState, LoadingState, SearchInput};
use crate::format::format_points;
use crate::hooks::{use_teams_with_members, FetchStatus};
use crate::icons::{FaChevronDown, FaChevronRight};
use crate::ranking::TeamStanding;
use crate::search::filter_teams;
use crate::views::PageHeader;
use crate::Icon;

/// Aggregated teams with a name search and expandable member lists.
#[component]
pub fn AdminTeamsView() -> Element {
    let mut teams = use_teams_with_members();
    let mut search = use_signal(String::new);
    let state = teams.state();

    let body = match state.status() {
        FetchStatus::Idle | FetchStatus::Loading => rsx! {
            LoadingState { message: "Carregando times..." }
        },
        FetchStatus::Failed(_) => rsx! {
            ErrorState {
                title: "Falha ao carregar dados dos times",
                on_retry: move |_| teams.refetch(),
            }
        },
        FetchStatus::Ready(list) => {
            let shown: Vec<TeamStanding> = filter_teams(list, &search()).into_iter().cloned().collect();
            rsx! {
                if shown.is_empty() {
                    EmptyState { title: "Nenhum time encontrado" }
                }
                div {
                    class: "team-list",
                    for team in shown {
                        TeamPanel { key: "{team.id}", team: team.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            PageHeader { section: "Times", title: "Times", subtitle: "Equipes e seus membros" }
            div {
                class: "toolbar",
                SearchInput {
                    placeholder: "Buscar times...",
                    value: search(),
                    on_change: move |v| search.set(v),
                }
            }
            {body}
        }
    }
}

#[component]
fn TeamPanel(team: TeamStanding) -> Element {
    let mut expanded = use_signal(|| false);
    let count = team.members.len();
    let noun = if count == 1 { "membro" } else { "membros" };

    rsx! {
        div {
            class: "card team-panel",
            button {
                class: "team-panel-header",
                onclick: move |_| expanded.toggle(),
                if expanded() {
                    Icon { icon: FaChevronDown, width: 12, height: 12 }
                } else {
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
                span { class: "item-title", "{team.name}" }
                span { class: "muted", "{count} {noun}" }
                if team.is_active {
                    Badge { variant: BadgeVariant::Success, "Ativo" }
                } else {
                    Badge { variant: BadgeVariant::Muted, "Inativo" }
                }
                span { class: "points", "{format_points(team.total_points)} pts" }
            }
            if expanded() {
                ul {
                    class: "item-list",
                    for member in team.members.iter() {
                        li {
                            key: "{member.id}",
                            class: "item-row",
                            span { class: "rank-number", "{member.position}" }
                            img { class: "avatar", src: "{member.avatar}", alt: "{member.name}" }
                            span { class: "item-title", "{member.name}" }
                            span { class: "points", "{format_points(member.points)} pts" }
                        }
                    }
                }
            }
        }
    }
}
