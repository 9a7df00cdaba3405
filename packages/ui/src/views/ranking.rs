use dioxus::prelude::*;

use crate::components::{Badge, BadgeVariant, EmptyState, ErrorState, LoadingState};
use crate::format::{format_points, initials};
use crate::hooks::{use_teams_with_members, FetchStatus};
use crate::icons::{FaMedal, FaTrophy, FaUsers};
use crate::ranking::{medal_class, TeamMember, TeamStanding};
use crate::views::PageHeader;
use crate::Icon;

#[component]
pub fn RankingView() -> Element {
    let mut teams = use_teams_with_members();
    let state = teams.state();

    let body = match state.status() {
        FetchStatus::Idle | FetchStatus::Loading => rsx! {
            LoadingState { message: "Carregando ranking..." }
        },
        FetchStatus::Failed(_) => rsx! {
            ErrorState {
                title: "Falha ao carregar dados dos times",
                on_retry: move |_| teams.refetch(),
            }
        },
        FetchStatus::Ready(list) if list.is_empty() => rsx! {
            EmptyState { title: "Nenhum time encontrado" }
        },
        FetchStatus::Ready(list) => rsx! {
            div {
                class: "ranking-list",
                for (index, team) in list.iter().enumerate() {
                    TeamCard { key: "{team.id}", position: index + 1, team: team.clone() }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            PageHeader {
                section: "Ranking",
                title: "Ranking de Equipes",
                subtitle: "Confira o desempenho dos times e seus membros",
            }
            {body}
        }
    }
}

#[component]
fn TeamCard(position: usize, team: TeamStanding) -> Element {
    rsx! {
        div {
            class: "card team-card",
            div {
                class: "team-card-header",
                span { class: "team-position {medal_class(position)}", "{position}" }
                div {
                    h3 {
                        class: "card-title",
                        Icon { icon: FaUsers, width: 16, height: 16 }
                        " {team.name}"
                    }
                    p { class: "muted", "{team.members.len()} membros" }
                }
                Badge { variant: BadgeVariant::Outline, class: "team-total", "{format_points(team.total_points)} pts" }
            }
            ul {
                class: "member-list",
                for member in team.members.iter() {
                    MemberRow { key: "{member.id}", member: member.clone() }
                }
            }
        }
    }
}

#[component]
fn MemberRow(member: TeamMember) -> Element {
    rsx! {
        li {
            class: "member-row",
            span {
                class: medal_class(member.position),
                {match member.position {
                    1 => rsx! { Icon { icon: FaTrophy, width: 16, height: 16 } },
                    2 | 3 => rsx! { Icon { icon: FaMedal, width: 16, height: 16 } },
                    n => rsx! { "{n}" },
                }}
            }
            div {
                class: "avatar",
                img { src: "{member.avatar}", alt: "{member.name}" }
                span { class: "avatar-fallback", "{initials(&member.name)}" }
            }
            span { class: "member-name", "{member.name}" }
            span { class: "member-points", "{format_points(member.points)} pts" }
        }
    }
}
