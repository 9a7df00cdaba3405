use dioxus::prelude::*;

use crate::components::{Badge, BadgeVariant, Card, EmptyState, ErrorState, LoadingState, StatCard};
use crate::format::format_points;
use crate::hooks::{use_current_user, use_missions, use_rewards};
use crate::session::{use_session, GUEST_NAME};
use crate::views::PageHeader;

/// User landing page: points, active missions and the reward catalogue.
#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let user = use_current_user();
    let missions = use_missions();
    let rewards = use_rewards();

    if user.loading() || missions.loading() || rewards.loading() {
        return rsx! { LoadingState { message: "Carregando..." } };
    }
    if user.error().is_some() || missions.error().is_some() || rewards.error().is_some() {
        return rsx! { ErrorState { title: "Erro ao carregar dados" } };
    }

    let profile = user.data().flatten();
    let name = profile
        .as_ref()
        .map(|u| u.name.clone())
        .or_else(|| session.user().map(|u| u.name))
        .unwrap_or_else(|| GUEST_NAME.to_string());
    let team = profile.as_ref().and_then(|u| u.team_name().map(str::to_string));
    let points = profile.as_ref().map(|u| u.points).unwrap_or(0);

    let missions = missions.data().unwrap_or_default();
    let active: Vec<_> = missions.iter().filter(|m| m.is_active).cloned().collect();
    let rewards = rewards.data().unwrap_or_default();

    rsx! {
        div {
            class: "page",
            PageHeader { section: "Início", title: "Bem-vindo, {name}!" }
            if let Some(team) = team {
                p { class: "muted", "Equipe {team}" }
            }

            div {
                class: "stat-grid",
                StatCard { title: "Pontos Totais", value: format_points(points), caption: "pontos acumulados" }
                StatCard { title: "Missões", value: "{active.len()}", caption: "missões ativas" }
            }

            div {
                class: "two-columns",
                Card {
                    title: "Missões Ativas",
                    if active.is_empty() {
                        EmptyState { title: "Nenhuma missão ativa" }
                    }
                    ul {
                        class: "item-list",
                        for mission in active {
                            li {
                                key: "{mission.id}",
                                div {
                                    span { class: "item-title", "{mission.name}" }
                                    span { class: "muted", "{mission.description}" }
                                }
                                Badge { variant: BadgeVariant::Outline, "{mission.points} pts" }
                            }
                        }
                    }
                }
                Card {
                    title: "Recompensas",
                    if rewards.is_empty() {
                        EmptyState { title: "Nenhuma recompensa encontrada" }
                    }
                    ul {
                        class: "item-list",
                        for reward in rewards {
                            li {
                                key: "{reward.id}",
                                div {
                                    span { class: "item-title", "{reward.name}" }
                                    span { class: "muted", "{reward.description}" }
                                }
                                Badge {
                                    variant: if reward.is_active { BadgeVariant::Success } else { BadgeVariant::Muted },
                                    "{format_points(reward.points_cost)} pts"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
