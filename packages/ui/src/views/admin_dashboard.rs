use dioxus::prelude::*;

use crate::activity_log_panel::RecentActivity;
use crate::components::{Card, ErrorState, LoadingState, StatCard};
use crate::dashboard::{top_performers, DashboardSummary};
use crate::format::{format_points, initials};
use crate::hooks::{use_all_users, use_missions, use_rewards};
use crate::views::PageHeader;

/// Admin overview: headline counts, top performers and recent activity.
#[component]
pub fn AdminDashboardView() -> Element {
    let mut users = use_all_users();
    let mut missions = use_missions();
    let mut rewards = use_rewards();

    if users.loading() || missions.loading() || rewards.loading() {
        return rsx! { LoadingState { message: "Carregando painel..." } };
    }
    if users.error().is_some() || missions.error().is_some() || rewards.error().is_some() {
        return rsx! {
            ErrorState {
                title: "Erro ao carregar o painel",
                on_retry: move |_| {
                    users.refetch();
                    missions.refetch();
                    rewards.refetch();
                },
            }
        };
    }

    let user_list = users.data().unwrap_or_default();
    let summary = DashboardSummary::compute(
        &user_list,
        &missions.data().unwrap_or_default(),
        &rewards.data().unwrap_or_default(),
    );
    let leaders: Vec<_> = top_performers(&user_list, 5).into_iter().cloned().collect();

    rsx! {
        div {
            class: "page",
            PageHeader { section: "Dashboard", title: "Dashboard", subtitle: "Visão geral do programa de recompensas" }

            div {
                class: "stat-grid",
                StatCard {
                    title: "Usuários Ativos",
                    value: summary.active_users.to_string(),
                    caption: format!("de {} cadastrados", summary.total_users),
                }
                StatCard { title: "Missões Ativas", value: summary.active_missions.to_string() }
                StatCard { title: "Recompensas Disponíveis", value: summary.available_rewards.to_string() }
                StatCard { title: "Média de Pontos", value: format_points(summary.average_points) }
            }

            div {
                class: "two-columns",
                Card {
                    title: "Top Performers",
                    description: "Usuários com mais pontos",
                    ul {
                        class: "item-list",
                        for (i, user) in leaders.into_iter().enumerate() {
                            li {
                                key: "{user.id}",
                                class: "item-row",
                                span { class: "rank-number", "{i + 1}" }
                                div { class: "avatar", "{initials(&user.name)}" }
                                div {
                                    class: "item-body",
                                    span { class: "item-title", "{user.name}" }
                                    span { class: "muted", "{user.team_name().unwrap_or(\"Sem equipe\")}" }
                                }
                                span { class: "points", "{format_points(user.points)} pts" }
                            }
                        }
                    }
                }
                Card {
                    title: "Atividades Recentes",
                    description: "Eventos desta sessão",
                    RecentActivity { limit: 8 }
                }
            }
        }
    }
}
