use api::Reward;
use dioxus::prelude::*;

use crate::catalog::RewardCategory;
use crate::components::{
    Badge, BadgeVariant, Button, ButtonVariant, EmptyState, ErrorState, LoadingState, SearchInput,
    TabItem, Tabs,
};
use crate::format::format_points;
use crate::hooks::{use_current_user, use_rewards, FetchStatus};
use crate::search::filter_rewards;
use crate::views::{ModalOverlay, PageHeader};
use crate::{log_activity, use_activity_log, LogLevel};

/// Whether `balance` covers `cost`.
pub fn can_redeem(balance: i64, cost: i64) -> bool {
    balance >= cost
}

fn category_tabs() -> Vec<TabItem> {
    std::iter::once(TabItem::new("all", "Todas"))
        .chain(RewardCategory::ALL.iter().map(|c| TabItem::new(c.key(), c.label())))
        .collect()
}

/// Reward catalogue with category tabs, search and a redeem confirmation.
///
/// The API has no redeem endpoint, so a confirmed redemption only lowers the
/// balance shown for the rest of this visit.
#[component]
pub fn RewardsView() -> Element {
    let mut rewards = use_rewards();
    let user = use_current_user();
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| "all".to_string());
    let mut spent = use_signal(|| 0i64);
    let mut selected = use_signal(|| Option::<Reward>::None);
    let mut activity = use_activity_log();

    let balance = user.data().flatten().map(|u| u.points).unwrap_or(0) - spent();
    let state = rewards.state();

    let body = match state.status() {
        FetchStatus::Idle | FetchStatus::Loading => rsx! {
            LoadingState { message: "Carregando recompensas..." }
        },
        FetchStatus::Failed(_) => rsx! {
            ErrorState {
                title: "Erro ao carregar recompensas",
                message: "Por favor, tente novamente mais tarde",
                on_retry: move |_| rewards.refetch(),
            }
        },
        FetchStatus::Ready(list) => {
            let filtered: Vec<Reward> =
                filter_rewards(list, &search(), RewardCategory::from_key(&category()))
                    .into_iter()
                    .cloned()
                    .collect();
            rsx! {
                if filtered.is_empty() {
                    EmptyState {
                        title: "Nenhuma recompensa encontrada",
                        message: "Tente ajustar seus filtros ou buscar por outros termos",
                    }
                }
                div {
                    class: "card-grid",
                    for reward in filtered {
                        RewardCard {
                            key: "{reward.id}",
                            reward: reward.clone(),
                            balance: balance,
                            on_redeem: move |r| selected.set(Some(r)),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            PageHeader { section: "Recompensas", title: "Recompensas" }

            div {
                class: "toolbar",
                div {
                    class: "balance",
                    span { class: "muted", "Seu saldo" }
                    span { class: "stat-value", "{format_points(balance)} pontos" }
                }
                SearchInput {
                    placeholder: "Buscar recompensas...",
                    value: search(),
                    on_change: move |v| search.set(v),
                }
            }

            Tabs { items: category_tabs(), active: category(), on_change: move |key| category.set(key) }

            {body}

            if let Some(reward) = selected() {
                ModalOverlay {
                    on_close: move |_| selected.set(None),
                    div {
                        class: "dialog",
                        h2 { class: "dialog-title", "Confirmar resgate" }
                        p { class: "muted", "Você está prestes a resgatar esta recompensa usando seus pontos." }
                        div {
                            class: "redeem-summary",
                            h3 { "{reward.name}" }
                            p { class: "muted", "{reward.description}" }
                            span { class: "item-title", "{format_points(reward.points_cost)} pontos" }
                        }
                        div {
                            class: "redeem-balance",
                            div {
                                p { class: "muted", "Seu saldo atual" }
                                p { class: "item-title", "{format_points(balance)} pontos" }
                            }
                            div {
                                p { class: "muted", "Saldo após resgate" }
                                p { class: "item-title", "{format_points(balance - reward.points_cost)} pontos" }
                            }
                        }
                        div {
                            class: "dialog-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| selected.set(None),
                                "Cancelar"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: !can_redeem(balance, reward.points_cost),
                                onclick: {
                                    let reward = reward.clone();
                                    move |_| {
                                        spent.with_mut(|s| *s += reward.points_cost);
                                        log_activity(&mut activity, LogLevel::Success, &format!("Recompensa {} resgatada", reward.name));
                                        selected.set(None);
                                    }
                                },
                                "Confirmar resgate"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RewardCard(reward: Reward, balance: i64, on_redeem: EventHandler<Reward>) -> Element {
    let category = RewardCategory::of(&reward);
    let affordable = can_redeem(balance, reward.points_cost);

    rsx! {
        div {
            class: "card reward-card",
            div {
                class: "reward-card-header",
                h3 { class: "card-title", "{reward.name}" }
                Badge { variant: BadgeVariant::Outline, "{category.label()}" }
            }
            p { class: "muted", "{reward.description}" }
            div {
                class: "reward-card-footer",
                span { class: "item-title", "{format_points(reward.points_cost)} pontos" }
                Button {
                    variant: if affordable { ButtonVariant::Primary } else { ButtonVariant::Outline },
                    disabled: !affordable,
                    onclick: {
                        let reward = reward.clone();
                        move |_| on_redeem.call(reward.clone())
                    },
                    if affordable { "Resgatar" } else { "Pontos insuficientes" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_redeem() {
        assert!(can_redeem(500, 500));
        assert!(can_redeem(501, 500));
        assert!(!can_redeem(499, 500));
    }

    #[test]
    fn test_category_tabs_start_with_all() {
        let tabs = category_tabs();
        assert_eq!(tabs.len(), 6);
        assert_eq!(tabs[0].key, "all");
        assert_eq!(tabs[2].label, "Alimentação");
    }
}
