use api::Mission;
use dioxus::prelude::*;

use crate::catalog::Difficulty;
use crate::components::{Badge, BadgeVariant, ErrorState, LoadingState, SearchInput, TabItem, Tabs};
use crate::format::{format_date, format_points};
use crate::hooks::{use_missions, FetchStatus};
use crate::search::{filter_missions, MissionFilter};
use crate::views::PageHeader;

fn filter_key(filter: MissionFilter) -> String {
    format!("{filter:?}").to_lowercase()
}

fn filter_from_key(key: &str) -> MissionFilter {
    MissionFilter::TABS
        .into_iter()
        .find(|f| filter_key(*f) == key)
        .unwrap_or_default()
}

/// Class and label of the difficulty pill for a point value.
fn difficulty_cell(points: i64) -> (&'static str, &'static str) {
    let difficulty = Difficulty::from_points(points);
    (difficulty.class(), difficulty.label())
}

/// Read-only mission table with filter tabs and search.
#[component]
pub fn AdminMissionsView() -> Element {
    let mut missions = use_missions();
    let mut search = use_signal(String::new);
    let mut filter = use_signal(MissionFilter::default);
    let state = missions.state();

    let tabs: Vec<TabItem> = MissionFilter::TABS
        .into_iter()
        .map(|f| TabItem::new(filter_key(f), f.label()))
        .collect();

    let body = match state.status() {
        FetchStatus::Idle | FetchStatus::Loading => rsx! {
            LoadingState { message: "Carregando missões..." }
        },
        FetchStatus::Failed(_) => rsx! {
            ErrorState {
                title: "Erro ao carregar missões",
                on_retry: move |_| missions.refetch(),
            }
        },
        FetchStatus::Ready(list) => {
            let rows: Vec<Mission> = filter_missions(list, &search(), filter()).into_iter().cloned().collect();
            rsx! {
                div {
                    class: "table-wrapper",
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Missão" }
                                th { "Equipe" }
                                th { "Dificuldade" }
                                th { class: "numeric", "Pontos" }
                                th { "Status" }
                                th { "Criada em" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: "6", class: "empty-row", "Nenhuma missão encontrada." }
                                }
                            }
                            for mission in rows {
                                MissionRow { key: "{mission.id}", mission: mission.clone() }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            PageHeader { section: "Missões", title: "Missões", subtitle: "Missões cadastradas no programa" }
            div {
                class: "toolbar",
                SearchInput {
                    placeholder: "Buscar missões...",
                    value: search(),
                    on_change: move |v| search.set(v),
                }
            }
            Tabs {
                items: tabs,
                active: filter_key(filter()),
                on_change: move |key: String| filter.set(filter_from_key(&key)),
            }
            {body}
        }
    }
}

#[component]
fn MissionRow(mission: Mission) -> Element {
    let (difficulty_class, difficulty_label) = difficulty_cell(mission.points);
    let team = mission.team.as_ref().map(|t| t.name.clone()).unwrap_or_else(|| "Individual".to_string());

    rsx! {
        tr {
            td {
                div { class: "item-title", "{mission.name}" }
                div { class: "muted", "{mission.description}" }
            }
            td { "{team}" }
            td { span { class: difficulty_class, "{difficulty_label}" } }
            td { class: "numeric", "{format_points(mission.points)}" }
            td {
                if mission.is_active {
                    Badge { variant: BadgeVariant::Success, "Ativa" }
                } else {
                    Badge { variant: BadgeVariant::Muted, "Inativa" }
                }
            }
            td { "{format_date(mission.created_at.as_ref())}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keys_roundtrip() {
        for filter in MissionFilter::TABS {
            assert_eq!(filter_from_key(&filter_key(filter)), filter);
        }
        assert_eq!(filter_from_key("desconhecido"), MissionFilter::All);
    }

    #[test]
    fn test_difficulty_cell_class_is_not_doubled() {
        let (class, label) = difficulty_cell(10);
        assert_eq!(class, "difficulty easy");
        assert_eq!(label, Difficulty::Easy.label());
        assert_eq!(difficulty_cell(30).0, "difficulty extreme");
    }
}
