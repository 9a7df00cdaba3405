use api::{Role, User, UserService};
use dioxus::prelude::*;

use crate::components::{Badge, BadgeVariant, Button, ButtonVariant, ErrorState, LoadingState, SearchInput};
use crate::format::format_points;
use crate::hooks::{use_all_users, use_user_mutations, FetchStatus};
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::search::filter_users;
use crate::user_dialog::UserDialog;
use crate::views::PageHeader;
use crate::Icon;

#[derive(Clone, PartialEq)]
enum DialogState {
    Closed,
    Create,
    Edit(User),
}

/// User table with search plus create, edit and delete actions.
#[component]
pub fn AdminUsersView() -> Element {
    let mut users = use_all_users();
    let mutations = use_user_mutations();
    let mut search = use_signal(String::new);
    let mut dialog = use_signal(|| DialogState::Closed);
    let state = users.state();

    let delete_error = mutations.error.read().as_ref().map(|e| e.to_string());

    let delete = move |user: User| {
        let mutations = mutations.clone();
        spawn(async move {
            if let Err(e) = mutations.delete_user(&user.id).await {
                tracing::warn!(user = %user.id, error = %e, "delete failed");
            }
        });
    };

    let table = match state.status() {
        FetchStatus::Idle | FetchStatus::Loading => rsx! {
            LoadingState { message: "Carregando usuários..." }
        },
        FetchStatus::Failed(_) => rsx! {
            ErrorState {
                title: "Erro ao carregar usuários",
                on_retry: move |_| users.refetch(),
            }
        },
        FetchStatus::Ready(list) => {
            let rows: Vec<User> = filter_users(list, &search()).into_iter().cloned().collect();
            rsx! {
                div {
                    class: "table-wrapper",
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Nome" }
                                th { "Username" }
                                th { "Email" }
                                th { "Equipe" }
                                th { "Função" }
                                th { class: "numeric", "Pontos" }
                                th { "Status" }
                                th { class: "actions", "Ações" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: "8", class: "empty-row", "Nenhum usuário encontrado." }
                                }
                            }
                            for user in rows {
                                UserRow {
                                    key: "{user.id}",
                                    user: user.clone(),
                                    on_edit: move |u| dialog.set(DialogState::Edit(u)),
                                    on_delete: delete.clone(),
                                }
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
            PageHeader { section: "Usuários", title: "Usuários", subtitle: "Gerencie os participantes do programa" }

            div {
                class: "toolbar",
                SearchInput {
                    placeholder: "Buscar por nome, email ou equipe...",
                    value: search(),
                    on_change: move |v| search.set(v),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| dialog.set(DialogState::Create),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "Novo Usuário"
                }
            }

            if let Some(message) = delete_error {
                p { class: "form-error", "{message}" }
            }

            {table}

            {match dialog() {
                DialogState::Closed => rsx! {},
                DialogState::Create => rsx! {
                    UserDialog { user: None, on_close: move |_| dialog.set(DialogState::Closed) }
                },
                DialogState::Edit(user) => rsx! {
                    UserDialog { user: Some(user), on_close: move |_| dialog.set(DialogState::Closed) }
                },
            }}
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    let team = user.team_name().unwrap_or("-").to_string();
    let role_variant = match user.role {
        Role::Admin => BadgeVariant::Neutral,
        Role::User => BadgeVariant::Outline,
    };

    rsx! {
        tr {
            td { class: "item-title", "{user.name}" }
            td { "{user.username}" }
            td { "{user.email}" }
            td { "{team}" }
            td { Badge { variant: role_variant, "{user.role.label()}" } }
            td { class: "numeric", "{format_points(user.points)}" }
            td {
                if user.is_active {
                    Badge { variant: BadgeVariant::Success, "Ativo" }
                } else {
                    Badge { variant: BadgeVariant::Muted, "Inativo" }
                }
            }
            td {
                class: "actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Editar",
                    onclick: {
                        let user = user.clone();
                        move |_| on_edit.call(user.clone())
                    },
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Excluir",
                    onclick: {
                        let user = user.clone();
                        move |_| on_delete.call(user.clone())
                    },
                    Icon { icon: FaTrash, width: 12, height: 12 }
                }
            }
        }
    }
}
