use api::{Role, User};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::hooks::{use_teams, use_user_mutations};
use crate::user_form::{submit_user_form, FormMode, UserForm};
use crate::views::ModalOverlay;

/// Create (`user: None`) or edit dialog. Mount it only while open; unmounting
/// discards whatever was typed.
#[component]
pub fn UserDialog(
    user: Option<User>,
    on_close: EventHandler<()>,
    on_success: Option<EventHandler<()>>,
) -> Element {
    let mutations = use_user_mutations();
    let teams = use_teams();
    let initial = user.clone();
    let mut form = use_signal(move || match &initial {
        Some(u) => UserForm::edit(u),
        None => UserForm::create(),
    });

    let is_create = form.read().mode == FormMode::Create;
    let title = if is_create { "Novo Usuário" } else { "Editar Usuário" };
    let submit_label = if is_create { "Criar Usuário" } else { "Salvar Alterações" };

    let submit = move |_| {
        if form.read().submitting {
            return;
        }
        let snapshot = form.read().clone();
        let mutations = mutations.clone();
        form.write().submitting = true;
        spawn(async move {
            let outcome = submit_user_form(&mutations, &snapshot.mode, &snapshot.fields).await;
            if form.write().apply(outcome) {
                on_close.call(());
                if let Some(done) = on_success {
                    done.call(());
                }
            }
        });
    };

    let close = move |_| {
        form.write().close();
        on_close.call(());
    };

    let state = form.read().clone();
    let team_options = teams.data().unwrap_or_default();

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                form.write().close();
                on_close.call(());
            },
            div {
                class: "dialog",
                h2 { class: "dialog-title", "{title}" }

                if let Some(message) = state.errors.form {
                    p { class: "form-error", "{message}" }
                }

                div {
                    class: "field",
                    Label { html_for: "user-name", "Nome completo" }
                    Input {
                        id: "user-name",
                        placeholder: "Ana Silva",
                        invalid: state.errors.name.is_some(),
                        value: state.fields.name.clone(),
                        oninput: move |evt: FormEvent| form.write().fields.name = evt.value(),
                    }
                    if let Some(message) = state.errors.name {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "user-email", "Email" }
                    Input {
                        id: "user-email",
                        r#type: "email",
                        placeholder: "ana@tradetechnology.com.br",
                        invalid: state.errors.email.is_some(),
                        value: state.fields.email.clone(),
                        oninput: move |evt: FormEvent| form.write().fields.email = evt.value(),
                    }
                    if let Some(message) = state.errors.email {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "user-username", "Username" }
                    Input {
                        id: "user-username",
                        placeholder: "ana.silva",
                        invalid: state.errors.username.is_some(),
                        value: state.fields.username.clone(),
                        oninput: move |evt: FormEvent| form.write().fields.username = evt.value(),
                    }
                    if let Some(message) = state.errors.username {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label {
                        html_for: "user-password",
                        if is_create { "Senha" } else { "Nova senha (opcional)" }
                    }
                    Input {
                        id: "user-password",
                        r#type: "password",
                        placeholder: "*******",
                        invalid: state.errors.password.is_some(),
                        value: state.fields.password.clone(),
                        oninput: move |evt: FormEvent| form.write().fields.password = evt.value(),
                    }
                    if let Some(message) = state.errors.password {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "user-team", "Equipe" }
                    select {
                        id: "user-team",
                        class: if state.errors.team.is_some() { "select invalid" } else { "select" },
                        value: state.fields.team_id.clone(),
                        onchange: move |evt| form.write().fields.team_id = evt.value(),
                        option { value: "", disabled: true, "Selecione uma equipe" }
                        for team in team_options {
                            option {
                                key: "{team.id}",
                                value: "{team.id}",
                                selected: team.id == state.fields.team_id,
                                "{team.name}"
                            }
                        }
                    }
                    if let Some(message) = state.errors.team {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "user-role", "Função" }
                    select {
                        id: "user-role",
                        class: "select",
                        value: state.fields.role.as_str(),
                        onchange: move |evt: FormEvent| {
                            form.write().fields.role = Role::parse(&evt.value()).unwrap_or_default();
                        },
                        option { value: "USER", selected: state.fields.role == Role::User, "Usuário" }
                        option { value: "ADM", selected: state.fields.role == Role::Admin, "Admin" }
                    }
                }

                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: close,
                        "Cancelar"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: state.submitting,
                        onclick: submit,
                        if state.submitting { "Salvando..." } else { "{submit_label}" }
                    }
                }
            }
        }
    }
}
