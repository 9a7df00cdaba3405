//! # Create / update user form
//!
//! The dialog component keeps a [`UserForm`] in a signal and delegates all
//! decisions to this module:
//!
//! 1. [`UserFormFields::validate`] checks every field and returns per-field
//!    messages. Any message aborts the submit before a request is made.
//! 2. [`submit_user_form`] builds the payload and calls the [`UserService`].
//!    A service failure becomes a form-level message.
//! 3. [`UserForm::apply`] folds the outcome back into the form: success closes
//!    it and resets every field, failure keeps it open with the messages.

use std::sync::LazyLock;

use api::{Role, User, UserCreate, UserService, UserUpdate};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub const NAME_REQUIRED: &str = "O nome completo é obrigatório.";
pub const EMAIL_REQUIRED: &str = "O email é obrigatório.";
pub const EMAIL_INVALID: &str = "O formato do email é inválido.";
pub const USERNAME_REQUIRED: &str = "O username é obrigatório.";
pub const PASSWORD_REQUIRED: &str = "A senha é obrigatória.";
pub const TEAM_REQUIRED: &str = "A seleção de uma equipe é obrigatória.";
pub const CREATE_FAILED: &str = "Ocorreu um erro ao salvar o usuário. Tente novamente.";
pub const UPDATE_FAILED: &str = "Ocorreu um erro ao atualizar o usuário. Tente novamente.";

#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Create,
    Update { user_id: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFormFields {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub team_id: String,
    pub role: Role,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub team: Option<&'static str>,
    /// Failure reported by the service rather than by a field.
    pub form: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        *self == FormErrors::default()
    }

    /// Names of the fields carrying a message, in form order.
    pub fn fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name),
            ("email", self.email),
            ("username", self.username),
            ("password", self.password),
            ("team", self.team),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.map(|_| field))
        .collect()
    }
}

impl UserFormFields {
    /// Prefill from an existing user. The password always starts blank.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            password: String::new(),
            team_id: user.team.as_ref().map(|t| t.id.clone()).unwrap_or_default(),
            role: user.role,
        }
    }

    pub fn validate(&self, mode: &FormMode) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(NAME_REQUIRED);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some(EMAIL_REQUIRED);
        } else if !EMAIL_RE.is_match(email) {
            errors.email = Some(EMAIL_INVALID);
        }

        if self.username.trim().is_empty() {
            errors.username = Some(USERNAME_REQUIRED);
        }

        if *mode == FormMode::Create && self.password.is_empty() {
            errors.password = Some(PASSWORD_REQUIRED);
        }

        if self.team_id.is_empty() {
            errors.team = Some(TEAM_REQUIRED);
        }

        errors
    }

    pub fn to_create(&self) -> UserCreate {
        UserCreate {
            username: self.username.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            team_id: self.team_id.clone(),
            role: self.role,
            points: 0,
            password: self.password.clone(),
        }
    }

    /// The password is only sent when something other than whitespace was
    /// typed, and then exactly as typed.
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            username: self.username.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            team_id: self.team_id.clone(),
            role: self.role,
            password: (!self.password.trim().is_empty()).then(|| self.password.clone()),
        }
    }
}

/// Validate, then create or update through `service`.
///
/// Returns the field/form errors to show when nothing was saved.
pub async fn submit_user_form<S: UserService>(
    service: &S,
    mode: &FormMode,
    fields: &UserFormFields,
) -> Result<User, FormErrors> {
    let errors = fields.validate(mode);
    if !errors.is_empty() {
        return Err(errors);
    }

    let result = match mode {
        FormMode::Create => service.create_user(&fields.to_create()).await,
        FormMode::Update { user_id } => service.update_user(user_id, &fields.to_update()).await,
    };

    result.map_err(|e| {
        tracing::error!(error = %e, "user form submit failed");
        FormErrors {
            form: Some(match mode {
                FormMode::Create => CREATE_FAILED,
                FormMode::Update { .. } => UPDATE_FAILED,
            }),
            ..FormErrors::default()
        }
    })
}

/// Dialog state: visibility, the controlled fields and the last errors.
#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    pub mode: FormMode,
    pub open: bool,
    pub submitting: bool,
    pub fields: UserFormFields,
    pub errors: FormErrors,
    initial: UserFormFields,
}

impl UserForm {
    pub fn create() -> Self {
        Self::with_fields(FormMode::Create, UserFormFields::default())
    }

    pub fn edit(user: &User) -> Self {
        Self::with_fields(
            FormMode::Update {
                user_id: user.id.clone(),
            },
            UserFormFields::from_user(user),
        )
    }

    fn with_fields(mode: FormMode, fields: UserFormFields) -> Self {
        Self {
            mode,
            open: true,
            submitting: false,
            initial: fields.clone(),
            fields,
            errors: FormErrors::default(),
        }
    }

    /// Close and drop any edits and messages.
    pub fn close(&mut self) {
        self.open = false;
        self.submitting = false;
        self.fields = match self.mode {
            FormMode::Create => UserFormFields::default(),
            FormMode::Update { .. } => self.initial.clone(),
        };
        self.errors = FormErrors::default();
    }

    /// Record a submit outcome. Returns `true` when the user was saved.
    pub fn apply(&mut self, outcome: Result<User, FormErrors>) -> bool {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.close();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::user;
    use api::ApiError;
    use std::cell::RefCell;

    /// Records every call and answers with a canned result.
    #[derive(Default)]
    struct RecordingService {
        created: RefCell<Vec<UserCreate>>,
        updated: RefCell<Vec<(String, UserUpdate)>>,
        fail: bool,
    }

    impl RecordingService {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.created.borrow().len() + self.updated.borrow().len()
        }

        fn answer(&self, action: &'static str) -> api::Result<User> {
            if self.fail {
                Err(ApiError::network(action, "connection refused"))
            } else {
                Ok(user("99", "ana.silva", 0, Some(("1", "Comercial"))))
            }
        }
    }

    impl UserService for RecordingService {
        async fn create_user(&self, payload: &UserCreate) -> api::Result<User> {
            self.created.borrow_mut().push(payload.clone());
            self.answer("criar o usuário")
        }

        async fn update_user(&self, id: &str, payload: &UserUpdate) -> api::Result<User> {
            self.updated.borrow_mut().push((id.to_string(), payload.clone()));
            self.answer("atualizar o usuário")
        }

        async fn delete_user(&self, _id: &str) -> api::Result<()> {
            Ok(())
        }
    }

    fn ana() -> UserFormFields {
        UserFormFields {
            name: "Ana Silva".to_string(),
            email: "ana@x.com".to_string(),
            username: "ana.silva".to_string(),
            password: "secret".to_string(),
            team_id: "1".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn test_each_invalid_field_is_reported_alone() {
        let cases: Vec<(&str, fn(&mut UserFormFields), &str)> = vec![
            ("name", |f| f.name = "   ".into(), NAME_REQUIRED),
            ("email", |f| f.email = "abc".into(), EMAIL_INVALID),
            ("email", |f| f.email = "".into(), EMAIL_REQUIRED),
            ("username", |f| f.username = "".into(), USERNAME_REQUIRED),
            ("password", |f| f.password = "".into(), PASSWORD_REQUIRED),
            ("team", |f| f.team_id = "".into(), TEAM_REQUIRED),
        ];

        for (field, break_it, message) in cases {
            let mut fields = ana();
            break_it(&mut fields);
            let errors = fields.validate(&FormMode::Create);
            assert_eq!(errors.fields(), vec![field], "breaking {field}");
            let reported = match field {
                "name" => errors.name,
                "email" => errors.email,
                "username" => errors.username,
                "password" => errors.password,
                _ => errors.team,
            };
            assert_eq!(reported, Some(message));
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = UserFormFields::default().validate(&FormMode::Create);
        assert_eq!(errors.fields(), vec!["name", "email", "username", "password", "team"]);
    }

    #[test]
    fn test_update_does_not_require_password() {
        let mut fields = ana();
        fields.password.clear();
        let mode = FormMode::Update { user_id: "7".into() };
        assert!(fields.validate(&mode).is_empty());
    }

    #[tokio::test]
    async fn test_invalid_create_makes_no_call() {
        let service = RecordingService::default();
        let mut form = UserForm::create();
        form.fields = ana();
        form.fields.email = "abc".to_string();
        form.fields.username.clear();

        let outcome = submit_user_form(&service, &form.mode, &form.fields).await;
        let saved = form.apply(outcome);

        assert!(!saved);
        assert_eq!(service.calls(), 0);
        assert!(form.open);
        assert_eq!(form.errors.fields(), vec!["email", "username"]);
        // Input survives a failed validation
        assert_eq!(form.fields.name, "Ana Silva");
    }

    #[tokio::test]
    async fn test_valid_create_calls_once_then_closes_and_resets() {
        let service = RecordingService::default();
        let mut form = UserForm::create();
        form.fields = ana();

        let outcome = submit_user_form(&service, &form.mode, &form.fields).await;
        let saved = form.apply(outcome);

        assert!(saved);
        assert_eq!(service.calls(), 1);
        let created = &service.created.borrow()[0];
        assert_eq!(created.name, "Ana Silva");
        assert_eq!(created.team_id, "1");
        assert_eq!(created.points, 0);
        assert_eq!(created.role, Role::User);

        assert!(!form.open);
        assert_eq!(form.fields, UserFormFields::default());
        assert!(form.errors.is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_sets_form_message() {
        let service = RecordingService::failing();
        let mut form = UserForm::create();
        form.fields = ana();

        let outcome = submit_user_form(&service, &form.mode, &form.fields).await;
        assert!(!form.apply(outcome));

        assert_eq!(service.calls(), 1);
        assert!(form.open);
        assert_eq!(form.errors.form, Some(CREATE_FAILED));
        assert!(form.errors.fields().is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_password_only_when_typed() {
        let service = RecordingService::default();
        let existing = user("7", "ana.silva", 120, Some(("1", "Comercial")));
        let mut form = UserForm::edit(&existing);
        assert_eq!(form.fields.team_id, "1");
        assert!(form.fields.password.is_empty());

        let outcome = submit_user_form(&service, &form.mode, &form.fields).await;
        assert!(form.apply(outcome));

        let mut form = UserForm::edit(&existing);
        form.fields.password = "  nova  ".to_string();
        let outcome = submit_user_form(&service, &form.mode, &form.fields).await;
        assert!(form.apply(outcome));

        let updated = service.updated.borrow();
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].0, "7");
        assert_eq!(updated[0].1.password, None);
        assert_eq!(updated[1].1.password.as_deref(), Some("  nova  "));
    }

    #[test]
    fn test_whitespace_password_is_kept_verbatim() {
        let mut fields = ana();
        fields.password = "   ".to_string();
        assert!(fields.validate(&FormMode::Create).password.is_none());
        assert_eq!(fields.to_create().password, "   ");

        let update = FormMode::Update { user_id: "7".to_string() };
        assert!(fields.validate(&update).is_empty());
        assert_eq!(fields.to_update().password, None);

        fields.password = " nova ".to_string();
        assert_eq!(fields.to_update().password.as_deref(), Some(" nova "));

        fields.password.clear();
        assert_eq!(fields.validate(&FormMode::Create).password, Some(PASSWORD_REQUIRED));
    }

    #[tokio::test]
    async fn test_update_failure_message() {
        let service = RecordingService::failing();
        let existing = user("7", "ana.silva", 120, Some(("1", "Comercial")));
        let mut form = UserForm::edit(&existing);

        let outcome = submit_user_form(&service, &form.mode, &form.fields).await;
        form.apply(outcome);
        assert_eq!(form.errors.form, Some(UPDATE_FAILED));
    }

    #[test]
    fn test_close_resets_edit_to_original_values() {
        let existing = user("7", "ana.silva", 120, Some(("1", "Comercial")));
        let mut form = UserForm::edit(&existing);
        form.fields.name = "Outro".to_string();
        form.errors.name = Some(NAME_REQUIRED);

        form.close();

        assert!(!form.open);
        assert_eq!(form.fields.name, "ana.silva");
        assert!(form.errors.is_empty());
    }
}
