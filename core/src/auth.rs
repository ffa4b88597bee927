//! Login and registration form handling.
//!
//! Same shape as the caption workflow: a synchronous form controller plus
//! async submit functions that go through [`AuthApi`].

use crate::api::AuthApi;
use crate::config::{LOGIN_FALLBACK, REGISTER_FALLBACK};
use crate::error::{ApiError, AuthError, AuthResult, ValidationError};
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::workflow::StateCell;

/// Which form is on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Register,
}

impl AuthKind {
    fn fallback(&self) -> &'static str {
        match self {
            AuthKind::Login => LOGIN_FALLBACK,
            AuthKind::Register => REGISTER_FALLBACK,
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            AuthKind::Login => "Login successful! Redirecting...",
            AuthKind::Register => "Account created! Redirecting...",
        }
    }
}

/// Raw register form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterInput {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Alerts and button state for one auth form.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthForm {
    kind: AuthKind,
    submitting: bool,
    error: Option<String>,
    success: Option<String>,
    redirect: Option<String>,
    /// Bumped on every submit, so a stale dismissal timer can be recognized
    attempt: u32,
}

impl AuthForm {
    pub fn new(kind: AuthKind) -> Self {
        Self {
            kind,
            submitting: false,
            error: None,
            success: None,
            redirect: None,
            attempt: 0,
        }
    }

    pub fn kind(&self) -> AuthKind {
        self.kind
    }

    /// The submit button is disabled and shows its loader.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Where to navigate once the success alert has been shown.
    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Current submission number.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Hide the error alert raised by `attempt`. Errors from a later
    /// submission stay up.
    pub fn dismiss_error(&mut self, attempt: u32) {
        if attempt == self.attempt {
            self.error = None;
        }
    }

    fn begin(&mut self) -> AuthResult<()> {
        if self.submitting {
            return Err(AuthError::Busy);
        }
        self.submitting = true;
        self.attempt = self.attempt.wrapping_add(1);
        self.error = None;
        self.success = None;
        Ok(())
    }

    pub fn begin_login(&mut self, email: &str, password: &str, remember: bool) -> AuthResult<LoginRequest> {
        self.begin()?;
        Ok(LoginRequest {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
            remember,
        })
    }

    /// Checks the confirmation locally; a mismatch never reaches the server.
    pub fn begin_register(&mut self, input: &RegisterInput) -> AuthResult<RegisterRequest> {
        if self.submitting {
            return Err(AuthError::Busy);
        }
        if input.password != input.confirm_password {
            self.attempt = self.attempt.wrapping_add(1);
            let err = AuthError::Validation(ValidationError::PasswordMismatch);
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.begin()?;
        Ok(RegisterRequest {
            email: input.email.trim().to_lowercase(),
            username: input.username.trim().to_string(),
            password: input.password.clone(),
        })
    }

    /// Record success; the button stays disabled until the page navigates.
    pub fn succeeded(&mut self, response: &AuthResponse) {
        let target = match (&response.redirect_url, response.is_admin) {
            (Some(url), _) if !url.is_empty() => url.clone(),
            (_, true) => "/admin".to_string(),
            _ => "/".to_string(),
        };
        log::info!("{:?} succeeded, redirecting to {}", self.kind, target);
        self.success = Some(self.kind.success_message().to_string());
        self.redirect = Some(target);
    }

    /// Show the failure and re-enable the button.
    pub fn failed(&mut self, err: &ApiError) -> AuthError {
        let auth_err = match err {
            ApiError::Server { message, .. } if !message.is_empty() => AuthError::Rejected(message.clone()),
            ApiError::Server { .. } => AuthError::Rejected(self.kind.fallback().to_string()),
            ApiError::Network(_) | ApiError::Decode(_) => AuthError::Network,
        };
        log::warn!("{:?} failed: {}", self.kind, err);
        self.error = Some(auth_err.to_string());
        self.submitting = false;
        auth_err
    }
}

/// Submit the login form.
pub async fn submit_login<A, C>(api: &A, cell: &C, email: &str, password: &str, remember: bool) -> AuthResult<()>
where
    A: AuthApi,
    C: StateCell<AuthForm>,
{
    let request = cell.with_mut(|form| form.begin_login(email, password, remember))?;
    finish(cell, api.login(&request).await)
}

/// Submit the register form.
pub async fn submit_register<A, C>(api: &A, cell: &C, input: &RegisterInput) -> AuthResult<()>
where
    A: AuthApi,
    C: StateCell<AuthForm>,
{
    let request = cell.with_mut(|form| form.begin_register(input))?;
    finish(cell, api.register(&request).await)
}

fn finish<C: StateCell<AuthForm>>(cell: &C, result: Result<AuthResponse, ApiError>) -> AuthResult<()> {
    cell.with_mut(|form| match result {
        Ok(response) => {
            form.succeeded(&response);
            Ok(())
        }
        Err(e) => Err(form.failed(&e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiResult;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeAuth {
        login: ApiResult<AuthResponse>,
        register: ApiResult<AuthResponse>,
        calls: RefCell<usize>,
    }

    impl FakeAuth {
        fn answering(result: ApiResult<AuthResponse>) -> Self {
            Self {
                login: result.clone(),
                register: result,
                calls: RefCell::new(0),
            }
        }
    }

    impl AuthApi for FakeAuth {
        async fn login(&self, _request: &LoginRequest) -> ApiResult<AuthResponse> {
            *self.calls.borrow_mut() += 1;
            self.login.clone()
        }

        async fn register(&self, _request: &RegisterRequest) -> ApiResult<AuthResponse> {
            *self.calls.borrow_mut() += 1;
            self.register.clone()
        }
    }

    #[test]
    fn test_login_redirects_admin() {
        let api = FakeAuth::answering(Ok(AuthResponse {
            is_admin: true,
            ..AuthResponse::default()
        }));
        let cell = RefCell::new(AuthForm::new(AuthKind::Login));

        block_on(submit_login(&api, &cell, " Ana@Example.com ", "secret", false)).unwrap();

        let form = cell.into_inner();
        assert_eq!(form.redirect(), Some("/admin"));
        assert_eq!(form.success(), Some("Login successful! Redirecting..."));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_login_normalizes_email() {
        let mut form = AuthForm::new(AuthKind::Login);
        let request = form.begin_login(" Ana@Example.com ", "pw", true).unwrap();
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(form.begin_login("x", "y", false), Err(AuthError::Busy));
    }

    #[test]
    fn test_login_failure_shows_server_message() {
        let api = FakeAuth::answering(Err(ApiError::from_error_body(
            401,
            r#"{"error":"Invalid email or password"}"#,
            LOGIN_FALLBACK,
        )));
        let cell = RefCell::new(AuthForm::new(AuthKind::Login));

        let result = block_on(submit_login(&api, &cell, "a@b.co", "nope", false));

        assert_eq!(result, Err(AuthError::Rejected("Invalid email or password".into())));
        let form = cell.into_inner();
        assert_eq!(form.error(), Some("Invalid email or password"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_network_failure_message() {
        let api = FakeAuth::answering(Err(ApiError::Network("refused".into())));
        let cell = RefCell::new(AuthForm::new(AuthKind::Register));
        let input = RegisterInput {
            email: "a@b.co".into(),
            username: "ana".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };

        let result = block_on(submit_register(&api, &cell, &input));

        assert_eq!(result, Err(AuthError::Network));
        assert_eq!(cell.into_inner().error(), Some("Network error. Please try again."));
    }

    #[test]
    fn test_password_mismatch_stays_local() {
        let api = FakeAuth::answering(Ok(AuthResponse::default()));
        let cell = RefCell::new(AuthForm::new(AuthKind::Register));
        let input = RegisterInput {
            email: "a@b.co".into(),
            username: "ana".into(),
            password: "secret1".into(),
            confirm_password: "secret2".into(),
        };

        let result = block_on(submit_register(&api, &cell, &input));

        assert_eq!(result, Err(AuthError::Validation(ValidationError::PasswordMismatch)));
        assert_eq!(*api.calls.borrow(), 0);
        let form = cell.into_inner();
        assert_eq!(form.error(), Some("Passwords do not match"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_error() {
        let api = FakeAuth::answering(Err(ApiError::from_error_body(401, "{}", LOGIN_FALLBACK)));
        let cell = RefCell::new(AuthForm::new(AuthKind::Login));

        let _ = block_on(submit_login(&api, &cell, "a@b.co", "one", false));
        let first = cell.borrow().attempt();
        let _ = block_on(submit_login(&api, &cell, "a@b.co", "two", false));
        let second = cell.borrow().attempt();
        assert_ne!(first, second);

        cell.borrow_mut().dismiss_error(first);
        assert_eq!(cell.borrow().error(), Some("Login failed"));

        cell.borrow_mut().dismiss_error(second);
        assert_eq!(cell.borrow().error(), None);
    }

    #[test]
    fn test_register_success_goes_home() {
        let api = FakeAuth::answering(Ok(AuthResponse::default()));
        let cell = RefCell::new(AuthForm::new(AuthKind::Register));
        let input = RegisterInput {
            email: "a@b.co".into(),
            username: " ana ".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };

        block_on(submit_register(&api, &cell, &input)).unwrap();

        let form = cell.into_inner();
        assert_eq!(form.redirect(), Some("/"));
        assert_eq!(form.success(), Some("Account created! Redirecting..."));
    }
}
