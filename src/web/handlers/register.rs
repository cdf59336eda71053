//! Registration handlers.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::error;

use crate::auth::{register, RegistrationIssue, RegistrationOutcome, RegistrationRequest};
use crate::db::UserRepository;
use crate::session::{self, Flash};
use crate::web::handlers::AppState;
use crate::web::redirect::{self, Redirect};
use crate::web::views;

/// Registration form fields. Absent fields become empty strings so a bare
/// POST reports "required" errors rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// GET /register - render the registration form.
pub async fn show(State(state): State<AppState>, session: Session) -> Response {
    if session::is_authenticated(&session).await {
        return Redirect::see_other("/dashboard").into_response();
    }

    let flash = session::take_flash(&session).await;
    Html(views::register_page(
        &state.site,
        &[],
        "",
        "",
        flash.as_ref(),
    ))
    .into_response()
}

/// POST /register - process a registration submission.
///
/// On success: establish the session and redirect to the dashboard with a
/// success flash. On any error: re-render the form with the ordered error
/// list and the echoed name/email.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Response {
    let request =
        RegistrationRequest::new(form.name, form.email, form.password, form.confirm_password);
    let echo_name = request.name.clone();
    let echo_email = request.email.clone();

    let repo = UserRepository::new(state.db.pool());
    match register(&repo, request).await {
        RegistrationOutcome::Registered(user) => {
            if let Err(e) = session::sign_in(&session, &user).await {
                // The account exists but the session could not be stored;
                // the user can sign in normally.
                error!(error = %e, user_id = user.id, "failed to establish session");
                return render_form(
                    &state,
                    &[RegistrationIssue::ServiceUnavailable.to_string()],
                    &echo_name,
                    &echo_email,
                );
            }

            redirect::with_flash(
                &session,
                "/dashboard",
                Flash::success("Registration successful! Welcome to HobbyHub."),
            )
            .await
            .into_response()
        }
        RegistrationOutcome::Rejected(issues) => {
            let errors: Vec<String> = issues.iter().map(ToString::to_string).collect();
            render_form(&state, &errors, &echo_name, &echo_email)
        }
    }
}

fn render_form(state: &AppState, errors: &[String], name: &str, email: &str) -> Response {
    Html(views::register_page(&state.site, errors, name, email, None)).into_response()
}
