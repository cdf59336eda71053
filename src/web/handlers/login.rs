//! Login and logout handlers.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::error;

use crate::auth::{authenticate, sanitize_input, LoginError};
use crate::db::UserRepository;
use crate::session::{self, Flash};
use crate::web::handlers::AppState;
use crate::web::redirect::{self, Redirect};
use crate::web::views;

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// GET /login - render the login form.
pub async fn show(State(state): State<AppState>, session: Session) -> Response {
    if session::is_authenticated(&session).await {
        return Redirect::see_other("/dashboard").into_response();
    }

    let flash = session::take_flash(&session).await;
    Html(views::login_page(&state.site, &[], "", flash.as_ref())).into_response()
}

/// POST /login - process a login submission.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let echo_email = sanitize_input(&form.email);

    let repo = UserRepository::new(state.db.pool());
    match authenticate(&repo, &form.email, &form.password).await {
        Ok(user) => {
            if let Err(e) = session::sign_in(&session, &user).await {
                error!(error = %e, user_id = user.id, "failed to establish session");
                let errors = vec![LoginError::ServiceUnavailable.to_string()];
                return Html(views::login_page(&state.site, &errors, &echo_email, None))
                    .into_response();
            }

            redirect::with_flash(
                &session,
                "/dashboard",
                Flash::success(format!("Welcome back, {}!", user.name)),
            )
            .await
            .into_response()
        }
        Err(e) => {
            let errors = vec![e.to_string()];
            Html(views::login_page(&state.site, &errors, &echo_email, None)).into_response()
        }
    }
}

/// POST /logout - clear the session and return to the login page.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = session::sign_out(&session).await {
        error!(error = %e, "failed to clear session");
    }

    redirect::with_flash(&session, "/login", Flash::info("You have been signed out."))
        .await
        .into_response()
}
