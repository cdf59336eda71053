//! Dashboard and index handlers.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;

use crate::session::{self, Flash};
use crate::web::handlers::AppState;
use crate::web::redirect::{self, Redirect};
use crate::web::views;

/// GET / - the root route defers to the dashboard, which enforces auth.
pub async fn index() -> Redirect {
    Redirect::see_other("/dashboard")
}

/// GET /dashboard - greet the signed-in user.
pub async fn show(State(state): State<AppState>, session: Session) -> Response {
    let Some(user) = session::current_user(&session).await else {
        return redirect::with_flash(
            &session,
            "/login",
            Flash::info("Please log in to continue."),
        )
        .await
        .into_response();
    };

    let flash = session::take_flash(&session).await;
    Html(views::dashboard_page(&state.site, &user, flash.as_ref())).into_response()
}
