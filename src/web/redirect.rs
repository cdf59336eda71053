//! Redirect-with-flash helper.
//!
//! A redirect terminates the request: the handler returns it and nothing
//! else runs. Delivery has two explicit branches selected by a
//! "response started" flag rather than by inspecting output state: the
//! normal branch is a protocol-level `303 See Other`, the fallback emits a
//! small HTML page that navigates client-side for the case where part of a
//! response has already been produced.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::warn;

use crate::session::{self, Flash};
use crate::web::views::escape_html;

/// A terminal redirect to another route.
///
/// Locations are server-controlled route paths, never user input.
#[derive(Debug, Clone)]
pub struct Redirect {
    location: String,
    response_started: bool,
}

impl Redirect {
    /// Redirect via a `303 See Other` status and `Location` header.
    pub fn see_other(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            response_started: false,
        }
    }

    /// Mark whether response output has already started.
    ///
    /// When set, the protocol-level header cannot be used any more and the
    /// client-side navigation fallback is emitted instead.
    pub fn response_started(mut self, started: bool) -> Self {
        self.response_started = started;
        self
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        if self.response_started {
            let escaped = escape_html(&self.location);
            let body = format!(
                "<!DOCTYPE html>\n<html><head>\
                 <meta http-equiv=\"refresh\" content=\"0;url={escaped}\">\
                 </head><body>\
                 <script>window.location.href='{}';</script>\
                 <p>Continue to <a href=\"{escaped}\">{escaped}</a></p>\
                 </body></html>",
                self.location
            );
            Html(body).into_response()
        } else {
            (StatusCode::SEE_OTHER, [(header::LOCATION, self.location)]).into_response()
        }
    }
}

/// Store a flash message, then redirect.
///
/// A session-store failure only loses the message, not the navigation; it
/// is logged and the redirect proceeds.
pub async fn with_flash(session: &Session, location: &str, flash: Flash) -> Redirect {
    if let Err(e) = session::set_flash(session, flash).await {
        warn!(error = %e, "failed to store flash message");
    }
    Redirect::see_other(location)
}
