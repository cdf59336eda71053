//! Web module for HobbyHub.
//!
//! Server-rendered HTML pages over axum: routing, handlers, views, and the
//! redirect-with-flash helper.

pub mod handlers;
pub mod redirect;
pub mod router;
pub mod server;
pub mod views;

pub use router::create_router;
pub use server::WebServer;
