//! HobbyHub - a small hobby-sharing web platform.
//!
//! Server-rendered pages for registration, login, session-based
//! authentication, and flash messaging, backed by SQLite.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod session;
pub mod web;

pub use auth::{
    authenticate, hash_password, register, verify_password, LoginError, PasswordError,
    RegistrationIssue, RegistrationOutcome, RegistrationRequest,
};
pub use config::Config;
pub use db::{Database, DbPool, NewUser, User, UserRepository};
pub use error::{HubError, Result};
pub use session::{CurrentUser, Flash, FlashLevel};
pub use web::WebServer;
