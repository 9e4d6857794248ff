//! HTTP handlers.

pub mod auth_handler;
pub mod delete_employee_handler;
pub mod employee_payloads;
pub mod health_handler;
pub mod register_employee_handler;
pub mod search_employee_handler;
pub mod update_employee_handler;
pub mod user_handler;

use axum::Router;

use crate::state::AppState;

pub use auth_handler::auth_routes;
pub use health_handler::{health_routes, ping_routes};
pub use user_handler::user_routes;

/// All employee routes. Every one of them requires a bearer token.
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .merge(register_employee_handler::register_employee_routes())
        .merge(update_employee_handler::update_employee_routes())
        .merge(delete_employee_handler::delete_employee_routes())
        .merge(search_employee_handler::search_employee_routes())
}
