//! Endpoints for users, mounted at `/users`.

use std::sync::Arc;

use axum::{routing::get, Router};
use bookshelf_kernel::RouteEntry;

use crate::modules::users::{self, handlers, service::UserService};

pub const ENTRY: RouteEntry = bookshelf_kernel::route_entry!(users::create_module);

pub fn router(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/{document}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(service)
}
