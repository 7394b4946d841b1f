//! Endpoints for books, mounted at `/books`.

use std::sync::Arc;

use axum::{routing::get, Router};
use bookshelf_kernel::RouteEntry;

use crate::modules::books::{self, handlers, service::BookService};

pub const ENTRY: RouteEntry = bookshelf_kernel::route_entry!(books::create_module);

pub fn router(service: Arc<BookService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_books).post(handlers::create_book))
        .route(
            "/{id}",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .with_state(service)
}
