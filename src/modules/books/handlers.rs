use std::sync::Arc;

use axum::{
    extract::State,
    response::Response,
    Json,
};
use bookshelf_http::{response, AppError, JsonBody, PathParam};

use super::models::{Book, BookPayload};
use super::service::BookService;

const CRASHED: &str = "Something crashed your app";
const FIELDS_REQUIRED: &str = "author, name y owner son requeridos";

pub type BookState = State<Arc<BookService>>;

fn require_id(id: &str) -> Result<(), AppError> {
    if id.is_empty() {
        return Err(AppError::bad_request("id es requerido"));
    }
    Ok(())
}

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Book {} no encontrado", id))
}

/// GET /books
pub async fn list_books(State(service): BookState) -> Result<Json<Vec<Book>>, AppError> {
    let books = service
        .list()
        .await
        .map_err(|err| AppError::internal(CRASHED, &err))?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_book(
    State(service): BookState,
    PathParam(id): PathParam<String>,
) -> Result<Json<Book>, AppError> {
    require_id(&id)?;

    let book = service
        .get(&id)
        .await
        .map_err(|err| AppError::internal(CRASHED, &err))?;

    book.map(Json).ok_or_else(|| not_found(&id))
}

/// POST /books
pub async fn create_book(
    State(service): BookState,
    JsonBody(payload): JsonBody<BookPayload>,
) -> Result<Response, AppError> {
    let draft = payload
        .into_draft()
        .ok_or_else(|| AppError::bad_request(FIELDS_REQUIRED))?;

    let created = service
        .create(draft)
        .await
        .map_err(|err| AppError::internal("Error creando libro", &err))?;

    Ok(response::created("Book creado", created))
}

/// PUT /books/{id}
pub async fn update_book(
    State(service): BookState,
    PathParam(id): PathParam<String>,
    JsonBody(payload): JsonBody<BookPayload>,
) -> Result<Response, AppError> {
    require_id(&id)?;
    let draft = payload
        .into_draft()
        .ok_or_else(|| AppError::bad_request(FIELDS_REQUIRED))?;

    let updated = service
        .replace(&id, draft)
        .await
        .map_err(|err| AppError::internal("Error actualizando libro", &err))?
        .ok_or_else(|| not_found(&id))?;

    Ok(response::ok(format!("Book {} actualizado", id), updated))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(service): BookState,
    PathParam(id): PathParam<String>,
) -> Result<Response, AppError> {
    require_id(&id)?;

    let deleted = service
        .delete(&id)
        .await
        .map_err(|err| AppError::internal(CRASHED, &err))?
        .ok_or_else(|| not_found(&id))?;

    Ok(response::ok(format!("Book {} eliminado", id), deleted))
}
