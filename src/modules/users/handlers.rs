use std::sync::Arc;

use axum::{
    extract::State,
    response::Response,
    Json,
};
use bookshelf_http::{response, AppError, JsonBody, PathParam};

use super::models::{User, UserPayload};
use super::service::UserService;

pub type UserState = State<Arc<UserService>>;

fn require_document(document: &str) -> Result<(), AppError> {
    if document.is_empty() {
        return Err(AppError::bad_request("document es requerido"));
    }
    Ok(())
}

fn not_found(document: &str) -> AppError {
    AppError::not_found(format!("Usuario {} no encontrado", document))
}

/// GET /users
pub async fn list_users(State(service): UserState) -> Result<Json<Vec<User>>, AppError> {
    let users = service
        .list()
        .await
        .map_err(|err| AppError::internal("Error consultando usuarios", &err))?;
    Ok(Json(users))
}

/// GET /users/{document}
pub async fn get_user(
    State(service): UserState,
    PathParam(document): PathParam<String>,
) -> Result<Json<User>, AppError> {
    require_document(&document)?;

    service
        .get(&document)
        .await
        .map_err(|err| AppError::internal("Error obteniendo usuario", &err))?
        .map(Json)
        .ok_or_else(|| not_found(&document))
}

/// POST /users
pub async fn create_user(
    State(service): UserState,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Response, AppError> {
    let user = payload.into_user().ok_or_else(|| {
        AppError::bad_request("document, name, email, phone y address son requeridos")
    })?;
    let document = user.document.clone();

    let created = service
        .create(user)
        .await
        .map_err(|err| AppError::internal("Error creando usuario", &err))?
        .ok_or_else(|| AppError::conflict(format!("Usuario {} ya existe", document)))?;

    Ok(response::created("Usuario creado", created))
}

/// PUT /users/{document}
pub async fn update_user(
    State(service): UserState,
    PathParam(document): PathParam<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Response, AppError> {
    require_document(&document)?;
    let profile = payload
        .profile()
        .ok_or_else(|| AppError::bad_request("name, email, phone y address son requeridos"))?;

    let updated = service
        .replace(&document, profile)
        .await
        .map_err(|err| AppError::internal("Error actualizando usuario", &err))?
        .ok_or_else(|| not_found(&document))?;

    Ok(response::ok(
        format!("Usuario {} actualizado", document),
        updated,
    ))
}

/// DELETE /users/{document}
pub async fn delete_user(
    State(service): UserState,
    PathParam(document): PathParam<String>,
) -> Result<Response, AppError> {
    require_document(&document)?;

    let deleted = service
        .delete(&document)
        .await
        .map_err(|err| AppError::internal("Error eliminando usuario", &err))?
        .ok_or_else(|| not_found(&document))?;

    Ok(response::ok(format!("Usuario {} eliminado", document), deleted))
}
