use crate::db;
use crate::errors::AppError;
use crate::forms;
use crate::models;
use actix_web::{put, web, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update todo.", skip(pg_pool))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::TodoUpdateForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<models::Todo>, AppError> {
    let (id,) = path.into_inner();

    db::todo::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(AppError::Storage)?
        .ok_or_else(AppError::todo_not_found)?;

    if let Err(errors) = form.validate() {
        return Err(AppError::Validation(errors.to_string()));
    }

    let form = form.into_inner();
    db::todo::update(pg_pool.get_ref(), id, |todo| form.update(todo))
        .await
        .map_err(AppError::Storage)?
        .map(web::Json)
        .ok_or_else(AppError::todo_not_found)
}
