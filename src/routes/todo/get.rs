use crate::db;
use crate::errors::AppError;
use crate::forms;
use crate::models;
use actix_web::{get, web, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Get todo.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<models::Todo>, AppError> {
    let (id,) = path.into_inner();
    db::todo::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(AppError::Storage)?
        .map(web::Json)
        .ok_or_else(AppError::todo_not_found)
}

#[tracing::instrument(name = "Get todos.", skip(pg_pool))]
#[get("")]
pub async fn list(
    query: web::Query<forms::ListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<Vec<models::Todo>>, AppError> {
    if let Err(errors) = query.validate() {
        return Err(AppError::Validation(errors.to_string()));
    }

    db::todo::fetch_page(pg_pool.get_ref(), query.skip(), query.limit())
        .await
        .map(web::Json)
        .map_err(AppError::Storage)
}
