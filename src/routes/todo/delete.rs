use crate::db;
use crate::errors::AppError;
use crate::forms;
use crate::models;
use actix_web::{delete, post, web, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete todo.", skip(pg_pool))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<models::Todo>, AppError> {
    let (id,) = path.into_inner();
    db::todo::delete(pg_pool.get_ref(), id)
        .await
        .map_err(AppError::Storage)?
        .map(web::Json)
        .ok_or_else(AppError::todo_not_found)
}

#[tracing::instrument(name = "Bulk delete todos.", skip(pg_pool))]
#[post("/delete")]
pub async fn bulk(
    form: web::Json<forms::BulkDeleteForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<forms::MessageResponse>, AppError> {
    db::todo::delete_many(pg_pool.get_ref(), &form.ids)
        .await
        .map(|count| web::Json(forms::MessageResponse::deleted(count)))
        .map_err(AppError::Storage)
}
