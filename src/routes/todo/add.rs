use crate::db;
use crate::errors::AppError;
use crate::forms;
use crate::models;
use actix_web::{post, web, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add todo.", skip(pg_pool))]
#[post("")]
pub async fn item(
    form: web::Json<forms::TodoForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<models::Todo>, AppError> {
    if let Err(errors) = form.validate() {
        let err_msg = format!("Invalid data received {}", errors);
        tracing::debug!(err_msg);
        return Err(AppError::Validation(err_msg));
    }

    let todo: models::Todo = form.into_inner().into();

    db::todo::insert(pg_pool.get_ref(), todo)
        .await
        .map(web::Json)
        .map_err(AppError::Storage)
}
