use crate::db;
use crate::forms::MessageResponse;
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

#[get("/health_check")]
pub async fn health_check(pg_pool: web::Data<PgPool>) -> HttpResponse {
    match db::todo::ping(pg_pool.get_ref()).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(_) => HttpResponse::ServiceUnavailable().finish(),
    }
}

#[get("/test")]
pub async fn smoke_test() -> impl Responder {
    web::Json(MessageResponse::new("Backend is working"))
}
