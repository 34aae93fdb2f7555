use crate::forms;
use crate::services::Assistant;
use actix_web::{post, web};
use sqlx::PgPool;

/// Never fails: assistant errors come back as a fallback `reply`.
#[tracing::instrument(name = "Chat with assistant.", skip(form, assistant, pg_pool))]
#[post("/chat")]
pub async fn handler(
    form: web::Json<forms::ChatForm>,
    assistant: web::Data<Assistant>,
    pg_pool: web::Data<PgPool>,
) -> web::Json<forms::ChatReply> {
    let reply = assistant.respond(pg_pool.get_ref(), &form.message).await;
    web::Json(forms::ChatReply { reply })
}
