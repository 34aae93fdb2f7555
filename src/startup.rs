use crate::configuration::Settings;
use crate::connectors::{CompletionClient, CompletionConnector};
use crate::routes;
use crate::services::Assistant;
use actix_cors::Cors;
use actix_web::{dev::Server, error, middleware, web, App, HttpResponse, HttpServer};
use serde_json::json;
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;

fn bad_request(detail: String) -> error::Error {
    error::InternalError::from_response(
        detail.clone(),
        HttpResponse::BadRequest().json(json!({ "detail": detail })),
    )
    .into()
}

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let pg_pool = web::Data::new(pg_pool);

    let completion_client: Arc<dyn CompletionConnector> = Arc::new(
        CompletionClient::new(&settings.assistant)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?,
    );
    let assistant = web::Data::new(Assistant::new(completion_client, &settings.assistant));

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid body at line {} column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            _ => err.to_string(),
        };
        bad_request(msg)
    });
    let query_config =
        web::QueryConfig::default().error_handler(|err, _req| bad_request(err.to_string()));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(Cors::permissive())
            .service(routes::health_check)
            .service(routes::smoke_test)
            .service(
                web::scope("/todos")
                    .service(routes::todo::get::list)
                    .service(routes::todo::add::item)
                    .service(routes::todo::delete::bulk)
                    .service(routes::todo::get::item)
                    .service(routes::todo::update::item)
                    .service(routes::todo::delete::item),
            )
            .service(routes::chat::handler)
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(pg_pool.clone())
            .app_data(assistant.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
