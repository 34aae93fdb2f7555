use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::TcpListener;
use std::str::FromStr;
use std::time::Duration;
use todo_assistant::configuration::get_configuration;
use todo_assistant::startup::run;
use todo_assistant::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("todo-assistant".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        api_key_loaded = settings.assistant.is_configured(),
        database_url_loaded = !settings.database.url.is_empty(),
        model = %settings.assistant.model,
        "Configuration loaded"
    );

    let connect_options = PgConnectOptions::from_str(&settings.database.url)?;
    tracing::info!(
        db_host = %connect_options.get_host(),
        db_port = connect_options.get_port(),
        "Connecting to PostgreSQL"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .acquire_timeout(Duration::from_secs(settings.database.acquire_timeout_secs))
        .connect_with(connect_options)
        .await
        .expect("Failed to connect to database.");

    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .expect("Failed to migrate database.");

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, pg_pool, settings).await?.await?;
    Ok(())
}
