use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

const TODO_COLUMNS: &str = "id, title, description, completed";

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Todo>, String> {
    tracing::info!("Fetch todo {}", id);
    sqlx::query_as::<_, models::Todo>(&format!(
        "SELECT {} FROM todos WHERE id = $1",
        TODO_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch todo, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Insertion order, sliced by offset/limit.
pub async fn fetch_page(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<models::Todo>, String> {
    let query_span = tracing::info_span!("Fetch todos page.", skip, limit);
    sqlx::query_as::<_, models::Todo>(&format!(
        "SELECT {} FROM todos ORDER BY id OFFSET $1 LIMIT $2",
        TODO_COLUMNS
    ))
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch todos, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Todo>, String> {
    let query_span = tracing::info_span!("Fetch all todos.");
    sqlx::query_as::<_, models::Todo>(&format!(
        "SELECT {} FROM todos ORDER BY id",
        TODO_COLUMNS
    ))
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch todos, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, todo: models::Todo) -> Result<models::Todo, String> {
    let query_span = tracing::info_span!("Saving new todo into the database");
    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start transaction: {:?}", err);
        "Failed to insert".to_string()
    })?;

    let saved = sqlx::query_as::<_, models::Todo>(&format!(
        "INSERT INTO todos (title, description, completed) VALUES ($1, $2, $3) RETURNING {}",
        TODO_COLUMNS
    ))
    .bind(&todo.title)
    .bind(&todo.description)
    .bind(todo.completed)
    .fetch_one(&mut *tx)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit transaction: {:?}", err);
        "Failed to insert".to_string()
    })?;

    Ok(saved)
}

/// Locks the row, hands it to `apply`, writes it back.
///
/// `Ok(None)` when the id does not exist. Nothing is written unless the whole
/// change commits.
#[tracing::instrument(name = "Update todo.", skip(pool, apply))]
pub async fn update<F>(pool: &PgPool, id: i32, apply: F) -> Result<Option<models::Todo>, String>
where
    F: FnOnce(&mut models::Todo),
{
    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start transaction: {:?}", err);
        "Could not update".to_string()
    })?;

    let current = sqlx::query_as::<_, models::Todo>(&format!(
        "SELECT {} FROM todos WHERE id = $1 FOR UPDATE",
        TODO_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch todo, error: {:?}", err);
        "Could not update".to_string()
    })?;

    let mut todo = match current {
        Some(todo) => todo,
        None => return Ok(None),
    };
    apply(&mut todo);

    let updated = sqlx::query_as::<_, models::Todo>(&format!(
        "UPDATE todos SET title = $2, description = $3, completed = $4 WHERE id = $1 RETURNING {}",
        TODO_COLUMNS
    ))
    .bind(todo.id)
    .bind(&todo.title)
    .bind(&todo.description)
    .bind(todo.completed)
    .fetch_one(&mut *tx)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit transaction: {:?}", err);
        "Could not update".to_string()
    })?;

    tracing::info!("Todo {} has been saved", updated);
    Ok(Some(updated))
}

/// Returns the removed row, `None` if there was nothing to remove.
#[tracing::instrument(name = "Delete todo.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<models::Todo>, String> {
    sqlx::query_as::<_, models::Todo>(&format!(
        "DELETE FROM todos WHERE id = $1 RETURNING {}",
        TODO_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to delete todo: {:?}", err);
        "Failed to delete todo".to_string()
    })
}

/// Unknown ids are ignored. Returns the number of rows removed.
#[tracing::instrument(name = "Bulk delete todos.", skip(pool))]
pub async fn delete_many(pool: &PgPool, ids: &[i32]) -> Result<u64, String> {
    if ids.is_empty() {
        return Ok(0);
    }

    sqlx::query::<sqlx::Postgres>("DELETE FROM todos WHERE id = ANY($1)")
        .bind(ids)
        .execute(pool)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to delete todos: {:?}", err);
            "Failed to delete todos".to_string()
        })
}

pub async fn ping(pool: &PgPool) -> Result<(), String> {
    sqlx::query::<sqlx::Postgres>("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Database is not reachable: {:?}", err);
            err.to_string()
        })
}
