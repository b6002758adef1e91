use sqlx::SqlitePool;

// messages
//   id      TEXT primary key, assigned at insert
//   name    TEXT not null
//   message TEXT not null
//
// rows are only ever inserted and read, never updated or deleted

pub async fn init(db_pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS messages (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            message TEXT NOT NULL
        )",
    )
    .execute(db_pool)
    .await?;

    Ok(())
}
