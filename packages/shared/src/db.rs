use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

/// Opens a connection pool for the given database URL.
///
/// Use `"sqlite::memory:"` for an in-memory database (useful for tests).
pub async fn connect(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    // An in-memory SQLite database exists per connection, so the pool must
    // never open a second one.
    let max_connections = if db_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await
}

/// Creates the database tables at startup if they do not exist.
///
/// The unique constraints on `moves` are load-bearing: a concurrent
/// duplicate turn or cell loses the insert race and surfaces as a conflict.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id INTEGER NOT NULL REFERENCES users (id),
            opponent_id INTEGER REFERENCES users (id),
            status TEXT NOT NULL DEFAULT 'waiting',
            winner_id INTEGER REFERENCES users (id),
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS moves (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            game_id INTEGER NOT NULL REFERENCES games (id) ON DELETE CASCADE,
            player_id INTEGER NOT NULL REFERENCES users (id),
            row INTEGER NOT NULL,
            col INTEGER NOT NULL,
            symbol TEXT NOT NULL,
            turn_number INTEGER NOT NULL,
            played_at TEXT NOT NULL,
            UNIQUE (game_id, row, col),
            UNIQUE (game_id, turn_number)
        )",
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
