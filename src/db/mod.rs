//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
///
/// Uniqueness of service and order numbers only applies to live rows, so it
/// is enforced with partial indexes rather than column constraints.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY,
            service_number TEXT NOT NULL,
            name TEXT NOT NULL,
            position TEXT NOT NULL,
            org_unit TEXT NOT NULL,
            pay_grade TEXT NOT NULL,
            rank TEXT,
            effective_date TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS travel_orders (
            id TEXT PRIMARY KEY,
            order_number TEXT NOT NULL,
            purpose TEXT NOT NULL,
            legal_basis TEXT NOT NULL,
            origin TEXT NOT NULL,
            destination TEXT NOT NULL,
            departure_date TEXT NOT NULL,
            return_date TEXT NOT NULL,
            transport_mode TEXT NOT NULL DEFAULT 'land'
                CHECK (transport_mode IN ('land', 'sea', 'air', 'official_vehicle')),
            signing_official_id TEXT REFERENCES employees(id) ON DELETE SET NULL,
            status TEXT NOT NULL DEFAULT 'draft' CHECK (status IN ('draft', 'final')),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT,
            CHECK (return_date > departure_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS participants (
            id TEXT PRIMARY KEY,
            travel_order_id TEXT NOT NULL REFERENCES travel_orders(id) ON DELETE CASCADE,
            employee_id TEXT NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            role TEXT NOT NULL DEFAULT 'member' CHECK (role IN ('team_lead', 'member')),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE (travel_order_id, employee_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_employees_service_number
            ON employees(service_number) WHERE deleted_at IS NULL;
        CREATE UNIQUE INDEX IF NOT EXISTS idx_travel_orders_order_number
            ON travel_orders(order_number) WHERE deleted_at IS NULL;
        CREATE INDEX IF NOT EXISTS idx_employees_name ON employees(name);
        CREATE INDEX IF NOT EXISTS idx_travel_orders_created_at ON travel_orders(created_at);
        CREATE INDEX IF NOT EXISTS idx_travel_orders_signing_official
            ON travel_orders(signing_official_id);
        CREATE INDEX IF NOT EXISTS idx_participants_employee ON participants(employee_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
