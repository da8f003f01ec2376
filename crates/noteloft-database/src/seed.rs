//! Demo-data seeder.
//!
//! Inserts two demo tenants (acme, globex) and an admin + member user for
//! each, all sharing one known password. Runs only when the tenants table
//! is empty, so restarting the server never duplicates data.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use noteloft_core::error::{AppError, ErrorKind};
use noteloft_core::result::AppResult;

/// Seed demo tenants and users if the database is empty.
///
/// `password_hash` is the pre-hashed demo password; hashing happens at the
/// call site so this crate does not depend on the auth crate.
pub async fn seed_demo_data(pool: &PgPool, password_hash: &str) -> AppResult<()> {
    let tenant_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tenants")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tenants", e))?;

    if tenant_count > 0 {
        info!("Database already seeded, skipping");
        return Ok(());
    }

    info!("Seeding demo tenants and users...");

    let mut tx = pool.begin().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to begin seed transaction", e)
    })?;

    for (slug, name) in [("acme", "Acme"), ("globex", "Globex")] {
        let tenant_id = Uuid::new_v4();

        sqlx::query("INSERT INTO tenants (id, slug, name, plan) VALUES ($1, $2, $3, 'free')")
            .bind(tenant_id)
            .bind(slug)
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert demo tenant", e)
            })?;

        for (prefix, role) in [("admin", "admin"), ("user", "member")] {
            sqlx::query(
                "INSERT INTO users (id, tenant_id, email, password_hash, role)
                 VALUES ($1, $2, $3, $4, $5::user_role)",
            )
            .bind(Uuid::new_v4())
            .bind(tenant_id)
            .bind(format!("{prefix}@{slug}.test"))
            .bind(password_hash)
            .bind(role)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert demo user", e)
            })?;
        }
    }

    tx.commit().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to commit seed transaction", e)
    })?;

    info!("Demo data seeded successfully");
    Ok(())
}
