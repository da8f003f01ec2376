//! Note repository implementation.
//!
//! Update and delete are single conditional statements predicated on both
//! `id` and `tenant_id`, so there is no window between an existence check
//! and the mutation, and a note under another tenant is indistinguishable
//! from a nonexistent one.

use sqlx::PgPool;
use uuid::Uuid;

use noteloft_core::error::{AppError, ErrorKind};
use noteloft_core::result::AppResult;
use noteloft_entity::note::Note;
use noteloft_entity::tenant::TenantPlan;

/// Outcome of a quota-checked insert.
#[derive(Debug, Clone)]
pub enum QuotaInsert {
    /// The note was inserted; the row is returned exactly as persisted.
    Created(Note),
    /// The tenant's plan ceiling was reached; nothing was inserted.
    QuotaExceeded,
}

/// Repository for tenant-scoped note CRUD.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all notes belonging to a tenant, newest first.
    ///
    /// The id tie-break keeps the ordering stable when two notes share a
    /// created_at timestamp.
    pub async fn list_for_tenant(&self, tenant_id: Uuid) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE tenant_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notes", e))
    }

    /// Insert a note if the tenant's plan allows another one.
    ///
    /// The plan read, note count, and insert run inside one transaction
    /// that locks the tenant row (`SELECT ... FOR UPDATE`), so concurrent
    /// creates for the same tenant serialize on the quota check and can
    /// never overshoot the ceiling.
    pub async fn insert_within_quota(
        &self,
        tenant_id: Uuid,
        title: &str,
        content: &str,
    ) -> AppResult<QuotaInsert> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let plan: TenantPlan =
            sqlx::query_scalar("SELECT plan FROM tenants WHERE id = $1 FOR UPDATE")
                .bind(tenant_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to read tenant plan", e)
                })?
                .ok_or_else(|| AppError::not_found("Tenant not found"))?;

        if let Some(limit) = plan.note_limit() {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE tenant_id = $1")
                .bind(tenant_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count notes", e)
                })?;

            if count >= limit {
                // Dropping the transaction rolls it back.
                return Ok(QuotaInsert::QuotaExceeded);
            }
        }

        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (id, tenant_id, title, content) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(tenant_id)
        .bind(title)
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert note", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(QuotaInsert::Created(note))
    }

    /// Fetch a note by id within a tenant.
    pub async fn find_scoped(&self, tenant_id: Uuid, note_id: Uuid) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1 AND tenant_id = $2")
            .bind(note_id)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch note", e))
    }

    /// Update a note's title and content in one conditional statement and
    /// return the post-commit row, or `None` when no row matched.
    pub async fn update_scoped(
        &self,
        tenant_id: Uuid,
        note_id: Uuid,
        title: &str,
        content: &str,
    ) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = $1, content = $2 WHERE id = $3 AND tenant_id = $4 RETURNING *",
        )
        .bind(title)
        .bind(content)
        .bind(note_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update note", e))
    }

    /// Delete a note in one conditional statement. Returns whether a row
    /// was actually deleted.
    pub async fn delete_scoped(&self, tenant_id: Uuid, note_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND tenant_id = $2")
            .bind(note_id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))?;

        Ok(result.rows_affected() > 0)
    }
}
