//! Note CRUD with plan quota enforcement.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use noteloft_core::error::AppError;
use noteloft_database::repositories::NoteRepository;
use noteloft_database::repositories::note::QuotaInsert;
use noteloft_entity::note::Note;

use crate::context::RequestContext;

/// Handles note operations, all scoped to the caller's tenant.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(note_repo: Arc<NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Lists the tenant's notes, newest first.
    pub async fn list_notes(&self, ctx: &RequestContext) -> Result<Vec<Note>, AppError> {
        self.note_repo.list_for_tenant(ctx.tenant_id).await
    }

    /// Creates a note, enforcing the tenant's plan quota.
    ///
    /// The returned row is the one the repository committed, including the
    /// server-assigned id and created_at.
    pub async fn create_note(
        &self,
        ctx: &RequestContext,
        title: &str,
        content: &str,
    ) -> Result<Note, AppError> {
        match self
            .note_repo
            .insert_within_quota(ctx.tenant_id, title, content)
            .await?
        {
            QuotaInsert::Created(note) => {
                info!(note_id = %note.id, tenant_id = %ctx.tenant_id, "Note created");
                Ok(note)
            }
            QuotaInsert::QuotaExceeded => Err(AppError::quota_exceeded(
                "Free plan is limited to 3 notes. Please upgrade.",
            )),
        }
    }

    /// Fetches one of the tenant's notes.
    ///
    /// A note under another tenant yields the same `NotFound` as a note
    /// that does not exist at all.
    pub async fn get_note(&self, ctx: &RequestContext, note_id: Uuid) -> Result<Note, AppError> {
        self.note_repo
            .find_scoped(ctx.tenant_id, note_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Updates a note's title and content, returning the post-commit row.
    pub async fn update_note(
        &self,
        ctx: &RequestContext,
        note_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Note, AppError> {
        self.note_repo
            .update_scoped(ctx.tenant_id, note_id, title, content)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Deletes a note.
    pub async fn delete_note(&self, ctx: &RequestContext, note_id: Uuid) -> Result<(), AppError> {
        let deleted = self.note_repo.delete_scoped(ctx.tenant_id, note_id).await?;
        if !deleted {
            return Err(AppError::not_found("Note not found"));
        }

        info!(note_id = %note_id, tenant_id = %ctx.tenant_id, "Note deleted");
        Ok(())
    }
}
