//! Tenant management handlers.

use axum::Json;
use axum::extract::{Path, State};

use noteloft_core::error::AppError;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /tenants/{slug}/upgrade
pub async fn upgrade_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    let tenant = state.tenant_service.upgrade(&auth, &slug).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Tenant {} has been upgraded to Pro", tenant.slug),
    })))
}
