//! Mock user lookup

use axum::extract::Path;

use crate::models::UserRecord;
use crate::response::ApiResponse;

/// Look up a user by id.
///
/// Always succeeds: there is no backing store, so the record is synthesized
/// from the path parameter and no "not found" case exists.
pub async fn get_user(Path(user_id): Path<String>) -> ApiResponse<UserRecord> {
    tracing::info!(%user_id, "user lookup");

    ApiResponse::success(UserRecord::synthesize(&user_id))
        .with_message("user retrieved successfully")
}
