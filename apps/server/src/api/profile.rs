use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use savings_predictor_core::profiles::Profile;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ProfileRequest, ProfileSavedResponse},
};

async fn get_profile(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Profile>> {
    let profile = state.profile_service.get_profile(&user_id)?;
    Ok(Json(profile))
}

async fn save_profile(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileSavedResponse>> {
    let Json(request) = payload?;
    let profile = Profile::try_from(request)?;
    let saved = state.profile_service.save_profile(profile).await?;
    Ok(Json(ProfileSavedResponse {
        message: "Profile saved successfully".to_string(),
        profile: saved,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profile", post(save_profile))
        .route("/profile/{user_id}", get(get_profile))
}
