//! Member endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member},
    AppState,
};

/// Name search query
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberSearchQuery {
    /// Exact name, compared case-insensitively
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct MemberResponse {
    pub member: Member,
    pub message: String,
}

/// Register a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member registered", body = MemberResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Member ID already exists")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<MemberResponse>)> {
    request.validate()?;

    let member = state.services.members.register_member(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(MemberResponse {
            message: format!("Member registered: {}", member),
            member,
        }),
    ))
}

/// Search members by name
#[utoipa::path(
    get,
    path = "/members/search",
    tag = "members",
    params(MemberSearchQuery),
    responses(
        (status = 200, description = "Matching members", body = Vec<Member>)
    )
)]
pub async fn search_members(
    State(state): State<AppState>,
    Query(query): Query<MemberSearchQuery>,
) -> Json<Vec<Member>> {
    Json(state.services.members.search_members(&query.name).await)
}

/// Get a member by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_member(&id).await?;
    Ok(Json(member))
}
