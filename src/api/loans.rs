//! Issue and return endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::loan::{IssueReceipt, LoanRequest, MemberLoan, ReturnReceipt},
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct IssueResponse {
    #[serde(flatten)]
    pub receipt: IssueReceipt,
    pub message: String,
}

/// Return response with the computed late fee
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Return status
    pub status: String,
    #[serde(flatten)]
    pub receipt: ReturnReceipt,
    pub message: String,
}

/// Get the books a member currently holds
#[utoipa::path(
    get,
    path = "/members/{id}/loans",
    tag = "loans",
    params(
        ("id" = String, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member's current loans", body = Vec<MemberLoan>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member_loans(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<Vec<MemberLoan>>> {
    let loans = state.services.loans.get_member_loans(&member_id).await?;
    Ok(Json(loans))
}

/// Issue a book to a member
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 201, description = "Book issued", body = IssueResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Book or member not found"),
        (status = 409, description = "Book already issued")
    )
)]
pub async fn issue_book(
    State(state): State<AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<(StatusCode, Json<IssueResponse>)> {
    request.validate()?;

    let receipt = state.services.loans.issue_book(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(IssueResponse {
            message: format!("Book issued: {}", receipt.book),
            receipt,
        }),
    ))
}

/// Return an issued book
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Book or member not found"),
        (status = 409, description = "Book not issued, or not held by this member")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<Json<ReturnResponse>> {
    request.validate()?;

    let receipt = state.services.loans.return_book(&request).await?;
    let message = if receipt.days_overdue > 0 {
        format!(
            "Late return penalty: ${}. Book returned: {}",
            receipt.late_fee, receipt.book
        )
    } else {
        format!("Book returned: {}", receipt.book)
    };

    Ok(Json(ReturnResponse {
        status: "returned".to_string(),
        receipt,
        message,
    }))
}
