//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Circulation API",
        version = "0.1.0",
        description = "Library circulation REST API: books, members, issue and return",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::create_book,
        books::available_books,
        books::search_books,
        books::get_book,
        // Members
        members::create_member,
        members::search_members,
        members::get_member,
        // Loans
        loans::get_member_loans,
        loans::issue_book,
        loans::return_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            books::BookResponse,
            // Members
            crate::models::member::Member,
            crate::models::member::CreateMember,
            members::MemberResponse,
            // Loans
            crate::models::loan::LoanRequest,
            crate::models::loan::IssueReceipt,
            crate::models::loan::ReturnReceipt,
            crate::models::loan::MemberLoan,
            loans::IssueResponse,
            loans::ReturnResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "members", description = "Member registration"),
        (name = "loans", description = "Issue and return")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
