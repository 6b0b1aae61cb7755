//! Loan management service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::loan::{IssueReceipt, LoanRequest, MemberLoan, ReturnReceipt},
};

use super::{clock::Clock, SharedLibrary};

#[derive(Clone)]
pub struct LoansService {
    library: SharedLibrary,
    clock: Arc<dyn Clock>,
}

impl LoansService {
    pub fn new(library: SharedLibrary, clock: Arc<dyn Clock>) -> Self {
        Self { library, clock }
    }

    /// Issue a book to a member, dated today
    pub async fn issue_book(&self, request: &LoanRequest) -> AppResult<IssueReceipt> {
        let today = self.clock.today();
        let receipt = self
            .library
            .write()
            .await
            .issue_book(&request.book_id, &request.member_id, today)
            .inspect_err(|e| tracing::warn!("Issue operation failed: {}", e))?;

        tracing::info!(
            "Book {} issued to member {}, due {}",
            receipt.book.id(),
            receipt.member_id,
            receipt.due_date
        );
        Ok(receipt)
    }

    /// Return a book, dated today. The late fee is reported, not recorded.
    pub async fn return_book(&self, request: &LoanRequest) -> AppResult<ReturnReceipt> {
        let today = self.clock.today();
        let receipt = self
            .library
            .write()
            .await
            .return_book(&request.book_id, &request.member_id, today)
            .inspect_err(|e| tracing::warn!("Return operation failed: {}", e))?;

        if receipt.days_overdue > 0 {
            tracing::info!(
                "Late return of book {} by member {}: {} days overdue, penalty {}",
                receipt.book.id(),
                receipt.member_id,
                receipt.days_overdue,
                receipt.late_fee
            );
        }
        tracing::info!("Book {} returned by member {}", receipt.book.id(), receipt.member_id);
        Ok(receipt)
    }

    /// Books currently held by a member
    pub async fn get_member_loans(&self, member_id: &str) -> AppResult<Vec<MemberLoan>> {
        let today = self.clock.today();
        Ok(self.library.read().await.member_loans(member_id, today)?)
    }
}
