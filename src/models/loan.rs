//! Loan policy and the receipts produced by issue/return

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::book::Book;
use crate::error::LibraryError;

/// Due period and late fee rate applied on return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoanPolicy {
    pub due_days: i64,
    pub late_fee_per_day: Decimal,
}

impl LoanPolicy {
    pub const DEFAULT_DUE_DAYS: i64 = 14;
    pub const MAX_DUE_DAYS: i64 = 3650;
    pub const MAX_LATE_FEE_PER_DAY: i64 = 1_000_000;

    pub fn due_date(&self, issue_date: NaiveDate) -> Result<NaiveDate, LibraryError> {
        Duration::try_days(self.due_days)
            .and_then(|period| issue_date.checked_add_signed(period))
            .ok_or_else(|| {
                LibraryError::PolicyOutOfRange(format!(
                    "due date of {} + {} days is not representable",
                    issue_date, self.due_days
                ))
            })
    }

    /// Whole days past the due period, never negative
    pub fn days_overdue(&self, days_elapsed: i64) -> i64 {
        days_elapsed.saturating_sub(self.due_days).max(0)
    }

    pub fn late_fee(&self, days_elapsed: i64) -> Result<Decimal, LibraryError> {
        let overdue = self.days_overdue(days_elapsed);
        if overdue == 0 {
            return Ok(Decimal::ZERO);
        }
        Decimal::from(overdue)
            .checked_mul(self.late_fee_per_day)
            .ok_or_else(|| {
                LibraryError::PolicyOutOfRange(format!(
                    "late fee of {} days at {} per day overflows",
                    overdue, self.late_fee_per_day
                ))
            })
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            due_days: Self::DEFAULT_DUE_DAYS,
            late_fee_per_day: Decimal::ONE,
        }
    }
}

/// Issue or return request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoanRequest {
    #[validate(length(min = 1, message = "Book ID must not be empty"))]
    pub book_id: String,
    #[validate(length(min = 1, message = "Member ID must not be empty"))]
    pub member_id: String,
}

/// Result of a successful issue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueReceipt {
    pub book: Book,
    pub member_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Result of a successful return.
///
/// The late fee is reported only; nothing records or charges it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReturnReceipt {
    pub book: Book,
    pub member_id: String,
    pub issue_date: NaiveDate,
    pub return_date: NaiveDate,
    pub days_elapsed: i64,
    pub days_overdue: i64,
    pub late_fee: Decimal,
}

/// A book currently held by a member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberLoan {
    pub book: Book,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub is_overdue: bool,
}
