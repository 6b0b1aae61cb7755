//! Data models for the circulation server

pub mod book;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use loan::{IssueReceipt, LoanPolicy, LoanRequest, MemberLoan, ReturnReceipt};
pub use member::{CreateMember, Member};
