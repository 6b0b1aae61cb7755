//! Circulation state machine: books, members, issue and return.
//!
//! `Library` is purely synchronous and owns all state. Dates are passed in
//! by the caller, so every operation is deterministic.

use chrono::NaiveDate;

use crate::{
    error::LibraryError,
    models::{
        book::Book,
        loan::{IssueReceipt, LoanPolicy, MemberLoan, ReturnReceipt},
        member::Member,
    },
    repository::Repository,
};

#[derive(Debug, Default)]
pub struct Library {
    repository: Repository,
    policy: LoanPolicy,
}

impl Library {
    pub fn new(policy: LoanPolicy) -> Self {
        Self {
            repository: Repository::new(),
            policy,
        }
    }

    pub fn book_count(&self) -> usize {
        self.repository.books.len()
    }

    pub fn member_count(&self) -> usize {
        self.repository.members.len()
    }

    pub fn add_book(&mut self, book: Book) -> Result<&Book, LibraryError> {
        self.repository.books.insert(book)
    }

    pub fn register_member(&mut self, member: Member) -> Result<&Member, LibraryError> {
        self.repository.members.insert(member)
    }

    pub fn book(&self, book_id: &str) -> Result<&Book, LibraryError> {
        self.repository
            .books
            .get_by_id(book_id)
            .ok_or_else(|| LibraryError::BookNotFound(book_id.to_string()))
    }

    pub fn member(&self, member_id: &str) -> Result<&Member, LibraryError> {
        self.repository
            .members
            .get_by_id(member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))
    }

    /// Issue a book to a member on `today`.
    ///
    /// Fails if either is unknown or the book is already out.
    pub fn issue_book(
        &mut self,
        book_id: &str,
        member_id: &str,
        today: NaiveDate,
    ) -> Result<IssueReceipt, LibraryError> {
        let book = self
            .repository
            .books
            .get_by_id_mut(book_id)
            .ok_or_else(|| LibraryError::BookNotFound(book_id.to_string()))?;
        let member = self
            .repository
            .members
            .get_by_id_mut(member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))?;

        if book.is_issued() {
            return Err(LibraryError::AlreadyIssued(book_id.to_string()));
        }
        let due_date = self.policy.due_date(today)?;

        book.issue();
        member.issue_book(book_id, today);

        Ok(IssueReceipt {
            book: book.clone(),
            member_id: member_id.to_string(),
            issue_date: today,
            due_date,
        })
    }

    /// Take a book back from a member on `today` and compute the late fee.
    pub fn return_book(
        &mut self,
        book_id: &str,
        member_id: &str,
        today: NaiveDate,
    ) -> Result<ReturnReceipt, LibraryError> {
        let book = self
            .repository
            .books
            .get_by_id_mut(book_id)
            .ok_or_else(|| LibraryError::BookNotFound(book_id.to_string()))?;
        let member = self
            .repository
            .members
            .get_by_id_mut(member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))?;

        if !book.is_issued() {
            return Err(LibraryError::NotIssued(book_id.to_string()));
        }

        // Issued, but not to this member
        let issue_date = member
            .issue_date(book_id)
            .ok_or_else(|| LibraryError::NotHeldByMember {
                book_id: book_id.to_string(),
                member_id: member_id.to_string(),
            })?;

        let days_elapsed = (today - issue_date).num_days();
        let late_fee = self.policy.late_fee(days_elapsed)?;

        book.return_book();
        member.return_book(book_id);

        Ok(ReturnReceipt {
            book: book.clone(),
            member_id: member_id.to_string(),
            issue_date,
            return_date: today,
            days_elapsed,
            days_overdue: self.policy.days_overdue(days_elapsed),
            late_fee,
        })
    }

    /// Books not currently issued, in catalog order.
    ///
    /// Lazy; call again to restart.
    pub fn available_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.repository.books.iter().filter(|book| !book.is_issued())
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.repository.books.iter()
    }

    pub fn search_books<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
        self.repository.books.search_by_title(title)
    }

    pub fn search_members<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Member> + 'a {
        self.repository.members.search_by_name(name)
    }

    /// Books held by a member, in the order they were issued
    pub fn member_loans(
        &self,
        member_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<MemberLoan>, LibraryError> {
        let member = self.member(member_id)?;

        member
            .issued_books()
            .iter()
            .map(|(book_id, &issue_date)| -> Result<MemberLoan, LibraryError> {
                let due_date = self.policy.due_date(issue_date)?;
                Ok(MemberLoan {
                    book: self.book(book_id)?.clone(),
                    issue_date,
                    due_date,
                    is_overdue: today > due_date,
                })
            })
            .collect()
    }
}
