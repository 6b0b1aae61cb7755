//! Library member model and related types

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A registered member and the books they currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    id: String,
    name: String,
    /// Held book ID -> issue date, in the order the books were issued
    #[schema(value_type = Object)]
    issued_books: IndexMap<String, NaiveDate>,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            issued_books: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn issued_books(&self) -> &IndexMap<String, NaiveDate> {
        &self.issued_books
    }

    /// Date the given book was issued to this member, if they hold it
    pub fn issue_date(&self, book_id: &str) -> Option<NaiveDate> {
        self.issued_books.get(book_id).copied()
    }

    pub fn issue_book(&mut self, book_id: impl Into<String>, issue_date: NaiveDate) {
        self.issued_books.insert(book_id.into(), issue_date);
    }

    pub fn return_book(&mut self, book_id: &str) {
        self.issued_books.shift_remove(book_id);
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member ID: {}, Name: {}, Issued Books: {{", self.id, self.name)?;
        for (i, (book_id, date)) in self.issued_books.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", book_id, date)?;
        }
        f.write_str("}")
    }
}

/// Register member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    /// Unique member identifier
    #[validate(length(min = 1, message = "Member ID must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

impl From<CreateMember> for Member {
    fn from(request: CreateMember) -> Self {
        Member::new(request.id, request.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_issue_and_return_book() {
        let mut member = Member::new("M1", "Alice");
        member.issue_book("B1", date(2024, 3, 1));
        assert_eq!(member.issue_date("B1"), Some(date(2024, 3, 1)));

        member.return_book("B1");
        assert_eq!(member.issue_date("B1"), None);
        assert!(member.issued_books().is_empty());
    }

    #[test]
    fn test_return_unknown_book_is_noop() {
        let mut member = Member::new("M1", "Alice");
        member.return_book("B404");
        assert!(member.issued_books().is_empty());
    }

    #[test]
    fn test_issued_books_keep_issue_order() {
        let mut member = Member::new("M1", "Alice");
        member.issue_book("B2", date(2024, 3, 1));
        member.issue_book("B1", date(2024, 3, 2));
        member.issue_book("B3", date(2024, 3, 3));
        member.return_book("B1");

        let ids: Vec<&str> = member.issued_books().keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["B2", "B3"]);
    }

    #[test]
    fn test_display() {
        let mut member = Member::new("M1", "Alice");
        assert_eq!(member.to_string(), "Member ID: M1, Name: Alice, Issued Books: {}");

        member.issue_book("B1", date(2024, 3, 1));
        member.issue_book("B2", date(2024, 3, 5));
        assert_eq!(
            member.to_string(),
            "Member ID: M1, Name: Alice, Issued Books: {B1=2024-03-01, B2=2024-03-05}"
        );
    }
}
