//! In-memory storage for books and members

pub mod books;
pub mod members;

/// Owns every catalogued book and registered member.
///
/// Each store is keyed by identifier and iterates in insertion order.
#[derive(Debug, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Case-insensitive exact comparison used by title and name searches.
///
/// Compares the full Unicode lowercase mappings of both strings rather than
/// folding one character at a time, so `"İ"` (lowercasing to `i` plus a
/// combining dot) does not match a plain `"i"`.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
