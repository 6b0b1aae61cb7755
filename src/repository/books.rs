//! Books catalog

use indexmap::{map::Entry, IndexMap};

use crate::{error::LibraryError, models::book::Book};

#[derive(Debug, Default)]
pub struct BooksRepository {
    books: IndexMap<String, Book>,
}

impl BooksRepository {
    pub fn get_by_id(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.get_mut(id)
    }

    /// Append a book; an existing ID is rejected and the stored book kept
    pub fn insert(&mut self, book: Book) -> Result<&Book, LibraryError> {
        match self.books.entry(book.id().to_string()) {
            Entry::Occupied(entry) => Err(LibraryError::DuplicateBook(entry.key().clone())),
            Entry::Vacant(entry) => {
                let book: &Book = entry.insert(book);
                Ok(book)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.values()
    }

    pub fn search_by_title<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
        self.iter()
            .filter(move |book| super::eq_ignore_case(book.title(), title))
    }

    pub(crate) fn len(&self) -> usize {
        self.books.len()
    }
}
