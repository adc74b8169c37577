use chrono::Utc;
use std::path::PathBuf;

use super::data::{Book, BookDraft, BookField, BookId, Cover, RequiredField};
use crate::error::CatalogError;

/// Which record, if any, currently has its text fields open for editing.
///
/// A single cursor per catalog means two records can never be editable at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditCursor {
    #[default]
    Idle,
    Editing(BookId),
}

/// A validated creation waiting for its cover image to be read.
///
/// Returned by [`Catalog::begin_create`] and consumed by
/// [`Catalog::complete_create`] or [`Catalog::abandon_create`].
#[derive(Debug, Clone)]
pub struct PendingCreate {
    token: u64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_path: PathBuf,
}

/// An ordered, in-memory list of books with a single edit cursor.
///
/// Order is insertion order and is never resorted. Field edits, toggles and
/// deletes are total; the only fallible operation is adding a book.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    cursor: EditCursor,
    /// Token of the creation awaiting its cover, if any
    pending: Option<u64>,
    next_token: u64,
    /// Highest id ever issued, so new ids stay unique after deletes
    last_id: BookId,
    clear_edit_on_delete: bool,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `books` in the given order
    pub fn with_books(books: Vec<Book>) -> Self {
        let last_id = books.iter().map(|book| book.id).max().unwrap_or(0);
        Catalog {
            books,
            last_id,
            ..Self::default()
        }
    }

    /// Clear the edit cursor when the record it points at is deleted
    pub fn clear_edit_on_delete(mut self, enabled: bool) -> Self {
        self.clear_edit_on_delete = enabled;
        self
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn cursor(&self) -> EditCursor {
        self.cursor
    }

    /// The id the edit cursor points at. May name a deleted record.
    pub fn edit_target(&self) -> Option<BookId> {
        match self.cursor {
            EditCursor::Idle => None,
            EditCursor::Editing(id) => Some(id),
        }
    }

    /// Whether the record `id` is present and open for editing
    pub fn is_editing(&self, id: BookId) -> bool {
        self.cursor == EditCursor::Editing(id) && self.get(id).is_some()
    }

    pub fn is_create_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate a draft and reserve the catalog for its cover read.
    ///
    /// Nothing is appended until [`Catalog::complete_create`] runs.
    pub fn begin_create(&mut self, draft: BookDraft) -> Result<PendingCreate, CatalogError> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(CatalogError::MissingFields(missing));
        }
        if self.pending.is_some() {
            return Err(CatalogError::CreatePending);
        }
        let Some(cover_path) = draft.cover_path else {
            return Err(CatalogError::MissingFields(vec![RequiredField::Cover]));
        };

        self.next_token += 1;
        let token = self.next_token;
        self.pending = Some(token);

        Ok(PendingCreate {
            token,
            title: draft.title,
            author: draft.author,
            description: draft.description,
            cover_path,
        })
    }

    /// Append the book described by `pending` with its loaded cover.
    ///
    /// Returns the new book's id.
    pub fn complete_create(
        &mut self,
        pending: PendingCreate,
        cover: Cover,
    ) -> Result<BookId, CatalogError> {
        if self.pending != Some(pending.token) {
            return Err(CatalogError::StaleCreate);
        }
        self.pending = None;

        let id = self.issue_id(Utc::now().timestamp_millis());
        self.books.push(Book {
            id,
            title: pending.title,
            author: pending.author,
            description: pending.description,
            cover,
        });
        Ok(id)
    }

    /// Release the pending slot after the cover could not be loaded
    pub fn abandon_create(&mut self, pending: &PendingCreate) {
        if self.pending == Some(pending.token) {
            self.pending = None;
        }
    }

    /// Time-derived id, bumped past the last issued id when the clock
    /// has not advanced far enough
    fn issue_id(&mut self, now_ms: i64) -> BookId {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// Replace one text field of the book `id` in place. No-op if absent.
    pub fn set_field(&mut self, id: BookId, field: BookField, value: String) {
        if let Some(book) = self.books.iter_mut().find(|book| book.id == id) {
            *book.field_mut(field) = value;
        }
    }

    /// Enter edit mode for `id`, or leave it if `id` is already being edited
    pub fn toggle_edit(&mut self, id: BookId) {
        self.cursor = if self.cursor == EditCursor::Editing(id) {
            EditCursor::Idle
        } else {
            EditCursor::Editing(id)
        };
    }

    /// Remove the book `id`. No-op if absent.
    ///
    /// Returns the removed book.
    pub fn delete(&mut self, id: BookId) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id == id)?;
        let removed = self.books.remove(index);
        if self.clear_edit_on_delete && self.cursor == EditCursor::Editing(id) {
            self.cursor = EditCursor::Idle;
        }
        Some(removed)
    }
}
