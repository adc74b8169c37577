/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog state machine and the UI layer.

use iced::widget::image::Handle;
use std::fmt;
use std::path::{Path, PathBuf};

/// Unique identifier of a book within one catalog
pub type BookId = i64;

/// Represents a single book in a catalog
#[derive(Debug, Clone)]
pub struct Book {
    /// Unique within the owning catalog
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Cover image shown at the top of the card
    pub cover: Cover,
}

impl Book {
    /// Read one of the inline-editable text fields
    pub fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Description => &self.description,
        }
    }

    /// Mutable access to one of the inline-editable text fields
    pub fn field_mut(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Description => &mut self.description,
        }
    }
}

/// The text fields of a book that can be edited inline on its card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Description,
}

impl BookField {
    pub const ALL: [BookField; 3] = [BookField::Title, BookField::Author, BookField::Description];
}

/// Inputs the creation form requires before a book can be added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Author,
    Description,
    Cover,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredField::Title => "title",
            RequiredField::Author => "author",
            RequiredField::Description => "description",
            RequiredField::Cover => "cover image",
        };
        f.write_str(name)
    }
}

/// A book cover, either held in memory or referenced from the asset directory
#[derive(Debug, Clone)]
pub enum Cover {
    /// Bytes read from a picked file, decoded lazily by the image widget
    Embedded {
        /// Detected MIME type (e.g. "image/png")
        mime: &'static str,
        /// Size of the encoded image in bytes
        size: usize,
        handle: Handle,
    },
    /// Static image shipped alongside the application
    Asset(PathBuf),
}

impl Cover {
    /// Wrap encoded image bytes for display
    pub fn embedded(mime: &'static str, bytes: Vec<u8>) -> Self {
        Cover::Embedded {
            mime,
            size: bytes.len(),
            handle: Handle::from_bytes(bytes),
        }
    }

    /// Reference a static asset by path
    pub fn asset(path: impl Into<PathBuf>) -> Self {
        Cover::Asset(path.into())
    }

    /// Handle for the iced image widget
    pub fn handle(&self) -> Handle {
        match self {
            Cover::Embedded { handle, .. } => handle.clone(),
            Cover::Asset(path) => Handle::from_path(path),
        }
    }

    /// Whether this cover carries any image data at all
    pub fn is_empty(&self) -> bool {
        match self {
            Cover::Embedded { size, .. } => *size == 0,
            Cover::Asset(path) => path.as_os_str().is_empty(),
        }
    }

    /// Asset path, if this cover is a static asset
    pub fn asset_path(&self) -> Option<&Path> {
        match self {
            Cover::Asset(path) => Some(path),
            Cover::Embedded { .. } => None,
        }
    }
}

/// The user's input for a new book, before validation
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_path: Option<PathBuf>,
}

impl BookDraft {
    /// Required inputs that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(RequiredField::Title);
        }
        if self.author.is_empty() {
            missing.push(RequiredField::Author);
        }
        if self.description.is_empty() {
            missing.push(RequiredField::Description);
        }
        if self
            .cover_path
            .as_ref()
            .map_or(true, |path| path.as_os_str().is_empty())
        {
            missing.push(RequiredField::Cover);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book {
            id: 7,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            description: "Desert planet saga".into(),
            cover: Cover::asset("dune.png"),
        }
    }

    #[test]
    fn test_field_accessors() {
        let mut book = book();
        assert_eq!(book.field(BookField::Author), "Frank Herbert");

        *book.field_mut(BookField::Title) = "Dune Messiah".into();
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.description, "Desert planet saga");
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let draft = BookDraft {
            author: "Frank Herbert".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.missing_fields(),
            vec![RequiredField::Title, RequiredField::Description, RequiredField::Cover]
        );
    }

    #[test]
    fn test_complete_draft_has_nothing_missing() {
        let draft = BookDraft {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            description: "Desert planet saga".into(),
            cover_path: Some(PathBuf::from("dune.png")),
        };
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_cover_emptiness() {
        assert!(Cover::embedded("image/png", Vec::new()).is_empty());
        assert!(!Cover::embedded("image/png", vec![0x89, b'P', b'N', b'G']).is_empty());
        assert_eq!(Cover::asset("book1.jpeg").asset_path(), Some(Path::new("book1.jpeg")));
    }
}
