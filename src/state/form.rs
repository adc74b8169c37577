use std::path::PathBuf;

use super::data::BookDraft;
use crate::error::CatalogError;

/// Inputs of the "Add a New Book" form
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Cover image chosen with the file picker
    pub cover_path: Option<PathBuf>,
    /// Single message slot shown above the submit button
    message: Option<String>,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current inputs for validation
    pub fn draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            cover_path: self.cover_path.clone(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show_error(&mut self, err: &CatalogError) {
        self.message = Some(err.to_string());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Clear every input and the message
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// File name of the chosen cover, for the label next to the picker
    pub fn cover_label(&self) -> String {
        self.cover_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "No file chosen".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::REQUIRED_MESSAGE;
    use crate::state::data::RequiredField;

    #[test]
    fn test_draft_snapshots_inputs() {
        let mut form = BookForm::new();
        form.title = "Dune".into();
        form.cover_path = Some(PathBuf::from("/covers/dune.png"));

        let draft = form.draft();
        assert_eq!(draft.title, "Dune");
        assert_eq!(
            draft.missing_fields(),
            vec![RequiredField::Author, RequiredField::Description]
        );
    }

    #[test]
    fn test_error_then_reset() {
        let mut form = BookForm::new();
        form.author = "Frank Herbert".into();
        form.show_error(&CatalogError::MissingFields(vec![RequiredField::Title]));
        assert_eq!(form.message(), Some(REQUIRED_MESSAGE));

        form.reset();
        assert_eq!(form.message(), None);
        assert!(form.author.is_empty());
        assert!(form.cover_path.is_none());
    }

    #[test]
    fn test_cover_label() {
        let mut form = BookForm::new();
        assert_eq!(form.cover_label(), "No file chosen");

        form.cover_path = Some(PathBuf::from("/covers/dune.png"));
        assert_eq!(form.cover_label(), "dune.png");
    }
}
