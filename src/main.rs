use iced::widget::{column, container, scrollable, text, text_editor};
use iced::{Alignment, Element, Length, Task, Theme};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod cover;
mod error;
mod state;
mod ui;

use config::AppConfig;
use error::CatalogError;
use state::catalog::{Catalog, PendingCreate};
use state::data::{BookField, BookId, Cover};
use state::form::BookForm;

/// Which of the two catalogs a message is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// Books added through the form
    Editor,
    /// The fixed starting list
    Seeded,
}

/// Per-card interactions, routed to one catalog
#[derive(Debug, Clone)]
pub enum CatalogMessage {
    SetField(BookId, BookField, String),
    ToggleEdit(BookId),
    Delete(BookId),
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    AuthorChanged(String),
    DescriptionEdited(text_editor::Action),
    /// User clicked the cover file picker
    PickCover,
    /// User clicked "Add Book"
    Submit,
    /// Background cover read finished
    CoverLoaded(PendingCreate, Result<Cover, Arc<CatalogError>>),
    Catalog(CatalogKind, CatalogMessage),
}

/// Main application state
struct BookLibrary {
    config: AppConfig,
    /// Catalog grown by the form
    editor: Catalog,
    /// Catalog pre-filled with the seeded books
    seeded: Catalog,
    form: BookForm,
    /// Multi-line description input, mirrored into `form.description`
    description: text_editor::Content,
}

impl BookLibrary {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let editor = Catalog::new().clear_edit_on_delete(config.clear_edit_on_delete);
        let seeded = Catalog::seeded(&config.asset_dir)
            .clear_edit_on_delete(config.clear_edit_on_delete);

        info!(
            seeded = seeded.len(),
            asset_dir = %config.asset_dir.display(),
            "📚 Book Library initialized"
        );

        (
            BookLibrary {
                config,
                editor,
                seeded,
                form: BookForm::new(),
                description: text_editor::Content::new(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.config.window_title.clone()
    }

    fn catalog_mut(&mut self, kind: CatalogKind) -> &mut Catalog {
        match kind {
            CatalogKind::Editor => &mut self.editor,
            CatalogKind::Seeded => &mut self.seeded,
        }
    }

    /// Validate the form and reserve the editor catalog for a cover read.
    /// On rejection the form shows the error and nothing is returned.
    fn submit(&mut self) -> Option<PendingCreate> {
        match self.editor.begin_create(self.form.draft()) {
            Ok(pending) => {
                self.form.clear_message();
                Some(pending)
            }
            Err(err) => {
                warn!(error = %err, "book submission rejected");
                self.form.show_error(&err);
                None
            }
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TitleChanged(value) => {
                self.form.title = value;
                Task::none()
            }
            Message::AuthorChanged(value) => {
                self.form.author = value;
                Task::none()
            }
            Message::DescriptionEdited(action) => {
                self.description.perform(action);
                self.form.description = editor_text(&self.description);
                Task::none()
            }
            Message::PickCover => {
                // Keep the previous choice if the dialog is cancelled
                if let Some(path) = cover::pick_cover() {
                    debug!(path = %path.display(), "cover selected");
                    self.form.cover_path = Some(path);
                }
                Task::none()
            }
            Message::Submit => match self.submit() {
                Some(pending) => {
                    let path = pending.cover_path.clone();
                    Task::perform(cover::read_cover(path), move |result| {
                        Message::CoverLoaded(pending.clone(), result.map_err(Arc::new))
                    })
                }
                None => Task::none(),
            },
            Message::CoverLoaded(pending, Ok(cover)) => {
                let title = pending.title.clone();
                match self.editor.complete_create(pending, cover) {
                    Ok(id) => {
                        info!(id, title = %title, total = self.editor.len(), "book added");
                        self.form.reset();
                        self.description = text_editor::Content::new();
                    }
                    Err(err) => warn!(error = %err, "discarding cover for stale submission"),
                }
                Task::none()
            }
            Message::CoverLoaded(pending, Err(err)) => {
                warn!(
                    error = %err,
                    path = %pending.cover_path.display(),
                    "cover could not be loaded"
                );
                self.editor.abandon_create(&pending);
                self.form.show_error(&err);
                Task::none()
            }
            Message::Catalog(kind, message) => {
                let catalog = self.catalog_mut(kind);
                match message {
                    CatalogMessage::SetField(id, field, value) => {
                        debug!(?kind, id, ?field, "field edited");
                        catalog.set_field(id, field, value);
                    }
                    CatalogMessage::ToggleEdit(id) => {
                        catalog.toggle_edit(id);
                        debug!(?kind, id, cursor = ?catalog.cursor(), "edit mode toggled");
                    }
                    CatalogMessage::Delete(id) => {
                        let was_editing = catalog.edit_target() == Some(id);
                        if let Some(book) = catalog.delete(id) {
                            info!(
                                ?kind,
                                id,
                                title = %book.title,
                                remaining = catalog.len(),
                                was_editing,
                                "book deleted"
                            );
                        }
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content = column![
            text("Book Library").size(40),
            ui::form::book_form(&self.form, &self.description, self.editor.is_create_pending()),
            text("Books Collection").size(36),
            ui::grid::book_grid(&self.editor, CatalogKind::Editor, &self.config, None),
            ui::grid::book_grid(
                &self.seeded,
                CatalogKind::Seeded,
                &self.config,
                Some("No books available."),
            ),
        ]
        .spacing(32)
        .padding(24)
        .align_x(Alignment::Center);

        scrollable(container(content).width(Length::Fill).center_x(Length::Fill)).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Editor text without the trailing newline the editor keeps after the last line
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    let config = AppConfig::load().unwrap_or_else(|err| {
        warn!(error = %err, "falling back to default config");
        AppConfig::default()
    });

    iced::application(BookLibrary::title, BookLibrary::update, BookLibrary::view)
        .theme(BookLibrary::theme)
        .centered()
        .run_with(move || BookLibrary::new(config))
}
