use iced::widget::{button, column, container, image, row, text, text_input, Column};
use iced::{ContentFit, Element, Length, Theme};

use crate::config::AppConfig;
use crate::state::data::{Book, BookField, BookId};
use crate::{CatalogKind, CatalogMessage, Message};

/// A single book card: cover, inline-editable text, Edit/Save and Delete.
///
/// The three text regions only become inputs while `editing` is set, so
/// field edits can only reach the book that owns the edit cursor.
pub fn book_card<'a>(
    book: &'a Book,
    editing: bool,
    kind: CatalogKind,
    config: &AppConfig,
) -> Element<'a, Message> {
    let id = book.id;
    let send = move |msg: CatalogMessage| Message::Catalog(kind, msg);

    let cover = image(book.cover.handle())
        .width(Length::Fill)
        .height(config.cover_height)
        .content_fit(ContentFit::Cover);

    let fields = Column::with_children(
        BookField::ALL
            .into_iter()
            .map(|field| book_field(book, field, editing, kind)),
    )
    .spacing(8);

    let toggle_style: fn(&Theme, button::Status) -> button::Style = if editing {
        button::success
    } else {
        button::primary
    };

    let controls = row![
        button(text(if editing { "Save" } else { "Edit" }))
            .on_press(send(CatalogMessage::ToggleEdit(id)))
            .style(toggle_style)
            .padding([8, 16]),
        button("Delete")
            .on_press(send(CatalogMessage::Delete(id)))
            .style(button::danger)
            .padding([8, 16]),
    ]
    .spacing(16);

    container(column![cover, fields, controls].spacing(8))
        .padding(24)
        .width(config.card_width)
        .style(container::rounded_box)
        .into()
}

/// One text region of a card, as an input while the card is being edited
fn book_field<'a>(
    book: &'a Book,
    field: BookField,
    editing: bool,
    kind: CatalogKind,
) -> Element<'a, Message> {
    let value = book.field(field);
    if editing {
        let id: BookId = book.id;
        return text_input(placeholder(field), value)
            .on_input(move |value| {
                Message::Catalog(kind, CatalogMessage::SetField(id, field, value))
            })
            .padding(6)
            .into();
    }

    match field {
        BookField::Title => text(value).size(20).into(),
        BookField::Author => text(format!("by {}", value)).size(14).into(),
        BookField::Description => text(value).size(14).into(),
    }
}

fn placeholder(field: BookField) -> &'static str {
    match field {
        BookField::Title => "Book Title",
        BookField::Author => "Author Name",
        BookField::Description => "Description",
    }
}
