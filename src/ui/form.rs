use iced::widget::{button, column, container, row, text, text_editor, text_input, Column};
use iced::{Alignment, Color, Element, Length};

use crate::state::form::BookForm;
use crate::Message;

const ERROR_COLOR: Color = Color::from_rgb(0.94, 0.27, 0.27);

/// The "Add a New Book" form
pub fn book_form<'a>(
    form: &'a BookForm,
    description: &'a text_editor::Content,
    pending: bool,
) -> Element<'a, Message> {
    let cover_picker = row![
        button("Choose File").on_press(Message::PickCover).padding([6, 12]),
        text(form.cover_label()).size(14),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    // Disabled while a cover is being read so a book cannot be submitted twice
    let submit = button(text(if pending { "Adding..." } else { "Add Book" }))
        .on_press_maybe((!pending).then_some(Message::Submit))
        .width(Length::Fill)
        .padding(12);

    let content: Column<Message> = column![
        text("Add a New Book").size(22),
        text_input("Book Title", &form.title)
            .on_input(Message::TitleChanged)
            .padding(12),
        text_input("Author Name", &form.author)
            .on_input(Message::AuthorChanged)
            .padding(12),
        text("Description").size(14),
        text_editor(description)
            .on_action(Message::DescriptionEdited)
            .height(120.0)
            .padding(12),
        text("Upload Book Cover").size(14),
        cover_picker,
    ]
    .push_maybe(form.message().map(|msg| text(msg).color(ERROR_COLOR)))
    .push(submit)
    .spacing(14)
    .align_x(Alignment::Center);

    container(content)
        .padding(32)
        .max_width(560.0)
        .style(container::rounded_box)
        .into()
}
