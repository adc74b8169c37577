use iced::widget::text;
use iced::{Element, Length};
use iced_aw::Wrap;

use super::card::book_card;
use crate::config::AppConfig;
use crate::state::catalog::Catalog;
use crate::{CatalogKind, Message};

/// Lay out a catalog's cards in wrapping rows, in catalog order
pub fn book_grid<'a>(
    catalog: &'a Catalog,
    kind: CatalogKind,
    config: &AppConfig,
    empty_label: Option<&'a str>,
) -> Element<'a, Message> {
    if catalog.is_empty() {
        return match empty_label {
            Some(label) => text(label).size(16).into(),
            None => iced::widget::Space::new(Length::Shrink, Length::Shrink).into(),
        };
    }

    let cards: Vec<Element<'a, Message>> = catalog
        .books()
        .iter()
        .map(|book| book_card(book, catalog.is_editing(book.id), kind, config))
        .collect();

    Wrap::with_elements(cards)
        .spacing(24.0)
        .line_spacing(24.0)
        .into()
}
