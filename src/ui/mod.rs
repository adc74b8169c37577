/// View layer
///
/// - `form.rs` - the "Add a New Book" form
/// - `card.rs` - one book card with inline editing
/// - `grid.rs` - wrapping grid of cards for a catalog

pub mod card;
pub mod form;
pub mod grid;
