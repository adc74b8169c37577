/// The fixed starting list for the seeded catalog

use std::path::Path;

use super::catalog::Catalog;
use super::data::Book;
use crate::cover::asset_cover;

/// (id, title, author, description, cover asset)
const SEED: [(i64, &str, &str, &str, &str); 6] = [
    (
        1,
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "A novel about the American dream and its disillusionment.",
        "book1.jpeg",
    ),
    (
        2,
        "To Kill a Mockingbird",
        "Harper Lee",
        "A powerful exploration of racial injustice in the Deep South.",
        "book2.jpeg",
    ),
    (
        3,
        "1984",
        "George Orwell",
        "A dystopian novel about totalitarianism and the loss of individual freedom.",
        "book3.jpeg",
    ),
    (
        4,
        "Pride and Prejudice",
        "Jane Austen",
        "A classic romance novel with keen social commentary.",
        "book4.jpeg",
    ),
    (
        5,
        "Moby Dick",
        "Herman Melville",
        "The epic tale of a man's obsessive quest to hunt the white whale.",
        "book5.jpeg",
    ),
    (
        6,
        "The Catcher in the Rye",
        "J.D. Salinger",
        "A novel about teenage rebellion and the struggles of growing up.",
        "book6.jpeg",
    ),
];

/// The six seeded books in declaration order, covers resolved against `asset_dir`
pub fn seeded_books(asset_dir: impl AsRef<Path>) -> Vec<Book> {
    let asset_dir = asset_dir.as_ref();
    SEED.iter()
        .map(|&(id, title, author, description, cover)| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            cover: asset_cover(asset_dir, cover),
        })
        .collect()
}

impl Catalog {
    /// A catalog pre-filled with the seeded books
    pub fn seeded(asset_dir: impl AsRef<Path>) -> Self {
        Catalog::with_books(seeded_books(asset_dir))
    }
}
