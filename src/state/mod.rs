/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The in-memory catalog and its edit cursor (catalog.rs)
/// - The fixed starting books of the seeded catalog (seed.rs)
/// - Inputs of the creation form (form.rs)

pub mod catalog;
pub mod data;
pub mod form;
pub mod seed;
