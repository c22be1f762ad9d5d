/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The per-artwork fetch/rate/submit lifecycle (item.rs)
/// - The ordered collection of displayed artworks (collection.rs)
/// - Toast notifications (notice.rs)

pub mod collection;
pub mod data;
pub mod item;
pub mod notice;
