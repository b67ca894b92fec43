pub mod entry;

pub use entry::ShortenedEntry;
