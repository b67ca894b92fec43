pub mod code;
pub mod error;
pub mod panel;
pub mod validate;

pub use code::{SHORT_CODE_LENGTH, generate_short_code};
pub use error::ShortenError;
pub use panel::{
    DEFAULT_VALID_MINUTES, MAX_ENTRIES_PER_SESSION, ShortenerPanel, parse_valid_minutes,
};
pub use validate::is_valid_url;
