use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShortenError {
    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("You can only shorten up to 5 URLs per session.")]
    SessionLimit,
}
