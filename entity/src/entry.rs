use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// `M/D/YYYY, h:mm:ss AM`, the en-US locale rendering used for expiry labels.
pub const EXPIRY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Offsets are clamped to a thousand years either way so the expiry always
/// lands on a representable date.
pub const MAX_VALID_MINUTES: i64 = 1_000 * 366 * 24 * 60;

/// One shortened URL created during the current session.
///
/// Entries are immutable once built; the only way to get rid of one is to
/// drop the session that owns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedEntry {
    pub original_url: String,
    pub code: String,
    pub short_url: String,
    pub expiry: String,
    pub valid_minutes: i64,
    pub created_at: DateTime<Local>,
    pub expires_at: DateTime<Local>,
}

impl ShortenedEntry {
    pub fn new(
        original_url: String,
        origin: &str,
        code: String,
        valid_minutes: i64,
        created_at: DateTime<Local>,
    ) -> Self {
        let valid_minutes = valid_minutes.clamp(-MAX_VALID_MINUTES, MAX_VALID_MINUTES);
        let short_url = format!("{}/{}", origin, code);
        let expires_at = created_at + Duration::minutes(valid_minutes);

        Self {
            original_url,
            code,
            short_url,
            expiry: format_expiry(&expires_at),
            valid_minutes,
            created_at,
            expires_at,
        }
    }
}

pub fn format_expiry(at: &DateTime<Local>) -> String {
    at.format(EXPIRY_FORMAT).to_string()
}
