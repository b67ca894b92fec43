use chrono::{DateTime, Local};
use entity::ShortenedEntry;
use tracing::{info, warn};

use crate::code::{SHORT_CODE_LENGTH, generate_short_code};
use crate::error::ShortenError;
use crate::validate::is_valid_url;

pub const MAX_ENTRIES_PER_SESSION: usize = 5;
pub const DEFAULT_VALID_MINUTES: i64 = 30;

/// Form state plus the entries created so far in this session.
///
/// Inputs are only cleared by a successful [`ShortenerPanel::shorten`]; a
/// rejected submission leaves them as typed.
#[derive(Debug, Default)]
pub struct ShortenerPanel {
    url: String,
    validity: String,
    custom_code: String,
    error: String,
    entries: Vec<ShortenedEntry>,
}

impl ShortenerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_validity(&mut self, validity: impl Into<String>) {
        self.validity = validity.into();
    }

    pub fn set_custom_code(&mut self, custom_code: impl Into<String>) {
        self.custom_code = custom_code.into();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn validity(&self) -> &str {
        &self.validity
    }

    pub fn custom_code(&self) -> &str {
        &self.custom_code
    }

    /// Inline error from the last submission; empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn entries(&self) -> &[ShortenedEntry] {
        &self.entries
    }

    pub fn remaining(&self) -> usize {
        MAX_ENTRIES_PER_SESSION.saturating_sub(self.entries.len())
    }

    pub fn shorten(&mut self, origin: &str) -> Result<&ShortenedEntry, ShortenError> {
        self.shorten_at(origin, Local::now())
    }

    /// Validate the inputs and append a new entry created at `now`.
    ///
    /// Both rejections happen before anything but the error field is touched.
    pub fn shorten_at(
        &mut self,
        origin: &str,
        now: DateTime<Local>,
    ) -> Result<&ShortenedEntry, ShortenError> {
        self.error.clear();

        if !is_valid_url(&self.url) {
            self.error = ShortenError::InvalidUrl.to_string();
            warn!(url = %self.url, "Invalid URL attempted");
            return Err(ShortenError::InvalidUrl);
        }

        if self.entries.len() >= MAX_ENTRIES_PER_SESSION {
            warn!(limit = MAX_ENTRIES_PER_SESSION, "Session limit reached");
            return Err(ShortenError::SessionLimit);
        }

        // Taking the inputs also clears them for the next submission.
        let original_url = std::mem::take(&mut self.url);
        let custom_code = std::mem::take(&mut self.custom_code);
        let validity = std::mem::take(&mut self.validity);

        let code = if custom_code.is_empty() {
            generate_short_code(SHORT_CODE_LENGTH)
        } else {
            custom_code
        };
        let valid_minutes = parse_valid_minutes(&validity);

        let entry = ShortenedEntry::new(original_url, origin, code, valid_minutes, now);
        info!(
            url = %entry.original_url,
            short_url = %entry.short_url,
            valid_minutes = entry.valid_minutes,
            "Shortened URL created"
        );

        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }
}

/// Minutes of validity typed into the form.
///
/// Reads a leading integer the way form text is usually coerced: leading
/// whitespace and one sign are allowed and anything after the digits is
/// ignored. Empty or digit-less input falls back to
/// [`DEFAULT_VALID_MINUTES`].
pub fn parse_valid_minutes(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for b in run {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return DEFAULT_VALID_MINUTES;
    }
    if negative { -value } else { value }
}
