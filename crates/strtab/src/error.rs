use thiserror::Error;

/// Errors decoding raw table bytes into text.
///
/// UTF-8 is attempted first, then UTF-16; a file that fails both is
/// unreadable and reported per-file rather than aborting the run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("UTF-16 payload has an odd number of bytes")]
    TruncatedUtf16,

    #[error("content is valid neither as UTF-8 nor as UTF-16")]
    InvalidEncoding,
}

/// Precondition failures when assembling a [`Catalog`](crate::Catalog).
///
/// Without a parsed primary table there is no reference key set, so these
/// abort the whole operation instead of producing a partial report.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("primary language '{0}' has no string table")]
    PrimaryMissing(String),

    #[error("primary language '{tag}' table could not be read: {reason}")]
    PrimaryUnreadable { tag: String, reason: String },
}
