use std::fmt;

use clipper_core::{FinishedNote, Source};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The input was recognised and extraction has begun.
    Started {
        request_id: RequestId,
        source: Source,
    },
    Completed {
        request_id: RequestId,
        input: String,
        /// `Ok(None)` when the input was not a recognised content request.
        result: Result<Option<FinishedNote>, ExtractError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// HTTP 429. The only kind worth retrying later.
    RateLimited,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
    SchemaNotFound,
    MalformedSchema,
}

impl FailureKind {
    pub fn is_retryable(&self) -> bool {
        matches!(self, FailureKind::RateLimited)
    }

    /// Network-level failure rather than a response the server chose to send.
    pub fn is_transport(&self) -> bool {
        matches!(self, FailureKind::Timeout | FailureKind::Network)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::RateLimited => write!(f, "rate limited (HTTP 429), try again later"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::SchemaNotFound => write!(f, "structured data not found"),
            FailureKind::MalformedSchema => write!(f, "malformed structured data"),
        }
    }
}

/// Terminal failure of one extraction request, reported once at the
/// extractor boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} {kind}: {message}", .origin.failure_message())]
pub struct ExtractError {
    pub origin: Source,
    pub kind: FailureKind,
    pub message: String,
}

impl ExtractError {
    pub fn new(origin: Source, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            origin,
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn fetch(origin: Source, err: FetchError) -> Self {
        Self::new(origin, err.kind, err.message)
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
