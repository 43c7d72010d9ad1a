// Error type returned by every client operation. Each variant matches one
// of the ways a Wordstream call can go wrong, so callers match on the
// variant instead of inspecting the shape of a return value.

/// Text reported when an account lacks the credits for an operation.
pub const INSUFFICIENT_CREDITS_MESSAGE: &str = "INSUFFICIENT_CREDITS to search for keywords";

#[derive(thiserror::Error, Debug)]
pub enum WordstreamError {
    /// Login answered with a code other than `OK`.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The balance could not be read (`available` is `None`) or is below
    /// what the operation needs. No operation request was sent.
    #[error("{}", INSUFFICIENT_CREDITS_MESSAGE)]
    InsufficientCredits { required: u64, available: Option<u64> },

    /// The service answered with a non-`OK` code, kept verbatim.
    #[error("{0}")]
    Api(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl WordstreamError {
    /// The application code reported by the service, if there was one.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            WordstreamError::AuthenticationFailed(code) | WordstreamError::Api(code) => {
                Some(code.as_str())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordstreamError>;
