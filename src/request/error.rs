use thiserror::Error;

/// Failure modes of a single API call: transport, non-success status, or a
/// body that does not decode. All of them surface to the UI as one message
/// string; none crosses the fetch boundary as a panic.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Upper bound on how much of an error body makes it into the message; the
/// UI renders it on a single footer line.
const STATUS_BODY_MAX_CHARS: usize = 120;

impl FetchError {
    /// Build a `Status` error with the body collapsed to one line and
    /// truncated; rate-limit responses arrive as multi-line JSON or HTML
    /// pages.
    pub fn status(status: u16, body: &str) -> Self {
        let mut text = body.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.chars().count() > STATUS_BODY_MAX_CHARS {
            text = text.chars().take(STATUS_BODY_MAX_CHARS).collect();
            text.push('…');
        }
        FetchError::Status { status, body: text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_body_is_collapsed_and_truncated() {
        let blob = format!(
            "{{\n  \"status\": {{\n    \"error_message\": \"{}\"\n  }}\n}}",
            "You've exceeded the Rate Limit. ".repeat(20)
        );
        let err = FetchError::status(429, &blob);
        let message = err.to_string();
        assert!(message.starts_with("unexpected status 429"));
        assert!(!message.contains('\n'));
        assert!(message.chars().count() < 160);
        assert!(message.ends_with('…'));
    }

    #[test]
    fn short_bodies_pass_through_intact() {
        let err = FetchError::status(404, "coin not found");
        assert_eq!(err.to_string(), "unexpected status 404: coin not found");
    }
}
