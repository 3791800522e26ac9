use thiserror::Error;

// ---------------------------------------------------------------------------
// FetchError – everything that can go wrong between a date and a picture
// ---------------------------------------------------------------------------

/// Failure while fetching or preparing one APOD entry.
///
/// The main load path treats every variant the same way (log and try another
/// date); the info panel turns any of them into a user-facing dialog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connection, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The metadata body was not the JSON we expect.
    #[error("malformed APOD response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The entry exists but is a video or some other non-image content.
    #[error("media type '{media_type}' is not an image")]
    NotAnImage { media_type: String },

    /// The image bytes could not be decoded.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has zero width or height")]
    EmptyImage,
}
