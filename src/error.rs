use thiserror::Error;

/// Errors that can occur while fetching or decoding a shape's image.
///
/// These never reach the user as a failure. A shape whose image cannot be
/// loaded keeps rendering as an empty box and stays fully interactive.
#[derive(Error, Debug)]
pub enum TextureLoadError {
    #[error("failed to fetch image: {0}")]
    Fetch(String),
    #[error("failed to decode image: {0}")]
    Decode(String),
}
