use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Blocksize must be greater than 0, got: {blocksize}")]
    ZeroBlocksize { blocksize: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Translation error: {0}")]
    Translate(#[from] hlscog::Error),
}
