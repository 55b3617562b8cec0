use thiserror::Error;

/// Errors produced while building or inspecting a moving average window.
#[derive(Debug, Error)]
pub enum Error {
    #[error("moving average queue is empty")]
    QueueEmpty,

    #[error("moving average window must hold at least one sample")]
    ZeroCapacity,

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
