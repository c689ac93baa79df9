use thiserror::Error;

/// Error raised by the outer layers (rendering, config, CLI).
///
/// The growth-series core never produces one of these: every label resolves
/// and every computation is total.
#[derive(Debug, Clone, Error)]
#[error("{kind:?}: {message}")]
pub struct ChartError {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Render,
    Io,
    Config,
}

impl ChartError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Render, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }
}

pub type ChartResult<T> = Result<T, ChartError>;
