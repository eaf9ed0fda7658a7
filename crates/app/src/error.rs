use engine::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("category \"{0}\" already exists")]
    ExistingCategory(String),
    #[error("category \"{0}\" not found")]
    UnknownCategory(String),
    #[error("invalid name: {0}")]
    InvalidName(String),
}

impl AppError {
    /// Errors caused by what the user typed. The menu reports them and keeps
    /// going; anything else ends the session.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Engine(_)
                | Self::ExistingCategory(_)
                | Self::UnknownCategory(_)
                | Self::InvalidName(_)
        )
    }
}
