use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("lead vault at {path}: {source}")]
    Vault {
        path: String,
        source: anyhow::Error,
    },
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    pub fn vault(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Vault {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
