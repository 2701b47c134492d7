use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("creating log directory {}", path.display())]
    LogDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid log filter `{directive}`")]
    LogFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("log subscriber already installed elsewhere")]
    LogInstalled,

    #[error("start location must be an absolute path, got `{0}`")]
    StartLocation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
