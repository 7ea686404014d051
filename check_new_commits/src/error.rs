use std::path::PathBuf;

use reqwest::StatusCode;

// -------------------------------------------------------------------------------------------------
// Error
// -------------------------------------------------------------------------------------------------
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error building URL: component {0:?} contains a slash")]
    UrlSlash(String),

    #[error("error building URL: base URL {0:?} cannot take path segments")]
    UrlBase(String),

    #[error("error making request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed: {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
