use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerscopeError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("student profile parse error: {0}")]
    InputParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("file already exists (use --force to overwrite): {0}")]
    FileExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CareerscopeError>;
