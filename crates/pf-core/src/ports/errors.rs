use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("catalog source unavailable: {0}")]
    Io(String),

    #[error("catalog source is malformed: {0}")]
    Parse(String),
}
