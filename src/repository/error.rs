#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("invalid platform in stored document: {0}")]
    InvalidPlatform(#[from] strum::ParseError),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
