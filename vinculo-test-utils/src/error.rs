use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Carries failures from the crate under test, which cannot be a
    /// dependency of this one.
    #[error("{0}")]
    Server(String),
}
