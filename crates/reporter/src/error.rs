use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
}
