//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use techdaily_core::error::DomainError;
use techdaily_core::traits::RepoResult;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a batch of rows through a fallible entity conversion
pub fn convert_all<M, E>(rows: Vec<M>) -> RepoResult<Vec<E>>
where
    E: TryFrom<M, Error = DomainError>,
{
    rows.into_iter().map(E::try_from).collect()
}
