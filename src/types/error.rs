use thiserror::Error;

use crate::types::PageId;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table is full ({max} rows)")]
    TableFull { max: usize },

    #[error("Page number {requested} out of bounds (max: {max})")]
    PageOutOfBounds { requested: PageId, max: usize },

    #[error("Tried to flush a page that was never loaded (page {page})")]
    FlushMissingPage { page: PageId },

    #[error("Invalid row slot {index} (rows per page: {max})")]
    InvalidSlotIndex { index: usize, max: usize },

    #[error("Value too long for column '{column}': {length} bytes (max: {max})")]
    ValueTooLong {
        column: &'static str,
        length: usize,
        max: usize,
    },

    #[error("Invalid row buffer: expected {expected} bytes, got {actual}")]
    InvalidRowBuffer { expected: usize, actual: usize },
}

impl DatabaseError {
    /// Whether the session can continue after this error. Environment
    /// failures abort at the top-level boundary; rejected operations are
    /// reported and the loop goes on.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            DatabaseError::TableFull { .. } | DatabaseError::ValueTooLong { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
