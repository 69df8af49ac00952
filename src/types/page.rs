use crate::types::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, error::DatabaseError};

/*
 * Page Layout on Disk
 * ┌─────────────────────────────────────────────────────────────┐
 * │ row slot 0 (293 bytes)                                      │
 * ├─────────────────────────────────────────────────────────────┤
 * │ row slot 1 (293 bytes)                                      │
 * ├─────────────────────────────────────────────────────────────┤
 * │ ...                                                         │
 * ├─────────────────────────────────────────────────────────────┤
 * │ row slot 12 (293 bytes)                                     │
 * ├─────────────────────────────────────────────────────────────┤
 * │ padding (bytes 3809..4096, never interpreted)               │
 * └─────────────────────────────────────────────────────────────┘
 */

#[derive(Debug)]
pub struct Page {
    data: Box<[u8; PAGE_SIZE]>,
}

impl Page {
    pub fn zeroed() -> Self {
        Self {
            data: Box::new([0u8; PAGE_SIZE]),
        }
    }

    /// Read-only view of the `[slot * ROW_SIZE, (slot + 1) * ROW_SIZE)`
    /// sub-range holding one encoded row.
    pub fn row_slot(&self, slot: usize) -> Result<&[u8], DatabaseError> {
        let range = Self::slot_range(slot)?;
        Ok(&self.data[range])
    }

    pub fn row_slot_mut(&mut self, slot: usize) -> Result<&mut [u8], DatabaseError> {
        let range = Self::slot_range(slot)?;
        Ok(&mut self.data[range])
    }

    fn slot_range(slot: usize) -> Result<std::ops::Range<usize>, DatabaseError> {
        if slot >= ROWS_PER_PAGE {
            return Err(DatabaseError::InvalidSlotIndex {
                index: slot,
                max: ROWS_PER_PAGE,
            });
        }
        let start = slot * ROW_SIZE;
        Ok(start..start + ROW_SIZE)
    }

    pub fn bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.data
    }

    pub fn bytes_mut(&mut self) -> &mut [u8; PAGE_SIZE] {
        &mut self.data
    }
}
