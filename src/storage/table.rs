use std::path::Path;

use crate::{
    storage::pager::Pager,
    types::{
        PAGE_SIZE, PageId, ROW_SIZE, ROWS_PER_PAGE, RowId, TABLE_MAX_ROWS,
        error::{DatabaseError, Result},
        row::Row,
    },
};

/// The single table of the store: a row count plus exclusive ownership
/// of one Pager. Rows are append-only and addressed by logical index;
/// `close` is the only durability point.
pub struct Table {
    num_rows: usize,
    pager: Pager,
}

/// Byte offset of row `row_num` in the backing file. Rows are grouped
/// into page-aligned groups of `ROWS_PER_PAGE`, so this is not simply
/// `row_num * ROW_SIZE`.
pub fn row_file_offset(row_num: RowId) -> u64 {
    let page_num = row_num / ROWS_PER_PAGE;
    let slot = row_num % ROWS_PER_PAGE;
    (page_num * PAGE_SIZE + slot * ROW_SIZE) as u64
}

impl Table {
    /// Open the database at `path`. The row count is derived from the
    /// file length; trailing bytes that do not form a complete row are
    /// silently ignored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let pager = Pager::open(path)?;
        let num_rows = (pager.file_length() / ROW_SIZE as u64) as usize;
        Ok(Self { num_rows, pager })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn row_location(row_num: RowId) -> (PageId, usize) {
        (row_num / ROWS_PER_PAGE, row_num % ROWS_PER_PAGE)
    }

    /// Append a row. Returns `TableFull` without side effects when the
    /// table is at capacity. Duplicate ids are accepted silently; there
    /// is no key uniqueness check.
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        if self.num_rows >= TABLE_MAX_ROWS {
            return Err(DatabaseError::TableFull {
                max: TABLE_MAX_ROWS,
            });
        }
        let (page_num, slot) = Self::row_location(self.num_rows);
        let page = self.pager.get_page(page_num)?;
        row.serialize_into(page.row_slot_mut(slot)?)?;
        self.num_rows += 1;
        Ok(())
    }

    fn row(&mut self, row_num: RowId) -> Result<Row> {
        let (page_num, slot) = Self::row_location(row_num);
        let page = self.pager.get_page(page_num)?;
        Row::deserialize_from(page.row_slot(slot)?)
    }

    /// Lazy scan over all rows in insertion order. The iterator
    /// snapshots the row count at creation; calling `rows` again
    /// restarts from the beginning.
    pub fn rows(&mut self) -> Rows<'_> {
        let end = self.num_rows;
        Rows {
            table: self,
            next: 0,
            end,
        }
    }

    /// Flush every resident page that holds rows (partial final page
    /// included, trimmed to its last valid row), release the buffers,
    /// and close the backing file. Consumes the table; there is no
    /// reopen through the same handle.
    pub fn close(mut self) -> Result<()> {
        let num_full_pages = self.num_rows / ROWS_PER_PAGE;
        for page_num in 0..num_full_pages {
            if self.pager.page_is_resident(page_num) {
                self.pager.flush(page_num, PAGE_SIZE)?;
                self.pager.release_page(page_num);
            }
        }

        // No trailing padding is written for the last, partial page
        let trailing_rows = self.num_rows % ROWS_PER_PAGE;
        if trailing_rows > 0 {
            let page_num = num_full_pages;
            if self.pager.page_is_resident(page_num) {
                self.pager.flush(page_num, trailing_rows * ROW_SIZE)?;
                self.pager.release_page(page_num);
            }
        }

        // Pages beyond the row-derived range are released unflushed.
        self.pager.close()
    }
}

pub struct Rows<'a> {
    table: &'a mut Table,
    next: RowId,
    end: RowId,
}

impl Iterator for Rows<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = self.table.row(self.next);
        self.next += 1;
        Some(row)
    }
}
