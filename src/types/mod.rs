pub mod error;
pub mod page;
pub mod row;

// Common type aliases
pub type PageId = usize;
pub type RowId = usize;

// Column capacities (payload bytes, excluding the terminator)
pub const USERNAME_MAX_LEN: usize = 32;
pub const EMAIL_MAX_LEN: usize = 255;

// On-disk row layout. The file format carries no header or version tag,
// so existing data files depend on these exact values.
pub const ID_SIZE: usize = 4;
pub const USERNAME_SIZE: usize = USERNAME_MAX_LEN + 1;
pub const EMAIL_SIZE: usize = EMAIL_MAX_LEN + 1;
pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

pub const PAGE_SIZE: usize = 4096;
// No row spans a page boundary; the tail of each page is padding.
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_PAGES: usize = 100;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;
