use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::Path,
};

use crate::types::{
    PAGE_SIZE, PageId, TABLE_MAX_PAGES,
    error::{DatabaseError, Result},
    page::Page,
};

/// A direct-mapped, capacity-bounded, no-eviction cache over a flat
/// file: page number N maps to file bytes `[N * PAGE_SIZE, (N + 1) *
/// PAGE_SIZE)` and to slot N of the in-memory arena. A page buffer,
/// once loaded, stays resident until it is released at close; the
/// capacity of `TABLE_MAX_PAGES` is a hard ceiling, not a cache policy.
pub struct Pager {
    file: File,
    file_length: u64,
    pages: Vec<Option<Page>>,
}

impl Pager {
    /// Open (creating if absent) the backing file for read/write and
    /// record its current length. All page slots start absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        let file_length = file.metadata()?.len();
        let mut pages = Vec::with_capacity(TABLE_MAX_PAGES);
        pages.resize_with(TABLE_MAX_PAGES, || None);
        Ok(Self {
            file,
            file_length,
            pages,
        })
    }

    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    pub fn page_is_resident(&self, page_num: PageId) -> bool {
        page_num < TABLE_MAX_PAGES && self.pages[page_num].is_some()
    }

    /// Fetch the buffer for `page_num`, loading it from the file on a
    /// cache miss. The same page number always returns the same buffer
    /// instance for the lifetime of the Pager.
    pub fn get_page(&mut self, page_num: PageId) -> Result<&mut Page> {
        if page_num >= TABLE_MAX_PAGES {
            return Err(DatabaseError::PageOutOfBounds {
                requested: page_num,
                max: TABLE_MAX_PAGES,
            });
        }

        if self.pages[page_num].is_none() {
            // Cache miss. Allocate a buffer and load from the file.
            let mut page = Page::zeroed();
            let mut num_pages = self.file_length / PAGE_SIZE as u64;
            // The file may end in a partial page
            if self.file_length % PAGE_SIZE as u64 != 0 {
                num_pages += 1;
            }
            if (page_num as u64) <= num_pages {
                self.file
                    .seek(SeekFrom::Start((page_num * PAGE_SIZE) as u64))?;
                // A short read (the trailing partial page) is accepted
                // as-is; the rest of the buffer stays zeroed.
                read_available(&mut self.file, page.bytes_mut())?;
            }
            self.pages[page_num] = Some(page);
        }

        match &mut self.pages[page_num] {
            Some(page) => Ok(page),
            None => unreachable!("slot populated above"),
        }
    }

    /// Write the first `byte_count` bytes of a resident page back to
    /// its file offset. `byte_count` lets the caller flush a partial
    /// final page without writing trailing padding.
    pub fn flush(&mut self, page_num: PageId, byte_count: usize) -> Result<()> {
        if page_num >= TABLE_MAX_PAGES {
            return Err(DatabaseError::PageOutOfBounds {
                requested: page_num,
                max: TABLE_MAX_PAGES,
            });
        }
        let page = self.pages[page_num]
            .as_ref()
            .ok_or(DatabaseError::FlushMissingPage { page: page_num })?;
        self.file
            .seek(SeekFrom::Start((page_num * PAGE_SIZE) as u64))?;
        self.file.write_all(&page.bytes()[..byte_count])?;
        self.file.flush()?;
        Ok(())
    }

    /// Drop the buffer for `page_num`, if resident. Does not write
    /// anything; callers flush first when the contents matter.
    pub fn release_page(&mut self, page_num: PageId) {
        if page_num < TABLE_MAX_PAGES {
            self.pages[page_num] = None;
        }
    }

    /// Sync and close the backing file, releasing any still-resident
    /// buffers.
    pub fn close(self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }
}

/// Fill `buf` from the reader's current position, stopping early at
/// end of file.
fn read_available(file: &mut File, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
