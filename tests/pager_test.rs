use std::fs;

use lumbung::{
    storage::pager::Pager,
    types::{PAGE_SIZE, ROW_SIZE, TABLE_MAX_PAGES, error::DatabaseError},
    utils::mock::TempDatabase,
};

#[test]
fn test_open_creates_file() {
    let temp_db = TempDatabase::with_prefix("pager_open_test");
    assert!(!temp_db.path.exists());
    let pager = Pager::open(&temp_db.path).unwrap();
    assert!(temp_db.path.exists());
    assert_eq!(pager.file_length(), 0);
}

#[test]
fn test_open_records_existing_file_length() {
    let temp_db = TempDatabase::with_prefix("pager_length_test");
    fs::write(&temp_db.path, vec![0u8; 1234]).unwrap();
    let pager = Pager::open(&temp_db.path).unwrap();
    assert_eq!(pager.file_length(), 1234);
}

#[test]
fn test_get_page_out_of_bounds() {
    let temp_db = TempDatabase::with_prefix("pager_bounds_test");
    let mut pager = Pager::open(&temp_db.path).unwrap();
    let err = pager.get_page(TABLE_MAX_PAGES).unwrap_err();
    match err {
        DatabaseError::PageOutOfBounds { requested, max } => {
            assert_eq!(requested, TABLE_MAX_PAGES);
            assert_eq!(max, TABLE_MAX_PAGES);
        }
        other => panic!("expected PageOutOfBounds, got {other:?}"),
    }
}

#[test]
fn test_get_page_identity_cache() {
    let temp_db = TempDatabase::with_prefix("pager_identity_test");
    let mut pager = Pager::open(&temp_db.path).unwrap();
    pager.get_page(0).unwrap().bytes_mut()[0] = 0x5A;
    // The same page number returns the same buffer, not a fresh copy
    assert_eq!(pager.get_page(0).unwrap().bytes()[0], 0x5A);
    assert!(pager.page_is_resident(0));
    assert!(!pager.page_is_resident(1));
}

#[test]
fn test_get_page_loads_from_disk() {
    let temp_db = TempDatabase::with_prefix("pager_load_test");
    let mut content = vec![0u8; PAGE_SIZE * 2];
    content[0] = 0x01;
    content[PAGE_SIZE] = 0x02;
    fs::write(&temp_db.path, &content).unwrap();

    let mut pager = Pager::open(&temp_db.path).unwrap();
    assert_eq!(pager.get_page(0).unwrap().bytes()[0], 0x01);
    assert_eq!(pager.get_page(1).unwrap().bytes()[0], 0x02);
}

#[test]
fn test_get_page_accepts_short_read() {
    let temp_db = TempDatabase::with_prefix("pager_short_read_test");
    // A trailing partial page: one row plus a few bytes
    fs::write(&temp_db.path, vec![0x7Fu8; ROW_SIZE + 5]).unwrap();

    let mut pager = Pager::open(&temp_db.path).unwrap();
    let page = pager.get_page(0).unwrap();
    assert!(page.bytes()[..ROW_SIZE + 5].iter().all(|&b| b == 0x7F));
    // The unread remainder of the buffer stays zeroed
    assert!(page.bytes()[ROW_SIZE + 5..].iter().all(|&b| b == 0));
}

#[test]
fn test_flush_missing_page() {
    let temp_db = TempDatabase::with_prefix("pager_flush_missing_test");
    let mut pager = Pager::open(&temp_db.path).unwrap();
    let err = pager.flush(0, PAGE_SIZE).unwrap_err();
    assert!(matches!(err, DatabaseError::FlushMissingPage { page: 0 }));
}

#[test]
fn test_flush_partial_page_writes_exact_byte_count() {
    let temp_db = TempDatabase::with_prefix("pager_flush_partial_test");
    let mut pager = Pager::open(&temp_db.path).unwrap();
    pager.get_page(0).unwrap().bytes_mut().fill(0x33);
    pager.flush(0, 2 * ROW_SIZE).unwrap();
    drop(pager);

    let content = fs::read(&temp_db.path).unwrap();
    assert_eq!(content.len(), 2 * ROW_SIZE);
    assert!(content.iter().all(|&b| b == 0x33));
}

#[test]
fn test_flush_full_page() {
    let temp_db = TempDatabase::with_prefix("pager_flush_full_test");
    let mut pager = Pager::open(&temp_db.path).unwrap();
    pager.get_page(0).unwrap().bytes_mut().fill(0x44);
    pager.flush(0, PAGE_SIZE).unwrap();
    pager.close().unwrap();

    let content = fs::read(&temp_db.path).unwrap();
    assert_eq!(content.len(), PAGE_SIZE);
}

#[test]
fn test_release_page() {
    let temp_db = TempDatabase::with_prefix("pager_release_test");
    let mut pager = Pager::open(&temp_db.path).unwrap();
    pager.get_page(3).unwrap();
    assert!(pager.page_is_resident(3));
    pager.release_page(3);
    assert!(!pager.page_is_resident(3));
}
