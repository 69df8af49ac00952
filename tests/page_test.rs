use lumbung::types::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, error::DatabaseError, page::Page};

#[test]
fn test_zeroed_page() {
    let page = Page::zeroed();
    assert_eq!(page.bytes().len(), PAGE_SIZE);
    assert!(page.bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_thirteen_rows_fit_in_a_page() {
    assert_eq!(ROWS_PER_PAGE, 13);
    assert!(ROWS_PER_PAGE * ROW_SIZE <= PAGE_SIZE);
    // Tail padding past the last slot
    assert_eq!(ROWS_PER_PAGE * ROW_SIZE, 3809);
}

#[test]
fn test_row_slot_bounds() {
    let page = Page::zeroed();
    assert!(page.row_slot(0).is_ok());
    assert!(page.row_slot(ROWS_PER_PAGE - 1).is_ok());
    let err = page.row_slot(ROWS_PER_PAGE).unwrap_err();
    match err {
        DatabaseError::InvalidSlotIndex { index, max } => {
            assert_eq!(index, ROWS_PER_PAGE);
            assert_eq!(max, ROWS_PER_PAGE);
        }
        other => panic!("expected InvalidSlotIndex, got {other:?}"),
    }
}

#[test]
fn test_row_slot_length() {
    let page = Page::zeroed();
    for slot in 0..ROWS_PER_PAGE {
        assert_eq!(page.row_slot(slot).unwrap().len(), ROW_SIZE);
    }
}

#[test]
fn test_slot_writes_are_disjoint() {
    let mut page = Page::zeroed();
    page.row_slot_mut(0).unwrap().fill(0x11);
    page.row_slot_mut(1).unwrap().fill(0x22);
    assert!(page.row_slot(0).unwrap().iter().all(|&b| b == 0x11));
    assert!(page.row_slot(1).unwrap().iter().all(|&b| b == 0x22));
    // Slot 2 untouched
    assert!(page.row_slot(2).unwrap().iter().all(|&b| b == 0));
}

#[test]
fn test_slot_offsets_within_page() {
    let mut page = Page::zeroed();
    page.row_slot_mut(5).unwrap()[0] = 0xFF;
    assert_eq!(page.bytes()[5 * ROW_SIZE], 0xFF);
}
