//! End-to-end pagination tests for the sequence paths.

use pagebound::{create_page, create_page_from_slice, Error, PageRequest};

#[test]
fn test_truncated_page_from_long_sequence() {
    let page = create_page(1..=30, &PageRequest::new(10)).unwrap();
    assert_eq!(page.items(), &(1..=10).collect::<Vec<_>>()[..]);
    assert!(page.is_truncated());
    assert_eq!(page.page_size(), 10);
}

#[test]
fn test_exactly_full_page_is_not_truncated() {
    let page = create_page(1..=10, &PageRequest::new(10)).unwrap();
    assert_eq!(page.len(), 10);
    assert!(!page.is_truncated());
}

#[test]
fn test_empty_source_yields_empty_page() {
    let page = create_page(Vec::<i32>::new(), &PageRequest::new(5)).unwrap();
    assert!(page.is_empty());
    assert!(!page.is_truncated());
}

#[test]
fn test_zero_page_size_is_rejected_for_any_source() {
    assert!(matches!(
        create_page(vec![1, 2, 3], &PageRequest::new(0)),
        Err(Error::InvalidPageSize(0))
    ));
    assert!(matches!(
        create_page_from_slice(&[1, 2, 3], &PageRequest::new(0)),
        Err(Error::InvalidPageSize(0))
    ));
}

#[test]
fn test_length_and_flag_across_page_and_source_sizes() {
    for page_size in 1..=6usize {
        for source_len in 0..=8usize {
            let source: Vec<usize> = (0..source_len).collect();
            let page = create_page(source.clone(), &PageRequest::new(page_size)).unwrap();

            assert_eq!(
                page.len(),
                page_size.min(source_len),
                "len mismatch at p={page_size} n={source_len}"
            );
            assert_eq!(
                page.is_truncated(),
                source_len > page_size,
                "flag mismatch at p={page_size} n={source_len}"
            );
            assert_eq!(page.items(), &source[..page.len()]);

            // The slice fast path must agree with the forward pass.
            let by_slice = create_page_from_slice(&source, &PageRequest::new(page_size)).unwrap();
            assert_eq!(by_slice, page);
        }
    }
}

#[test]
fn test_inconsistent_total_count_is_kept_verbatim() {
    // Caller contract: total_count is never reconciled with the observed
    // items, even when it is plainly wrong.
    let req = PageRequest::new(10).with_total_count(3);
    let page = create_page(1..=30, &req).unwrap();
    assert_eq!(page.total_count(), Some(3));
    assert_eq!(page.len(), 10);
    assert!(page.is_truncated());
}

#[test]
fn test_page_serde_round_trip() {
    let page = create_page(1..=30, &PageRequest::new(10).with_total_count(30)).unwrap();
    let json = serde_json::to_string(&page).unwrap();
    let back: pagebound::Page<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, page);
}

#[test]
fn test_single_forward_pass_on_unbounded_source() {
    let page = create_page(0u64.., &PageRequest::new(4)).unwrap();
    assert_eq!(page.items(), &[0, 1, 2, 3]);
    assert!(page.is_truncated());
}
