//! Row Tests
//!
//! Tests for row iteration and mutation: span tiling, corruption
//! detection, compaction, and append growth.

use rowpack::{
    append_entries, calculate_needed_space, iterate_blocks, remove_ranges, RowError, RowIter, Span,
};

// =============================================================================
// Iteration Tests
// =============================================================================

#[test]
fn test_iterate_mixed_blocks() {
    // short block, long block, another long block
    let row: Vec<u8> = [
        vec![0x01, 0x00],
        vec![0x81, 0x03, 0x01, 0x02, 0x03],
        vec![0x81, 0x01, 0x01],
    ]
    .concat();

    let mut seen: Vec<(Vec<u8>, Span, usize)> = Vec::new();
    iterate_blocks(&row, |payload, span, index| {
        seen.push((payload.to_vec(), span, index));
    })
    .unwrap();

    assert_eq!(
        seen,
        vec![
            (vec![0x00], Span::new(0, 2), 0),
            (vec![0x01, 0x02, 0x03], Span::new(2, 7), 1),
            (vec![0x01], Span::new(7, 10), 2),
        ]
    );
}

#[test]
fn test_iterate_empty_row() {
    let mut calls = 0;
    iterate_blocks(&[], |_, _, _| calls += 1).unwrap();
    assert_eq!(calls, 0);
}

#[test]
fn test_iterate_corrupt_row_fails() {
    // Second block claims 3 payload bytes but only 1 remains
    let row = [0x01, 0xAA, 0x03, 0xBB];

    let mut seen = 0;
    let result = iterate_blocks(&row, |_, _, _| seen += 1);

    assert!(matches!(result, Err(RowError::Corruption(_))));
    assert_eq!(seen, 1, "the leading valid block is still visited");
}

#[test]
fn test_row_iter_fused_after_error() {
    let row = [0x05, 0x00];
    let mut iter = RowIter::new(&row);

    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());
}

#[test]
fn test_iteration_is_restartable() {
    let row = append_entries(&[b"abc".to_vec(), b"de".to_vec()], &[]).unwrap();

    for _ in 0..2 {
        let blocks: Vec<_> = RowIter::new(&row)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(blocks.len(), 2);
    }
}

#[test]
fn test_spans_tile_row_exactly() {
    let entries: Vec<Vec<u8>> = (0..10).map(|i| vec![i as u8; (i * 37) % 300]).collect();
    let row = append_entries(&entries, &[]).unwrap();

    let mut expected_start = 0;
    let mut payloads = Vec::new();
    iterate_blocks(&row, |payload, span, index| {
        assert_eq!(span.start, expected_start, "spans must tile with no gaps");
        assert!(span.end > span.start);
        assert_eq!(index, payloads.len());
        expected_start = span.end;
        payloads.push(payload.to_vec());
    })
    .unwrap();

    assert_eq!(expected_start, row.len());
    assert_eq!(payloads, entries);
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_to_empty_row() {
    let row = append_entries(&[vec![0x01u8]], &[]).unwrap();
    assert_eq!(row, vec![0x01, 0x01]);
}

#[test]
fn test_append_grows_row() {
    let row = vec![0x01, 0x02];
    let big = vec![2u8; 256];
    let small = vec![0x01u8];

    let appended = append_entries(&[big.clone(), small], &row).unwrap();

    let mut expected = vec![0x01, 0x02, 0x82, 0x01, 0x00];
    expected.extend_from_slice(&big);
    expected.extend_from_slice(&[0x01, 0x01]);
    assert_eq!(appended, expected);
}

#[test]
fn test_append_nothing_copies_row() {
    let row = vec![0x01, 0x07];
    let appended = append_entries::<Vec<u8>>(&[], &row).unwrap();
    assert_eq!(appended, row);
}

#[test]
fn test_append_sizes_exactly() {
    let entries = vec![vec![1u8; 10], vec![2u8; 200], Vec::new()];
    let row = append_entries(&entries, &[]).unwrap();
    assert_eq!(row.len(), calculate_needed_space(&entries));
}

#[test]
fn test_append_zero_length_entry_round_trips() {
    let entries = vec![Vec::new(), b"x".to_vec(), Vec::new()];
    let row = append_entries(&entries, &[]).unwrap();

    let mut payloads = Vec::new();
    iterate_blocks(&row, |payload, _, _| payloads.push(payload.to_vec())).unwrap();
    assert_eq!(payloads, entries);
}

// =============================================================================
// Range Removal Tests
// =============================================================================

#[test]
fn test_remove_ranges() {
    let row = [0, 1, 2, 3, 4, 5, 6, 7];
    let compacted = remove_ranges(
        &row,
        &[
            Span::new(0, 1),
            Span::new(2, 3),
            Span::new(4, 6),
            Span::new(7, 8),
        ],
    )
    .unwrap();

    assert_eq!(compacted, vec![1, 3, 6]);
}

#[test]
fn test_remove_no_ranges_copies_row() {
    let row = [9u8, 8, 7];
    assert_eq!(remove_ranges(&row, &[]).unwrap(), vec![9, 8, 7]);
}

#[test]
fn test_remove_whole_row() {
    let row = [1u8, 2, 3, 4];
    assert!(remove_ranges(&row, &[Span::new(0, 4)]).unwrap().is_empty());
}

#[test]
fn test_remove_out_of_bounds_span() {
    let row = [1u8, 2, 3];
    let result = remove_ranges(&row, &[Span::new(1, 9)]);
    assert!(matches!(result, Err(RowError::OutOfRange(_))));
}

#[test]
fn test_remove_unordered_spans_rejected() {
    let row = [0u8; 8];
    let result = remove_ranges(&row, &[Span::new(4, 6), Span::new(0, 2)]);
    assert!(matches!(result, Err(RowError::OutOfRange(_))));
}

#[test]
fn test_remove_overlapping_spans_rejected() {
    let row = [0u8; 8];
    let result = remove_ranges(&row, &[Span::new(0, 4), Span::new(3, 6)]);
    assert!(matches!(result, Err(RowError::OutOfRange(_))));
}

// =============================================================================
// Compaction End-to-End
// =============================================================================

#[test]
fn test_evict_blocks_via_spans() {
    let entries: Vec<Vec<u8>> = vec![
        b"alpha".to_vec(),
        vec![7u8; 150],
        b"beta".to_vec(),
        vec![9u8; 130],
        b"gamma".to_vec(),
    ];
    let row = append_entries(&entries, &[]).unwrap();

    // Collect the spans of the long blocks, then evict them
    let mut doomed = Vec::new();
    iterate_blocks(&row, |payload, span, _| {
        if payload.len() >= 128 {
            doomed.push(span);
        }
    })
    .unwrap();
    assert_eq!(doomed.len(), 2);

    let compacted = remove_ranges(&row, &doomed).unwrap();
    let removed: usize = doomed.iter().map(|span| span.len()).sum();
    assert_eq!(compacted.len(), row.len() - removed);

    let mut survivors = Vec::new();
    iterate_blocks(&compacted, |payload, _, _| survivors.push(payload.to_vec())).unwrap();
    assert_eq!(
        survivors,
        vec![b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec()]
    );
}

#[test]
fn test_remove_then_append_round_trip() {
    let first = append_entries(&[b"one".to_vec(), b"two".to_vec()], &[]).unwrap();

    // Evict the first block, then append a replacement
    let mut spans = Vec::new();
    iterate_blocks(&first, |_, span, index| {
        if index == 0 {
            spans.push(span);
        }
    })
    .unwrap();

    let compacted = remove_ranges(&first, &spans).unwrap();
    let second = append_entries(&[b"three".to_vec()], &compacted).unwrap();

    let mut payloads = Vec::new();
    iterate_blocks(&second, |payload, _, _| payloads.push(payload.to_vec())).unwrap();
    assert_eq!(payloads, vec![b"two".to_vec(), b"three".to_vec()]);
}
