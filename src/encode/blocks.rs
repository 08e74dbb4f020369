use crate::encode::record::Block;

/// Run-length-encode one boolean row into an ordered block list.
///
/// The row is treated as if padded with one background cell on each side, so
/// offsets are expressed against a `width + 2` coordinate space with the
/// first real pixel at offset 1. Real foreground runs are bracketed by two
/// 1-unit sentinel blocks at offsets `0` and `width + 1`: they guarantee a
/// non-empty block list for all-background rows and anchor the row's visual
/// extent independent of content.
///
/// `width` is the configured horizontal resolution. Rows of a different
/// length still encode against it; the result stays syntactically valid but
/// no longer lines up visually. Mismatched rows are not treated as errors.
pub fn encode_row(row: &[bool], width: u32) -> Vec<Block> {
    let mut blocks = vec![Block { start: 0, size: 1 }];

    let mut run_start = None;
    for (i, &px) in row.iter().enumerate() {
        match (run_start, px) {
            (None, true) => run_start = Some(i as u64 + 1),
            (Some(start), false) => {
                blocks.push(Block {
                    start,
                    size: i as u64 + 1 - start,
                });
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        blocks.push(Block {
            start,
            size: row.len() as u64 + 1 - start,
        });
    }

    blocks.push(Block {
        start: u64::from(width) + 1,
        size: 1,
    });
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expand the real (non-sentinel) blocks back into a boolean row.
    fn expand(blocks: &[Block], width: usize) -> Vec<bool> {
        let mut row = vec![false; width];
        for b in &blocks[1..blocks.len() - 1] {
            for cell in row
                .iter_mut()
                .skip(b.start as usize - 1)
                .take(b.size as usize)
            {
                *cell = true;
            }
        }
        row
    }

    #[test]
    fn all_background_row_yields_only_sentinels() {
        let blocks = encode_row(&vec![false; 1440], 1440);
        assert_eq!(
            blocks,
            vec![Block { start: 0, size: 1 }, Block { start: 1441, size: 1 }]
        );
    }

    #[test]
    fn all_foreground_row_yields_one_full_run() {
        let blocks = encode_row(&vec![true; 1440], 1440);
        assert_eq!(
            blocks,
            vec![
                Block { start: 0, size: 1 },
                Block { start: 1, size: 1440 },
                Block { start: 1441, size: 1 },
            ]
        );
    }

    #[test]
    fn single_run_offsets_are_padded_coordinates() {
        // Foreground for columns [10, 20) only.
        let mut row = vec![false; 1440];
        for cell in row.iter_mut().skip(10).take(10) {
            *cell = true;
        }
        let blocks = encode_row(&row, 1440);
        assert_eq!(
            blocks,
            vec![
                Block { start: 0, size: 1 },
                Block { start: 11, size: 10 },
                Block { start: 1441, size: 1 },
            ]
        );
    }

    #[test]
    fn trailing_run_is_closed_at_row_end() {
        let row = [false, true, true];
        let blocks = encode_row(&row, 3);
        assert_eq!(
            blocks,
            vec![
                Block { start: 0, size: 1 },
                Block { start: 2, size: 2 },
                Block { start: 4, size: 1 },
            ]
        );
    }

    #[test]
    fn starts_are_strictly_increasing_and_disjoint() {
        let patterns: Vec<Vec<bool>> = vec![
            vec![true, false, true, true, false, false, true],
            vec![true; 7],
            vec![false; 7],
            vec![false, true, false, true, false, true, false],
        ];
        for row in patterns {
            let blocks = encode_row(&row, row.len() as u32);
            for pair in blocks.windows(2) {
                assert!(pair[0].start < pair[1].start);
                assert!(pair[0].start + pair[0].size <= pair[1].start);
            }
            assert!(blocks.len() >= 2);
        }
    }

    #[test]
    fn real_blocks_round_trip_the_row() {
        let patterns: Vec<Vec<bool>> = vec![
            vec![false; 16],
            vec![true; 16],
            vec![true, false, true, true, false, false, true, true, true, false],
            (0..64).map(|i| i % 3 == 0).collect(),
            (0..33).map(|i| i / 4 % 2 == 1).collect(),
        ];
        for row in patterns {
            let blocks = encode_row(&row, row.len() as u32);
            assert_eq!(expand(&blocks, row.len()), row);
        }
    }
}
