//! Tests for the engine schematic grid, token extraction and neighbourhood queries

#[cfg(test)]
mod tests {
    use aoc2023::PuzzleError;
    use aoc2023::spatial::schematic::{EngineSchematic, Position, Token};
    use std::collections::BTreeSet;

    const SAMPLE: [&str; 10] = [
        "467..114..",
        "...*......",
        "..35..633.",
        "......#...",
        "617*......",
        ".....+.58.",
        "..592.....",
        "......755.",
        "...$.*....",
        ".664.598..",
    ];

    fn sample() -> EngineSchematic {
        EngineSchematic::from_lines(SAMPLE)
    }

    // Tests every cell of a run yields the whole run's value
    // Verified by dropping the left scan so only suffixes were read
    #[test]
    fn test_extract_number_is_seed_independent() {
        let schematic = sample();

        for col in 0..3 {
            assert_eq!(schematic.extract_number_at(0, col), Some(467));
        }
        for col in 5..8 {
            assert_eq!(schematic.extract_number_at(0, col), Some(114));
        }
        assert_eq!(schematic.extract_number_at(9, 1), Some(664));
        assert_eq!(schematic.extract_number_at(9, 3), Some(664));
    }

    // Tests empty and symbol cells never produce a number
    // Verified by classifying '.' as a digit separator only after the check
    #[test]
    fn test_extract_number_absent_for_non_digits() {
        let schematic = sample();

        assert_eq!(schematic.extract_number_at(0, 3), None);
        assert_eq!(schematic.extract_number_at(1, 3), None);
        assert_eq!(schematic.extract_number_at(3, 6), None);
    }

    // Tests out-of-bounds seeds degrade to absent instead of panicking
    // Verified by indexing the grid directly
    #[test]
    fn test_extract_number_out_of_bounds_seed() {
        let schematic = sample();

        assert_eq!(schematic.extract_number_at(10, 0), None);
        assert_eq!(schematic.extract_number_at(0, 10), None);
        assert_eq!(schematic.extract_number_at(usize::MAX, usize::MAX), None);
    }

    // Tests leading zeros are kept in the span but fold away numerically
    // Verified by trimming zeros before computing the span
    #[test]
    fn test_leading_zeros_parse_numerically() {
        let schematic = EngineSchematic::from_lines(["#007."]);

        assert_eq!(schematic.extract_number_at(0, 3), Some(7));
        assert_eq!(
            schematic.token_at(0, 1),
            Some(Token {
                row: 0,
                start: 1,
                end: 3,
                value: 7,
            })
        );
    }

    // Tests runs touching the grid edges stop there and never wrap rows
    // Verified by scanning the flattened grid instead of a single row
    #[test]
    fn test_tokens_stop_at_grid_edges() {
        let schematic = EngineSchematic::from_lines(["..12", "34.."]);

        assert_eq!(schematic.extract_number_at(0, 3), Some(12));
        assert_eq!(schematic.extract_number_at(1, 0), Some(34));

        let Some(token) = schematic.token_at(0, 2) else {
            unreachable!("expected a token at the right edge");
        };
        assert_eq!((token.start, token.end), (2, 3));
    }

    // Tests runs that overflow u64 are treated as absent
    // Verified by using wrapping arithmetic in the fold
    #[test]
    fn test_overflowing_run_is_absent() {
        let schematic = EngineSchematic::from_lines(["99999999999999999999999"]);

        assert_eq!(schematic.extract_number_at(0, 0), None);
    }

    // Tests symbols are reported in row-major order and traversal restarts cleanly
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_symbol_positions_row_major_and_restartable() {
        let schematic = sample();

        let first: Vec<Position> = schematic.symbol_positions().collect();
        let second: Vec<Position> = schematic.symbol_positions().collect();

        assert_eq!(
            first,
            vec![[1, 3], [3, 6], [4, 3], [5, 5], [8, 3], [8, 5]]
        );
        assert_eq!(first, second);
    }

    // Tests filtering positions by an exact character
    // Verified by matching any symbol instead of the requested one
    #[test]
    fn test_positions_of_character() {
        let schematic = sample();

        let gears: Vec<Position> = schematic.positions_of('*').collect();
        assert_eq!(gears, vec![[1, 3], [4, 3], [8, 5]]);
        assert_eq!(schematic.positions_of('$').collect::<Vec<_>>(), vec![[8, 3]]);
        assert_eq!(schematic.positions_of('@').count(), 0);
    }

    // Tests neighbourhood aggregation around the sample symbols
    // Verified by shrinking the block to orthogonal neighbours only
    #[test]
    fn test_tokens_around_sample_symbols() {
        let schematic = sample();

        assert_eq!(schematic.tokens_around(1, 3), BTreeSet::from([35, 467]));
        assert_eq!(schematic.tokens_around(3, 6), BTreeSet::from([633]));
        assert_eq!(schematic.tokens_around(8, 5), BTreeSet::from([598, 755]));
        assert_eq!(schematic.tokens_around(1, 3), schematic.tokens_around(1, 3));
    }

    // Tests a run covering several neighbour cells is counted once
    // Verified by collecting into a Vec instead of a set
    #[test]
    fn test_tokens_around_counts_spanning_run_once() {
        let schematic = EngineSchematic::from_lines(["123", ".*."]);

        assert_eq!(schematic.tokens_around(1, 1), BTreeSet::from([123]));
        assert_eq!(schematic.adjacent_tokens(1, 1).len(), 1);
    }

    // Tests runs outside the block are ignored even when on a neighbouring row
    // Verified by widening the column range by one
    #[test]
    fn test_tokens_around_ignores_distant_runs() {
        let schematic = EngineSchematic::from_lines(["1...2", "..#..", "3...4"]);

        assert!(schematic.tokens_around(1, 2).is_empty());
    }

    // Tests corner symbols only consider in-bounds cells
    // Verified by wrapping negative offsets to the far edge
    #[test]
    fn test_tokens_around_corners() {
        let top_left = EngineSchematic::from_lines(["*1", "23"]);
        assert_eq!(top_left.tokens_around(0, 0), BTreeSet::from([1, 23]));

        let bottom_right = EngineSchematic::from_lines(["12", "3#"]);
        assert_eq!(bottom_right.tokens_around(1, 1), BTreeSet::from([3, 12]));
    }

    // Tests distinct runs with equal values collapse in the value set
    // while the span-keyed variant keeps both
    // Verified by keying the value set by span
    #[test]
    fn test_equal_values_collapse_but_spans_do_not() {
        let schematic = EngineSchematic::from_lines(["5.5", ".*."]);

        assert_eq!(schematic.tokens_around(1, 1), BTreeSet::from([5]));

        let tokens = schematic.adjacent_tokens(1, 1);
        assert_eq!(
            tokens,
            vec![
                Token {
                    row: 0,
                    start: 0,
                    end: 0,
                    value: 5,
                },
                Token {
                    row: 0,
                    start: 2,
                    end: 2,
                    value: 5,
                },
            ]
        );
    }

    // Tests short rows read as absent past their end
    // Verified by padding rows with the empty cell marker
    #[test]
    fn test_ragged_rows() {
        let schematic = EngineSchematic::from_lines(["12", "....#"]);

        assert_eq!(schematic.rows(), 2);
        assert_eq!(schematic.cols(), 5);
        assert_eq!(schematic.cell(0, 1), Some('2'));
        assert_eq!(schematic.cell(0, 4), None);
        assert_eq!(schematic.positions_of('.').count(), 4);
        assert_eq!(schematic.symbol_positions().collect::<Vec<_>>(), vec![[1, 4]]);
    }

    // Tests trailing whitespace is stripped and display restores the lines
    // Verified by keeping the raw line text
    #[test]
    fn test_trailing_whitespace_and_display() {
        let schematic = EngineSchematic::from_lines(["12.# \t", ".3..\r"]);

        assert_eq!(schematic.cols(), 4);
        assert_eq!(schematic.to_string(), "12.#\n.3..");
        assert_eq!(sample().to_string(), SAMPLE.join("\n"));
    }

    // Tests loading from a file and the missing-file failure
    // Verified by returning an empty grid for missing paths
    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schematic.txt");
        std::fs::write(&path, SAMPLE.join("\n") + "\n").unwrap();

        let schematic = EngineSchematic::from_path(&path).unwrap();
        assert_eq!((schematic.rows(), schematic.cols()), (10, 10));

        let missing = EngineSchematic::from_path(dir.path().join("absent.txt"));
        assert!(matches!(missing, Err(PuzzleError::InputNotFound { .. })));
    }
}
