#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::{BlockColor, Grid, Piece, TetrominoType};
    use crate::tests::test_utils::{grid_from_rows, grid_rows};

    fn shape_rows(piece: &Piece) -> Vec<String> {
        (0..piece.height())
            .map(|r| {
                (0..piece.width())
                    .map(|c| if piece.shape.is_filled(r, c) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_every_tetromino_has_four_cells() {
        for kind in TetrominoType::ALL {
            let piece = Piece::new(kind, BlockColor::Cyan);
            assert_eq!(piece.cells().count(), 4, "{kind:?} should have 4 cells");
        }
    }

    #[test]
    fn test_spawn_shapes() {
        let t = Piece::new(TetrominoType::T, BlockColor::Magenta);
        assert_eq!(shape_rows(&t), vec!["###", ".#."]);

        let i = Piece::new(TetrominoType::I, BlockColor::Cyan);
        assert_eq!((i.width(), i.height()), (4, 1));

        let o = Piece::new(TetrominoType::O, BlockColor::Yellow);
        assert_eq!((o.width(), o.height()), (2, 2));
    }

    #[test]
    fn test_rotation_is_clockwise() {
        let t = Piece::new(TetrominoType::T, BlockColor::Magenta).rotated();
        assert_eq!(shape_rows(&t), vec![".#", "##", ".#"]);

        let s = Piece::new(TetrominoType::S, BlockColor::Green).rotated();
        assert_eq!(shape_rows(&s), vec![".#", "##", "#."]);
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let i = Piece::new(TetrominoType::I, BlockColor::Cyan).rotated();
        assert_eq!((i.width(), i.height()), (1, 4));

        let l = Piece::new(TetrominoType::L, BlockColor::Orange).rotated();
        assert_eq!((l.width(), l.height()), (2, 3));
    }

    #[test]
    fn test_four_rotations_restore_shape() {
        for kind in TetrominoType::ALL {
            let piece = Piece::new(kind, BlockColor::Red);
            let turned = piece.rotated().rotated().rotated().rotated();
            assert_eq!(turned.shape, piece.shape, "{kind:?} should come back around");
        }
    }

    #[test]
    fn test_spawn_is_centered() {
        let i = Piece::spawned(TetrominoType::I, BlockColor::Cyan, 10);
        assert_eq!((i.position.x, i.position.y), (3, 0));

        let o = Piece::spawned(TetrominoType::O, BlockColor::Yellow, 10);
        assert_eq!(o.position.x, 4);

        let t = Piece::spawned(TetrominoType::T, BlockColor::Magenta, 12);
        assert_eq!(t.position.x, 5);
    }

    #[test]
    fn test_piece_cells_are_absolute() {
        let piece = Piece::new(TetrominoType::O, BlockColor::Yellow).at(3, 5);
        let mut cells: Vec<_> = piece.cells().collect();
        cells.sort_unstable();
        assert_eq!(cells, vec![(3, 5), (3, 6), (4, 5), (4, 6)]);

        let moved = piece.moved(-1, 2);
        assert_eq!((moved.position.x, moved.position.y), (2, 7));
    }

    #[test]
    fn test_is_occupied_edges() {
        let grid = grid_from_rows(&["....", "....", ".#.."]);

        // Above the top row is open space
        assert!(!grid.is_occupied(1, -1));
        // Walls and floor block
        assert!(grid.is_occupied(-1, 0));
        assert!(grid.is_occupied(4, 0));
        assert!(grid.is_occupied(0, 3));
        // Settled block
        assert!(grid.is_occupied(1, 2));
        assert!(!grid.is_occupied(0, 2));
    }

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let grid = grid_from_rows(&["##", "##"]);
        assert_eq!(grid.cell(0, 0), Some(BlockColor::Blue));
        assert_eq!(grid.cell(-1, 0), None);
        assert_eq!(grid.cell(0, 2), None);
        assert_eq!(grid.cell(5, 5), None);
    }

    #[test]
    fn test_merge_writes_piece_color() {
        let mut grid = Grid::new(6, 6);
        let piece = Piece::new(TetrominoType::T, BlockColor::Magenta).at(1, 4);
        grid.merge(&piece);

        assert_eq!(grid.filled_cells(), 4);
        assert_eq!(grid.cell(2, 5), Some(BlockColor::Magenta));
        assert_eq!(grid.cell(1, 5), None);
    }

    #[test]
    fn test_merge_skips_cells_above_grid() {
        let mut grid = Grid::new(4, 4);
        let piece = Piece::new(TetrominoType::O, BlockColor::Yellow).at(0, -1);
        grid.merge(&piece);

        assert_eq!(grid.filled_cells(), 2);
        assert_eq!(grid_rows(&grid)[0], "##..");
    }

    #[test]
    fn test_clear_adjacent_lines() {
        let mut grid = grid_from_rows(&["....", "#...", "####", "####"]);

        assert_eq!(grid.clear_completed_lines(), 2);
        assert_eq!(grid_rows(&grid), vec!["....", "....", "....", "#..."]);
    }

    #[test]
    fn test_clear_separated_lines() {
        let mut grid = grid_from_rows(&["....", "####", "#.#.", "####"]);

        assert_eq!(grid.clear_completed_lines(), 2);
        assert_eq!(grid_rows(&grid), vec!["....", "....", "....", "#.#."]);
    }

    #[test]
    fn test_clear_three_lines_around_partial_row() {
        let mut grid = grid_from_rows(&["####", "####", "#.#.", "####"]);

        assert_eq!(grid.clear_completed_lines(), 3);
        assert_eq!(grid_rows(&grid), vec!["....", "....", "....", "#.#."]);
        assert_eq!(grid.cell(0, 3), Some(BlockColor::Blue));
        assert_eq!(grid.filled_cells(), 2);
    }

    #[test]
    fn test_clear_four_lines() {
        let mut grid = grid_from_rows(&["##.#", "####", "####", "####", "####"]);

        assert_eq!(grid.clear_completed_lines(), 4);
        assert_eq!(grid_rows(&grid), vec!["....", "....", "....", "....", "##.#"]);
    }

    #[test]
    fn test_clear_nothing_when_no_row_complete() {
        let mut grid = grid_from_rows(&["....", "###.", ".###"]);
        let before = grid.clone();

        assert_eq!(grid.clear_completed_lines(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_resets_grid() {
        let mut grid = grid_from_rows(&["#..#", "####"]);
        assert!(!grid.is_empty());

        grid.clear();
        assert!(grid.is_empty());
        assert_eq!((grid.width(), grid.height()), (4, 2));
    }
}
