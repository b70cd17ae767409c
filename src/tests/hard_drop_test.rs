#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::{BlockColor, Piece, TetrominoType};
    use crate::factory::PieceFactory;
    use crate::input::Command;
    use crate::simulation::{Simulation, TickOutcome};
    use crate::tests::test_utils::{grid_from_rows, repeating_simulation, simulation_on};

    #[test]
    fn test_hard_drop() {
        let mut sim = repeating_simulation(10, 20, TetrominoType::I);
        let start = *sim.current();

        assert!(sim.apply(Command::HardDrop));

        // The piece lands on the floor without changing column
        assert_eq!(sim.current().position.x, start.position.x);
        assert_eq!(sim.current().position.y, 19);
        assert_eq!(sim.current().position.y, sim.ghost_row());

        // Two points per row travelled
        assert_eq!(sim.score(), 38);
    }

    #[test]
    fn test_hard_drop_does_not_lock() {
        let mut sim = repeating_simulation(10, 20, TetrominoType::O);
        sim.apply(Command::HardDrop);

        // Settling happens on the next gravity step
        assert!(sim.grid().is_empty());
        assert_eq!(sim.tick(250), TickOutcome::Locked { lines: 0 });
        assert_eq!(sim.grid().filled_cells(), 4);
    }

    #[test]
    fn test_hard_drop_onto_stack() {
        let grid = grid_from_rows(&["......", "......", "......", "......", "..#...", "######"]);
        let current = Piece::new(TetrominoType::O, BlockColor::Yellow).at(2, 0);
        let mut sim = simulation_on(grid, current, TetrominoType::O);

        assert_eq!(sim.hard_drop(), 2);
        assert_eq!(sim.current().position.y, 2);
    }

    #[test]
    fn test_hard_drop_when_resting_scores_nothing() {
        let mut sim = repeating_simulation(10, 20, TetrominoType::O);
        sim.apply(Command::HardDrop);
        let score = sim.score();

        assert!(!sim.apply(Command::HardDrop));
        assert_eq!(sim.score(), score);
    }

    #[test]
    fn test_hard_drop_games_are_deterministic() {
        fn play(seed: u64) -> (Vec<Vec<Option<BlockColor>>>, u32, u32) {
            let mut sim = Simulation::new(10, 20, Box::new(PieceFactory::with_seed(seed)));
            let moves = [Command::MoveLeft, Command::Rotate, Command::MoveRight];

            for step in 0..40 {
                if sim.is_game_over() {
                    break;
                }
                for _ in 0..step % 4 {
                    sim.apply(moves[step % moves.len()]);
                }
                sim.apply(Command::HardDrop);
                let interval = sim.fall_interval_ms();
                sim.tick(interval);
            }

            (sim.grid().rows().to_vec(), sim.score(), sim.lines_cleared())
        }

        assert_eq!(play(1234), play(1234));
    }
}
