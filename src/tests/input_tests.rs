#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::input::{Command, InputController, Key};

    fn controller() -> InputController {
        InputController::new(100, true)
    }

    #[test]
    fn test_edge_keys_fire_immediately() {
        let mut input = controller();

        assert_eq!(input.press(Key::Rotate), Some(Command::Rotate));
        assert_eq!(input.press(Key::HardDrop), Some(Command::HardDrop));
        assert_eq!(input.press(Key::Quit), Some(Command::Quit));
        assert_eq!(input.press(Key::Restart), Some(Command::RestartRequested));
        assert!(!input.is_held(Key::Rotate));
    }

    #[test]
    fn test_held_key_waits_for_delay() {
        let mut input = controller();

        assert_eq!(input.press(Key::Left), None);
        assert!(input.is_held(Key::Left));

        assert!(input.update(50).is_empty());
        assert_eq!(input.update(50), vec![Command::MoveLeft]);
        assert!(input.update(99).is_empty());
        assert_eq!(input.update(1), vec![Command::MoveLeft]);
    }

    #[test]
    fn test_one_command_per_update() {
        let mut input = controller();
        input.press(Key::Down);

        // A long frame still yields a single step
        assert_eq!(input.update(450), vec![Command::SoftDropTick]);
    }

    #[test]
    fn test_release_stops_repeat() {
        let mut input = controller();
        input.press(Key::Right);
        input.update(60);

        input.release(Key::Right);
        assert!(!input.is_held(Key::Right));
        assert!(input.update(500).is_empty());
    }

    #[test]
    fn test_quick_taps_add_up() {
        let mut input = controller();

        // Each tap is shorter than the delay; the timer survives the release
        input.press(Key::Left);
        assert!(input.update(60).is_empty());
        input.release(Key::Left);

        input.press(Key::Left);
        assert_eq!(input.update(60), vec![Command::MoveLeft]);
        input.release(Key::Left);
    }

    #[test]
    fn test_repeated_press_keeps_timer() {
        let mut input = controller();
        input.press(Key::Left);
        input.update(70);

        // Terminal auto-repeat resends the press
        input.press(Key::Left);
        assert_eq!(input.update(30), vec![Command::MoveLeft]);
    }

    #[test]
    fn test_directions_have_independent_timers() {
        let mut input = controller();
        input.press(Key::Left);
        input.update(60);
        input.press(Key::Down);

        assert_eq!(input.update(40), vec![Command::MoveLeft]);
        assert_eq!(input.update(60), vec![Command::SoftDropTick]);
        assert_eq!(input.update(40), vec![Command::MoveLeft]);
    }

    #[test]
    fn test_clear_drops_held_keys() {
        let mut input = controller();
        input.press(Key::Left);
        input.press(Key::Right);
        input.press(Key::Down);

        input.update(60);

        input.clear();
        assert!(!input.is_held(Key::Left));
        assert!(!input.is_held(Key::Right));
        assert!(!input.is_held(Key::Down));
        assert!(input.update(1_000).is_empty());

        // Timers start over after a clear
        input.press(Key::Left);
        assert!(input.update(60).is_empty());
    }

    #[test]
    fn test_without_release_events_moves_fire_once() {
        let mut input = InputController::new(100, false);

        assert_eq!(input.press(Key::Left), Some(Command::MoveLeft));
        assert_eq!(input.press(Key::Down), Some(Command::SoftDropTick));
        assert!(!input.is_held(Key::Left));
        assert!(input.update(1_000).is_empty());
    }
}
