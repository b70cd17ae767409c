#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::Time;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.delta(), Duration::default());
        assert_eq!(time.delta_ms(), 0);
    }

    #[test]
    fn test_time_update() {
        let mut time = Time::new();

        // Sleep to allow some time to pass
        sleep(Duration::from_millis(10));

        // Update should change the delta
        time.update();
        assert!(time.delta() > Duration::default());
    }

    #[test]
    fn test_delta_ms() {
        let mut time = Time::new();

        sleep(Duration::from_millis(20));
        time.update();

        assert!(time.delta_ms() >= 20);
        // Generous upper bound for slow CI machines
        assert!(time.delta_ms() < 1_000);
    }

    #[test]
    fn test_sub_millisecond_time_carries_over() {
        let mut time = Time::new();
        let frame = Duration::from_micros(16_600);

        time.advance(frame);
        assert_eq!(time.delta_ms(), 16);
        time.advance(frame);
        assert_eq!(time.delta_ms(), 17);
        time.advance(frame);
        assert_eq!(time.delta_ms(), 16);
        assert_eq!(time.delta(), frame);
    }

    #[test]
    fn test_frames_add_up_to_elapsed_time() {
        let mut time = Time::new();
        let mut total = 0;

        for _ in 0..60 {
            time.advance(Duration::from_micros(16_600));
            total += time.delta_ms();
        }

        // 60 frames of 16.6 ms is 996 ms, not 60 × 16
        assert_eq!(total, 996);
    }
}
