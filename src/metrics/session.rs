use std::time::{Duration, Instant};

/// In-memory stats for the current play session
///
/// Nothing here is persisted; it only feeds the header line of the UI.
pub struct SessionStats {
    pub round_start: Instant,
    pub elapsed: Duration,
    pub high_score: u32,
    pub rounds_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            round_start: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            rounds_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed = self.round_start.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.round_start = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, final_score: u32) {
        self.rounds_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut stats = SessionStats::new();

        stats.on_round_over(10);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.rounds_played, 1);

        stats.on_round_over(5);
        assert_eq!(stats.high_score, 10); // Should not decrease
        assert_eq!(stats.rounds_played, 2);

        stats.on_round_over(15);
        assert_eq!(stats.high_score, 15);
        assert_eq!(stats.rounds_played, 3);
    }

    #[test]
    fn test_round_start_resets_time() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(50));
        stats.update();

        assert!(stats.elapsed.as_millis() >= 50);

        stats.on_round_start();
        stats.update();
        assert!(stats.elapsed.as_millis() < 50);
    }
}
