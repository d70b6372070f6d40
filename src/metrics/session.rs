use std::time::{Duration, Instant};

/// Counters for the current terminal session. High score lives in the game
/// state itself; these only track wall time and how many games were played.
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self) {
        self.games_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
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

        stats.elapsed_time = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed_time = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed_time = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_games_played_counter() {
        let mut stats = SessionStats::new();

        stats.on_game_over();
        stats.on_game_over();
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn test_game_start_resets_clock() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(20));
        stats.update();
        assert!(stats.elapsed_time.as_millis() >= 20);

        stats.on_game_start();
        stats.update();
        assert!(stats.elapsed_time.as_millis() < 20);
    }
}
