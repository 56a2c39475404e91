use std::time::{Duration, Instant};

/// Play-time and score bookkeeping across restarts within one process
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    paused_at: Option<Instant>,
    paused_total: Duration,
    finished: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            paused_at: None,
            paused_total: Duration::ZERO,
            finished: false,
        }
    }

    /// Refresh the elapsed play time, excluding paused stretches
    pub fn update(&mut self) {
        if self.finished {
            return;
        }
        let now = self.paused_at.unwrap_or_else(Instant::now);
        self.elapsed_time = now
            .duration_since(self.start_time)
            .saturating_sub(self.paused_total);
    }

    /// Restart the clock; a session that starts paused stays frozen until resumed
    pub fn on_game_start(&mut self, paused: bool) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.paused_at = paused.then_some(self.start_time);
        self.paused_total = Duration::ZERO;
        self.finished = false;
    }

    pub fn on_pause_changed(&mut self, paused: bool) {
        match (paused, self.paused_at) {
            (true, None) => self.paused_at = Some(Instant::now()),
            (false, Some(since)) => {
                self.paused_total += since.elapsed();
                self.paused_at = None;
            }
            _ => {}
        }
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.finished = true;
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15); // Should update
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start(false);
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }

    #[test]
    fn test_start_while_paused_keeps_clock_frozen() {
        let mut metrics = GameMetrics::new();
        metrics.on_pause_changed(true);
        metrics.on_game_start(true);

        std::thread::sleep(Duration::from_millis(60));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 60);

        // Resuming must still be seen as a pause ending
        metrics.on_pause_changed(false);
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 60);
    }

    #[test]
    fn test_paused_time_is_excluded() {
        let mut metrics = GameMetrics::new();
        metrics.on_pause_changed(true);
        std::thread::sleep(Duration::from_millis(60));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 60);

        metrics.on_pause_changed(false);
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 60);
    }

    #[test]
    fn test_clock_stops_at_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(0);
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }
}
