use crate::Score;

/// Receives the score whenever it should be shown to the players
pub trait ScoreReporter {
    fn report(&mut self, score: &Score);
}

/// Keeps every reported score, for tests and replays
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub reports: Vec<Score>,
}

impl ScoreReporter for RecordingReporter {
    fn report(&mut self, score: &Score) {
        self.reports.push(*score);
    }
}
