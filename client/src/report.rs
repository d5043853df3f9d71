use game_core::{Score, ScoreReporter};

/// Prints `left - right` to stdout whenever the score changes
#[derive(Debug, Default)]
pub struct ConsoleScoreReporter;

pub fn format_score(score: &Score) -> String {
    format!("{} - {}", score.left, score.right)
}

impl ScoreReporter for ConsoleScoreReporter {
    fn report(&mut self, score: &Score) {
        let line = format_score(score);
        log::debug!("Score: {line}");
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(&Score::new()), "0 - 0");
        assert_eq!(format_score(&Score { left: 3, right: 11 }), "3 - 11");
    }
}
