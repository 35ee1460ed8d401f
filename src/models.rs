use core::fmt;

use serde::Serialize;

/*
 * Guessing game models
 *
 * A GuessOutcome is the classification of a single valid guess,
 * a GameResult is how the whole game ended
*/

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    OutOfRange,
    TooLow,
    TooHigh,
    Correct,
}

impl GuessOutcome {
    pub fn to_str(&self) -> &str {
        match self {
            GuessOutcome::OutOfRange => "Out of range",
            GuessOutcome::TooLow => "Too low",
            GuessOutcome::TooHigh => "Too high",
            GuessOutcome::Correct => "Correct",
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Won { attempts_used: u32 },
    Exhausted,
    AbortedInvalidInput,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Won { attempts_used } => write!(f, "won in {}", attempts_used),
            GameResult::Exhausted => write!(f, "exhausted"),
            GameResult::AbortedInvalidInput => write!(f, "aborted on invalid input"),
        }
    }
}

/*
    Color models
*/

/// Description of a single RGB color
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct ColorReport {
    pub hex: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub name: Option<String>,
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rgb({}, {}, {})", self.hex, self.red, self.green, self.blue)?;
        if let Some(name) = &self.name {
            write!(f, " ({})", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_json() {
        let json = serde_json::to_string(&GameResult::Won { attempts_used: 3 }).unwrap();
        assert_eq!(json, r#"{"won":{"attempts_used":3}}"#);
        assert_eq!(
            serde_json::to_string(&GameResult::AbortedInvalidInput).unwrap(),
            r#""aborted_invalid_input""#
        );
    }

    #[test]
    fn test_color_report_display() {
        let mut report = ColorReport {
            hex: "#008080".to_string(),
            red: 0,
            green: 128,
            blue: 128,
            name: None,
        };
        assert_eq!(report.to_string(), "#008080 rgb(0, 128, 128)");

        report.name = Some("teal".to_string());
        assert_eq!(report.to_string(), "#008080 rgb(0, 128, 128) (teal)");
    }
}
