use rand::Rng;
use tracing::debug;

use crate::{
    console::{InputSource, OutputSink},
    errors::GameError,
    game::Game,
    models::{GameResult, GuessOutcome},
};

pub const BASE_ATTEMPTS: u32 = 20;
static LOWEST_GUESS: i32 = 1;
// Exclusive: 100 itself is out of range
static GUESS_UPPER_BOUND: i32 = 100;

/// Guess-the-number against a secret target in 1..=99 with a fixed attempt budget
pub struct GuessingGame<I, O> {
    target: i32,
    remaining: u32,
    pub guesses: Vec<GuessOutcome>,
    finished: bool,
    input: I,
    output: O,
}

impl<I: InputSource, O: OutputSink> GuessingGame<I, O> {
    /// Create a new game with a target drawn from `rng`
    /// ### Parameters
    /// `rng`: The random source, seed it for a reproducible target
    pub fn new<R: Rng>(rng: &mut R, input: I, output: O) -> Self {
        let target = rng.gen_range(LOWEST_GUESS..GUESS_UPPER_BOUND);
        debug!(secret = target, "picked a target");
        GuessingGame::build(target, input, output)
    }

    /// Create a new game with a known target
    /// ### Errors
    /// `GameError::TargetOutOfRange` if the target could never be guessed
    #[allow(dead_code)]
    pub fn with_target(target: i32, input: I, output: O) -> Result<Self, GameError> {
        if !(LOWEST_GUESS..GUESS_UPPER_BOUND).contains(&target) {
            return Err(GameError::TargetOutOfRange(target));
        }
        Ok(GuessingGame::build(target, input, output))
    }

    fn build(target: i32, input: I, output: O) -> Self {
        GuessingGame {
            target,
            remaining: BASE_ATTEMPTS,
            guesses: Vec::new(),
            finished: false,
            input,
            output,
        }
    }

    #[allow(dead_code)]
    pub fn target(&self) -> i32 {
        self.target
    }

    #[allow(dead_code)]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    fn classify(&self, guess: i32) -> GuessOutcome {
        if !(LOWEST_GUESS..GUESS_UPPER_BOUND).contains(&guess) {
            GuessOutcome::OutOfRange
        } else if guess < self.target {
            GuessOutcome::TooLow
        } else if guess > self.target {
            GuessOutcome::TooHigh
        } else {
            GuessOutcome::Correct
        }
    }

    /// Play turns until the game is won, the budget runs out or the input is not a number
    /// ### Returns
    /// How the game ended
    /// ### Errors
    /// `GameError::Io` if the console fails, `GameError::GameOver` if the game already ended
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        loop {
            // The target is printed on purpose, it always has been
            self.output.write_line(&self.target.to_string())?;
            self.output
                .write_line(&format!("You have only {} tries!", self.remaining))?;
            self.output.write_line("Guess a number between 1 & 100: ")?;

            // End of input reads as an empty line, which is not a number
            let line = self.input.read_line()?.unwrap_or_default();

            let outcome = match self.make_guess(&line) {
                Ok(outcome) => outcome,
                Err(e @ GameError::InvalidInputFormat(_)) => {
                    self.output.write_line(&e.to_string())?;
                    return Ok(self.finish(GameResult::AbortedInvalidInput));
                }
                Err(e) => return Err(e),
            };

            match outcome {
                GuessOutcome::OutOfRange => self
                    .output
                    .write_line("Out of range - only number 1 - 100 is allowed!")?,
                GuessOutcome::TooLow => self
                    .output
                    .write_line("Entered number is less than the target! ")?,
                GuessOutcome::TooHigh => self
                    .output
                    .write_line("Entered number is greater than the target! ")?,
                GuessOutcome::Correct => {
                    let attempts_used = self.get_score();
                    self.output.write_line(&format!(
                        "Congratulations, you made it in {} tries!",
                        attempts_used
                    ))?;
                    return Ok(self.finish(GameResult::Won { attempts_used }));
                }
            }

            if self.remaining == 0 {
                self.output
                    .write_line("You tapped out - you can start the game again")?;
                return Ok(self.finish(GameResult::Exhausted));
            }
        }
    }

    fn finish(&mut self, result: GameResult) -> GameResult {
        self.finished = true;
        debug!(%result, guesses = self.guesses.len(), "game over");
        result
    }
}

impl<I: InputSource, O: OutputSink> Game for GuessingGame<I, O> {
    type GameError = GameError;
    type Outcome = GuessOutcome;

    fn make_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        // A bad line ends the game without costing an attempt
        let value = match guess.trim().parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                self.finished = true;
                return Err(GameError::InvalidInputFormat(guess.to_string()));
            }
        };

        self.remaining -= 1;
        let outcome = self.classify(value);
        debug!(value, outcome = outcome.to_str(), remaining = self.remaining, "guess");
        self.guesses.push(outcome);

        if outcome == GuessOutcome::Correct || self.remaining == 0 {
            self.finished = true;
        }
        Ok(outcome)
    }

    fn get_score(&self) -> u32 {
        BASE_ATTEMPTS - self.remaining
    }

    fn is_game_over(&self) -> bool {
        self.finished
    }
}
