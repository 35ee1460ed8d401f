use thiserror::Error;

/*
    GAME ERRORS
*/
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Data type not supported - only numbers are allowed!")]
    InvalidInputFormat(String),
    #[error("The game is over, start a new one to keep guessing")]
    GameOver,
    #[error("Target {0} is outside of 1 - 99")]
    TargetOutOfRange(i32),
    #[error("Console is unavailable: {0}")]
    Io(#[from] std::io::Error),
}

/*
    COLOR ERRORS
*/
#[derive(Error, Debug)]
pub enum ColorError {
    #[error("You did not provide a color!")]
    MissingColor,
    #[error("The color you provided is not a known color.")]
    UnknownColor(String),
    #[error("`{0}` is neither a color name nor a hex value")]
    Unparsable(String),
    #[error("Console is unavailable: {0}")]
    Io(#[from] std::io::Error),
}

impl ColorError {
    /// Whether the error came from the user's answer rather than the console
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ColorError::Io(_))
    }
}
