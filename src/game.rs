pub trait Game {
    type GameError;
    type Outcome;

    fn make_guess(&mut self, guess: &str) -> Result<Self::Outcome, Self::GameError>;
    fn get_score(&self) -> u32;
    fn is_game_over(&self) -> bool;
}
