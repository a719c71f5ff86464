//! Human-facing text for a game.

use log::warn;

use crate::core::{GameState, RoundRecord, Winner};
use crate::opponent::OpponentPolicy;
use crate::rules::{MoveError, Submission};
use crate::session::Game;

use super::flavor::{FlavorText, NoFlavor};

/// Formats game events as player-facing messages.
#[derive(Clone, Debug, Default)]
pub struct Referee<F = NoFlavor> {
    flavor: F,
}

impl Referee<NoFlavor> {
    #[must_use]
    pub fn new() -> Self {
        Self { flavor: NoFlavor }
    }
}

impl<F: FlavorText> Referee<F> {
    /// Referee that decorates rounds with `flavor`.
    #[must_use]
    pub fn with_flavor(flavor: F) -> Self {
        Self { flavor }
    }

    /// Opening message with the rules for a game of `max_rounds`.
    #[must_use]
    pub fn welcome(&self, max_rounds: u32) -> String {
        format!(
            "🎮 Rock-Paper-Scissors-Plus\n\n\
             Best of {} rounds • Use 💣 bomb once to beat anything!\n\
             Invalid moves waste your round.\n\n\
             Ready? Make your first move!",
            max_rounds
        )
    }

    /// Submit `raw` to `game` and describe what happened.
    pub fn respond<P: OpponentPolicy>(&self, game: &mut Game<P>, raw: &str) -> String {
        match game.submit(raw) {
            Ok(submission) => self.announce(&submission, game.state()),
            Err(err) => self.reject(&err),
        }
    }

    /// Describe a submission, given the state after it.
    #[must_use]
    pub fn announce(&self, submission: &Submission, state: &GameState) -> String {
        match submission {
            Submission::Resolved(record) => self.announce_round(record, state),
            Submission::Wasted {
                round_number,
                reason,
            } => {
                let mut text = format!("❌ {}\nRound {} wasted!", reason, round_number);
                if state.game_over() {
                    text.push_str("\n\n");
                    text.push_str(&self.final_result(state));
                }
                text
            }
        }
    }

    fn announce_round(&self, record: &RoundRecord, state: &GameState) -> String {
        let user = record
            .user_move
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_else(|| "-".to_string());

        let mut text = format!(
            "🎯 Round {}\nYou: {} • Bot: {}\n\n{}\n\nScore: {}-{}",
            record.round_number,
            user,
            record.bot_move.as_str().to_uppercase(),
            record.explanation,
            state.user_score(),
            state.bot_score(),
        );

        let flavor = self.flavor.flavor(record, state).unwrap_or_else(|err| {
            warn!("no flavor for round {}: {}", record.round_number, err);
            String::new()
        });
        if !flavor.trim().is_empty() {
            text.push_str("\n\n");
            text.push_str(flavor.trim());
        }

        if state.game_over() {
            text.push_str("\n\n");
            text.push_str(&self.final_result(state));
        } else if !state.user_bomb_used() {
            text.push_str("\n\n💣 Bomb still available!");
        }
        text
    }

    /// Reply to a submission that was not played at all.
    #[must_use]
    pub fn reject(&self, err: &MoveError) -> String {
        match err {
            MoveError::GameAlreadyOver => "Game is over! Type 'new game' to play again.".to_string(),
            other => format!("❌ {}", other),
        }
    }

    /// Game-over summary. Empty while the game is still running.
    #[must_use]
    pub fn final_result(&self, state: &GameState) -> String {
        let Some(winner) = state.winner() else {
            return String::new();
        };
        let verdict = match winner {
            Winner::User => "🎉 You Win! Great job!",
            Winner::Bot => "🤖 Bot Wins! Try again?",
            Winner::Draw => "🤝 Draw! Well played!",
        };
        format!(
            "🏁 GAME OVER\n\nFinal: {}-{}\n\n{}",
            state.user_score(),
            state.bot_score(),
            verdict
        )
    }

    /// Reply after a reset.
    #[must_use]
    pub fn reset(&self, max_rounds: u32) -> String {
        self.welcome(max_rounds)
    }

    /// Reply to a quit command.
    #[must_use]
    pub fn farewell(&self) -> String {
        "👋 Thanks for playing! Goodbye!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameRng, Move};
    use crate::opponent::ScriptedOpponent;
    use crate::referee::FlavorError;

    fn game(script: Vec<Move>) -> Game<ScriptedOpponent> {
        Game::with_policy(GameConfig::default(), ScriptedOpponent::new(script), GameRng::new(0)).unwrap()
    }

    #[test]
    fn test_round_announcement() {
        let referee = Referee::new();
        let mut game = game(vec![Move::Scissors]);

        let text = referee.respond(&mut game, "rock");

        assert_eq!(
            text,
            "🎯 Round 1\nYou: ROCK • Bot: SCISSORS\n\nRock beats scissors!\n\nScore: 1-0\n\n💣 Bomb still available!"
        );
    }

    #[test]
    fn test_bomb_reminder_disappears() {
        let referee = Referee::new();
        let mut game = game(vec![Move::Rock]);

        let text = referee.respond(&mut game, "bomb");
        assert!(text.contains("💣 Bomb destroys rock!"));
        assert!(!text.contains("Bomb still available"));
    }

    #[test]
    fn test_wasted_round_text() {
        let referee = Referee::new();
        let mut game = game(vec![Move::Rock]);

        let text = referee.respond(&mut game, "lizard");
        assert_eq!(
            text,
            "❌ Invalid move. Choose: rock, paper, scissors, or bomb\nRound 1 wasted!"
        );

        referee.respond(&mut game, "bomb");
        let text = referee.respond(&mut game, "bomb");
        assert!(text.starts_with("❌ Bomb already used!\nRound 3 wasted!"));
        assert!(text.contains("🏁 GAME OVER\n\nFinal: 1-0\n\n🎉 You Win! Great job!"));
    }

    #[test]
    fn test_game_over_rejection() {
        let referee = Referee::new();
        let mut game = game(vec![Move::Rock]);
        for _ in 0..3 {
            referee.respond(&mut game, "rock");
        }

        assert_eq!(
            referee.respond(&mut game, "paper"),
            "Game is over! Type 'new game' to play again."
        );
        assert!(referee.final_result(game.state()).ends_with("🤝 Draw! Well played!"));
    }

    #[test]
    fn test_welcome_names_round_count() {
        let referee = Referee::new();

        assert!(referee.welcome(3).contains("Best of 3 rounds"));
        assert!(referee.welcome(5).contains("Best of 5 rounds •"));
        assert_eq!(referee.reset(5), referee.welcome(5));
    }

    #[test]
    fn test_final_result_empty_mid_game() {
        let referee = Referee::new();
        assert_eq!(referee.final_result(&GameState::new()), "");
    }

    #[test]
    fn test_flavor_appended() {
        let referee = Referee::with_flavor(|record: &RoundRecord, _state: &GameState| -> Result<String, FlavorError> {
            Ok(format!("What a round {}!", record.round_number))
        });
        let mut game = game(vec![Move::Paper]);

        let text = referee.respond(&mut game, "rock");
        assert!(text.contains("Score: 0-1\n\nWhat a round 1!\n\n💣 Bomb still available!"));
    }

    #[test]
    fn test_flavor_failure_degrades() {
        let referee = Referee::with_flavor(|_: &RoundRecord, _: &GameState| -> Result<String, FlavorError> {
            Err(FlavorError::Unavailable("timeout".into()))
        });
        let mut game = game(vec![Move::Paper]);

        let text = referee.respond(&mut game, "scissors");
        assert!(text.contains("Scissors beats paper!"));
        assert_eq!(game.state().user_score(), 1);
        assert_eq!(game.state().round_number(), 2);
    }
}
