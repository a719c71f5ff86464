//! Rule engine for rock, paper, scissors, bomb.
//!
//! `GameLogic` holds only configuration. Every operation takes the current
//! `GameState` by reference and returns a new one, so a caller owns exactly
//! one state per game and nothing is shared between games.
//!
//! Round flow:
//! 1. `validate` the raw input against the state
//! 2. on success the opponent policy picks a move and `resolve` decides it
//! 3. `apply_round` (resolved) or `waste_round` (rejected) produces the next state

use log::{debug, info, trace, warn};

use crate::core::{GameConfig, GameRng, GameState, Move, RoundOutcome, RoundRecord, Winner};
use crate::opponent::OpponentPolicy;

use super::error::MoveError;

/// What happened to one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The round was played and recorded in history.
    Resolved(RoundRecord),
    /// The round was consumed without play.
    Wasted {
        round_number: u32,
        reason: MoveError,
    },
}

impl Submission {
    /// Round this submission consumed.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        match self {
            Submission::Resolved(record) => record.round_number,
            Submission::Wasted { round_number, .. } => *round_number,
        }
    }

    /// Outcome of the round. Wasted rounds are `Invalid`.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        match self {
            Submission::Resolved(record) => record.outcome,
            Submission::Wasted { .. } => RoundOutcome::Invalid,
        }
    }

    #[must_use]
    pub fn is_wasted(&self) -> bool {
        matches!(self, Submission::Wasted { .. })
    }
}

/// Stateless rule engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameLogic {
    config: GameConfig,
}

impl GameLogic {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state for a new game.
    #[must_use]
    pub fn start_game(&self) -> GameState {
        GameState::new()
    }

    /// Check a raw move token against the current state.
    ///
    /// Input is trimmed and matched case-insensitively. The user may bomb
    /// on any round, but only once.
    pub fn validate(&self, input: &str, state: &GameState) -> Result<Move, MoveError> {
        let mv: Move = input.parse().map_err(|_| MoveError::InvalidMoveToken {
            input: input.to_string(),
        })?;

        if mv.is_bomb() && state.user_bomb_used() {
            return Err(MoveError::BombExhausted);
        }

        Ok(mv)
    }

    /// Decide a round between two legal moves.
    #[must_use]
    pub fn resolve(user: Move, bot: Move) -> RoundOutcome {
        match (user, bot) {
            (Move::Bomb, Move::Bomb) => RoundOutcome::Draw,
            (Move::Bomb, _) => RoundOutcome::UserWin,
            (_, Move::Bomb) => RoundOutcome::BotWin,
            (u, b) if u == b => RoundOutcome::Draw,
            (u, b) if u.beats() == Some(b) => RoundOutcome::UserWin,
            _ => RoundOutcome::BotWin,
        }
    }

    /// Deterministic sentence describing a round.
    #[must_use]
    pub fn explain(user: Move, bot: Move, outcome: RoundOutcome) -> String {
        match outcome {
            RoundOutcome::Draw => format!("Both chose {}. Draw!", user),
            RoundOutcome::UserWin if user.is_bomb() => format!("💣 Bomb destroys {}!", bot),
            RoundOutcome::UserWin => format!("{} beats {}!", capitalize(user.as_str()), bot),
            RoundOutcome::BotWin if bot.is_bomb() => format!("💣 Bot's bomb destroys {}!", user),
            RoundOutcome::BotWin => format!("{} beats {}!", capitalize(bot.as_str()), user),
            RoundOutcome::Invalid => "Invalid round".to_string(),
        }
    }

    /// Next state after a resolved round.
    ///
    /// Latches bomb flags, scores a decisive outcome, appends the round to
    /// history and advances the round counter. A finished game is returned
    /// unchanged. An `Invalid` outcome is treated as a wasted round.
    #[must_use]
    pub fn apply_round(
        &self,
        state: &GameState,
        user: Move,
        bot: Move,
        outcome: RoundOutcome,
    ) -> GameState {
        if state.game_over {
            warn!("apply_round on a finished game ignored");
            return state.clone();
        }
        if outcome == RoundOutcome::Invalid {
            warn!("apply_round given an invalid outcome, wasting round {}", state.round_number);
            return self.waste_round(state);
        }
        self.record_round(state, user, bot, outcome).0
    }

    /// Resolved-round transition for a live game and a decided outcome.
    fn record_round(
        &self,
        state: &GameState,
        user: Move,
        bot: Move,
        outcome: RoundOutcome,
    ) -> (GameState, RoundRecord) {
        let mut next = state.clone();
        next.user_bomb_used |= user.is_bomb();
        next.bot_bomb_used |= bot.is_bomb();

        match outcome {
            RoundOutcome::UserWin => next.user_score += 1,
            RoundOutcome::BotWin => next.bot_score += 1,
            RoundOutcome::Draw | RoundOutcome::Invalid => {}
        }

        let record = RoundRecord::new(
            next.round_number,
            user,
            bot,
            outcome,
            Self::explain(user, bot, outcome),
        );
        info!(
            "round {}: {} vs {} -> {} ({}-{})",
            record.round_number, user, bot, outcome, next.user_score, next.bot_score
        );
        next.rounds_history.push_back(record.clone());

        self.advance_round(&mut next);
        (next, record)
    }

    /// Next state after a wasted round: only the counter moves.
    #[must_use]
    pub fn waste_round(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if next.game_over {
            warn!("waste_round on a finished game ignored");
            return next;
        }
        self.advance_round(&mut next);
        next
    }

    fn advance_round(&self, state: &mut GameState) {
        state.round_number += 1;
        trace!("advanced to round {}", state.round_number);
        if state.round_number > self.config.max_rounds {
            state.game_over = true;
            info!(
                "game over: {}-{} ({:?})",
                state.user_score,
                state.bot_score,
                state.winner()
            );
        }
    }

    /// Final result. `None` until the game is over.
    #[must_use]
    pub fn winner(state: &GameState) -> Option<Winner> {
        state.winner()
    }

    /// Play one submission: validate, let the opponent move, resolve, transition.
    ///
    /// Invalid tokens and a second bomb waste the round and are reported in
    /// `Submission::Wasted`. Only a finished game yields `Err`, with the
    /// state left as it was.
    pub fn submit_move<P>(
        &self,
        state: &GameState,
        raw: &str,
        policy: &P,
        rng: &mut GameRng,
    ) -> Result<(GameState, Submission), MoveError>
    where
        P: OpponentPolicy + ?Sized,
    {
        if state.game_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        match self.validate(raw, state) {
            Ok(user) => {
                let bot = policy.choose(state, rng);
                let outcome = Self::resolve(user, bot);
                let (next, record) = self.record_round(state, user, bot, outcome);
                Ok((next, Submission::Resolved(record)))
            }
            Err(reason) => {
                debug!("round {} wasted: {}", state.round_number(), reason);
                let next = self.waste_round(state);
                Ok((
                    next,
                    Submission::Wasted {
                        round_number: state.round_number(),
                        reason,
                    },
                ))
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::ScriptedOpponent;

    #[test]
    fn test_validate_accepts_normalized() {
        let logic = GameLogic::default();
        let state = GameState::new();

        assert_eq!(logic.validate("ROCK ", &state), Ok(Move::Rock));
        assert_eq!(logic.validate("  scissors", &state), Ok(Move::Scissors));
        assert_eq!(logic.validate("bomb", &state), Ok(Move::Bomb));
    }

    #[test]
    fn test_validate_rejects_unknown() {
        let logic = GameLogic::default();
        let result = logic.validate("lizard", &GameState::new());

        assert_eq!(
            result,
            Err(MoveError::InvalidMoveToken {
                input: "lizard".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_second_bomb() {
        let logic = GameLogic::default();
        let state = logic.apply_round(&GameState::new(), Move::Bomb, Move::Rock, RoundOutcome::UserWin);

        assert_eq!(logic.validate("BOMB", &state), Err(MoveError::BombExhausted));
        assert_eq!(logic.validate("paper", &state), Ok(Move::Paper));
    }

    #[test]
    fn test_resolve_table() {
        use Move::*;
        use RoundOutcome::*;

        let table = [
            (Rock, Rock, Draw),
            (Rock, Paper, BotWin),
            (Rock, Scissors, UserWin),
            (Rock, Bomb, BotWin),
            (Paper, Rock, UserWin),
            (Paper, Paper, Draw),
            (Paper, Scissors, BotWin),
            (Paper, Bomb, BotWin),
            (Scissors, Rock, BotWin),
            (Scissors, Paper, UserWin),
            (Scissors, Scissors, Draw),
            (Scissors, Bomb, BotWin),
            (Bomb, Rock, UserWin),
            (Bomb, Paper, UserWin),
            (Bomb, Scissors, UserWin),
            (Bomb, Bomb, Draw),
        ];

        for (user, bot, expected) in table {
            assert_eq!(GameLogic::resolve(user, bot), expected, "{} vs {}", user, bot);
        }
    }

    #[test]
    fn test_explain_phrasing() {
        use RoundOutcome::*;

        assert_eq!(GameLogic::explain(Move::Rock, Move::Rock, Draw), "Both chose rock. Draw!");
        assert_eq!(GameLogic::explain(Move::Bomb, Move::Bomb, Draw), "Both chose bomb. Draw!");
        assert_eq!(
            GameLogic::explain(Move::Rock, Move::Scissors, UserWin),
            "Rock beats scissors!"
        );
        assert_eq!(
            GameLogic::explain(Move::Rock, Move::Paper, BotWin),
            "Paper beats rock!"
        );
        assert_eq!(
            GameLogic::explain(Move::Bomb, Move::Paper, UserWin),
            "💣 Bomb destroys paper!"
        );
        assert_eq!(
            GameLogic::explain(Move::Scissors, Move::Bomb, BotWin),
            "💣 Bot's bomb destroys scissors!"
        );
        assert_eq!(GameLogic::explain(Move::Rock, Move::Rock, Invalid), "Invalid round");
    }

    #[test]
    fn test_apply_round_updates_everything() {
        let logic = GameLogic::default();
        let start = GameState::new();
        let next = logic.apply_round(&start, Move::Bomb, Move::Paper, RoundOutcome::UserWin);

        assert_eq!(start, GameState::new());
        assert_eq!(next.round_number(), 2);
        assert_eq!(next.user_score(), 1);
        assert_eq!(next.bot_score(), 0);
        assert!(next.user_bomb_used());
        assert!(!next.bot_bomb_used());
        assert_eq!(next.rounds_played(), 1);

        let record = next.last_round().unwrap();
        assert_eq!(record.round_number, 1);
        assert_eq!(record.user_move, Some(Move::Bomb));
        assert_eq!(record.bot_move, Move::Paper);
        assert_eq!(record.explanation, "💣 Bomb destroys paper!");
    }

    #[test]
    fn test_draw_leaves_scores() {
        let logic = GameLogic::default();
        let next = logic.apply_round(&GameState::new(), Move::Bomb, Move::Bomb, RoundOutcome::Draw);

        assert_eq!((next.user_score(), next.bot_score()), (0, 0));
        assert!(next.user_bomb_used());
        assert!(next.bot_bomb_used());
    }

    #[test]
    fn test_waste_round_only_counts() {
        let logic = GameLogic::default();
        let next = logic.waste_round(&GameState::new());

        assert_eq!(next.round_number(), 2);
        assert_eq!(next.rounds_played(), 0);
        assert_eq!((next.user_score(), next.bot_score()), (0, 0));
        assert!(!next.game_over());
    }

    #[test]
    fn test_apply_invalid_outcome_wastes_round() {
        let logic = GameLogic::default();
        let start = GameState::new();

        let next = logic.apply_round(&start, Move::Rock, Move::Paper, RoundOutcome::Invalid);

        assert_eq!(next, logic.waste_round(&start));
        assert!(next.history().is_empty());
        assert_eq!(next.round_number(), 2);
    }

    #[test]
    fn test_game_over_after_max_rounds() {
        let logic = GameLogic::default();
        let mut state = GameState::new();
        for _ in 0..2 {
            state = logic.apply_round(&state, Move::Rock, Move::Rock, RoundOutcome::Draw);
            assert!(!state.game_over());
        }
        state = logic.waste_round(&state);

        assert!(state.game_over());
        assert_eq!(state.round_number(), 4);
        assert_eq!(GameLogic::winner(&state), Some(Winner::Draw));

        let after = logic.apply_round(&state, Move::Rock, Move::Scissors, RoundOutcome::UserWin);
        assert_eq!(after, state);
        assert_eq!(logic.waste_round(&state), state);
    }

    #[test]
    fn test_custom_round_count() {
        let logic = GameLogic::new(GameConfig::new().with_max_rounds(1));
        let state = logic.waste_round(&logic.start_game());
        assert!(state.game_over());
    }

    #[test]
    fn test_submit_resolves_round() {
        let logic = GameLogic::default();
        let policy = ScriptedOpponent::always(Move::Scissors);
        let mut rng = GameRng::new(0);

        let (state, submission) = logic
            .submit_move(&GameState::new(), "rock", &policy, &mut rng)
            .unwrap();

        assert_eq!(submission.outcome(), RoundOutcome::UserWin);
        assert_eq!(submission.round_number(), 1);
        assert!(!submission.is_wasted());
        assert_eq!(state.user_score(), 1);
        assert_eq!(state.round_number(), 2);
        match submission {
            Submission::Resolved(record) => {
                assert_eq!(Some(&record), state.last_round());
                assert_eq!(record.explanation, "Rock beats scissors!");
            }
            other => panic!("expected a resolved round, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_wastes_invalid() {
        let logic = GameLogic::default();
        let policy = ScriptedOpponent::always(Move::Paper);
        let mut rng = GameRng::new(0);

        let (state, submission) = logic
            .submit_move(&GameState::new(), "spock", &policy, &mut rng)
            .unwrap();

        assert!(submission.is_wasted());
        assert_eq!(submission.outcome(), RoundOutcome::Invalid);
        assert_eq!(state.round_number(), 2);
        assert_eq!(state.rounds_played(), 0);
    }

    #[test]
    fn test_submit_rejects_after_game_over() {
        let logic = GameLogic::default();
        let policy = ScriptedOpponent::always(Move::Paper);
        let mut rng = GameRng::new(0);
        let mut state = GameState::new();
        for _ in 0..3 {
            state = logic.waste_round(&state);
        }

        let result = logic.submit_move(&state, "rock", &policy, &mut rng);
        assert_eq!(result, Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("rock"), "Rock");
        assert_eq!(capitalize(""), "");
    }
}
