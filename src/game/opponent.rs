use crate::error::ActionError;
use crate::policy::{self, OpponentAction};

use super::actions::Action;
use super::{Game, GameState, Phase, RoundId, Side};

impl Game {
    /// Plays the computer opponent's turn.
    ///
    /// `round` is the id the front-end saw when it scheduled the move. If a
    /// new round has started since, the call is discarded with
    /// [`ActionError::StaleRound`], so a delayed move can never land on a
    /// newer round.
    ///
    /// The opponent plays its first playable non-8, then an 8 (naming the
    /// suit it holds most of), and draws when nothing is playable.
    ///
    /// # Errors
    ///
    /// Returns an error if `round` is not the current round, the phase is not
    /// [`Phase::Playing`], or it is not the opponent's turn. The state is
    /// unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::{Game, GameOptions, Side};
    ///
    /// let game = Game::new(GameOptions::default(), 3);
    /// let state = game.start_round();
    /// let round = state.round;
    /// game.draw_card(Side::Player).unwrap();
    ///
    /// let state = game.opponent_turn(round).unwrap();
    /// assert_eq!(state.turn, Side::Player);
    /// ```
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn opponent_turn(&self, round: RoundId) -> Result<GameState, ActionError> {
        let mut state = self.state.lock();
        if state.round != round {
            log::trace!("discarding opponent turn for round {}", round.0);
            return Err(ActionError::StaleRound);
        }

        self.respond(&mut state)?;
        Ok(state.clone())
    }

    /// Chooses and applies the opponent's action on `state`.
    pub(super) fn respond(&self, state: &mut GameState) -> Result<(), ActionError> {
        if state.phase != Phase::Playing {
            return Err(ActionError::InvalidPhase);
        }

        if state.turn != Side::Opponent {
            return Err(ActionError::NotYourTurn);
        }

        let choice = policy::choose_action(&state.opponent_view());
        log::debug!("opponent chooses {choice:?}");

        let action = match choice {
            OpponentAction::Play {
                card,
                suit: Some(suit),
            } => Action::PlayWild(Side::Opponent, card, suit),
            OpponentAction::Play { card, suit: None } => Action::Play(Side::Opponent, card),
            OpponentAction::Draw => Action::Draw(Side::Opponent),
        };
        self.step(state, action)
    }
}
