use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::ActionError;
use crate::event::Event;

use super::{Game, GameState, Phase, Side};

/// A transition request, as forwarded by the front-end or the policy.
#[derive(Debug, Clone, Copy)]
pub(super) enum Action {
    Play(Side, Card),
    PlayWild(Side, Card, Suit),
    ChooseSuit(Suit),
    Draw(Side),
}

impl Action {
    fn apply(self, state: &GameState) -> Result<GameState, ActionError> {
        match self {
            Self::Play(side, card) => state.play_card(side, card),
            Self::PlayWild(side, card, suit) => state.play_wild(side, card, suit),
            Self::ChooseSuit(suit) => state.choose_suit(suit),
            Self::Draw(side) => state.draw_card(side),
        }
    }

    /// Appends the events describing the move from `prev` to `next`.
    fn record(self, prev: &GameState, next: &GameState, events: &mut Vec<Event>) {
        match self {
            Self::Play(side, card) => {
                events.push(Event::CardPlayed { side, card });
                if card.is_wild() && side == Side::Opponent {
                    events.push(Event::SuitChosen {
                        side,
                        suit: next.active_suit,
                    });
                }
            }
            Self::PlayWild(side, card, suit) => {
                events.push(Event::CardPlayed { side, card });
                events.push(Event::SuitChosen { side, suit });
            }
            Self::ChooseSuit(suit) => events.push(Event::SuitChosen {
                side: Side::Player,
                suit,
            }),
            Self::Draw(side) => {
                let card = if next.draw_pile.len() < prev.draw_pile.len() {
                    next.hand(side).cards().last().copied()
                } else {
                    None
                };
                events.push(Event::CardDrawn { side, card });
            }
        }

        if let Some(outcome) = next.phase.outcome() {
            events.push(Event::RoundEnded { outcome });
        }
    }
}

impl Game {
    /// Applies `action` to `state` in place and records its events.
    ///
    /// On error `state` is left untouched.
    pub(super) fn step(&self, state: &mut GameState, action: Action) -> Result<(), ActionError> {
        let next = action.apply(state).inspect_err(|err| {
            log::trace!("rejected {action:?} in {:?}: {err}", state.phase);
        })?;

        log::debug!(
            "{action:?}: turn {:?}, phase {:?}, suit {}",
            next.turn,
            next.phase,
            next.active_suit
        );
        if let Some(outcome) = next.phase.outcome() {
            log::info!("round {} ended: {outcome:?}", next.round.0);
        }

        action.record(state, &next, &mut self.events.lock());
        *state = next;
        Ok(())
    }

    /// Runs a human transition, then the opponent's reply if it moves
    /// automatically.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    fn act(&self, action: Action) -> Result<GameState, ActionError> {
        let mut state = self.state.lock();
        self.step(&mut state, action)?;

        if self.options.auto_opponent
            && state.phase == Phase::Playing
            && state.turn == Side::Opponent
        {
            if let Err(err) = self.respond(&mut state) {
                log::warn!("opponent reply rejected: {err}");
            }
        }

        Ok(state.clone())
    }

    /// Plays a card.
    ///
    /// Front-ends normally call this for [`Side::Player`]; the opponent's
    /// own moves go through [`Game::opponent_turn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is not [`Phase::Playing`], it is not
    /// `side`'s turn, the card is not in `side`'s hand, or the card is not
    /// playable. The state is unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::{Game, GameOptions, Side};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// let state = game.start_round();
    /// if let Some(&card) = state.playable_cards(Side::Player).first() {
    ///     game.play_card(Side::Player, card).unwrap();
    /// }
    /// ```
    pub fn play_card(&self, side: Side, card: Card) -> Result<GameState, ActionError> {
        self.act(Action::Play(side, card))
    }

    /// Names the suit after the human played an 8.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] unless the phase is
    /// [`Phase::AwaitingSuitChoice`]. The state is unchanged on error.
    pub fn choose_suit(&self, suit: Suit) -> Result<GameState, ActionError> {
        self.act(Action::ChooseSuit(suit))
    }

    /// Draws a card, or forfeits the action if the draw pile is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is not [`Phase::Playing`] or it is not
    /// `side`'s turn. The state is unchanged on error.
    pub fn draw_card(&self, side: Side) -> Result<GameState, ActionError> {
        self.act(Action::Draw(side))
    }
}
