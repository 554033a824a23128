//! Game state types.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::event::Outcome;
use crate::hand::Hand;

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No round has been started yet.
    Idle,
    /// The human played an 8 and must pick the next suit.
    AwaitingSuitChoice,
    /// Waiting for the side holding the turn to play or draw.
    Playing,
    /// The human emptied their hand.
    Won,
    /// The opponent emptied its hand.
    Lost,
    /// The draw pile is empty and neither side can play.
    Draw,
}

impl Phase {
    /// Returns whether the phase ends the round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Draw)
    }

    /// Returns the round outcome for terminal phases.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Won => Some(Outcome::Won),
            Self::Lost => Some(Outcome::Lost),
            Self::Draw => Some(Outcome::Draw),
            Self::Idle | Self::AwaitingSuitChoice | Self::Playing => None,
        }
    }
}

/// Identifies a round.
///
/// Every call to [`crate::Game::start_round`] issues a larger id, so a
/// delayed opponent move can tell whether it still belongs to the current
/// round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoundId(pub u64);

/// Snapshot of a round.
///
/// Transitions never mutate a snapshot in place; they return a new one (see
/// [`GameState::play_card`], [`GameState::choose_suit`] and
/// [`GameState::draw_card`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The round this snapshot belongs to.
    pub round: RoundId,
    /// The human's hand.
    pub player_hand: Hand,
    /// The opponent's hand.
    pub opponent_hand: Hand,
    /// Draw pile; the top card is the last element.
    pub draw_pile: Vec<Card>,
    /// Discard pile; the top card is the last element.
    pub discard_pile: Vec<Card>,
    /// The suit the next play must match.
    pub active_suit: Suit,
    /// The side that acts next.
    pub turn: Side,
    /// Current phase.
    pub phase: Phase,
}

impl GameState {
    /// Creates the empty snapshot shown before the first round.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            round: RoundId(0),
            player_hand: Hand::new(),
            opponent_hand: Hand::new(),
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            active_suit: Suit::Hearts,
            turn: Side::Player,
            phase: Phase::Idle,
        }
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Returns the hand of the given side.
    #[must_use]
    pub const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Opponent => &self.opponent_hand,
        }
    }

    pub(crate) const fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Opponent => &mut self.opponent_hand,
        }
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.draw_pile.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::idle()
    }
}
