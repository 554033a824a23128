//! Events emitted by the engine for the presentation layer.

use crate::card::{Card, Suit};
use crate::game::{RoundId, Side};

/// Final result of a round, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The human emptied their hand first.
    Won,
    /// The opponent emptied its hand first.
    Lost,
    /// Neither side could play with the draw pile exhausted.
    Draw,
}

/// An accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A new round was dealt; `starter` seeds the discard pile.
    RoundStarted {
        /// The new round.
        round: RoundId,
        /// The first discard.
        starter: Card,
    },
    /// A card moved from a hand to the discard pile.
    CardPlayed {
        /// The side that played.
        side: Side,
        /// The card played.
        card: Card,
    },
    /// A wild card's suit was chosen.
    SuitChosen {
        /// The side that chose.
        side: Side,
        /// The new active suit.
        suit: Suit,
    },
    /// A side drew, or forfeited its action when the pile was empty.
    CardDrawn {
        /// The side that drew.
        side: Side,
        /// The drawn card, `None` if the draw pile was empty.
        card: Option<Card>,
    },
    /// The round reached a terminal phase.
    RoundEnded {
        /// How the round ended.
        outcome: Outcome,
    },
}
