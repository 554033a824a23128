//! Computer opponent decision policy.
//!
//! The policy is a pure function of the opponent's own hand, the active suit
//! and the top discard. It holds no randomness, so the same view always
//! yields the same action.

use crate::card::{Card, Suit};
use crate::rules::is_playable;

/// What the opponent can see when deciding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentView<'a> {
    /// The opponent's hand, in order.
    pub hand: &'a [Card],
    /// The suit the next play must match.
    pub active_suit: Suit,
    /// The top of the discard pile.
    pub top_discard: Option<Card>,
}

/// An action chosen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentAction {
    /// Play the card. `suit` is set when the card is an 8.
    Play {
        /// The card to play.
        card: Card,
        /// The suit to name for a wild card.
        suit: Option<Suit>,
    },
    /// Draw from the draw pile.
    Draw,
}

/// Chooses the opponent's action.
///
/// The first playable non-8 in hand order wins. An 8 is only played when it
/// is the sole kind of playable card, and its suit comes from
/// [`choose_suit`] over the hand left after playing it. With nothing
/// playable the opponent draws.
///
/// # Example
///
/// ```
/// use c8rs::policy::{OpponentAction, OpponentView, choose_action};
/// use c8rs::{Card, Suit};
///
/// let hand = [Card::new(Suit::Spades, 8), Card::new(Suit::Clubs, 4)];
/// let view = OpponentView {
///     hand: &hand,
///     active_suit: Suit::Clubs,
///     top_discard: Some(Card::new(Suit::Clubs, 10)),
/// };
/// assert_eq!(
///     choose_action(&view),
///     OpponentAction::Play { card: Card::new(Suit::Clubs, 4), suit: None }
/// );
/// ```
#[must_use]
pub fn choose_action(view: &OpponentView<'_>) -> OpponentAction {
    let playable = |card: &&Card| is_playable(**card, view.active_suit, view.top_discard);

    if let Some(card) = view.hand.iter().filter(playable).find(|c| !c.is_wild()) {
        return OpponentAction::Play {
            card: *card,
            suit: None,
        };
    }

    let Some(position) = view.hand.iter().position(Card::is_wild) else {
        return OpponentAction::Draw;
    };

    let card = view.hand[position];
    let remaining = view
        .hand
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != position)
        .map(|(_, c)| *c);

    OpponentAction::Play {
        card,
        suit: Some(most_common_suit(remaining)),
    }
}

/// Picks the suit most represented in `hand`.
///
/// Ties go to the earliest suit in [`Suit::ALL`], which also makes an empty
/// hand pick [`Suit::Hearts`].
#[must_use]
pub fn choose_suit(hand: &[Card]) -> Suit {
    most_common_suit(hand.iter().copied())
}

fn most_common_suit(cards: impl Iterator<Item = Card>) -> Suit {
    let mut counts = [0usize; 4];
    for card in cards {
        counts[card.suit.index()] += 1;
    }

    let mut best = Suit::ALL[0];
    for suit in Suit::ALL {
        if counts[suit.index()] > counts[best.index()] {
            best = suit;
        }
    }
    best
}
