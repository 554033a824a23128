//! Legality rule and round transitions.
//!
//! Every transition takes the current [`GameState`] by reference, validates
//! the action against it, and returns the next snapshot. A rejected action
//! returns an [`ActionError`] and produces no snapshot at all, so there is
//! nothing to roll back.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ActionError;
use crate::game::{GameState, Phase, RoundId, Side};
use crate::hand::Hand;
use crate::policy::{self, OpponentView};

/// Returns whether `card` may be played.
///
/// An 8 is always playable. Any other card must match the active suit or the
/// rank of the top discard.
///
/// # Example
///
/// ```
/// use c8rs::{Card, Suit, is_playable};
///
/// let top = Card::new(Suit::Clubs, 5);
/// assert!(is_playable(Card::new(Suit::Hearts, 5), Suit::Clubs, Some(top)));
/// assert!(is_playable(Card::new(Suit::Hearts, 8), Suit::Clubs, Some(top)));
/// assert!(!is_playable(Card::new(Suit::Hearts, 6), Suit::Clubs, Some(top)));
/// ```
#[must_use]
pub fn is_playable(card: Card, active_suit: Suit, top_discard: Option<Card>) -> bool {
    card.is_wild()
        || card.suit == active_suit
        || top_discard.is_some_and(|top| top.rank == card.rank)
}

impl GameState {
    /// Deals a round from an already shuffled deck.
    ///
    /// Cards are taken from the end of `deck`: `hand_size` to the player,
    /// `hand_size` to the opponent, one to seed the discard pile. The rest
    /// becomes the draw pile in the same order.
    ///
    /// A short deck deals short hands rather than failing; a full deck always
    /// covers `2 * hand_size + 1` for any hand size up to
    /// [`crate::options::MAX_HAND_SIZE`].
    #[must_use]
    pub fn deal(round: RoundId, mut deck: Vec<Card>, hand_size: usize) -> Self {
        let player = deck.split_off(deck.len().saturating_sub(hand_size));
        let opponent = deck.split_off(deck.len().saturating_sub(hand_size));
        let starter = deck.split_off(deck.len().saturating_sub(1));
        let active_suit = starter.first().map_or(Suit::Hearts, |c| c.suit);

        Self {
            round,
            player_hand: Hand::from_cards(player),
            opponent_hand: Hand::from_cards(opponent),
            draw_pile: deck,
            discard_pile: starter,
            active_suit,
            turn: Side::Player,
            phase: Phase::Playing,
        }
    }

    /// Returns whether `card` may be played on this snapshot.
    #[must_use]
    pub fn is_playable(&self, card: Card) -> bool {
        is_playable(card, self.active_suit, self.top_discard())
    }

    /// Returns the playable cards in `side`'s hand, in hand order.
    #[must_use]
    pub fn playable_cards(&self, side: Side) -> Vec<Card> {
        self.hand(side).playable(|c| self.is_playable(*c)).collect()
    }

    /// Returns the opponent's view of the table.
    ///
    /// This is the only input the opponent policy sees.
    #[must_use]
    pub fn opponent_view(&self) -> OpponentView<'_> {
        OpponentView {
            hand: self.opponent_hand.cards(),
            active_suit: self.active_suit,
            top_discard: self.top_discard(),
        }
    }

    fn ensure_can_act(&self, side: Side) -> Result<(), ActionError> {
        if self.phase != Phase::Playing {
            return Err(ActionError::InvalidPhase);
        }

        if self.turn != side {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Plays `card` from `side`'s hand onto the discard pile.
    ///
    /// A non-wild card sets the active suit to its own suit and passes the
    /// turn. A wild card played by the human moves the round to
    /// [`Phase::AwaitingSuitChoice`] without passing the turn. A wild card
    /// played by the opponent picks the suit with [`policy::choose_suit`] and
    /// passes the turn in the same step.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is not [`Phase::Playing`], it is not
    /// `side`'s turn, the card is not in `side`'s hand, or the card is not
    /// playable.
    pub fn play_card(&self, side: Side, card: Card) -> Result<Self, ActionError> {
        let mut next = self.place(side, card)?;

        if !card.is_wild() {
            next.active_suit = card.suit;
            next.turn = side.other();
        } else {
            match side {
                Side::Player => next.phase = Phase::AwaitingSuitChoice,
                Side::Opponent => {
                    next.active_suit = policy::choose_suit(next.opponent_hand.cards());
                    next.turn = Side::Player;
                }
            }
        }

        next.settle();
        Ok(next)
    }

    /// Plays a wild `card` from `side`'s hand and names `suit` in one step.
    ///
    /// Used when the suit was already decided, as the opponent policy does.
    pub(crate) fn play_wild(
        &self,
        side: Side,
        card: Card,
        suit: Suit,
    ) -> Result<Self, ActionError> {
        if !card.is_wild() {
            return Err(ActionError::UnplayableCard);
        }

        let mut next = self.place(side, card)?;
        next.active_suit = suit;
        next.turn = side.other();

        next.settle();
        Ok(next)
    }

    /// Validates a play and moves `card` onto the discard pile of a copy.
    fn place(&self, side: Side, card: Card) -> Result<Self, ActionError> {
        self.ensure_can_act(side)?;

        if !self.hand(side).contains(card) {
            return Err(ActionError::CardNotInHand);
        }

        if !self.is_playable(card) {
            return Err(ActionError::UnplayableCard);
        }

        let mut next = self.clone();
        next.hand_mut(side).remove(card).ok_or(ActionError::CardNotInHand)?;
        next.discard_pile.push(card);
        Ok(next)
    }

    /// Sets the suit after the human played a wild card and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] unless the phase is
    /// [`Phase::AwaitingSuitChoice`].
    pub fn choose_suit(&self, suit: Suit) -> Result<Self, ActionError> {
        if self.phase != Phase::AwaitingSuitChoice {
            return Err(ActionError::InvalidPhase);
        }

        let mut next = self.clone();
        next.active_suit = suit;
        next.phase = Phase::Playing;
        next.turn = Side::Opponent;

        next.settle();
        Ok(next)
    }

    /// Moves the top of the draw pile into `side`'s hand and passes the turn.
    ///
    /// The drawn card is never played automatically. With an empty draw pile
    /// nothing moves, but the turn still passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase is not [`Phase::Playing`] or it is not
    /// `side`'s turn.
    pub fn draw_card(&self, side: Side) -> Result<Self, ActionError> {
        self.ensure_can_act(side)?;

        let mut next = self.clone();
        if let Some(card) = next.draw_pile.pop() {
            next.hand_mut(side).add_card(card);
        }
        next.turn = side.other();

        next.settle();
        Ok(next)
    }

    /// Moves the round to a terminal phase if it has ended.
    ///
    /// Hand emptiness is checked first, player before opponent. The stuck
    /// check only applies while the phase is [`Phase::Playing`] and the draw
    /// pile is empty.
    pub(crate) fn settle(&mut self) {
        if self.phase.is_terminal() {
            return;
        }

        if self.player_hand.is_empty() {
            self.phase = Phase::Won;
        } else if self.opponent_hand.is_empty() {
            self.phase = Phase::Lost;
        } else if self.phase == Phase::Playing && self.is_stuck() {
            self.phase = Phase::Draw;
        }
    }

    /// Returns whether the draw pile is empty and neither side can play.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.draw_pile.is_empty()
            && self.playable_cards(Side::Player).is_empty()
            && self.playable_cards(Side::Opponent).is_empty()
    }

    /// Returns whether the hands and piles hold exactly the 52-card deck.
    ///
    /// Meaningful once a round has been dealt.
    #[must_use]
    pub fn is_partition_of_deck(&self) -> bool {
        let mut seen = [false; DECK_SIZE];
        let all = self
            .player_hand
            .cards()
            .iter()
            .chain(self.opponent_hand.cards())
            .chain(&self.draw_pile)
            .chain(&self.discard_pile);

        let mut count = 0;
        for card in all {
            let Some(index) = deck_index(*card) else {
                return false;
            };
            if seen[index] {
                return false;
            }
            seen[index] = true;
            count += 1;
        }

        count == DECK_SIZE
    }
}

fn deck_index(card: Card) -> Option<usize> {
    if !(1..=13).contains(&card.rank) {
        return None;
    }
    Some(card.suit.index() * 13 + usize::from(card.rank - 1))
}
