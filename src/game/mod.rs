//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, Suit, build_deck, shuffle};
use crate::event::Event;
use crate::options::{GameOptions, MAX_HAND_SIZE, MIN_HAND_SIZE};

mod actions;
mod opponent;
pub mod state;

pub use state::{GameState, Phase, RoundId, Side};

/// A Crazy Eights engine for one human and one computer opponent.
///
/// The game owns the current [`GameState`] snapshot, the random number
/// generator used for shuffling, and a log of [`Event`]s not yet taken by the
/// front-end. Every mutating call runs to completion under the state lock, so
/// a `Game` can be shared between threads without further synchronization.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current round snapshot.
    state: Mutex<GameState>,
    /// Events not yet taken by the front-end.
    events: Mutex<Vec<Event>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No round is dealt until [`Game::start_round`] is called; until then the
    /// phase is [`Phase::Idle`].
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::idle()),
            events: Mutex::new(Vec::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a game that resumes from `state`.
    ///
    /// The snapshot is taken as is; it is not checked against the deck. This
    /// is mainly useful for replaying a fixed position.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::{Game, GameOptions, GameState, Phase};
    ///
    /// let game = Game::from_state(GameOptions::default(), 1, GameState::idle());
    /// assert_eq!(game.phase(), Phase::Idle);
    /// ```
    #[must_use]
    pub fn from_state(options: GameOptions, seed: u64, state: GameState) -> Self {
        let game = Self::new(options, seed);
        *game.state.lock() = state;
        game
    }

    /// Shuffles a fresh deck and deals a new round.
    ///
    /// Each side gets [`GameOptions::hand_size`] cards, one card seeds the
    /// discard pile and sets the active suit, and the rest forms the draw
    /// pile. The human moves first. Any round in progress is discarded along
    /// with its pending events.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::{Game, GameOptions, Phase, Side};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let state = game.start_round();
    /// assert_eq!(state.player_hand.len(), 8);
    /// assert_eq!(state.draw_pile.len(), 35);
    /// assert_eq!(state.turn, Side::Player);
    /// assert_eq!(state.phase, Phase::Playing);
    /// ```
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn start_round(&self) -> GameState {
        let hand_size = usize::from(self.options.hand_size.clamp(MIN_HAND_SIZE, MAX_HAND_SIZE));
        let deck = shuffle(&build_deck(), &mut *self.rng.lock());

        let mut state = self.state.lock();
        let round = RoundId(state.round.0 + 1);
        *state = GameState::deal(round, deck, hand_size);

        let mut events = self.events.lock();
        events.clear();
        if let Some(starter) = state.top_discard() {
            events.push(Event::RoundStarted { round, starter });
            log::info!("round {} started, {starter} on discard", round.0);
        }

        state.clone()
    }

    /// Returns a copy of the current snapshot.
    pub fn current_state(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Returns whether `card` is playable right now.
    ///
    /// Intended for highlighting cards; it does not check whose turn it is.
    /// Always `false` before the first round, when there is no discard pile
    /// to match.
    pub fn is_playable(&self, card: Card) -> bool {
        let state = self.state.lock();
        state.phase != Phase::Idle && state.is_playable(card)
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&self) -> Vec<Event> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Returns the current round id.
    pub fn round(&self) -> RoundId {
        self.state.lock().round
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    /// Returns the side that acts next.
    pub fn turn(&self) -> Side {
        self.state.lock().turn
    }

    /// Returns the current active suit.
    pub fn active_suit(&self) -> Suit {
        self.state.lock().active_suit
    }

    /// Returns the number of cards remaining in the draw pile.
    pub fn cards_remaining(&self) -> usize {
        self.state.lock().cards_remaining()
    }
}
