//! Game configuration options.

/// Smallest hand size.
pub const MIN_HAND_SIZE: u8 = 1;

/// Largest hand size that still leaves a discard starter in a 52-card deck.
pub const MAX_HAND_SIZE: u8 = 25;

/// Configuration options for a Crazy Eights game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use c8rs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_auto_opponent(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each side at the start of a round.
    pub hand_size: u8,
    /// Whether the engine plays the opponent's turn as soon as the human
    /// passes the turn.
    ///
    /// Leave this off when the front-end schedules the opponent itself (for
    /// example after a short delay) through [`crate::Game::opponent_turn`].
    pub auto_opponent: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 8,
            auto_opponent: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each side.
    ///
    /// Values outside [`MIN_HAND_SIZE`]..=[`MAX_HAND_SIZE`] are clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    ///
    /// let options = GameOptions::default().with_hand_size(40);
    /// assert_eq!(options.hand_size, 25);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = match hand_size {
            0 => MIN_HAND_SIZE,
            n if n > MAX_HAND_SIZE => MAX_HAND_SIZE,
            n => n,
        };
        self
    }

    /// Sets whether the opponent moves automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_opponent(true);
    /// assert!(options.auto_opponent);
    /// ```
    #[must_use]
    pub const fn with_auto_opponent(mut self, auto_opponent: bool) -> Self {
        self.auto_opponent = auto_opponent;
        self
    }
}
