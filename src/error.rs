//! Error types for game operations.

use thiserror::Error;

/// Reasons an action is rejected.
///
/// A rejected action never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The acting side does not hold the turn.
    #[error("not this side's turn")]
    NotYourTurn,
    /// The current phase does not permit this action.
    #[error("invalid phase for this action")]
    InvalidPhase,
    /// The card is not in the acting side's hand.
    #[error("card not in hand")]
    CardNotInHand,
    /// The card cannot be played on the current discard.
    #[error("card is not playable")]
    UnplayableCard,
    /// The action was scheduled for a round that has since been replaced.
    #[error("action belongs to a previous round")]
    StaleRound,
}
