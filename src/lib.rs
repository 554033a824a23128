//! A Crazy Eights game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a two-sided round between a
//! human and a computer opponent: dealing, turn order, the legality rule,
//! wild-card suit changes, the opponent's policy, and end-of-round detection.
//! Rendering and input are left to the caller, which forwards the human's
//! choices and reads back [`GameState`] snapshots and [`Event`]s.
//!
//! # Example
//!
//! ```
//! use c8rs::{Game, GameOptions, Side};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let state = game.start_round();
//! let _ = game.draw_card(Side::Player);
//! let _ = game.opponent_turn(state.round);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, WILD_RANK, build_deck, shuffle};
pub use error::ActionError;
pub use event::{Event, Outcome};
pub use game::{Game, GameState, Phase, RoundId, Side};
pub use hand::Hand;
pub use options::{GameOptions, MAX_HAND_SIZE, MIN_HAND_SIZE};
pub use policy::{OpponentAction, OpponentView};
pub use rules::is_playable;
