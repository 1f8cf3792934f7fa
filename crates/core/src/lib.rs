// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Higher or Lower round engine.
//!
//! A [Round] deals three cards and resolves the player guesses:
//!
//! ```
//! use hilo_core::{Action, Guess, Round, RoundState};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut round = Round::deal(&mut rng);
//! assert_eq!(round.state(), RoundState::AwaitingFirstGuess);
//!
//! round.apply(Action::Guess(Guess::Higher), &mut rng);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod round;
pub use round::{Action, Guess, LossReason, Outcome, Round, RoundState};
