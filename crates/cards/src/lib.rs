// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Higher or Lower cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use hilo_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and uniform random sampling for dealing cards with replacement:
//!
//! ```
//! # use hilo_cards::Card;
//! use rand::Rng;
//!
//! let card: Card = rand::rng().random();
//! assert!((2..=14).contains(&card.rank().value()));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Rank, Suit};
