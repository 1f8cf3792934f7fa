// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round state machine.
use rand::Rng;
use std::cmp::Ordering;

use hilo_cards::Card;

/// A player guess on the next card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// The next card rank is higher.
    Higher,
    /// The next card rank is lower.
    Lower,
}

/// A logical action produced by the input layer.
///
/// Both the keyboard and the pointer paths map to these actions, any action
/// not valid in the current state is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Guess the next card rank.
    Guess(Guess),
    /// Start a new round with a fresh draw.
    Reset,
}

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// The guessed direction was wrong.
    WrongGuess,
    /// The compared ranks tied, a tie always loses.
    Tie,
}

/// Final result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both guesses were correct.
    Win,
    /// A guess was wrong or tied.
    Loss(LossReason),
}

impl Outcome {
    /// Checks if this is a winning outcome.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// The result message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "You won!",
            Outcome::Loss(LossReason::WrongGuess) => "You lost!",
            Outcome::Loss(LossReason::Tie) => "Tie — you lose!",
        }
    }
}

/// The round step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Guessing between the first and second card.
    AwaitingFirstGuess,
    /// Guessing between the second and third card.
    AwaitingSecondGuess,
    /// The round is over, terminal until reset.
    Resolved(Outcome),
}

/// A round of three cards drawn with replacement.
#[derive(Debug, Clone)]
pub struct Round {
    cards: [Card; Self::CARDS],
    state: RoundState,
}

impl Round {
    /// The number of cards in a round.
    pub const CARDS: usize = 3;

    /// Deals a new round with three random cards.
    ///
    /// Cards are drawn independently with replacement, duplicate ranks are
    /// possible and resolve as a tie loss.
    pub fn deal<R: Rng>(rng: &mut R) -> Self {
        Self {
            cards: std::array::from_fn(|_| rng.random()),
            state: RoundState::AwaitingFirstGuess,
        }
    }

    /// Returns the cards in play.
    pub fn cards(&self) -> &[Card; Self::CARDS] {
        &self.cards
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome of a resolved round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Checks if the card at the given slot is face up.
    ///
    /// The first card is always face up, the second turns once the first
    /// guess is made, the third once the round resolves.
    pub fn revealed(&self, slot: usize) -> bool {
        match self.state {
            RoundState::AwaitingFirstGuess => slot == 0,
            RoundState::AwaitingSecondGuess => slot <= 1,
            RoundState::Resolved(_) => true,
        }
    }

    /// Applies an input action to the round.
    ///
    /// A guess while resolved or a reset while guessing is a no-op, exactly
    /// one guess is evaluated per step.
    pub fn apply<R: Rng>(&mut self, action: Action, rng: &mut R) {
        match (self.state, action) {
            (RoundState::AwaitingFirstGuess, Action::Guess(guess)) => {
                self.state = match resolve_guess(self.cards[0], self.cards[1], guess) {
                    GuessResult::Tie => RoundState::Resolved(Outcome::Loss(LossReason::Tie)),
                    GuessResult::Correct => RoundState::AwaitingSecondGuess,
                    GuessResult::Wrong => {
                        RoundState::Resolved(Outcome::Loss(LossReason::WrongGuess))
                    }
                };
            }
            (RoundState::AwaitingSecondGuess, Action::Guess(guess)) => {
                self.state = match resolve_guess(self.cards[1], self.cards[2], guess) {
                    GuessResult::Tie => RoundState::Resolved(Outcome::Loss(LossReason::Tie)),
                    GuessResult::Correct => RoundState::Resolved(Outcome::Win),
                    GuessResult::Wrong => {
                        RoundState::Resolved(Outcome::Loss(LossReason::WrongGuess))
                    }
                };
            }
            (RoundState::Resolved(_), Action::Reset) => *self = Self::deal(rng),
            _ => {}
        }
    }
}

enum GuessResult {
    Correct,
    Wrong,
    Tie,
}

fn resolve_guess(prev: Card, next: Card, guess: Guess) -> GuessResult {
    match next.rank().cmp(&prev.rank()) {
        Ordering::Equal => GuessResult::Tie,
        Ordering::Greater if guess == Guess::Higher => GuessResult::Correct,
        Ordering::Less if guess == Guess::Lower => GuessResult::Correct,
        _ => GuessResult::Wrong,
    }
}
