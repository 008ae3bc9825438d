// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Headless round state for the two-player game. The engine stays a
//! pure function of its inputs; this module is the caller side of its
//! contract: turn order, the optional challenge rule, and the
//! renderable path once a round ends. Input mapping and rendering stay
//! outside the crate.

use ahash::AHashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::engine::{classify, find_witness};
use crate::geometry::{ConicPath, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The loser completed a concyclic-or-collinear set; detected
    /// automatically on placement.
    ConcyclicSet { winner: Player },
    /// The challenged stone did complete a set.
    ChallengeWon { winner: Player },
    /// The challenged stone completed nothing; the challenger loses.
    ChallengeFailed { winner: Player },
    /// Every intersection is occupied and no set was formed.
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The current player picks an intersection.
    SelectingSpot,
    /// Challenge rule only: the opponent of the last placer may
    /// challenge the stone, or place their own (which declines).
    AwaitingChallenge,
    Over(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("({x}, {y}) is outside the {divisions}x{divisions} board")]
    OutOfBounds { x: i32, y: i32, divisions: i32 },

    #[error("a stone already occupies ({x}, {y})")]
    Occupied { x: i32, y: i32 },

    #[error("the round is over")]
    RoundOver,

    #[error("no stone is awaiting a challenge")]
    NothingToChallenge,
}

/// One round of the game on the `(divisions + 1)^2` lattice
/// `[0, divisions]^2`.
#[derive(Debug, Clone)]
pub struct Game {
    divisions: i32,
    challenge_rule: bool,
    stones: Vec<Point>,
    occupied: AHashSet<Point>,
    current: Player,
    phase: Phase,
    last_placed: Option<Point>,
    witness: Option<[Point; 4]>,
    path: Option<ConicPath>,
}

impl Game {
    pub fn new(divisions: u32, challenge_rule: bool) -> Self {
        Self {
            divisions: divisions as i32,
            challenge_rule,
            stones: Vec::new(),
            occupied: AHashSet::new(),
            current: Player::One,
            phase: Phase::SelectingSpot,
            last_placed: None,
            witness: None,
            path: None,
        }
    }

    /// Places a stone for the current player and advances the round.
    ///
    /// Without the challenge rule the new stone is checked immediately:
    /// a witness ends the round against the placer. With the rule the
    /// stone stands unchecked and the opponent chooses to challenge or
    /// to play on; placing while a challenge is pending declines it.
    pub fn place(&mut self, stone: Point) -> Result<Phase, PlaceError> {
        if let Phase::Over(_) = self.phase {
            return Err(PlaceError::RoundOver);
        }
        if !(0..=self.divisions).contains(&stone.x) || !(0..=self.divisions).contains(&stone.y) {
            return Err(PlaceError::OutOfBounds {
                x: stone.x,
                y: stone.y,
                divisions: self.divisions,
            });
        }
        if self.occupied.contains(&stone) {
            return Err(PlaceError::Occupied {
                x: stone.x,
                y: stone.y,
            });
        }
        if self.phase == Phase::AwaitingChallenge {
            debug!(player = ?self.current, "challenge declined by placing");
        }

        self.occupied.insert(stone);
        self.stones.push(stone);
        self.last_placed = Some(stone);

        if self.challenge_rule {
            self.current = self.current.opponent();
            if self.board_full() {
                // no intersection left to decline into; resolve the
                // pending stone now
                match find_witness(&self.stones, stone) {
                    Some(w) => self.finish_with_witness(
                        w,
                        Outcome::ConcyclicSet {
                            winner: self.current,
                        },
                    ),
                    None => {
                        info!("board full with no set formed, draw");
                        self.phase = Phase::Over(Outcome::Draw);
                    }
                }
            } else {
                self.phase = Phase::AwaitingChallenge;
            }
            return Ok(self.phase);
        }

        if let Some(w) = find_witness(&self.stones, stone) {
            self.finish_with_witness(
                w,
                Outcome::ConcyclicSet {
                    winner: self.current.opponent(),
                },
            );
        } else if self.board_full() {
            info!("board full with no set formed, draw");
            self.phase = Phase::Over(Outcome::Draw);
        } else {
            self.current = self.current.opponent();
        }
        Ok(self.phase)
    }

    /// Resolves a pending challenge against the last placed stone. A
    /// witness containing it means the challenger wins; none means the
    /// challenge was wrong and the challenger loses. Either way the
    /// round ends.
    pub fn challenge(&mut self) -> Result<Phase, PlaceError> {
        if self.phase != Phase::AwaitingChallenge {
            return Err(PlaceError::NothingToChallenge);
        }
        let Some(target) = self.last_placed else {
            return Err(PlaceError::NothingToChallenge);
        };

        match find_witness(&self.stones, target) {
            Some(w) => self.finish_with_witness(
                w,
                Outcome::ChallengeWon {
                    winner: self.current,
                },
            ),
            None => {
                info!(challenger = ?self.current, "challenge failed");
                self.phase = Phase::Over(Outcome::ChallengeFailed {
                    winner: self.current.opponent(),
                });
            }
        }
        Ok(self.phase)
    }

    /// Clears the board for a fresh round, possibly at a new size.
    pub fn reset(&mut self, divisions: u32) {
        self.divisions = divisions as i32;
        self.stones.clear();
        self.occupied.clear();
        self.current = Player::One;
        self.phase = Phase::SelectingSpot;
        self.last_placed = None;
        self.witness = None;
        self.path = None;
    }

    fn finish_with_witness(&mut self, witness: [Point; 4], outcome: Outcome) {
        // any witness the search returns satisfies classify's
        // preconditions
        self.path = classify(&witness).ok();
        self.witness = Some(witness);
        self.phase = Phase::Over(outcome);
        info!(?outcome, "round over");
    }

    fn board_full(&self) -> bool {
        let intersections = (self.divisions + 1) * (self.divisions + 1);
        self.stones.len() as i32 == intersections
    }

    /// Stones in placement order.
    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn divisions(&self) -> i32 {
        self.divisions
    }

    /// The 4-subset that ended the round, if it ended with one.
    pub fn witness(&self) -> Option<[Point; 4]> {
        self.witness
    }

    /// The renderable line or circle through the witness.
    pub fn conic_path(&self) -> Option<ConicPath> {
        self.path
    }
}
