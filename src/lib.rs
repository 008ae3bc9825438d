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

//! Concyclic-set detection and path reconstruction for a two-player
//! lattice stone-placement game: a player loses when four stones, one of
//! them just placed, lie on a common circle or straight line.
//!
//! The crate is the detection engine only. It finds a witnessing
//! 4-subset after each placement, reconstructs the line or circle
//! through the witnesses, and clips lines to the visible board. Turn
//! handling lives in [`game`]; rendering and input are the caller's
//! concern.
//!
//! ```
//! use concyclic::{ConicPath, Point, classify, find_witness};
//!
//! let stones = [
//!     Point::new(0, 0),
//!     Point::new(2, 0),
//!     Point::new(0, 2),
//!     Point::new(2, 2),
//! ];
//! let witness = find_witness(&stones, Point::new(2, 2)).unwrap();
//! match classify(&witness).unwrap() {
//!     ConicPath::Circle(c) => assert!((c.radius - 2f64.sqrt()).abs() < 1e-9),
//!     ConicPath::Line { .. } => unreachable!("the square is a genuine circle"),
//! }
//! ```

pub mod engine;
pub mod game;
pub mod geometry;
pub mod kernel;
pub mod operations;

pub use engine::{EngineError, classify, clip_to_board, find_witness};
pub use geometry::{Circle, ConicPath, Point, Point2, Segment};
pub use game::{Game, Outcome, Phase, PlaceError, Player};
