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

use concyclic::{ConicPath, Game, Outcome, Phase, PlaceError, Player, Point};

#[test]
fn test_completing_the_square_loses_automatically() {
    let mut game = Game::new(10, false);
    game.place(Point::new(0, 0)).unwrap(); // P1
    game.place(Point::new(2, 0)).unwrap(); // P2
    game.place(Point::new(0, 2)).unwrap(); // P1
    let phase = game.place(Point::new(2, 2)).unwrap(); // P2 completes the circle

    assert_eq!(
        phase,
        Phase::Over(Outcome::ConcyclicSet {
            winner: Player::One
        })
    );
    assert_eq!(
        game.witness(),
        Some([
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(0, 2),
            Point::new(2, 2),
        ])
    );
    assert!(matches!(game.conic_path(), Some(ConicPath::Circle(_))));
}

#[test]
fn test_three_stones_never_end_the_round() {
    let mut game = Game::new(10, false);
    game.place(Point::new(0, 0)).unwrap();
    game.place(Point::new(1, 0)).unwrap();
    let phase = game.place(Point::new(2, 0)).unwrap();
    assert_eq!(phase, Phase::SelectingSpot);
    assert_eq!(game.current_player(), Player::Two);
}

#[test]
fn test_occupied_and_out_of_bounds_are_rejected() {
    let mut game = Game::new(10, false);
    game.place(Point::new(3, 3)).unwrap();

    assert_eq!(
        game.place(Point::new(3, 3)),
        Err(PlaceError::Occupied { x: 3, y: 3 })
    );
    assert_eq!(
        game.place(Point::new(11, 0)),
        Err(PlaceError::OutOfBounds {
            x: 11,
            y: 0,
            divisions: 10
        })
    );
    // failed placements cost no turn
    assert_eq!(game.current_player(), Player::Two);
    assert_eq!(game.stones().len(), 1);
}

#[test]
fn test_no_moves_after_the_round_ends() {
    let mut game = Game::new(10, false);
    for p in [
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(2, 0),
        Point::new(3, 0),
    ] {
        game.place(p).unwrap();
    }
    assert!(matches!(game.phase(), Phase::Over(_)));
    assert_eq!(game.place(Point::new(5, 5)), Err(PlaceError::RoundOver));
}

#[test]
fn test_successful_challenge() {
    let mut game = Game::new(10, true);
    // each placement declines the pending challenge on the previous one
    game.place(Point::new(0, 0)).unwrap(); // P1
    game.place(Point::new(2, 0)).unwrap(); // P2
    game.place(Point::new(0, 2)).unwrap(); // P1
    let phase = game.place(Point::new(2, 2)).unwrap(); // P2 completes the circle
    assert_eq!(phase, Phase::AwaitingChallenge);
    assert_eq!(game.current_player(), Player::One);

    let phase = game.challenge().unwrap();
    assert_eq!(
        phase,
        Phase::Over(Outcome::ChallengeWon {
            winner: Player::One
        })
    );
    assert!(matches!(game.conic_path(), Some(ConicPath::Circle(_))));
}

#[test]
fn test_failed_challenge_loses_the_round() {
    let mut game = Game::new(10, true);
    game.place(Point::new(0, 0)).unwrap(); // P1
    // P2 challenges a single harmless stone
    let phase = game.challenge().unwrap();
    assert_eq!(
        phase,
        Phase::Over(Outcome::ChallengeFailed {
            winner: Player::One
        })
    );
    assert_eq!(game.witness(), None);
}

#[test]
fn test_placing_declines_a_pending_challenge() {
    let mut game = Game::new(10, true);
    game.place(Point::new(0, 0)).unwrap(); // P1
    assert_eq!(game.phase(), Phase::AwaitingChallenge);
    assert_eq!(game.current_player(), Player::Two);

    // the collinear set is only formed later; declining leaves the
    // earlier stone standing unchecked
    game.place(Point::new(1, 1)).unwrap(); // P2 declines and places
    assert_eq!(game.phase(), Phase::AwaitingChallenge);
    assert_eq!(game.current_player(), Player::One);
}

#[test]
fn test_challenge_without_pending_stone() {
    let mut game = Game::new(10, false);
    game.place(Point::new(0, 0)).unwrap();
    assert_eq!(game.challenge(), Err(PlaceError::NothingToChallenge));
}

#[test]
fn test_reset_clears_the_round() {
    let mut game = Game::new(10, false);
    for p in [
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(2, 0),
        Point::new(3, 0),
    ] {
        game.place(p).unwrap();
    }
    assert!(matches!(game.phase(), Phase::Over(_)));

    game.reset(12);
    assert_eq!(game.phase(), Phase::SelectingSpot);
    assert_eq!(game.current_player(), Player::One);
    assert!(game.stones().is_empty());
    assert_eq!(game.witness(), None);
    assert!(game.conic_path().is_none());
    assert_eq!(game.divisions(), 12);
    // the previously occupied intersection is free again
    game.place(Point::new(0, 0)).unwrap();
}

#[test]
fn test_full_board_resolves_pending_stone() {
    // on the 2x2 lattice the four corners are concyclic, so filling the
    // board under the challenge rule ends with the set detected
    let mut game = Game::new(1, true);
    game.place(Point::new(0, 0)).unwrap();
    game.place(Point::new(1, 0)).unwrap();
    game.place(Point::new(0, 1)).unwrap();
    let phase = game.place(Point::new(1, 1)).unwrap();
    assert_eq!(
        phase,
        Phase::Over(Outcome::ConcyclicSet {
            winner: Player::One
        })
    );
}
