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

use concyclic::{ConicPath, EngineError, Point, classify};

#[test]
fn test_collinear_witness_becomes_extreme_line() {
    let witness = [
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(2, 0),
        Point::new(3, 0),
    ];
    assert_eq!(
        classify(&witness).unwrap(),
        ConicPath::Line {
            start: Point::new(0, 0),
            end: Point::new(3, 0),
        }
    );
}

#[test]
fn test_line_endpoints_ignore_input_order() {
    let witness = [
        Point::new(2, 7),
        Point::new(2, 0),
        Point::new(2, 5),
        Point::new(2, 3),
    ];
    let ConicPath::Line { start, end } = classify(&witness).unwrap() else {
        panic!("vertical witness must classify as a line");
    };
    assert_eq!(start, Point::new(2, 0));
    assert_eq!(end, Point::new(2, 7));
    // the other two stones lie between the extremes
    for p in &witness {
        assert!(start <= *p && *p <= end);
    }
}

#[test]
fn test_square_becomes_circle() {
    let witness = [
        Point::new(0, 0),
        Point::new(2, 0),
        Point::new(0, 2),
        Point::new(2, 2),
    ];
    let ConicPath::Circle(circle) = classify(&witness).unwrap() else {
        panic!("the square must classify as a circle");
    };
    assert!((circle.center.x - 1.0).abs() < 1e-9);
    assert!((circle.center.y - 1.0).abs() < 1e-9);
    assert!((circle.radius - 2f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_radius_five_lattice_circle() {
    let witness = [
        Point::new(5, 0),
        Point::new(3, 4),
        Point::new(0, 5),
        Point::new(-5, 0),
    ];
    let ConicPath::Circle(circle) = classify(&witness).unwrap() else {
        panic!("expected a circle");
    };
    assert!(circle.center.x.abs() < 1e-9);
    assert!(circle.center.y.abs() < 1e-9);
    assert!((circle.radius - 5.0).abs() < 1e-9);
}

#[test]
fn test_too_few_points_is_a_precondition_violation() {
    let witness = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
    assert_eq!(classify(&witness), Err(EngineError::MalformedWitness(3)));
}

#[test]
fn test_duplicate_points_are_rejected() {
    let witness = [
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(1, 0),
        Point::new(2, 2),
    ];
    assert_eq!(classify(&witness), Err(EngineError::MalformedWitness(4)));
}
