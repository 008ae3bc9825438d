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

use smallvec::SmallVec;

use crate::engine::error::EngineError;
use crate::geometry::{Point, Point2, Segment};
use crate::kernel::AXIS_EPS;

/// Extends the infinite line through `start` and `end` to its full
/// visible extent inside the `[0, width] x [0, height]` board.
///
/// The two input points define a direction; they need not touch the
/// boundary. Axis-parallel lines intersect exactly two opposite edges.
/// An oblique line is intersected with all four edges, keeping hits
/// whose other coordinate stays on the board; a line through a corner
/// can leave three or four candidates, so the farthest pair is chosen
/// to span the whole chord. With fewer than two boundary hits the input
/// segment is returned unchanged.
pub fn clip_to_board(
    start: Point,
    end: Point,
    width: f64,
    height: f64,
) -> Result<Segment<f64>, EngineError> {
    if !(width > 0.0) || !(height > 0.0) {
        return Err(EngineError::DegenerateBoundary { width, height });
    }

    let p1 = start.to_f64();
    let p2 = end.to_f64();

    let mut hits: SmallVec<[Point2<f64>; 4]> = SmallVec::new();
    if (p1.x - p2.x).abs() < AXIS_EPS {
        // vertical
        hits.push(Point2::new(p1.x, 0.0));
        hits.push(Point2::new(p1.x, height));
    } else if (p1.y - p2.y).abs() < AXIS_EPS {
        // horizontal
        hits.push(Point2::new(0.0, p1.y));
        hits.push(Point2::new(width, p1.y));
    } else {
        let slope = (p2.y - p1.y) / (p2.x - p1.x);
        let intercept = p1.y - slope * p1.x;

        let y_left = intercept;
        if (0.0..=height).contains(&y_left) {
            hits.push(Point2::new(0.0, y_left));
        }
        let y_right = slope * width + intercept;
        if (0.0..=height).contains(&y_right) {
            hits.push(Point2::new(width, y_right));
        }
        if slope.abs() > AXIS_EPS {
            let x_bottom = -intercept / slope;
            if (0.0..=width).contains(&x_bottom) {
                hits.push(Point2::new(x_bottom, 0.0));
            }
            let x_top = (height - intercept) / slope;
            if (0.0..=width).contains(&x_top) {
                hits.push(Point2::new(x_top, height));
            }
        }
    }

    let mut best: Option<(Point2<f64>, Point2<f64>)> = None;
    let mut best_dist = -1.0;
    for i in 0..hits.len() {
        for j in i + 1..hits.len() {
            let d = hits[i].distance_to(&hits[j]);
            if d > best_dist {
                best_dist = d;
                best = Some((hits[i], hits[j]));
            }
        }
    }

    match best {
        Some((a, b)) => Ok(Segment::new(a, b)),
        None => Ok(Segment::new(p1, p2)),
    }
}
