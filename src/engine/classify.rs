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

use tracing::warn;

use crate::engine::error::EngineError;
use crate::geometry::{ConicPath, Point};
use crate::kernel::{
    CIRCLE_FIT_ABS_TOL, CIRCLE_FIT_REL_TOL, COLLINEAR_EPS, MIN_RADIUS, are_collinear, circumcircle,
};
use crate::operations::combinations;

/// Builds the renderable primitive for a witness already known to be
/// concyclic-or-collinear as a set.
///
/// The 4-point determinant vanishes for lines and circles alike, so the
/// two cases are told apart explicitly: the witness is a line iff every
/// 3-subset is collinear. Otherwise the first 3-subset (in enumeration
/// order) whose circumscribed circle places the remaining point within
/// `max(CIRCLE_FIT_ABS_TOL, radius * CIRCLE_FIT_REL_TOL)` of its
/// boundary decides the circle. The relative part matters: absolute
/// error grows with the radius.
///
/// Errors only on malformed input (not exactly 4 mutually distinct
/// points), which is a caller bug.
pub fn classify(witness: &[Point]) -> Result<ConicPath, EngineError> {
    if witness.len() != 4 {
        return Err(EngineError::MalformedWitness(witness.len()));
    }
    let pts = [witness[0], witness[1], witness[2], witness[3]];
    for i in 0..4 {
        for j in i + 1..4 {
            if pts[i] == pts[j] {
                return Err(EngineError::MalformedWitness(witness.len()));
            }
        }
    }

    if all_triples_collinear(&pts) {
        return Ok(extreme_line(&pts));
    }

    for triple in combinations(&pts, 3) {
        let (a, b, c) = (triple[0].to_f64(), triple[1].to_f64(), triple[2].to_f64());
        if are_collinear(&a, &b, &c, COLLINEAR_EPS) {
            continue;
        }
        let Some(circle) = circumcircle(&a, &b, &c, COLLINEAR_EPS, MIN_RADIUS) else {
            continue;
        };
        // the witness member left out of this triple must sit on the
        // candidate circle
        let Some(fourth) = pts.iter().copied().find(|p| !triple.contains(p)) else {
            continue;
        };
        let tol = CIRCLE_FIT_ABS_TOL.max(circle.radius * CIRCLE_FIT_REL_TOL);
        if circle.boundary_deviation(&fourth.to_f64()) < tol {
            return Ok(ConicPath::Circle(circle));
        }
    }

    // Numerical edge case: the 4-point determinant accepted the set but
    // no 3-subset circumcircle verified the remaining point. Degrade to
    // the extreme-point line instead of failing; the warning keeps it
    // visible in diagnostics.
    warn!(?witness, "no circumcircle verified the fourth point; rendering as line");
    Ok(extreme_line(&pts))
}

fn all_triples_collinear(pts: &[Point; 4]) -> bool {
    combinations(pts, 3)
        .all(|t| are_collinear(&t[0].to_f64(), &t[1].to_f64(), &t[2].to_f64(), COLLINEAR_EPS))
}

/// The segment between the two extreme witnesses in `(x, then y)`
/// order; for a collinear witness the other two points lie between
/// them.
fn extreme_line(pts: &[Point; 4]) -> ConicPath {
    let mut sorted = *pts;
    sorted.sort_unstable();
    ConicPath::Line {
        start: sorted[0],
        end: sorted[3],
    }
}
