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

use tracing::debug;

use crate::geometry::Point;
use crate::kernel::{CONCYCLIC_EPS, are_concyclic_or_collinear};
use crate::operations::combinations;

/// The first 4-subset of `points`, in enumeration order, that contains
/// `must_include` and is concyclic-or-collinear.
///
/// Serves both call modes of the game: placement checks pass the stone
/// just placed, challenge resolution passes the stone under challenge.
/// `None` is the common non-event — the round simply continues.
///
/// Deterministic: the same point set and `must_include` always yield
/// the same witness. When several losing configurations exist at once,
/// the enumeration order picks one arbitrarily but reproducibly; it is
/// not the smallest or most visually obvious one.
pub fn find_witness(points: &[Point], must_include: Point) -> Option<[Point; 4]> {
    if points.len() < 4 {
        return None;
    }

    for combo in combinations(points, 4) {
        if !combo.contains(&must_include) {
            continue;
        }
        let (a, b, c, d) = (
            combo[0].to_f64(),
            combo[1].to_f64(),
            combo[2].to_f64(),
            combo[3].to_f64(),
        );
        if are_concyclic_or_collinear(&a, &b, &c, &d, CONCYCLIC_EPS) {
            let witness = [combo[0], combo[1], combo[2], combo[3]];
            debug!(?witness, "concyclic-or-collinear witness found");
            return Some(witness);
        }
    }

    None
}
