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

pub mod predicates;

pub use predicates::{are_collinear, are_concyclic_or_collinear, circumcircle, orient2d};

// Tolerances for the bounded integer lattice in scope (boards up to
// roughly 20x20 intersections). Absolute, not relative: coordinates are
// small integers, so a fixed epsilon suffices. A larger or non-integer
// board would need these scaled by a characteristic length.

/// Collinearity threshold on twice the signed triangle area.
pub const COLLINEAR_EPS: f64 = 1e-7;

/// Threshold on the 4x4 concyclic-or-collinear determinant.
pub const CONCYCLIC_EPS: f64 = 1e-7;

/// Circumcircles below this radius are treated as degenerate.
pub const MIN_RADIUS: f64 = 1e-4;

/// Floor of the circle-fit tolerance used when verifying the fourth
/// witness against a candidate circumcircle.
pub const CIRCLE_FIT_ABS_TOL: f64 = 1e-2;

/// Relative part of the circle-fit tolerance: absolute error grows with
/// the radius, so the check is `max(abs_tol, radius * rel_tol)`.
pub const CIRCLE_FIT_REL_TOL: f64 = 2e-2;

/// Below this coordinate delta a line counts as axis-parallel when
/// clipping.
pub const AXIS_EPS: f64 = 1e-6;
