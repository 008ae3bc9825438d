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

use num_traits::Float;

use crate::geometry::{Circle, Point2};

/// Twice the signed area of the triangle abc.
///
/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

pub fn are_collinear<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, eps: T) -> bool {
    orient2d(a, b, c).abs() < eps
}

/// The circumscribed circle through three points, solved from the two
/// perpendicular-bisector equations; the radius is the distance from
/// the center to `a`.
///
/// `None` for collinear triples (within `eps`) and for near-coincident
/// inputs whose radius falls below `min_radius`.
pub fn circumcircle<T: Float>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    eps: T,
    min_radius: T,
) -> Option<Circle<T>> {
    if are_collinear(a, b, c, eps) {
        return None;
    }
    let two = T::one() + T::one();
    let d = two * orient2d(a, b, c);
    if d.abs() < eps {
        return None;
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let center = Point2::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );

    let radius = center.distance_to(a);
    if radius < min_radius {
        return None;
    }
    Some(Circle::new(center, radius))
}

#[allow(clippy::too_many_arguments)]
fn det3<T: Float>(a: T, b: T, c: T, d: T, e: T, f: T, g: T, h: T, i: T) -> T {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// Four points lie on a common circle or a common line iff the 4x4
/// determinant of rows `[x²+y², x, y, 1]` vanishes. A line is the
/// limiting circle of infinite radius, so the test conflates the two on
/// purpose; callers that need the distinction check the 3-point subsets
/// afterwards.
pub fn are_concyclic_or_collinear<T: Float>(
    p1: &Point2<T>,
    p2: &Point2<T>,
    p3: &Point2<T>,
    p4: &Point2<T>,
    eps: T,
) -> bool {
    let m = [p1, p2, p3, p4].map(|p| [p.x * p.x + p.y * p.y, p.x, p.y, T::one()]);

    // cofactor expansion along the first row
    let mut det = m[0][0]
        * det3(
            m[1][1], m[1][2], m[1][3], m[2][1], m[2][2], m[2][3], m[3][1], m[3][2], m[3][3],
        );
    det = det
        - m[0][1]
            * det3(
                m[1][0], m[1][2], m[1][3], m[2][0], m[2][2], m[2][3], m[3][0], m[3][2], m[3][3],
            );
    det = det
        + m[0][2]
            * det3(
                m[1][0], m[1][1], m[1][3], m[2][0], m[2][1], m[2][3], m[3][0], m[3][1], m[3][3],
            );
    det = det
        - m[0][3]
            * det3(
                m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2], m[3][0], m[3][1], m[3][2],
            );

    det.abs() < eps
}
