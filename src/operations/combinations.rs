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

/// All C(n, k) k-subsets of `items`, in lexicographic order over index
/// positions: of two subsets, the one whose earliest differing index is
/// smaller comes first.
///
/// The order is a contract, not an artifact. The witness search reports
/// the first satisfying subset it sees, so this enumeration order is
/// the documented tie-break among simultaneous losing configurations.
///
/// `k = 0` yields a single empty subset, `k = n` the whole input,
/// `k > n` nothing.
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        k,
        done: k > items.len(),
    }
}

pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: SmallVec<[usize; 4]>,
    k: usize,
    done: bool,
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = SmallVec<[T; 4]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self.indices.iter().map(|&i| self.items[i]).collect();

        // advance to the lexicographic successor: bump the rightmost
        // index that still has room, then close up the tail behind it
        let n = self.items.len();
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < n - self.k + i {
                self.indices[i] += 1;
                for j in i + 1..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(subset)
    }
}
