//! Myers' shortest edit script
//!
//! The forward search explores the edit graph one depth `d` at a time, where `d`
//! is the number of non-diagonal (insert/delete) moves spent so far. For every
//! reachable diagonal `k = x - y` it keeps the furthest x-coordinate, following
//! free diagonal moves ("snakes") while elements match. The history of those
//! frontiers is the [`Trace`]; walking it backwards from `(N, M)` recovers the
//! edit script.
//!
//! When several scripts share the minimum length, the choice between an insert
//! and a delete at interior diagonals is made with the classic rule
//! `v[k - 1] < v[k + 1]` (insert), so deletions are preferred on ties and come
//! before insertions in the produced script.

use crate::artifacts::diff::operation::Operation;
use crate::artifacts::diff::trace::{Frontier, Trace};
use derive_new::new;

/// Macro for debug logging that is enabled with the debug_trace feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("depth {} reached diagonal {}", d, k);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_trace")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub trait DiffAlgorithm {
    type Trace;
    type EditScript;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self, trace: &Self::Trace) -> Self::EditScript;

    fn diff(&self) -> Self::EditScript {
        let trace = self.compute_shortest_edit();
        self.backtrack(&trace)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: PartialEq> MyersDiff<'_, T> {
    fn follow_snake(&self, mut x: usize, mut y: usize) -> (usize, usize) {
        while x < self.a.len() && y < self.b.len() && self.a[x] == self.b[y] {
            x += 1;
            y += 1;
        }
        (x, y)
    }
}

/// Diagonal from which the best path onto `k` at depth `d` was taken
///
/// `k + 1` means an insert (moving down), `k - 1` a deletion (moving right).
fn predecessor(previous: &Frontier, k: isize, d: isize) -> isize {
    if k == -d || (k != d && previous.get(k - 1) < previous.get(k + 1)) {
        k + 1
    } else {
        k - 1
    }
}

impl<T: PartialEq> DiffAlgorithm for MyersDiff<'_, T> {
    type Trace = Trace;
    type EditScript = Vec<Operation>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len(), self.b.len());
        let mut trace = Trace::new(n, m);

        // depth 0 is the common prefix
        let (leading, _) = self.follow_snake(0, 0);
        let mut origin = Frontier::new(0);
        origin.record(0, leading);
        trace.push(origin);

        if leading == n && leading == m {
            debug_log!("identical inputs, {} matching elements", leading);
            return trace;
        }

        for d in 1..=(n + m) {
            let depth = d as isize;
            let previous = trace.frontier(d - 1);
            let mut current = Frontier::new(d);
            let mut reached_end = false;

            for k in (-depth..=depth).step_by(2) {
                let prev_k = predecessor(previous, k, depth);
                let x = if prev_k == k + 1 {
                    previous.get(prev_k)
                } else {
                    previous.get(prev_k) + 1
                };
                // y never goes negative: every move starts from a point inside the graph
                let y = (x as isize - k) as usize;

                let (x, y) = self.follow_snake(x, y);
                current.record(k, x);

                if x == n && y == m {
                    reached_end = true;
                    break;
                }
            }

            debug_log!(
                "depth {}: {:?}",
                d,
                current.diagonals().collect::<Vec<_>>()
            );
            trace.push(current);

            if reached_end {
                debug_log!("edit distance {} for {}x{} inputs", d, n, m);
                return trace;
            }
        }

        trace
    }

    fn backtrack(&self, trace: &Self::Trace) -> Self::EditScript {
        let (mut x, mut y) = (trace.source_len(), trace.destination_len());
        let mut script = Vec::with_capacity(x + y);

        for d in (1..trace.len()).rev() {
            let k = x as isize - y as isize;
            let previous = trace.frontier(d - 1);

            let prev_k = predecessor(previous, k, d as isize);
            let prev_x = previous.get(prev_k);
            let prev_y = (prev_x as isize - prev_k) as usize;

            while x > prev_x && y > prev_y {
                script.push(Operation::Noop);
                x -= 1;
                y -= 1;
            }

            if x == prev_x {
                script.push(Operation::Add);
            } else {
                script.push(Operation::Delete);
            }

            debug_log!("depth {}: ({}, {}) <- ({}, {})", d, x, y, prev_x, prev_y);
            (x, y) = (prev_x, prev_y);
        }

        script.extend(std::iter::repeat_n(Operation::Noop, trace.leading_snake()));
        script.reverse();
        script
    }
}

/// Computes the shortest edit script turning `source` into `destination`
pub fn compute_edit_script<T: PartialEq>(source: &[T], destination: &[T]) -> Vec<Operation> {
    MyersDiff::new(source, destination).diff()
}
