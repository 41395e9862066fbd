/// Furthest-reaching x-coordinate per diagonal at a single search depth
///
/// At depth `d` only the diagonals `k ∈ [-d, d]` stepping by 2 are reachable,
/// so the frontier is stored densely: diagonal `k` lives in slot `(k + d) / 2`.
/// Diagonals must be recorded in increasing `k` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    depth: usize,
    reach: Vec<usize>,
}

impl Frontier {
    pub fn new(depth: usize) -> Self {
        Frontier {
            depth,
            reach: Vec::with_capacity(depth + 1),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Furthest x reached on diagonal `k`
    pub fn get(&self, k: isize) -> usize {
        self.reach[self.slot(k)]
    }

    pub fn record(&mut self, k: isize, x: usize) {
        debug_assert_eq!(self.slot(k), self.reach.len(), "diagonal {k} out of order");
        self.reach.push(x);
    }

    /// Recorded `(k, x)` pairs, lowest diagonal first
    pub fn diagonals(&self) -> impl Iterator<Item = (isize, usize)> + '_ {
        let depth = self.depth as isize;
        self.reach
            .iter()
            .enumerate()
            .map(move |(slot, &x)| (2 * slot as isize - depth, x))
    }

    fn slot(&self, k: isize) -> usize {
        ((k + self.depth as isize) / 2) as usize
    }
}

/// Depth-indexed history of frontiers produced by the forward search
///
/// The frontier at index `d` holds the furthest points reachable with exactly
/// `d` non-diagonal moves. The last frontier may be partial: the search stops
/// on the diagonal that reaches the end of both sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    frontiers: Vec<Frontier>,
    source_len: usize,
    destination_len: usize,
}

impl Trace {
    pub fn new(source_len: usize, destination_len: usize) -> Self {
        Trace {
            frontiers: Vec::new(),
            source_len,
            destination_len,
        }
    }

    pub fn push(&mut self, frontier: Frontier) {
        debug_assert_eq!(frontier.depth(), self.frontiers.len());
        self.frontiers.push(frontier);
    }

    pub fn frontier(&self, depth: usize) -> &Frontier {
        &self.frontiers[depth]
    }

    pub fn len(&self) -> usize {
        self.frontiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frontiers.is_empty()
    }

    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn destination_len(&self) -> usize {
        self.destination_len
    }

    /// Minimum number of inserts and deletions found by the search
    pub fn edit_distance(&self) -> usize {
        self.frontiers.len().saturating_sub(1)
    }

    /// Length of the common prefix matched at depth 0
    pub fn leading_snake(&self) -> usize {
        self.frontiers.first().map_or(0, |frontier| frontier.get(0))
    }
}
