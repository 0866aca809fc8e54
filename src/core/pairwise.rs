// pairwise.rs - Pairwise sequence comparison engine (LCS, SCS, alignment)

/// One aligned position between two sequences.
///
/// Invariant: at least one side is present. Both present means the sequences
/// share the element at this step; one side absent means the other sequence
/// carries an extra element here (a gap in the absent side). The invariant is
/// enforced by construction: there is no way to build an empty pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing<T> {
    left: Option<T>,
    right: Option<T>,
}

impl<T> Pairing<T> {
    /// Both sequences hold this element at the current step
    pub fn both(left: T, right: T) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    /// Only the first sequence holds an element here (gap in the second)
    pub fn left_only(left: T) -> Self {
        Self {
            left: Some(left),
            right: None,
        }
    }

    /// Only the second sequence holds an element here (gap in the first)
    pub fn right_only(right: T) -> Self {
        Self {
            left: None,
            right: Some(right),
        }
    }

    pub fn left(&self) -> Option<&T> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&T> {
        self.right.as_ref()
    }

    /// True when both sides are present
    pub fn is_match(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    pub fn into_left(self) -> Option<T> {
        self.left
    }

    pub fn into_right(self) -> Option<T> {
        self.right
    }
}

/// Pairwise comparison of two sequences.
///
/// Owns the dynamic-programming table for the pair and derives the longest
/// common subsequence, the shortest common supersequence, and the full
/// element-by-element alignment from it. The table is allocated once per
/// comparison as a flat row-major buffer and is write-once/read-many, so a
/// single `SequenceComp` can answer all three queries without recomputation.
///
/// Cost is O(|v1| * |v2|) time and space per comparison.
pub struct SequenceComp<'a, T> {
    v1: &'a [T],
    v2: &'a [T],
    memo: Vec<usize>,
}

impl<'a, T: Clone + PartialEq> SequenceComp<'a, T> {
    /// Build the comparison, filling the suffix-LCS table.
    ///
    /// `memo[i][j]` holds the LCS length of the suffixes `v1[i..]` and
    /// `v2[j..]`; the base row and column stay zero.
    pub fn new(v1: &'a [T], v2: &'a [T]) -> Self {
        let width = v2.len() + 1;
        let mut memo = vec![0usize; (v1.len() + 1) * width];

        for i in (0..v1.len()).rev() {
            for j in (0..v2.len()).rev() {
                memo[i * width + j] = if v1[i] == v2[j] {
                    memo[(i + 1) * width + (j + 1)] + 1
                } else {
                    memo[(i + 1) * width + j].max(memo[i * width + (j + 1)])
                };
            }
        }

        Self { v1, v2, memo }
    }

    /// LCS length of the suffix pair starting at (i, j)
    fn suffix_lcs(&self, i: usize, j: usize) -> usize {
        self.memo[i * (self.v2.len() + 1) + j]
    }

    /// Length of the longest common subsequence
    pub fn lcs_len(&self) -> usize {
        self.suffix_lcs(0, 0)
    }

    /// One longest common subsequence of the two inputs.
    ///
    /// Walks the table forward from (0, 0): equal fronts are emitted and both
    /// indices advance; otherwise the index with the larger successor value
    /// advances, preferring `v1` on ties. Not every LCS is reachable this
    /// way, but the result is deterministic for a given input pair.
    pub fn lcs(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.lcs_len());
        let mut i1 = 0;
        let mut i2 = 0;

        while i1 < self.v1.len() && i2 < self.v2.len() {
            if self.v1[i1] == self.v2[i2] {
                out.push(self.v1[i1].clone());
                i1 += 1;
                i2 += 1;
            } else if self.suffix_lcs(i1 + 1, i2) >= self.suffix_lcs(i1, i2 + 1) {
                i1 += 1;
            } else {
                i2 += 1;
            }
        }

        out
    }

    /// One shortest common supersequence of the two inputs.
    ///
    /// Merges `v1` and `v2` left to right with the LCS as the guide: shared
    /// elements are emitted once, divergent elements are interleaved, and
    /// once the guide is exhausted the remainder of `v1` precedes the
    /// remainder of `v2`. Swapping the operands may produce a structurally
    /// different supersequence; only the length `|v1| + |v2| - |LCS|` and the
    /// subsequence property are stable under swap.
    pub fn scs(&self) -> Vec<T> {
        let overlap = self.lcs();
        let mut out = Vec::with_capacity(self.v1.len() + self.v2.len() - overlap.len());
        let mut i1 = 0;
        let mut i2 = 0;

        for shared in &overlap {
            // The guide is a subsequence of both remainders, so neither
            // index can run off its sequence inside this loop.
            loop {
                let left_at_shared = self.v1[i1] == *shared;
                let right_at_shared = self.v2[i2] == *shared;

                if left_at_shared && right_at_shared {
                    out.push(shared.clone());
                    i1 += 1;
                    i2 += 1;
                    break;
                } else if left_at_shared {
                    out.push(self.v2[i2].clone());
                    i2 += 1;
                } else {
                    out.push(self.v1[i1].clone());
                    i1 += 1;
                }
            }
        }

        out.extend(self.v1[i1..].iter().cloned());
        out.extend(self.v2[i2..].iter().cloned());
        out
    }

    /// The full positional alignment between the two inputs.
    ///
    /// Walks the same correspondence as `scs`, emitting one `Pairing` per
    /// supersequence position: a two-sided pairing where the sequences agree
    /// and a one-sided pairing where one of them carries an extra element.
    /// Concatenating the present left values reconstructs `v1` exactly, and
    /// the present right values reconstruct `v2`.
    pub fn align(&self) -> Vec<Pairing<T>> {
        let overlap = self.lcs();
        let mut out = Vec::with_capacity(self.v1.len() + self.v2.len() - overlap.len());
        let mut i1 = 0;
        let mut i2 = 0;

        for shared in &overlap {
            loop {
                let left_at_shared = self.v1[i1] == *shared;
                let right_at_shared = self.v2[i2] == *shared;

                if left_at_shared && right_at_shared {
                    out.push(Pairing::both(self.v1[i1].clone(), self.v2[i2].clone()));
                    i1 += 1;
                    i2 += 1;
                    break;
                } else if left_at_shared {
                    out.push(Pairing::right_only(self.v2[i2].clone()));
                    i2 += 1;
                } else {
                    out.push(Pairing::left_only(self.v1[i1].clone()));
                    i1 += 1;
                }
            }
        }

        for rest in &self.v1[i1..] {
            out.push(Pairing::left_only(rest.clone()));
        }
        for rest in &self.v2[i2..] {
            out.push(Pairing::right_only(rest.clone()));
        }

        out
    }
}
