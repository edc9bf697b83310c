use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Set comparison between catalogue 1 (left) and catalogue 2 (right)
// ---------------------------------------------------------------------------

/// Cardinalities and differences of two sets, borrowing their members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetComparison<'a, T> {
    pub left_len: usize,
    pub right_len: usize,
    pub common: usize,
    /// Members of the left set missing from the right, ascending.
    pub only_left: Vec<&'a T>,
    /// Members of the right set missing from the left, ascending.
    pub only_right: Vec<&'a T>,
}

impl<'a, T: Ord> SetComparison<'a, T> {
    pub fn new(left: &'a BTreeSet<T>, right: &'a BTreeSet<T>) -> Self {
        Self {
            left_len: left.len(),
            right_len: right.len(),
            common: left.intersection(right).count(),
            only_left: left.difference(right).collect(),
            only_right: right.difference(left).collect(),
        }
    }

    /// Both sets hold exactly the same members.
    pub fn is_identical(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}
