use std::fmt;

/// A 1-based variable index.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(pub usize);

impl Variable {
    /// Position of this variable in an assignment vector.
    pub(crate) fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
