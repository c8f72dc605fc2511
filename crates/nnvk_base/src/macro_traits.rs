//! Contains traits implemented by the nnvk derive macros


/// Trait to get the number of variants in an enum
pub trait EnumCountT {
    /// Number of variants in the enum, any size sentinel is never a variant
    const COUNT : usize;
}

/// Trait to get an enum from its ordinal
pub trait EnumFromIndexT: Sized {
    /// Try to convert an index to an enum
    fn from_idx(idx: usize) -> Option<Self>;

    /// Try to convert an index to an enum, if it couldn't convert it, return a default value
    fn from_idx_or(idx: usize, default: Self) -> Self {
        Self::from_idx(idx).unwrap_or(default)
    }
}

/// Trait to get an enum from its canonical name
pub trait EnumFromNameT: Sized {
    /// Try to parse the enum from a string slice.
    fn parse(s: &str) -> Option<Self>;
}
