use std::{fmt, cmp, ops};


/// Struct `Depth` defines the remaining depth budget of a tree.
/// This is just a wrapper for `usize`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct Depth(usize);


impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.0;
        write!(f, "{depth}")
    }
}


impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}


impl ops::Sub<usize> for Depth {
    type Output = Self;
    /// Define the subtraction of the `Depth` struct.
    /// The subtraction does not return a value less than `0`.
    #[inline]
    fn sub(self, other: usize) -> Self::Output {
        Self(self.0.saturating_sub(other))
    }
}


impl cmp::PartialEq<usize> for Depth {
    #[inline]
    fn eq(&self, rhs: &usize) -> bool {
        self.0.eq(rhs)
    }
}


impl cmp::PartialOrd<usize> for Depth {
    #[inline]
    fn partial_cmp(&self, other: &usize) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_sub_01() {
        let d1 = Depth::from(3);
        let res = d1 - 1;
        let exp = Depth::from(2);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_depth_sub_02() {
        let d1 = Depth::from(0);
        let res = d1 - 1;
        let exp = Depth::from(0);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_depth_cmp_01() {
        let d1 = Depth::from(2);
        let rhs = 3;
        let res = d1 < rhs;
        assert!(res, "failed for {d1:?} < {rhs}. got {res}.");
    }

    #[test]
    fn test_depth_cmp_02() {
        let d1 = Depth::from(0);
        let res = d1 < 1;
        assert!(res, "failed for {d1:?} < 1. got {res}.");
    }
}
