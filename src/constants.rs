//! Default parameters shared by the builders.
use crate::decision_tree::SplitBy;

/// The maximal depth set as default.
/// Induction never goes deeper than the number of splitting attributes,
/// so this value only bounds the recursion for very wide samples.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The splitting criterion set as default.
pub const DEFAULT_SPLIT_BY: SplitBy = SplitBy::Entropy;

/// Width of the columns printed by `Logger`.
pub const PRINT_WIDTH: usize = 8;
