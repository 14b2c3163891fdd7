//! Crate prelude.

// The actual prelude.
pub use crate::{
    classify::{classify, Classification, NotLeftTotal},
    closure::{ClosureGenerator, Constructor, Family},
};

// Convenient imports within the crate.
pub(crate) use crate::{smallvec, SmallVec};
pub(crate) use derive_more::IntoIterator;
pub(crate) use itertools::Itertools;
pub(crate) use std::{
    collections::BTreeSet,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};
