//! Closure of a finite set under a [`Family`] of [`Constructors`](Constructor).

use crate::prelude::*;

// -------------------- Constructors -------------------- //

/// A boxed unary constructor function.
type UnaryFn<T> = Box<dyn Fn(&T) -> T>;

/// A boxed binary constructor function.
type BinaryFn<T> = Box<dyn Fn(&T, &T) -> T>;

/// A pure function used to derive new elements of a universe from existing ones.
///
/// Arity is part of the variant, so a constructor of any other arity is unrepresentable. The
/// functions must be deterministic and side-effect-free; nothing checks this, but every guarantee
/// made by [`ClosureGenerator`] assumes it.
pub enum Constructor<T> {
    /// A unary constructor `T -> T`.
    Unary(UnaryFn<T>),
    /// A binary constructor `T × T -> T`.
    Binary(BinaryFn<T>),
}

impl<T> Constructor<T> {
    /// A unary constructor from a closure.
    pub fn unary<F: Fn(&T) -> T + 'static>(func: F) -> Self {
        Self::Unary(Box::new(func))
    }

    /// A binary constructor from a closure.
    pub fn binary<F: Fn(&T, &T) -> T + 'static>(func: F) -> Self {
        Self::Binary(Box::new(func))
    }

    /// The number of arguments the constructor takes, either 1 or 2.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Whether the constructor is unary.
    #[must_use]
    pub const fn is_unary(&self) -> bool {
        matches!(self, Self::Unary(_))
    }

    /// Whether the constructor is binary.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// Applies the constructor to an ordered pair. A unary constructor consumes only `x`.
    pub fn apply(&self, x: &T, y: &T) -> T {
        match self {
            Self::Unary(func) => func(x),
            Self::Binary(func) => func(x, y),
        }
    }
}

/// Writes the constructor's arity; the function itself is opaque.
impl<T> Debug for Constructor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Unary(_) => "Constructor::Unary",
            Self::Binary(_) => "Constructor::Binary",
        })
    }
}

// -------------------- Families -------------------- //

/// An ordered family of [`Constructors`](Constructor).
#[derive(Debug, IntoIterator)]
pub struct Family<T>(#[into_iterator(owned, ref)] SmallVec<Constructor<T>>);

impl<T> Default for Family<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Constructor<T>> for Family<T> {
    fn from_iter<I: IntoIterator<Item = Constructor<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> From<Constructor<T>> for Family<T> {
    fn from(con: Constructor<T>) -> Self {
        Self(smallvec![con])
    }
}

impl<T> From<Vec<Constructor<T>>> for Family<T> {
    fn from(vec: Vec<Constructor<T>>) -> Self {
        Self(SmallVec::from_vec(vec))
    }
}

impl<T> Family<T> {
    /// The empty family.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// The number of constructors in the family.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the family has no constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the constructors of the family.
    pub fn iter(&self) -> std::slice::Iter<Constructor<T>> {
        self.0.iter()
    }

    /// Appends a constructor to the family.
    pub fn push(&mut self, con: Constructor<T>) {
        self.0.push(con);
    }
}

// -------------------- Generator -------------------- //

/// The closure of a finite base set under a [`Family`] of constructors, approached one expansion
/// step at a time.
///
/// The generator owns its universe exclusively. Each [step](Self::step) applies every constructor
/// to every ordered pair of current elements (diagonal included) and unions the results in, so the
/// universe only ever grows. As an [`Iterator`] it never ends: pulling past the
/// [closure](https://en.wikipedia.org/wiki/Closure_(mathematics)) keeps yielding the same set,
/// with no attempt at fixpoint detection.
///
/// ```
/// # use indset::prelude::*;
/// # use std::collections::BTreeSet;
/// let base = BTreeSet::from([String::new()]);
/// let join = Constructor::binary(|x: &String, y: &String| format!("♡{x}♣{y}"));
/// let mut brackets = ClosureGenerator::new(base, [join]);
///
/// assert_eq!(brackets.step().len(), 2);
/// assert!(brackets.step().contains("♡♡♣♣"));
/// ```
///
/// The sequence is a single stateful stream: pulling twice never repeats a step. To revisit a
/// universe, cache the pulled snapshot, or seed a fresh generator from [`Self::universe`].
///
/// ## Invariants
///
/// The universe is monotonically non-decreasing: once an element is generated, it is never
/// removed.
#[derive(Debug)]
pub struct ClosureGenerator<T> {
    /// The set of elements generated so far.
    universe: BTreeSet<T>,
    /// The constructors applied on each step.
    constructors: Family<T>,
}

impl<T: Ord + Clone> ClosureGenerator<T> {
    /// Initializes a generator from a base set and a family of constructors.
    ///
    /// An empty family is allowed and produces a constant sequence.
    pub fn new<I: IntoIterator<Item = Constructor<T>>>(base: BTreeSet<T>, constructors: I) -> Self {
        Self {
            universe: base,
            constructors: constructors.into_iter().collect(),
        }
    }

    /// The current universe.
    #[must_use]
    pub const fn universe(&self) -> &BTreeSet<T> {
        &self.universe
    }

    /// Universe cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.universe.len()
    }

    /// The constructor family.
    #[must_use]
    pub const fn constructors(&self) -> &Family<T> {
        &self.constructors
    }

    /// Consumes the generator, returning its universe.
    #[must_use]
    pub fn into_universe(self) -> BTreeSet<T> {
        self.universe
    }

    /// Performs one expansion pass and returns the new universe.
    ///
    /// Every constructor is applied to every ordered pair in `Universe × Universe`, and the
    /// results are unioned into the universe. Candidates are staged in full before the union, so a
    /// panicking constructor propagates without modifying the universe.
    pub fn step(&mut self) -> &BTreeSet<T> {
        let constructors = &self.constructors;
        let candidates: BTreeSet<T> = self
            .universe
            .iter()
            .cartesian_product(self.universe.iter())
            .flat_map(|(x, y)| constructors.iter().map(move |con| con.apply(x, y)))
            .collect();

        self.universe.extend(candidates);
        &self.universe
    }
}

/// The infinite sequence of universes, one [step](ClosureGenerator::step) per pull. Each item is
/// an independent snapshot of the universe after that step.
impl<T: Ord + Clone> Iterator for ClosureGenerator<T> {
    type Item = BTreeSet<T>;

    fn next(&mut self) -> Option<BTreeSet<T>> {
        Some(self.step().clone())
    }
}
