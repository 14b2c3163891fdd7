//! Classification of mappings between finite sets.

use crate::prelude::*;

/// Error in classifying a relation. This can only happen when the relation maps some domain
/// element outside the declared codomain.
#[derive(Clone, Copy, Debug)]
pub struct NotLeftTotal;

impl Display for NotLeftTotal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str("relation is not left-total")
    }
}

impl std::error::Error for NotLeftTotal {}

/// The mapping properties of a function between two finite sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// No two domain elements share an output.
    pub injective: bool,
    /// The outputs cover the codomain exactly.
    pub surjective: bool,
    /// Both injective and surjective.
    pub bijective: bool,
}

impl Classification {
    /// Builds a classification from its two independent properties.
    #[must_use]
    pub const fn new(injective: bool, surjective: bool) -> Self {
        Self {
            injective,
            surjective,
            bijective: injective && surjective,
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "injective: {}, surjective: {}, bijective: {}",
            self.injective, self.surjective, self.bijective
        )
    }
}

/// Classifies `relation` as a mapping from `domain` into `codomain`.
///
/// This performs a single pass over the domain. Every output must land in the codomain; the first
/// one that does not aborts the whole classification with [`NotLeftTotal`]. A repeated output
/// refutes injectivity, and surjectivity requires the observed outputs to equal the codomain
/// exactly.
///
/// ```
/// # use indset::prelude::*;
/// # use std::collections::BTreeSet;
/// let domain = BTreeSet::from([1, 2, 3]);
/// let codomain = BTreeSet::from([2, 4, 6]);
/// let class = classify(&domain, &codomain, |&s| 2 * s).unwrap();
/// assert!(class.bijective);
/// ```
///
/// ## Errors
///
/// Returns [`NotLeftTotal`] if some domain element maps outside the codomain.
pub fn classify<A: Ord, B: Ord, F: FnMut(&A) -> B>(
    domain: &BTreeSet<A>,
    codomain: &BTreeSet<B>,
    mut relation: F,
) -> Result<Classification, NotLeftTotal> {
    let mut outputs = BTreeSet::new();
    let mut injective = true;

    for element in domain {
        let output = relation(element);
        if !codomain.contains(&output) {
            return Err(NotLeftTotal);
        }

        if !outputs.insert(output) {
            injective = false;
        }
    }

    Ok(Classification::new(injective, &outputs == codomain))
}
