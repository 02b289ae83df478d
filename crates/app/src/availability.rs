//! LEDs that may currently receive commands.

use std::collections::BTreeSet;

use ledboard_domain::id::LedNumber;

/// Sorted set of LED numbers seen in the latest successful LED poll.
///
/// Commands for any other number are rejected before a request is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableLeds(BTreeSet<LedNumber>);

impl AvailableLeds {
    #[must_use]
    pub fn contains(&self, number: LedNumber) -> bool {
        self.0.contains(&number)
    }

    /// Numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LedNumber> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeSet<LedNumber>> for AvailableLeds {
    fn from(numbers: BTreeSet<LedNumber>) -> Self {
        Self(numbers)
    }
}

impl FromIterator<LedNumber> for AvailableLeds {
    fn from_iter<T: IntoIterator<Item = LedNumber>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
