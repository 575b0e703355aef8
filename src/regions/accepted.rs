use crate::segments::Label;
use serde::{Serialize, Serializer};

/// Immutable set of labels judged to be foreground.
///
/// Backed by a 256-bit mask so lookups in the per-pixel attenuation loop are
/// a shift and a mask. Label `0` (unassigned/edge) is never a member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AcceptedSet {
    bits: [u64; 4],
}

impl AcceptedSet {
    pub const fn empty() -> Self {
        Self { bits: [0; 4] }
    }

    #[inline]
    pub fn contains(&self, label: Label) -> bool {
        label != 0 && self.bits[(label >> 6) as usize] & (1u64 << (label & 63)) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        (1..=Label::MAX).filter(move |&l| self.contains(l))
    }
}

impl FromIterator<Label> for AcceptedSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut bits = [0u64; 4];
        for label in iter.into_iter().filter(|&l| l != 0) {
            bits[(label >> 6) as usize] |= 1u64 << (label & 63);
        }
        Self { bits }
    }
}

impl Serialize for AcceptedSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
