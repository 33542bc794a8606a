//! Per-element status bits.

/// A small bit set attached to every vertex, halfedge, edge and face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusFlags(u32);

impl StatusFlags {
    /// The element has been removed from the mesh; its slot stays allocated.
    pub const DELETED: u32 = 1;
    /// Scratch bit for user algorithms.
    pub const TAGGED: u32 = 1 << 1;
    /// The element is selected.
    pub const SELECTED: u32 = 1 << 2;
    /// The element must not be modified by user algorithms.
    pub const LOCKED: u32 = 1 << 3;
    /// The element belongs to a feature (crease, border, ...).
    pub const FEATURE: u32 = 1 << 4;

    /// Empty flag set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Raw bits.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Check whether all bits of `mask` are set.
    #[inline]
    pub fn contains(self, mask: u32) -> bool {
        self.0 & mask == mask
    }

    /// Set or clear all bits of `mask`.
    #[inline]
    pub fn set(&mut self, mask: u32, on: bool) {
        if on {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Check the deleted bit.
    #[inline]
    pub fn is_deleted(self) -> bool {
        self.contains(Self::DELETED)
    }

    /// Set the deleted bit.
    #[inline]
    pub fn set_deleted(&mut self, deleted: bool) {
        self.set(Self::DELETED, deleted);
    }

    /// Check the tagged bit.
    #[inline]
    pub fn is_tagged(self) -> bool {
        self.contains(Self::TAGGED)
    }

    /// Set the tagged bit.
    #[inline]
    pub fn set_tagged(&mut self, tagged: bool) {
        self.set(Self::TAGGED, tagged);
    }

    /// Check the selected bit.
    #[inline]
    pub fn is_selected(self) -> bool {
        self.contains(Self::SELECTED)
    }

    /// Set the selected bit.
    #[inline]
    pub fn set_selected(&mut self, selected: bool) {
        self.set(Self::SELECTED, selected);
    }

    /// Check the locked bit.
    #[inline]
    pub fn is_locked(self) -> bool {
        self.contains(Self::LOCKED)
    }

    /// Set the locked bit.
    #[inline]
    pub fn set_locked(&mut self, locked: bool) {
        self.set(Self::LOCKED, locked);
    }

    /// Check the feature bit.
    #[inline]
    pub fn is_feature(self) -> bool {
        self.contains(Self::FEATURE)
    }

    /// Set the feature bit.
    #[inline]
    pub fn set_feature(&mut self, feature: bool) {
        self.set(Self::FEATURE, feature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_independent() {
        let mut s = StatusFlags::new();
        assert!(!s.is_deleted());

        s.set_deleted(true);
        s.set_tagged(true);
        assert!(s.is_deleted());
        assert!(s.is_tagged());
        assert!(!s.is_selected());

        s.set_deleted(false);
        assert!(!s.is_deleted());
        assert!(s.is_tagged());
        assert_eq!(s.bits(), StatusFlags::TAGGED);
    }
}
