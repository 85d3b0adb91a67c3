//! Reference-identity set guarding against cycles and double counting.

use rustc_hash::FxHashSet;

/// Identity of one addressable instance.
///
/// Pairs the address with the type name and byte length: a struct and its
/// first field share an address, and so do a buffer and a prefix slice of
/// it, but they are different instances for counting purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    address: usize,
    type_name: &'static str,
    bytes: usize,
    storage: bool,
}

impl Identity {
    /// Identity of the instance `value` refers to.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self {
            address: core::ptr::from_ref(value).cast::<()>() as usize,
            type_name: core::any::type_name::<T>(),
            bytes: core::mem::size_of_val(value),
            storage: false,
        }
    }

    /// Identity of the element storage an owner manages without a single
    /// contiguous buffer (maps, sets, ring buffers).
    ///
    /// Distinct from [`Identity::of`] on the same owner, so measuring the
    /// owner as a root does not mark its contents as already counted.
    pub fn storage_of<T: ?Sized>(owner: &T) -> Self {
        Self {
            storage: true,
            ..Self::of(owner)
        }
    }

    /// Identity of a heap allocation, or `None` when `value` occupies no
    /// bytes and so has no distinct address.
    pub fn of_allocation<T: ?Sized>(value: &T) -> Option<Self> {
        (core::mem::size_of_val(value) != 0).then(|| Self::of(value))
    }

    pub fn address(self) -> usize {
        self.address
    }

    pub fn type_name(self) -> &'static str {
        self.type_name
    }

    /// Size of the referent as laid out in memory.
    pub fn bytes(self) -> usize {
        self.bytes
    }
}

/// Instances already counted during one measurement.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: FxHashSet<Identity>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `identity`. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, identity: Identity) -> bool {
        self.seen.insert(identity)
    }

    pub fn contains(&self, identity: Identity) -> bool {
        self.seen.contains(&identity)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests;
