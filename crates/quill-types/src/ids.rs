use serde::{Deserialize, Serialize};

/// Identity of a declared class or interface within one [`crate::TypeStore`].
///
/// Interning guarantees that two resolutions of the same qualified name yield
/// the same id, so id equality is usable wherever reference identity of the
/// declaration is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassId(pub(crate) u32);

impl ClassId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index.try_into().expect("too many classes"))
    }
}

/// Identity of a declared type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeVarId(pub(crate) u32);

impl TypeVarId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index.try_into().expect("too many type params"))
    }
}
