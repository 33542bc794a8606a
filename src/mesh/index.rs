//! Handle types for mesh elements.
//!
//! Handles are type-safe, non-owning indices into the element arenas of a
//! [`PolyMesh`](super::PolyMesh). They are generic over the underlying integer
//! type so small meshes can use `u16` and very large ones `u64`.
//!
//! Halfedges are stored in pairs: edge `e` owns halfedges `2e` and `2e + 1`.
//! The opposite of a halfedge is therefore `h ^ 1` and its edge is `h / 2`.
//! Nothing else in the crate may allocate halfedges outside of these pairs.

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for types that can be used as mesh indices.
///
/// This trait is implemented for `u16`, `u32`, and `u64`.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static
{
    /// The maximum valid index value.
    const MAX: Self;

    /// A sentinel value representing an invalid/null index.
    const INVALID: Self;

    /// Convert from usize, or `None` if `v` is above [`MAX`](Self::MAX).
    fn try_from_usize(v: usize) -> Option<Self>;

    /// Convert from usize to this index type.
    ///
    /// Values above [`MAX`](Self::MAX) become [`INVALID`](Self::INVALID)
    /// instead of wrapping around onto a live index.
    fn from_usize(v: usize) -> Self {
        Self::try_from_usize(v).unwrap_or(Self::INVALID)
    }

    /// Number of distinct valid indices.
    fn capacity() -> usize {
        Self::MAX.to_usize() + 1
    }

    /// Convert to usize.
    fn to_usize(self) -> usize;

    /// Check if this is a valid (non-sentinel) index.
    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

macro_rules! impl_mesh_index {
    ($ty:ty) => {
        impl MeshIndex for $ty {
            const MAX: Self = <$ty>::MAX - 1;
            const INVALID: Self = <$ty>::MAX;

            #[inline]
            fn try_from_usize(v: usize) -> Option<Self> {
                <$ty>::try_from(v)
                    .ok()
                    .filter(|&x| x <= <$ty as MeshIndex>::MAX)
            }

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }
        }
    };
}

impl_mesh_index!(u16);
impl_mesh_index!(u32);
impl_mesh_index!(u64);

/// Handle of a vertex.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexHandle<I: MeshIndex = u32>(I);

/// Handle of a directed halfedge.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct HalfedgeHandle<I: MeshIndex = u32>(I);

/// Handle of an undirected edge (a pair of opposite halfedges).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeHandle<I: MeshIndex = u32>(I);

/// Handle of a face.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceHandle<I: MeshIndex = u32>(I);

macro_rules! impl_handle_type {
    ($name:ident, $display:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Create a new handle from a raw index.
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(I::from_usize(index))
            }

            /// Create the invalid/null handle.
            #[inline]
            pub fn invalid() -> Self {
                Self(I::INVALID)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }

            /// Get the raw value of the underlying type.
            #[inline]
            pub fn raw(self) -> I {
                self.0
            }

            /// Check if this is not the invalid sentinel.
            ///
            /// This says nothing about whether the element is still alive; use
            /// the mesh's `is_deleted_*` queries for that.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }
        }

        impl<I: MeshIndex> Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.index())
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl<I: MeshIndex> Default for $name<I> {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl<I: MeshIndex> From<usize> for $name<I> {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_handle_type!(VertexHandle, "V");
impl_handle_type!(HalfedgeHandle, "H");
impl_handle_type!(EdgeHandle, "E");
impl_handle_type!(FaceHandle, "F");

impl<I: MeshIndex> HalfedgeHandle<I> {
    /// The opposite halfedge of the same edge.
    #[inline]
    pub fn opposite(self) -> Self {
        debug_assert!(self.is_valid());
        Self::new(self.index() ^ 1)
    }

    /// The edge this halfedge belongs to.
    #[inline]
    pub fn edge(self) -> EdgeHandle<I> {
        debug_assert!(self.is_valid());
        EdgeHandle::new(self.index() >> 1)
    }
}

impl<I: MeshIndex> EdgeHandle<I> {
    /// One of the two halfedges of this edge (`side` is 0 or 1).
    #[inline]
    pub fn halfedge(self, side: usize) -> HalfedgeHandle<I> {
        debug_assert!(self.is_valid() && side < 2);
        HalfedgeHandle::new((self.index() << 1) + side)
    }
}
