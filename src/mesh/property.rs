//! Custom per-element properties.
//!
//! The connectivity core does not know what users attach to elements (colors,
//! texture coordinates, weights...). It only keeps one column per registered
//! property, grows the columns as elements are allocated, and copies values
//! when an edit creates an element that stands in for an existing one (see
//! [`PolyMesh::copy_all_properties`]).
//!
//! ```
//! use polyconn::prelude::*;
//!
//! let mut mesh: PolyMesh = PolyMesh::new();
//! let color = mesh.add_property::<FaceKind, [u8; 3]>([255, 255, 255]);
//!
//! let v: Vec<VertexHandle> = (0..4).map(|_| mesh.add_vertex()).collect();
//! let f = mesh.add_face(&v).unwrap();
//! mesh.set_property(color, f, [200, 10, 10]);
//!
//! mesh.triangulate_face(f);
//! for f in mesh.faces() {
//!     assert_eq!(mesh.property(color, f), Some(&[200, 10, 10]));
//! }
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use super::halfedge::PolyMesh;
use super::index::{EdgeHandle, FaceHandle, HalfedgeHandle, MeshIndex, VertexHandle};

/// The kind of element a property is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Vertices.
    Vertex,
    /// Halfedges.
    Halfedge,
    /// Edges.
    Edge,
    /// Faces.
    Face,
}

/// Type-level tag selecting an [`ElementKind`].
pub trait PropertyKind: 'static {
    /// The element kind this tag stands for.
    const KIND: ElementKind;
}

/// Tag for vertex properties.
#[derive(Debug, Clone, Copy)]
pub struct VertexKind;
/// Tag for halfedge properties.
#[derive(Debug, Clone, Copy)]
pub struct HalfedgeKind;
/// Tag for edge properties.
#[derive(Debug, Clone, Copy)]
pub struct EdgeKind;
/// Tag for face properties.
#[derive(Debug, Clone, Copy)]
pub struct FaceKind;

impl PropertyKind for VertexKind {
    const KIND: ElementKind = ElementKind::Vertex;
}
impl PropertyKind for HalfedgeKind {
    const KIND: ElementKind = ElementKind::Halfedge;
}
impl PropertyKind for EdgeKind {
    const KIND: ElementKind = ElementKind::Edge;
}
impl PropertyKind for FaceKind {
    const KIND: ElementKind = ElementKind::Face;
}

/// A handle that can address a property column.
pub trait Element: Copy {
    /// The property kind of this handle.
    type Kind: PropertyKind;

    /// Row of the element in its property columns.
    fn slot(self) -> usize;
}

macro_rules! impl_element {
    ($handle:ident, $kind:ident) => {
        impl<I: MeshIndex> Element for $handle<I> {
            type Kind = $kind;

            #[inline]
            fn slot(self) -> usize {
                self.index()
            }
        }
    };
}

impl_element!(VertexHandle, VertexKind);
impl_element!(HalfedgeHandle, HalfedgeKind);
impl_element!(EdgeHandle, EdgeKind);
impl_element!(FaceHandle, FaceKind);

/// Typed handle to a registered property column.
///
/// A handle outlives its column: once the property is removed, the handle
/// reads nothing, even after a new property takes over the column.
pub struct Property<T, K> {
    column: usize,
    generation: u32,
    _marker: PhantomData<fn() -> (T, K)>,
}

impl<T, K> Clone for Property<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K> Copy for Property<T, K> {}

impl<T, K: PropertyKind> fmt::Debug for Property<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property({:?}, {})", K::KIND, self.column)
    }
}

/// A vertex property.
pub type VertexProperty<T> = Property<T, VertexKind>;
/// A halfedge property.
pub type HalfedgeProperty<T> = Property<T, HalfedgeKind>;
/// An edge property.
pub type EdgeProperty<T> = Property<T, EdgeKind>;
/// A face property.
pub type FaceProperty<T> = Property<T, FaceKind>;

trait Column: Send + Sync {
    fn push_default(&mut self);
    fn copy_value(&mut self, from: usize, to: usize);
    fn clone_box(&self) -> Box<dyn Column>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

struct TypedColumn<T> {
    default: T,
    values: Vec<T>,
}

impl<T: Clone + Send + Sync + 'static> Column for TypedColumn<T> {
    fn push_default(&mut self) {
        self.values.push(self.default.clone());
    }

    fn copy_value(&mut self, from: usize, to: usize) {
        let value = self.values[from].clone();
        self.values[to] = value;
    }

    fn clone_box(&self) -> Box<dyn Column> {
        Box::new(TypedColumn {
            default: self.default.clone(),
            values: self.values.clone(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A registered column and the generation it was registered under.
struct Slot {
    generation: u32,
    column: Box<dyn Column>,
}

/// All columns registered for one element kind.
#[derive(Default)]
pub(crate) struct PropertyContainer {
    columns: Vec<Option<Slot>>,
    generation: u32,
    len: usize,
}

impl Clone for PropertyContainer {
    fn clone(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|c| {
                    c.as_ref().map(|slot| Slot {
                        generation: slot.generation,
                        column: slot.column.clone_box(),
                    })
                })
                .collect(),
            generation: self.generation,
            len: self.len,
        }
    }
}

impl PropertyContainer {
    fn add<T: Clone + Send + Sync + 'static>(&mut self, default: T) -> (usize, u32) {
        let column = TypedColumn {
            values: vec![default.clone(); self.len],
            default,
        };
        self.generation = self.generation.wrapping_add(1);
        let slot = Slot {
            generation: self.generation,
            column: Box::new(column),
        };
        // Reuse a slot freed by `remove` if there is one.
        let index = if let Some(free) = self.columns.iter().position(Option::is_none) {
            self.columns[free] = Some(slot);
            free
        } else {
            self.columns.push(Some(slot));
            self.columns.len() - 1
        };
        (index, self.generation)
    }

    fn slot(&self, column: usize, generation: u32) -> Option<&Slot> {
        self.columns
            .get(column)?
            .as_ref()
            .filter(|slot| slot.generation == generation)
    }

    fn slot_mut(&mut self, column: usize, generation: u32) -> Option<&mut Slot> {
        self.columns
            .get_mut(column)?
            .as_mut()
            .filter(|slot| slot.generation == generation)
    }

    fn remove(&mut self, column: usize, generation: u32) -> bool {
        if self.slot(column, generation).is_none() {
            return false;
        }
        self.columns[column] = None;
        true
    }

    fn typed<T: 'static>(&self, column: usize, generation: u32) -> Option<&TypedColumn<T>> {
        self.slot(column, generation)?
            .column
            .as_any()
            .downcast_ref::<TypedColumn<T>>()
    }

    fn typed_mut<T: 'static>(
        &mut self,
        column: usize,
        generation: u32,
    ) -> Option<&mut TypedColumn<T>> {
        self.slot_mut(column, generation)?
            .column
            .as_any_mut()
            .downcast_mut::<TypedColumn<T>>()
    }

    /// Grow every column by one default row.
    pub(crate) fn push(&mut self) {
        self.len += 1;
        for slot in self.columns.iter_mut().flatten() {
            slot.column.push_default();
        }
    }

    /// Copy row `from` into row `to` in every column. Returns `false`, and
    /// copies nothing, if either row does not exist.
    pub(crate) fn copy_row(&mut self, from: usize, to: usize) -> bool {
        if from >= self.len || to >= self.len {
            return false;
        }
        if from != to {
            for slot in self.columns.iter_mut().flatten() {
                slot.column.copy_value(from, to);
            }
        }
        true
    }

    pub(crate) fn num_columns(&self) -> usize {
        self.columns.iter().flatten().count()
    }
}

/// The four property containers of a mesh.
#[derive(Default, Clone)]
pub(crate) struct PropertyStore {
    vertex: PropertyContainer,
    halfedge: PropertyContainer,
    edge: PropertyContainer,
    face: PropertyContainer,
}

impl PropertyStore {
    pub(crate) fn get(&self, kind: ElementKind) -> &PropertyContainer {
        match kind {
            ElementKind::Vertex => &self.vertex,
            ElementKind::Halfedge => &self.halfedge,
            ElementKind::Edge => &self.edge,
            ElementKind::Face => &self.face,
        }
    }

    pub(crate) fn get_mut(&mut self, kind: ElementKind) -> &mut PropertyContainer {
        match kind {
            ElementKind::Vertex => &mut self.vertex,
            ElementKind::Halfedge => &mut self.halfedge,
            ElementKind::Edge => &mut self.edge,
            ElementKind::Face => &mut self.face,
        }
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyStore")
            .field("vertex", &self.vertex.num_columns())
            .field("halfedge", &self.halfedge.num_columns())
            .field("edge", &self.edge.num_columns())
            .field("face", &self.face.num_columns())
            .finish()
    }
}

impl<I: MeshIndex> PolyMesh<I> {
    /// Register a new property column for elements of kind `K`.
    ///
    /// Existing elements get a clone of `default`, as does every element
    /// allocated afterwards.
    pub fn add_property<K: PropertyKind, T: Clone + Send + Sync + 'static>(
        &mut self,
        default: T,
    ) -> Property<T, K> {
        let (column, generation) = self.props.get_mut(K::KIND).add(default);
        Property {
            column,
            generation,
            _marker: PhantomData,
        }
    }

    /// Drop a property column. Returns `false` if it was already removed.
    pub fn remove_property<K: PropertyKind, T>(&mut self, prop: Property<T, K>) -> bool {
        self.props
            .get_mut(K::KIND)
            .remove(prop.column, prop.generation)
    }

    /// Read the property value of an element.
    ///
    /// Returns `None` if the property was removed or the handle is out of range.
    pub fn property<H: Element, T: 'static>(
        &self,
        prop: Property<T, H::Kind>,
        h: H,
    ) -> Option<&T> {
        self.props
            .get(<H::Kind as PropertyKind>::KIND)
            .typed::<T>(prop.column, prop.generation)?
            .values
            .get(h.slot())
    }

    /// Mutable access to the property value of an element.
    pub fn property_mut<H: Element, T: 'static>(
        &mut self,
        prop: Property<T, H::Kind>,
        h: H,
    ) -> Option<&mut T> {
        self.props
            .get_mut(<H::Kind as PropertyKind>::KIND)
            .typed_mut::<T>(prop.column, prop.generation)?
            .values
            .get_mut(h.slot())
    }

    /// Overwrite the property value of an element. Returns `false` if the
    /// property or the element does not exist.
    pub fn set_property<H: Element, T: 'static>(
        &mut self,
        prop: Property<T, H::Kind>,
        h: H,
        value: T,
    ) -> bool {
        match self.property_mut(prop, h) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Copy every registered property of `from` onto `to`.
    ///
    /// Returns `false`, and copies nothing, if either handle is out of range.
    pub fn copy_all_properties<H: Element>(&mut self, from: H, to: H) -> bool {
        self.props
            .get_mut(<H::Kind as PropertyKind>::KIND)
            .copy_row(from.slot(), to.slot())
    }
}
