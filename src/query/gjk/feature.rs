//! Identification of the simplex sub-feature closest to the origin.

use crate::utils::{sort2, sort3};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// Set of simplex vertices supporting the feature closest to the origin.
///
/// Bit `i` is set iff the `i`-th vertex of the current simplex participates in
/// the closest feature. This is the representation consumed by the
/// [`Simplex`](crate::query::gjk::Simplex) compaction operations; everything
/// else in this module manipulates the typed [`ClosestFeature`] instead.
pub struct VertexSet(u32);

bitflags::bitflags! {
    impl VertexSet: u32 {
        /// The first vertex of the simplex.
        const A = 0b0001;
        /// The second vertex of the simplex.
        const B = 0b0010;
        /// The third vertex of the simplex.
        const C = 0b0100;
        /// The fourth vertex of the simplex.
        const D = 0b1000;
    }
}

impl VertexSet {
    /// The set containing only the `i`-th simplex vertex.
    ///
    /// Panics if `i >= 4`.
    #[inline]
    pub fn vertex(i: usize) -> Self {
        assert!(i < 4, "Simplex vertex index out of bounds.");
        VertexSet::from_bits_truncate(1 << i)
    }

    /// The number of vertices in this set.
    #[inline]
    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// The sub-feature of a simplex closest to the origin.
///
/// Indices refer to the vertices of the simplex the feature was computed for,
/// in the order they were given to the closest-point routine. Edge and face
/// indices are always stored in increasing order.
pub enum ClosestFeature {
    /// A single vertex of the simplex.
    Vertex(usize),
    /// The segment between two vertices of the simplex.
    Edge(usize, usize),
    /// The triangle between three vertices of the simplex.
    Face(usize, usize, usize),
    /// The interior of a tetrahedron: the origin is enclosed by the simplex.
    Interior,
}

impl ClosestFeature {
    /// The set of simplex vertices supporting this feature.
    #[inline]
    pub fn vertex_set(self) -> VertexSet {
        match self {
            ClosestFeature::Vertex(i) => VertexSet::vertex(i),
            ClosestFeature::Edge(i, j) => VertexSet::vertex(i) | VertexSet::vertex(j),
            ClosestFeature::Face(i, j, k) => {
                VertexSet::vertex(i) | VertexSet::vertex(j) | VertexSet::vertex(k)
            }
            ClosestFeature::Interior => VertexSet::all(),
        }
    }

    /// Rebuilds the feature identified by a vertex set.
    ///
    /// A full set maps to [`ClosestFeature::Interior`]. Panics if `set` is
    /// empty.
    pub fn from_vertex_set(set: VertexSet) -> Self {
        assert!(!set.is_empty(), "Cannot build a feature from an empty vertex set.");

        let mut indices = [0; 4];
        let mut len = 0;

        for i in 0..4 {
            if set.contains(VertexSet::vertex(i)) {
                indices[len] = i;
                len += 1;
            }
        }

        match len {
            1 => ClosestFeature::Vertex(indices[0]),
            2 => ClosestFeature::Edge(indices[0], indices[1]),
            3 => ClosestFeature::Face(indices[0], indices[1], indices[2]),
            _ => ClosestFeature::Interior,
        }
    }

    /// The number of simplex vertices supporting this feature.
    #[inline]
    pub fn len(self) -> usize {
        match self {
            ClosestFeature::Vertex(_) => 1,
            ClosestFeature::Edge(..) => 2,
            ClosestFeature::Face(..) => 3,
            ClosestFeature::Interior => 4,
        }
    }

    /// Remaps the vertex indices of this feature through `map`.
    ///
    /// This is the exact, float-free index shuffle used to express a feature
    /// computed on a face (or on a vertex-swapped triangle) in the vertex
    /// space of the enclosing simplex: local index `i` becomes `map[i]`.
    pub fn remap(self, map: [usize; 3]) -> Self {
        match self {
            ClosestFeature::Vertex(i) => ClosestFeature::Vertex(map[i]),
            ClosestFeature::Edge(i, j) => {
                let (i, j) = sort2(map[i], map[j]);
                ClosestFeature::Edge(i, j)
            }
            ClosestFeature::Face(i, j, k) => {
                let (i, j, k) = sort3(map[i], map[j], map[k]);
                ClosestFeature::Face(i, j, k)
            }
            ClosestFeature::Interior => ClosestFeature::Interior,
        }
    }
}
