//! Classification and triangulation of a single cube
use super::{
    builder::MeshBuilder,
    normal,
    types::{Axis, CaseIndex, Corner, Edge, FaceMask},
};
use crate::field::ScalarField;

/// Identifies a single edge of the sampling grid
///
/// An edge is owned by the grid sample at its lower end, so the (up to) four
/// cubes which share an edge all produce the same key for it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EdgeKey {
    /// Grid sample at the lower end of the edge
    pub point: [usize; 3],
    /// Axis along which the edge runs
    pub axis: Axis,
}

/// Map from grid edges to vertex indices in a [`MeshBuilder`]
///
/// Traversal strategies pick an implementation that matches their access
/// pattern; all that matters to the [`Triangulator`] is that a key which has
/// been inserted is returned by later lookups.
pub trait VertexCache {
    /// Looks up the vertex at the given edge
    fn get(&self, key: EdgeKey) -> Option<usize>;
    /// Records the vertex at the given edge
    fn insert(&mut self, key: EdgeKey, index: usize);
}

impl VertexCache for std::collections::HashMap<EdgeKey, usize> {
    fn get(&self, key: EdgeKey) -> Option<usize> {
        std::collections::HashMap::get(self, &key).copied()
    }
    fn insert(&mut self, key: EdgeKey, index: usize) {
        std::collections::HashMap::insert(self, key, index);
    }
}

/// The eight corner samples of one cube, along with their classification
#[derive(Copy, Clone, Debug)]
pub struct Cube {
    pos: [usize; 3],
    values: [f32; 8],
    case: CaseIndex,
}

impl Cube {
    /// Returns the cube's case index
    pub fn case(&self) -> CaseIndex {
        self.case
    }

    /// Checks whether the surface passes through this cube
    pub fn is_crossed(&self) -> bool {
        !self.case.is_trivial()
    }

    fn value(&self, c: Corner) -> f32 {
        self.values[c.index()]
    }

    /// Returns the grid sample at the given corner
    fn sample(&self, c: Corner) -> [usize; 3] {
        let o = c.offset();
        [self.pos[0] + o[0], self.pos[1] + o[1], self.pos[2] + o[2]]
    }

    /// Returns the key which owns the given edge
    fn key(&self, e: Edge) -> EdgeKey {
        let (start, _end) = e.corners();
        EdgeKey {
            point: self.sample(start),
            axis: e.axis(),
        }
    }

    /// Finds the fractional position of the crossing along an edge
    ///
    /// The result is always in `[0, 1]`; a crossing which can't be located
    /// (because one of the corners is infinite or `NaN`) is placed at the
    /// middle of the edge.
    fn crossing(&self, e: Edge, isovalue: f32) -> f64 {
        let (start, end) = e.corners();
        let cj = f64::from(self.value(start));
        let ck = f64::from(self.value(end));
        let dx = (f64::from(isovalue) - cj) / (ck - cj);
        if dx.is_finite() {
            dx.clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

/// Turns crossed cubes into triangles
///
/// The triangulator is shared by every traversal strategy; it is stateless
/// apart from the extraction parameters, with vertex deduplication handled by
/// a [`VertexCache`] and output stored in a [`MeshBuilder`].
pub struct Triangulator<'a> {
    field: &'a ScalarField,
    isovalue: f32,
    normals: bool,
}

impl<'a> Triangulator<'a> {
    /// Builds a new triangulator
    pub fn new(field: &'a ScalarField, isovalue: f32, normals: bool) -> Self {
        Self {
            field,
            isovalue,
            normals,
        }
    }

    /// Checks whether vertex normals are being computed
    pub fn normals(&self) -> bool {
        self.normals
    }

    /// Reads and classifies the cube at the given position
    ///
    /// # Panics
    /// If the cube is not within the field's [`cube_dims`](
    /// ScalarField::cube_dims)
    pub fn load(&self, pos: [usize; 3]) -> Cube {
        let mut values = [0.0; 8];
        for c in Corner::iter() {
            let o = c.offset();
            values[c.index()] =
                self.field.get([pos[0] + o[0], pos[1] + o[1], pos[2] + o[2]]);
        }
        Cube {
            pos,
            values,
            case: CaseIndex::from_values(&values, self.isovalue),
        }
    }

    /// Emits the triangles of a cube, returning the set of open faces
    ///
    /// A trivial cube emits nothing and has no open faces.
    pub fn march<C: VertexCache>(
        &self,
        cube: &Cube,
        cache: &mut C,
        out: &mut MeshBuilder,
    ) -> FaceMask {
        let case = cube.case();
        for t in case.triangles() {
            let tri = t.map(|e| self.vertex(cube, e, cache, out));
            out.push(nalgebra::Vector3::from(tri));
        }
        case.open_faces()
    }

    /// Looks up (or creates) the vertex on a crossed edge
    fn vertex<C: VertexCache>(
        &self,
        cube: &Cube,
        e: Edge,
        cache: &mut C,
        out: &mut MeshBuilder,
    ) -> usize {
        let key = cube.key(e);
        if let Some(i) = cache.get(key) {
            return i;
        }
        let dx = cube.crossing(e, self.isovalue);
        let a = key.axis.index();
        let sampling = self.field.sampling();
        let pos = nalgebra::Vector3::from_fn(|i, _| {
            let t = key.point[i] as f64 + if i == a { dx } else { 0.0 };
            sampling[i].value(t) as f32
        });
        let i = if self.normals {
            let n = normal::estimate(self.field, key.point, key.axis, dx);
            out.push_vertex(pos, Some(n))
        } else {
            out.push_vertex(pos, None)
        };
        cache.insert(key, i);
        i
    }
}
