//! Isosurface extraction with marching cubes
//!
//! Every cube of the sampling grid is classified by which of its corners are
//! above the isovalue; that classification selects a fixed set of triangles
//! from a 256-entry case table, with vertices placed by linear interpolation
//! along the crossed edges.  Vertices on edges shared between cubes are only
//! computed once, so the resulting [`Mesh`] is indexed and (for surfaces which
//! don't touch the edge of the grid) watertight.
//!
//! There are two ways to walk the grid:
//! - [`VolumeScanner`] visits every cube in order, keeping only two planes of
//!   vertex indices in memory.  It can optionally run in parallel.
//! - [`SurfaceTracker`] starts from a seed cube and only visits cubes reachable
//!   through crossed faces, which is much faster for small surfaces in large
//!   volumes.  It only finds the surface component containing its seed;
//!   [`SurfaceTracker::run_all`] repeats the search to find every component.
//!
//! [`extract`] picks between them based on a [`Strategy`]:
//!
//! ```
//! use isosurf::{
//!     field::{Sampling, ScalarField},
//!     mesh::{Settings, Strategy},
//! };
//!
//! let field = ScalarField::from_fn([Sampling::new(20, 0.1, -1.0); 3], |i, j, k| {
//!     let s = [i, j, k].map(|v| v as f32 * 0.1 - 1.0);
//!     s.iter().map(|v| v * v).sum::<f32>().sqrt()
//! })?;
//! let settings = Settings::default();
//! let a = isosurf::mesh::extract(&field, 0.5, Strategy::Scan, &settings);
//! let b = isosurf::mesh::extract(
//!     &field,
//!     0.5,
//!     Strategy::Track { seed: None },
//!     &settings,
//! );
//! assert_eq!(a.triangle_count(), b.triangle_count());
//! # Ok::<(), isosurf::Error>(())
//! ```

mod builder;
mod cube;
mod normal;
mod output;
mod scan;
pub(crate) mod table;
mod track;

#[doc(hidden)]
pub mod types;

pub use scan::VolumeScanner;
pub use track::SurfaceTracker;

use crate::{Error, field::ScalarField};
use std::num::NonZeroUsize;

////////////////////////////////////////////////////////////////////////////////

/// An indexed 3D mesh, with optional per-vertex normals
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Mesh {
    /// Triangles, as indexes into [`self.vertices`](Self::vertices)
    pub triangles: Vec<nalgebra::Vector3<usize>>,
    /// Vertex positions
    pub vertices: Vec<nalgebra::Vector3<f32>>,
    /// Unit normals, one per vertex, if requested
    pub normals: Option<Vec<nalgebra::Vector3<f32>>>,
}

impl Mesh {
    /// Builds a new mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Checks whether the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns vertex positions as packed `x, y, z` triples
    pub fn packed_vertices(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.iter().copied()).collect()
    }

    /// Returns normals as packed `x, y, z` triples, if present
    pub fn packed_normals(&self) -> Option<Vec<f32>> {
        self.normals
            .as_ref()
            .map(|ns| ns.iter().flat_map(|n| n.iter().copied()).collect())
    }

    /// Returns triangles as packed index triples
    ///
    /// Returns an error if any index doesn't fit into a `u32`.
    pub fn packed_triangles(&self) -> Result<Vec<u32>, Error> {
        self.triangles
            .iter()
            .flat_map(|t| t.iter().copied())
            .map(|i| u32::try_from(i).map_err(|_| Error::IndexOverflow(i)))
            .collect()
    }

    /// Swaps the first and third component of every vertex and normal
    pub fn swap13(&mut self) {
        for v in &mut self.vertices {
            v.swap_rows(0, 2);
        }
        for n in self.normals.iter_mut().flatten() {
            n.swap_rows(0, 2);
        }
    }
}

/// Settings when extracting a mesh
pub struct Settings<'a> {
    /// Compute a gradient-based normal for every vertex
    pub normals: bool,

    /// Swap the first and third component of every output vertex and normal
    pub swap13: bool,

    /// Thread pool to use for [`VolumeScanner`]
    ///
    /// If this is `None`, then the scan is done in a single thread;
    /// otherwise, the provided pool is used.  The [`SurfaceTracker`] always
    /// runs in a single thread.
    pub threads: Option<&'a ThreadPool>,

    /// Maximum depth of the [`SurfaceTracker`]'s traversal
    ///
    /// Branches of the traversal deeper than this are abandoned, leaving a
    /// hole in the mesh.  If this is `None`, the depth is unlimited.
    pub max_depth: Option<NonZeroUsize>,
}

impl Default for Settings<'_> {
    fn default() -> Self {
        Self {
            normals: true,
            swap13: false,
            threads: None,
            max_depth: None,
        }
    }
}

/// Thread pool to use for multithreaded extraction
pub enum ThreadPool {
    /// User-provided pool
    Custom(rayon::ThreadPool),
    /// Global Rayon pool
    Global,
}

impl ThreadPool {
    /// Runs a function across the thread pool
    pub fn run<F: FnOnce() -> V + Send, V: Send>(&self, f: F) -> V {
        match self {
            ThreadPool::Custom(p) => p.install(f),
            ThreadPool::Global => f(),
        }
    }

    /// Returns the number of threads in the pool
    pub fn thread_count(&self) -> usize {
        match self {
            ThreadPool::Custom(p) => p.current_num_threads(),
            ThreadPool::Global => rayon::current_num_threads(),
        }
    }
}

/// Strategy used to walk the sampling grid
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Visit every cube with a [`VolumeScanner`]
    Scan,
    /// Track a single surface component with a [`SurfaceTracker`]
    Track {
        /// Cube at which to start searching for the surface
        ///
        /// If this is `None`, the first crossed cube in scan order is used.
        seed: Option<[usize; 3]>,
    },
    /// Track every surface component with a [`SurfaceTracker`]
    TrackAll,
}

/// Extracts the isosurface of a field using the given strategy
pub fn extract(
    field: &ScalarField,
    isovalue: f32,
    strategy: Strategy,
    settings: &Settings,
) -> Mesh {
    match strategy {
        Strategy::Scan => VolumeScanner::new(field).run(isovalue, settings),
        Strategy::Track { seed } => {
            SurfaceTracker::new(field).run(isovalue, seed, settings)
        }
        Strategy::TrackAll => {
            SurfaceTracker::new(field).run_all(isovalue, settings)
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::field::Sampling;
    use nalgebra::Vector3;
    use std::collections::{BTreeMap, BTreeSet};

    pub(crate) fn sphere(n: usize, r: f32) -> ScalarField {
        let c = (n - 1) as f32 / 2.0;
        ScalarField::from_fn([Sampling::unit(n); 3], |i1, i2, i3| {
            let d = [i1, i2, i3].map(|i| i as f32 - c);
            (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt() - r
        })
        .unwrap()
    }

    pub(crate) fn check_for_vertex_dupes(mesh: &Mesh) -> Result<(), String> {
        let mut verts = BTreeSet::new();
        for v in &mesh.vertices {
            if !verts.insert([v.x, v.y, v.z].map(f32::to_bits)) {
                return Err(format!("duplicate vertex {v:?}"));
            }
        }
        Ok(())
    }

    pub(crate) fn check_for_edge_matching(mesh: &Mesh) -> Result<(), String> {
        let mut edges: BTreeMap<_, usize> = BTreeMap::new();
        for t in &mesh.triangles {
            if t.x == t.y || t.y == t.z || t.x == t.z {
                return Err("triangle with duplicate vertices".to_string());
            }
            for edge in [(t.x, t.y), (t.y, t.z), (t.z, t.x)] {
                *edges.entry(edge).or_default() += 1;
            }
        }
        for (&(a, b), &i) in &edges {
            if i != 1 {
                return Err(format!("duplicate edge ({a}, {b})"));
            }
            if !edges.contains_key(&(b, a)) {
                return Err(format!("unpaired edge ({a}, {b})"));
            }
        }
        Ok(())
    }

    pub(crate) fn assert_bit_identical(a: &Mesh, b: &Mesh) {
        assert_eq!(a.triangles, b.triangles);
        assert_eq!(a.vertices.len(), b.vertices.len());
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.map(f32::to_bits), vb.map(f32::to_bits));
        }
        match (&a.normals, &b.normals) {
            (Some(na), Some(nb)) => {
                assert_eq!(na.len(), nb.len());
                for (va, vb) in na.iter().zip(nb) {
                    assert_eq!(va.map(f32::to_bits), vb.map(f32::to_bits));
                }
            }
            (None, None) => (),
            _ => panic!("mismatched normals"),
        }
    }

    fn quad() -> Mesh {
        Mesh {
            triangles: vec![Vector3::new(0, 1, 2), Vector3::new(2, 1, 3)],
            vertices: vec![
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 1.0),
                Vector3::new(0.0, 1.0, 1.0),
                Vector3::new(1.0, 1.0, 1.0),
            ],
            normals: Some(vec![Vector3::z(); 4]),
        }
    }

    #[test]
    fn test_packed() {
        let m = quad();
        assert_eq!(m.vertex_count(), 4);
        assert_eq!(m.triangle_count(), 2);
        assert!(!m.is_empty());
        assert_eq!(m.packed_triangles().unwrap(), vec![0, 1, 2, 2, 1, 3]);
        let vs = m.packed_vertices();
        assert_eq!(vs.len(), 12);
        assert_eq!(&vs[3..6], &[1.0, 0.0, 1.0]);
        let ns = m.packed_normals().unwrap();
        assert_eq!(&ns[9..12], &[0.0, 0.0, 1.0]);

        assert!(Mesh::new().is_empty());
        assert!(Mesh::new().packed_normals().is_none());
    }

    #[test]
    fn test_packed_overflow() {
        let mut m = quad();
        let big = u32::MAX as usize + 1;
        m.triangles.push(Vector3::new(0, 1, big));
        assert!(matches!(
            m.packed_triangles(),
            Err(Error::IndexOverflow(i)) if i == big
        ));
    }

    #[test]
    fn test_swap13() {
        let mut m = quad();
        m.swap13();
        assert_eq!(m.vertices[1], Vector3::new(1.0, 0.0, 1.0));
        assert_eq!(m.vertices[2], Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(m.normals.as_ref().unwrap()[0], Vector3::x());
        m.swap13();
        assert_eq!(m, quad());
    }

    #[test]
    fn test_settings() {
        let s = Settings::default();
        assert!(s.normals);
        assert!(!s.swap13);
        assert!(s.threads.is_none());
        assert!(s.max_depth.is_none());
    }
}
