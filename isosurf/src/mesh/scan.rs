//! Exhaustive traversal of every cube in the grid
use super::{
    Mesh, Settings, ThreadPool,
    builder::MeshBuilder,
    cube::{EdgeKey, Triangulator, VertexCache},
};
use crate::field::ScalarField;
use log::debug;
use std::ops::Range;

/// Marker for an unset slot in a [`SlabCache`]
const UNSET: usize = usize::MAX;

/// Vertex cache covering the two grid planes bounding a single slab
///
/// Every edge touched by a cube in slab `i3` starts on plane `i3` or plane
/// `i3 + 1`, so two planes of vertex indices (one slot per axis per grid
/// sample) are enough to share every vertex.  When the scan moves to the next
/// slab, the planes are rotated and the new upper plane is cleared.
struct SlabCache {
    n1: usize,
    base: usize,
    lo: Vec<usize>,
    hi: Vec<usize>,
}

impl SlabCache {
    fn new(n1: usize, n2: usize, base: usize) -> Self {
        Self {
            n1,
            base,
            lo: vec![UNSET; n1 * n2 * 3],
            hi: vec![UNSET; n1 * n2 * 3],
        }
    }

    fn slot(&self, key: EdgeKey) -> usize {
        (key.point[1] * self.n1 + key.point[0]) * 3 + key.axis.index()
    }

    fn plane(&self, key: EdgeKey) -> &[usize] {
        if key.point[2] == self.base {
            &self.lo
        } else {
            debug_assert_eq!(key.point[2], self.base + 1);
            &self.hi
        }
    }

    /// Moves on to the next slab
    fn advance(&mut self) {
        std::mem::swap(&mut self.lo, &mut self.hi);
        self.hi.fill(UNSET);
        self.base += 1;
    }
}

impl VertexCache for SlabCache {
    fn get(&self, key: EdgeKey) -> Option<usize> {
        match self.plane(key)[self.slot(key)] {
            UNSET => None,
            i => Some(i),
        }
    }
    fn insert(&mut self, key: EdgeKey, index: usize) {
        let slot = self.slot(key);
        let plane = if key.point[2] == self.base {
            &mut self.lo
        } else {
            &mut self.hi
        };
        plane[slot] = index;
    }
}

/// Output from scanning a contiguous range of slabs
struct Chunk {
    mesh: Mesh,
    /// Vertex indices on the range's bottom plane, laid out as in `SlabCache`
    bottom: Vec<usize>,
    /// Vertex indices on the range's top plane
    top: Vec<usize>,
}

/// Marching cubes over the entire volume
///
/// Cubes are visited with axis 3 outermost and axis 1 innermost, so vertex
/// order (and therefore the whole mesh) is a deterministic function of the
/// field and isovalue.
///
/// With a thread pool in the [`Settings`], the volume is split into ranges of
/// slabs which are scanned independently then stitched together; the result
/// is identical to a single-threaded scan.
pub struct VolumeScanner<'a> {
    field: &'a ScalarField,
}

impl<'a> VolumeScanner<'a> {
    /// Builds a new scanner for the given field
    pub fn new(field: &'a ScalarField) -> Self {
        Self { field }
    }

    /// Extracts the isosurface at the given value
    pub fn run(&self, isovalue: f32, settings: &Settings) -> Mesh {
        let start = std::time::Instant::now();
        let t = Triangulator::new(self.field, isovalue, settings.normals);
        let mut mesh = match settings.threads {
            None => self.run_serial(&t),
            Some(p) => self.run_parallel(&t, p),
        };
        if settings.swap13 {
            mesh.swap13();
        }
        let [c1, c2, c3] = self.field.cube_dims();
        debug!(
            "scanned {} cubes: {} vertices, {} triangles in {:?}",
            c1 * c2 * c3,
            mesh.vertex_count(),
            mesh.triangle_count(),
            start.elapsed()
        );
        mesh
    }

    fn run_serial(&self, t: &Triangulator) -> Mesh {
        let c3 = self.field.cube_dims()[2];
        self.scan(t, 0..c3).mesh
    }

    fn run_parallel(&self, t: &Triangulator, pool: &ThreadPool) -> Mesh {
        use rayon::prelude::*;

        let c3 = self.field.cube_dims()[2];
        let chunk_size = c3.div_ceil(pool.thread_count() * 2).max(1);
        let ranges: Vec<Range<usize>> = (0..c3)
            .step_by(chunk_size)
            .map(|i| i..(i + chunk_size).min(c3))
            .collect();
        let chunks: Vec<Chunk> = pool.run(|| {
            ranges.into_par_iter().map(|r| self.scan(t, r)).collect()
        });

        let mut out = MeshBuilder::new(t.normals());
        let mut prev: Option<(Vec<usize>, Vec<usize>)> = None;
        for chunk in chunks {
            // Vertices on this chunk's bottom plane were already emitted on
            // the previous chunk's top plane, so they are mapped to the
            // previous chunk's global indices instead of being pushed again.
            let mut shared = vec![None; chunk.mesh.vertex_count()];
            if let Some((prev_top, prev_map)) = &prev {
                for (&local, &theirs) in chunk.bottom.iter().zip(prev_top) {
                    if local != UNSET && theirs != UNSET {
                        shared[local] = Some(prev_map[theirs]);
                    }
                }
            }
            let map = out.append(chunk.mesh, |i| shared[i]);
            prev = Some((chunk.top, map));
        }
        out.take()
    }

    /// Scans a range of slabs, with a private cache and output
    fn scan(&self, t: &Triangulator, slabs: Range<usize>) -> Chunk {
        let [n1, n2, _] = self.field.dims();
        let [c1, c2, _] = self.field.cube_dims();
        let mut cache = SlabCache::new(n1, n2, slabs.start);
        let mut out = MeshBuilder::new(t.normals());
        let mut bottom = vec![];
        let mut top = vec![];
        for i3 in slabs.clone() {
            for i2 in 0..c2 {
                for i1 in 0..c1 {
                    let cube = t.load([i1, i2, i3]);
                    if cube.is_crossed() {
                        t.march(&cube, &mut cache, &mut out);
                    }
                }
            }
            if i3 == slabs.start {
                bottom = cache.lo.clone();
            }
            if i3 + 1 == slabs.end {
                top = std::mem::take(&mut cache.hi);
            } else {
                cache.advance();
            }
        }
        Chunk {
            mesh: out.take(),
            bottom,
            top,
        }
    }
}
