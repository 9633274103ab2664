//! Seeded traversal along a connected surface
use super::{
    Mesh, Settings,
    builder::MeshBuilder,
    cube::{EdgeKey, Triangulator},
    types::FaceMask,
};
use crate::field::ScalarField;
use log::{debug, warn};
use std::{collections::HashMap, num::NonZeroUsize};

/// Marching cubes restricted to cubes which the surface passes through
///
/// Starting from a seed cube, the tracker walks from cube to cube through
/// faces that the surface crosses, so it only ever touches cubes on the
/// surface.  This makes it much cheaper than a [`VolumeScanner`](
/// super::VolumeScanner) when the surface is small relative to the volume,
/// but [`run`](Self::run) only finds the connected component containing the
/// seed.
///
/// The walk is depth-first, visiting faces of each cube in the order `-Z`,
/// `+Z`, `-Y`, `+Y`, `-X`, `+X`; it uses an explicit stack, so its depth is
/// not limited by the call stack.
pub struct SurfaceTracker<'a> {
    field: &'a ScalarField,
}

impl<'a> SurfaceTracker<'a> {
    /// Builds a new tracker for the given field
    pub fn new(field: &'a ScalarField) -> Self {
        Self { field }
    }

    /// Extracts the surface component containing a seed cube
    ///
    /// If `seed` is `None`, the first crossed cube in scan order is used.
    /// Otherwise, the seed is a hint: the tracker searches along axis 1 from
    /// the hint (first forwards, then backwards) for a crossed cube.
    ///
    /// If no crossed cube is found (or the hint is outside of the grid), the
    /// resulting mesh is empty.
    pub fn run(
        &self,
        isovalue: f32,
        seed: Option<[usize; 3]>,
        settings: &Settings,
    ) -> Mesh {
        let start = std::time::Instant::now();
        let mut walk = Walk::new(self.field, isovalue, settings);
        let found = match seed {
            None => walk.find_seed(0),
            Some(hint) => walk.search(hint),
        };
        match found {
            Some(s) => walk.track(s),
            None => debug!("no surface found from seed {seed:?}"),
        }
        walk.finish(settings, start)
    }

    /// Extracts every surface component
    ///
    /// This repeatedly searches for a crossed cube that hasn't been visited,
    /// then tracks the surface from it.  Vertices and visited cubes are
    /// shared between components.
    pub fn run_all(&self, isovalue: f32, settings: &Settings) -> Mesh {
        let start = std::time::Instant::now();
        let mut walk = Walk::new(self.field, isovalue, settings);
        let mut from = 0;
        let mut components = 0;
        while let Some(s) = walk.find_seed(from) {
            walk.track(s);
            from = walk.offset(s) + 1;
            components += 1;
        }
        debug!("tracked {components} surface components");
        walk.finish(settings, start)
    }
}

/// A single frame in the traversal stack
struct Frame {
    cube: [usize; 3],
    /// Open faces which have not yet been explored
    open: FaceMask,
}

/// Mutable state for one extraction
struct Walk<'a> {
    t: Triangulator<'a>,
    /// Number of cubes along each axis
    dims: [usize; 3],
    visited: Vec<bool>,
    cache: HashMap<EdgeKey, usize>,
    out: MeshBuilder,
    max_depth: Option<NonZeroUsize>,
    /// Number of cubes triangulated so far
    visits: usize,
}

impl<'a> Walk<'a> {
    fn new(field: &'a ScalarField, isovalue: f32, settings: &Settings) -> Self {
        let dims = field.cube_dims();
        Self {
            t: Triangulator::new(field, isovalue, settings.normals),
            dims,
            visited: vec![false; dims.iter().product()],
            cache: HashMap::new(),
            out: MeshBuilder::new(settings.normals),
            max_depth: settings.max_depth,
            visits: 0,
        }
    }

    fn contains(&self, cube: [usize; 3]) -> bool {
        cube.iter().zip(&self.dims).all(|(c, d)| c < d)
    }

    fn offset(&self, cube: [usize; 3]) -> usize {
        let [c1, c2, _] = self.dims;
        cube[0] + c1 * (cube[1] + c2 * cube[2])
    }

    fn cube(&self, offset: usize) -> [usize; 3] {
        let [c1, c2, _] = self.dims;
        [offset % c1, (offset / c1) % c2, offset / (c1 * c2)]
    }

    /// Checks whether a cube is crossed and hasn't been visited yet
    fn is_candidate(&self, cube: [usize; 3]) -> bool {
        !self.visited[self.offset(cube)] && self.t.load(cube).is_crossed()
    }

    /// Finds the first unvisited crossed cube, in scan order
    fn find_seed(&self, from: usize) -> Option<[usize; 3]> {
        (from..self.visited.len())
            .map(|i| self.cube(i))
            .find(|c| self.is_candidate(*c))
    }

    /// Searches along axis 1 from a hint for a crossed cube
    fn search(&self, hint: [usize; 3]) -> Option<[usize; 3]> {
        if !self.contains(hint) {
            debug!("seed {hint:?} is outside of {:?}", self.dims);
            return None;
        }
        let [h1, h2, h3] = hint;
        (h1..self.dims[0])
            .chain((0..h1).rev())
            .map(|i1| [i1, h2, h3])
            .find(|c| self.is_candidate(*c))
    }

    /// Triangulates a cube, returning its open faces
    ///
    /// Returns `None` if the surface doesn't pass through the cube.
    fn visit(&mut self, cube: [usize; 3]) -> Option<FaceMask> {
        let c = self.t.load(cube);
        if !c.is_crossed() {
            return None;
        }
        let open = self.t.march(&c, &mut self.cache, &mut self.out);
        let i = self.offset(cube);
        self.visited[i] = true;
        self.visits += 1;
        Some(open)
    }

    /// Walks the surface component containing the given cube
    fn track(&mut self, seed: [usize; 3]) {
        let Some(open) = self.visit(seed) else {
            return;
        };
        let mut stack = vec![Frame { cube: seed, open }];
        let mut truncated = false;
        while let Some(frame) = stack.last_mut() {
            let Some(face) = frame.open.pop() else {
                stack.pop();
                continue;
            };
            let Some(next) = face.neighbor(frame.cube, self.dims) else {
                continue;
            };
            if self.visited[self.offset(next)] {
                continue;
            }
            if self.max_depth.is_some_and(|d| stack.len() >= d.get()) {
                truncated = true;
                continue;
            }
            if let Some(open) = self.visit(next) {
                stack.push(Frame { cube: next, open });
            }
        }
        if truncated {
            warn!(
                "surface tracking from {seed:?} was truncated at depth {}",
                self.max_depth.map_or(0, NonZeroUsize::get)
            );
        }
    }

    fn finish(self, settings: &Settings, start: std::time::Instant) -> Mesh {
        let mut mesh = self.out.take();
        if settings.swap13 {
            mesh.swap13();
        }
        debug!(
            "tracked {} cubes: {} vertices, {} triangles in {:?}",
            self.visits,
            mesh.vertex_count(),
            mesh.triangle_count(),
            start.elapsed()
        );
        mesh
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        field::Sampling,
        mesh::{
            VolumeScanner,
            test::{
                assert_bit_identical, check_for_edge_matching,
                check_for_vertex_dupes, sphere,
            },
        },
    };
    use std::collections::BTreeSet;

    /// Two disjoint spheres, the first of which is found first in scan order
    fn two_spheres() -> ScalarField {
        let spheres = [([6.0, 6.0, 6.0], 3.7), ([16.0, 15.0, 17.0], 4.6)];
        ScalarField::from_fn([Sampling::unit(24); 3], |i1, i2, i3| {
            spheres
                .iter()
                .map(|(c, r)| {
                    let d = [i1, i2, i3]
                        .iter()
                        .zip(c)
                        .map(|(&i, c)| (i as f32 - c).powi(2))
                        .sum::<f32>();
                    d.sqrt() - r
                })
                .fold(f32::INFINITY, f32::min)
        })
        .unwrap()
    }

    fn vertex_set(mesh: &Mesh) -> BTreeSet<[u32; 3]> {
        mesh.vertices
            .iter()
            .map(|v| [v.x, v.y, v.z].map(f32::to_bits))
            .collect()
    }

    #[test]
    fn test_sphere() {
        let f = sphere(20, 6.5);
        let settings = Settings::default();
        let tracked = SurfaceTracker::new(&f).run(0.0, None, &settings);
        let scanned = VolumeScanner::new(&f).run(0.0, &settings);
        assert!(!tracked.is_empty());
        check_for_vertex_dupes(&tracked).unwrap();
        check_for_edge_matching(&tracked).unwrap();
        assert_eq!(tracked.triangle_count(), scanned.triangle_count());
        assert_eq!(vertex_set(&tracked), vertex_set(&scanned));
        assert_eq!(tracked.normals.as_ref().map(Vec::len), Some(744));
    }

    #[test]
    fn test_idempotent() {
        let f = two_spheres();
        let settings = Settings::default();
        let a = SurfaceTracker::new(&f).run(0.0, None, &settings);
        let b = SurfaceTracker::new(&f).run(0.0, None, &settings);
        assert_bit_identical(&a, &b);

        let a = SurfaceTracker::new(&f).run_all(0.0, &settings);
        let b = SurfaceTracker::new(&f).run_all(0.0, &settings);
        assert_bit_identical(&a, &b);
    }

    #[test]
    fn test_components() {
        let f = two_spheres();
        let settings = Settings::default();
        let scanned = VolumeScanner::new(&f).run(0.0, &settings);
        let first = SurfaceTracker::new(&f).run(0.0, None, &settings);
        let second =
            SurfaceTracker::new(&f).run(0.0, Some([12, 15, 17]), &settings);
        let all = SurfaceTracker::new(&f).run_all(0.0, &settings);

        check_for_edge_matching(&first).unwrap();
        check_for_edge_matching(&second).unwrap();
        check_for_edge_matching(&all).unwrap();
        check_for_vertex_dupes(&all).unwrap();

        assert!(!first.is_empty());
        assert!(!second.is_empty());
        assert!(first.triangle_count() < scanned.triangle_count());
        assert_eq!(
            first.triangle_count() + second.triangle_count(),
            scanned.triangle_count()
        );
        assert_eq!(all.triangle_count(), scanned.triangle_count());
        assert_eq!(vertex_set(&all), vertex_set(&scanned));

        let mut both = vertex_set(&first);
        both.extend(vertex_set(&second));
        assert_eq!(both, vertex_set(&scanned));
    }

    #[test]
    fn test_search() {
        let f = two_spheres();
        let walk = Walk::new(&f, 0.0, &Settings::default());
        assert_eq!(walk.find_seed(0), Some([5, 3, 2]));

        // Row (15, 17) crosses the second sphere at cubes 11 and 20
        assert_eq!(walk.search([0, 15, 17]), Some([11, 15, 17]));
        assert_eq!(walk.search([11, 15, 17]), Some([11, 15, 17]));
        assert_eq!(walk.search([12, 15, 17]), Some([20, 15, 17]));
        assert_eq!(walk.search([22, 15, 17]), Some([20, 15, 17]));

        assert_eq!(walk.search([0, 0, 0]), None);
        assert_eq!(walk.search([23, 15, 17]), None);
        assert_eq!(walk.search([0, 100, 0]), None);
    }

    #[test]
    fn test_bad_seed() {
        let f = two_spheres();
        let settings = Settings::default();
        for seed in [[0, 0, 0], [23, 0, 0], [0, 0, usize::MAX]] {
            let mesh = SurfaceTracker::new(&f).run(0.0, Some(seed), &settings);
            assert!(mesh.is_empty(), "got a surface from {seed:?}");
            assert_eq!(mesh.vertex_count(), 0);
        }
    }

    #[test]
    fn test_empty() {
        let f = ScalarField::new([Sampling::unit(4); 3], vec![0.0; 64])
            .unwrap();
        let settings = Settings::default();
        assert!(SurfaceTracker::new(&f).run(0.5, None, &settings).is_empty());
        assert!(SurfaceTracker::new(&f).run_all(-0.5, &settings).is_empty());

        let f = ScalarField::new([Sampling::unit(0); 3], vec![]).unwrap();
        assert!(SurfaceTracker::new(&f).run_all(0.0, &settings).is_empty());
    }

    #[test]
    fn test_max_depth() {
        let f = sphere(20, 6.5);
        let full = SurfaceTracker::new(&f).run(0.0, None, &Settings::default());

        // With a depth of 1, only the seed cube is triangulated
        let settings = Settings {
            max_depth: NonZeroUsize::new(1),
            ..Default::default()
        };
        let seed = SurfaceTracker::new(&f).run(0.0, None, &settings);
        let walk = Walk::new(&f, 0.0, &settings);
        let cube = walk.t.load([7, 6, 3]);
        assert_eq!(walk.find_seed(0), Some([7, 6, 3]));
        assert_eq!(seed.triangle_count(), cube.case().triangle_count());

        let settings = Settings {
            max_depth: NonZeroUsize::new(8),
            ..Default::default()
        };
        let partial = SurfaceTracker::new(&f).run(0.0, None, &settings);
        assert!(partial.triangle_count() > seed.triangle_count());
        assert!(partial.triangle_count() < full.triangle_count());

        let settings = Settings {
            max_depth: NonZeroUsize::new(100_000),
            ..Default::default()
        };
        let deep = SurfaceTracker::new(&f).run(0.0, None, &settings);
        assert_bit_identical(&deep, &full);
    }

    #[test]
    fn test_swap13() {
        let f = two_spheres();
        let plain = SurfaceTracker::new(&f).run_all(0.0, &Settings::default());
        let settings = Settings {
            swap13: true,
            ..Default::default()
        };
        let swapped = SurfaceTracker::new(&f).run_all(0.0, &settings);
        assert_eq!(plain.triangles, swapped.triangles);
        for (a, b) in plain.vertices.iter().zip(&swapped.vertices) {
            assert_eq!(*a, nalgebra::Vector3::new(b.z, b.y, b.x));
        }
        let (pn, sn) = (plain.normals.unwrap(), swapped.normals.unwrap());
        for (a, b) in pn.iter().zip(&sn) {
            assert_eq!(*a, nalgebra::Vector3::new(b.z, b.y, b.x));
        }
    }
}
