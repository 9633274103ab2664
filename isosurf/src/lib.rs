//! Isosurface extraction from regularly sampled 3D scalar fields
//!
//! Given a [`ScalarField`](crate::field::ScalarField) and an isovalue, this
//! crate builds a triangle mesh approximating the level set of the field,
//! using the marching cubes algorithm.
//!
//! Each cube of eight neighboring samples is classified by which corners are
//! above the isovalue; a lookup table maps that classification to a set of
//! triangles whose vertices sit on the cube's edges, at the point where linear
//! interpolation between the two edge samples equals the isovalue.  Vertices
//! on an edge shared by several cubes are computed once and reused, so the
//! output is an indexed mesh.
//!
//! # Traversal strategies
//! There are two ways to visit cubes:
//!
//! - [`VolumeScanner`](crate::mesh::VolumeScanner) visits every cube in the
//!   volume, slab by slab, keeping vertex indices for only two slabs at a
//!   time.
//! - [`SurfaceTracker`](crate::mesh::SurfaceTracker) starts from a single
//!   cube on the surface and follows the surface through neighboring cubes,
//!   which is much faster when the surface is small relative to the volume.
//!
//! Here's a quick example:
//! ```
//! use isosurf::{
//!     field::{Sampling, ScalarField},
//!     mesh::{Settings, VolumeScanner},
//! };
//!
//! let s = Sampling::unit(16);
//! let field = ScalarField::from_fn([s; 3], |i1, i2, i3| {
//!     let d = |i: usize| i as f32 - 7.5;
//!     (d(i1).powi(2) + d(i2).powi(2) + d(i3).powi(2)).sqrt()
//! })?;
//! let mesh = VolumeScanner::new(&field).run(5.0, &Settings::default());
//! assert!(!mesh.triangles.is_empty());
//!
//! // Open a file to write, e.g.
//! // let mut f = std::fs::File::create("out.stl")?;
//! # let mut f = vec![];
//! mesh.write_stl(&mut f)?;
//! # Ok::<(), isosurf::Error>(())
//! ```
#![warn(missing_docs)]

mod error;
pub use error::Error;

pub mod field;
pub mod mesh;
