//! Strongly-typed indexes of cube corners, edges, and faces
//!
//! Users are unlikely to actually use types within this module; it's public
//! because there are certain properties which need to be tested within a
//! `compile_fail` doctest.
//!
//! A cube is identified by the grid sample at its lowest corner, `(i1, i2,
//! i3)`.  Its corners are numbered as follows:
//!
//! ```text
//!         7 ---------- 6
//!        /|           /|        axis 3
//!       / |          / |        ^  _ axis 2
//!      4 ---------- 5  |        | /
//!      |  |         |  |        |/
//!      |  3 --------|- 2        ---> axis 1
//!      | /          | /
//!      |/           |/
//!      0 ---------- 1
//! ```
//!
//! Edges `0-3` run around the bottom face (`0→1`, `1→2`, `3→2`, `0→3`), edges
//! `4-7` around the top face in the same order, and edges `8-11` are vertical
//! (`0→4`, `1→5`, `3→7`, `2→6`).  Every edge is directed from its lower
//! sample to its upper sample along the axis it spans.
use super::table::CASE_EDGES;
use strum::VariantArray;

/// A single axis of the sampling grid, in the `0-2` range
///
/// Axis 0 is the fastest-varying axis of the sample array (called axis 1 in
/// the documentation), axis 2 the slowest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axis(u8);

impl Axis {
    /// Builds a new axis
    ///
    /// ```
    /// # use isosurf::mesh::types::Axis;
    /// const A: Axis = Axis::new(2);
    /// ```
    ///
    /// # Panics
    /// If the input is not in the range 0-2
    ///
    /// ```compile_fail
    /// # use isosurf::mesh::types::Axis;
    /// const A: Axis = Axis::new(3);
    /// ```
    pub const fn new(i: u8) -> Self {
        assert!(i < 3);
        Self(i)
    }

    /// Returns the axis as an index into a coordinate triple
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The first (fastest-varying) axis
pub const X: Axis = Axis(0);
/// The second axis
pub const Y: Axis = Axis(1);
/// The third (slowest-varying) axis
pub const Z: Axis = Axis(2);

/// Strongly-typed cube corner, in the `0-7` range
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Corner(u8);

const CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

impl Corner {
    /// Builds a new corner
    ///
    /// # Panics
    /// If `i >= 8`, which is not a valid corner index
    ///
    /// ```compile_fail
    /// # use isosurf::mesh::types::Corner;
    /// const C: Corner = Corner::new(8);
    /// ```
    pub const fn new(i: u8) -> Self {
        assert!(i < 8);
        Self(i)
    }
    /// Returns the value of this corner as an index
    pub fn index(self) -> usize {
        self.0 as usize
    }
    /// Iterates over all 8 corners
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(Corner)
    }
    /// Returns the offset of this corner from the cube's lowest sample
    pub fn offset(self) -> [usize; 3] {
        CORNER_OFFSETS[self.index()]
    }
}

/// An edge within a cube, in the `0-11` range
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Edge(u8);

const EDGE_CORNERS: [(Corner, Corner); 12] = [
    (Corner(0), Corner(1)),
    (Corner(1), Corner(2)),
    (Corner(3), Corner(2)),
    (Corner(0), Corner(3)),
    (Corner(4), Corner(5)),
    (Corner(5), Corner(6)),
    (Corner(7), Corner(6)),
    (Corner(4), Corner(7)),
    (Corner(0), Corner(4)),
    (Corner(1), Corner(5)),
    (Corner(3), Corner(7)),
    (Corner(2), Corner(6)),
];

const EDGE_AXES: [Axis; 12] = [X, Y, X, Y, X, Y, X, Y, Z, Z, Z, Z];

/// The two cube faces that contain each edge
///
/// A crossed edge on a face means that the neighbor across that face shares
/// the crossing, so this is what decides where surface tracking goes next.
const EDGE_FACES: [[Face; 2]; 12] = [
    [Face::NegY, Face::NegZ],
    [Face::PosX, Face::NegZ],
    [Face::PosY, Face::NegZ],
    [Face::NegX, Face::NegZ],
    [Face::NegY, Face::PosZ],
    [Face::PosX, Face::PosZ],
    [Face::PosY, Face::PosZ],
    [Face::NegX, Face::PosZ],
    [Face::NegX, Face::NegY],
    [Face::PosX, Face::NegY],
    [Face::NegX, Face::PosY],
    [Face::PosX, Face::PosY],
];

impl Edge {
    /// Builds a new edge
    ///
    /// # Panics
    /// If `i >= 12`, since that's an invalid edge
    ///
    /// ```compile_fail
    /// # use isosurf::mesh::types::Edge;
    /// const E: Edge = Edge::new(12);
    /// ```
    pub const fn new(i: u8) -> Self {
        assert!(i < 12);
        Self(i)
    }
    /// Converts from an edge to an index
    pub fn index(self) -> usize {
        self.0 as usize
    }
    /// Iterates over all 12 edges
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..12).map(Edge)
    }
    /// Returns a `(start, end)` tuple for the given edge
    ///
    /// The start is always the lower sample along [`Edge::axis`].
    pub fn corners(self) -> (Corner, Corner) {
        EDGE_CORNERS[self.index()]
    }
    /// Returns the axis along which this edge runs
    pub fn axis(self) -> Axis {
        EDGE_AXES[self.index()]
    }
    /// Returns the two cube faces which contain this edge
    pub fn faces(self) -> [Face; 2] {
        EDGE_FACES[self.index()]
    }
}

/// One of the six faces of a cube
///
/// Variants are declared in the order that surface tracking visits
/// neighbors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, VariantArray)]
pub enum Face {
    /// Face at the low end of axis 3
    NegZ,
    /// Face at the high end of axis 3
    PosZ,
    /// Face at the low end of axis 2
    NegY,
    /// Face at the high end of axis 2
    PosY,
    /// Face at the low end of axis 1
    NegX,
    /// Face at the high end of axis 1
    PosX,
}

impl Face {
    /// Returns the axis normal to this face
    pub fn axis(self) -> Axis {
        match self {
            Face::NegX | Face::PosX => X,
            Face::NegY | Face::PosY => Y,
            Face::NegZ | Face::PosZ => Z,
        }
    }

    /// Checks whether this face is at the high end of its axis
    pub fn is_positive(self) -> bool {
        matches!(self, Face::PosX | Face::PosY | Face::PosZ)
    }

    /// Returns the cube across this face, if it is within `dims`
    ///
    /// `dims` is the number of cubes along each axis.
    pub fn neighbor(
        self,
        cube: [usize; 3],
        dims: [usize; 3],
    ) -> Option<[usize; 3]> {
        let a = self.axis().index();
        let mut out = cube;
        out[a] = if self.is_positive() {
            cube[a].checked_add(1).filter(|i| *i < dims[a])?
        } else {
            cube[a].checked_sub(1)?
        };
        Some(out)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of cube faces
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FaceMask(u8);

impl FaceMask {
    /// Builds an empty mask
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds a face to the set
    pub fn insert(&mut self, f: Face) {
        self.0 |= f.bit();
    }
    /// Checks whether the given face is in the set
    pub fn contains(self, f: Face) -> bool {
        (self.0 & f.bit()) != 0
    }
    /// Checks whether the set is empty
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    /// Iterates over faces in the set, in tracking order
    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::VARIANTS.iter().copied().filter(move |f| self.contains(*f))
    }
    /// Removes and returns the first face in tracking order
    pub fn pop(&mut self) -> Option<Face> {
        let f = self.iter().next()?;
        self.0 &= !f.bit();
        Some(f)
    }
}

/// Bitmask of which cube corners are above the isovalue
///
/// Bit `i` is set if corner `i` is strictly above the isovalue.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CaseIndex(u8);

impl CaseIndex {
    /// Builds a new case index from a raw bitmask
    pub const fn new(i: u8) -> Self {
        Self(i)
    }

    /// Classifies the eight corner values of a cube
    ///
    /// A corner is above the isovalue if its value is strictly greater; `NaN`
    /// values are therefore never above.
    pub fn from_values(values: &[f32; 8], isovalue: f32) -> Self {
        let mask = values
            .iter()
            .enumerate()
            .filter(|(_i, v)| **v > isovalue)
            .fold(0u8, |acc, (i, _v)| acc | (1u8 << i));
        Self(mask)
    }

    /// Returns the bitmask as an index
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks whether all corners are on the same side of the isovalue
    ///
    /// Such cubes are never crossed by the surface.
    pub fn is_trivial(self) -> bool {
        self.0 == 0 || self.0 == u8::MAX
    }

    /// Iterates over triangles, each given as three crossed edges
    pub fn triangles(self) -> impl Iterator<Item = [Edge; 3]> {
        CASE_EDGES[self.index()]
            .chunks_exact(3)
            .map(|t| [Edge(t[0]), Edge(t[1]), Edge(t[2])])
    }

    /// Returns the number of triangles emitted for this case
    pub fn triangle_count(self) -> usize {
        CASE_EDGES[self.index()].len() / 3
    }

    /// Returns the set of faces touched by at least one crossed edge
    pub fn open_faces(self) -> FaceMask {
        let mut out = FaceMask::new();
        for &e in CASE_EDGES[self.index()] {
            for f in Edge(e).faces() {
                out.insert(f);
            }
        }
        out
    }
}

impl std::ops::BitAnd<Corner> for CaseIndex {
    type Output = bool;
    fn bitand(self, c: Corner) -> bool {
        (self.0 & (1 << c.index())) != 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_edge_corners() {
        for e in Edge::iter() {
            let (start, end) = e.corners();
            let (a, b) = (start.offset(), end.offset());
            let axis = e.axis().index();
            for i in 0..3 {
                if i == axis {
                    assert_eq!(a[i] + 1, b[i], "bad direction for {e:?}");
                } else {
                    assert_eq!(a[i], b[i], "bad edge {e:?}");
                }
            }
        }
    }

    #[test]
    fn test_edge_faces() {
        for e in Edge::iter() {
            let (start, end) = e.corners();
            for f in e.faces() {
                assert_ne!(f.axis(), e.axis());
                let a = f.axis().index();
                let side = usize::from(f.is_positive());
                assert_eq!(start.offset()[a], side, "{e:?} is not on {f:?}");
                assert_eq!(end.offset()[a], side, "{e:?} is not on {f:?}");
            }
        }
    }

    #[test]
    fn test_face_neighbor() {
        let dims = [3, 4, 5];
        assert_eq!(Face::NegX.neighbor([0, 1, 1], dims), None);
        assert_eq!(Face::PosX.neighbor([1, 1, 1], dims), Some([2, 1, 1]));
        assert_eq!(Face::PosX.neighbor([2, 1, 1], dims), None);
        assert_eq!(Face::NegY.neighbor([2, 1, 1], dims), Some([2, 0, 1]));
        assert_eq!(Face::PosZ.neighbor([2, 1, 4], dims), None);
        assert_eq!(Face::NegZ.neighbor([2, 1, 4], dims), Some([2, 1, 3]));
    }

    #[test]
    fn test_face_mask() {
        let mut m = FaceMask::new();
        assert!(m.is_empty());
        m.insert(Face::PosX);
        m.insert(Face::NegZ);
        m.insert(Face::PosX);
        assert!(m.contains(Face::PosX));
        assert!(!m.contains(Face::NegX));
        let fs: Vec<Face> = m.iter().collect();
        assert_eq!(fs, vec![Face::NegZ, Face::PosX]);

        assert_eq!(m.pop(), Some(Face::NegZ));
        assert_eq!(m.pop(), Some(Face::PosX));
        assert_eq!(m.pop(), None);
        assert!(m.is_empty());
    }

    #[test]
    fn test_case_index() {
        let vs = [1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0];
        let c = CaseIndex::from_values(&vs, 0.0);
        assert_eq!(c.index(), 1);
        assert!(!c.is_trivial());
        assert_eq!(c.triangle_count(), 1);

        // Ties are below the isovalue
        let c = CaseIndex::from_values(&[0.0; 8], 0.0);
        assert_eq!(c.index(), 0);
        assert!(c.is_trivial());
        assert_eq!(c.triangles().count(), 0);

        let c = CaseIndex::from_values(&[f32::NAN; 8], 0.0);
        assert!(c.is_trivial());

        let c = CaseIndex::from_values(&[2.0; 8], 1.0);
        assert_eq!(c.index(), 255);
        assert!(c.is_trivial());
        assert!(c.open_faces().is_empty());
    }

    #[test]
    fn test_open_faces() {
        // Corner 0 is alone, so only the three faces around it are open
        let c = CaseIndex::new(1);
        let fs: Vec<Face> = c.open_faces().iter().collect();
        assert_eq!(fs, vec![Face::NegZ, Face::NegY, Face::NegX]);

        // Bottom face above, top face below: every side face is open
        let c = CaseIndex::new(0b0000_1111);
        let fs: Vec<Face> = c.open_faces().iter().collect();
        assert_eq!(
            fs,
            vec![Face::NegY, Face::PosY, Face::NegX, Face::PosX]
        );
    }
}
