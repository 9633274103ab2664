use super::Mesh;

/// Container used during construction of a [`Mesh`]
///
/// Vertices and triangles are only ever appended; indices handed out by
/// [`push_vertex`](Self::push_vertex) remain valid for the builder's
/// lifetime.
pub struct MeshBuilder {
    out: Mesh,
}

impl MeshBuilder {
    /// Builds an empty mesh builder, optionally storing normals
    pub fn new(normals: bool) -> Self {
        Self {
            out: Mesh {
                normals: normals.then(Vec::new),
                ..Mesh::default()
            },
        }
    }

    /// Appends a vertex, returning its index
    ///
    /// The normal is dropped if this builder isn't storing normals.
    pub fn push_vertex(
        &mut self,
        pos: nalgebra::Vector3<f32>,
        normal: Option<nalgebra::Vector3<f32>>,
    ) -> usize {
        let next_vert = self.out.vertices.len();
        self.out.vertices.push(pos);
        if let Some(normals) = &mut self.out.normals {
            normals.push(normal.unwrap_or_else(|| {
                nalgebra::Vector3::repeat(f32::NAN)
            }));
        }
        next_vert
    }

    /// Appends a triangle
    pub fn push(&mut self, tri: nalgebra::Vector3<usize>) {
        debug_assert!(tri.iter().all(|&i| i < self.out.vertices.len()));
        self.out.triangles.push(tri)
    }

    /// Appends the contents of another mesh, remapping its vertex indices
    ///
    /// `remap` maps from each vertex of `other` to an index in this builder,
    /// or `None` if the vertex is new; new vertices are appended in order.
    ///
    /// Returns the resulting map from `other`'s vertices to this builder's.
    pub fn append<F>(&mut self, other: Mesh, mut remap: F) -> Vec<usize>
    where
        F: FnMut(usize) -> Option<usize>,
    {
        let mut normals = other.normals.map(|n| n.into_iter());
        let map: Vec<usize> = other
            .vertices
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let n = normals.as_mut().and_then(|n| n.next());
                match remap(i) {
                    Some(j) => j,
                    None => self.push_vertex(v, n),
                }
            })
            .collect();
        for t in other.triangles {
            self.push(t.map(|i| map[i]));
        }
        map
    }

    /// Finishes construction, returning the mesh
    pub fn take(self) -> Mesh {
        self.out
    }
}
