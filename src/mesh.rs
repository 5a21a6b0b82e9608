//! Wireframe meshes.
//!
//! A [`Mesh`] is a vertex list plus a list of [`Face`]s. A face is a closed
//! polyline of vertex indices: consecutive indices form an edge and the last
//! index connects back to the first. Faces are never filled, so they do not
//! need to be planar or convex; a two-index face is a single edge.
//!
//! The built-in scenes are literal data selected through [`MeshPreset`].

use std::fmt;
use std::str::FromStr;

use crate::math::vec3::Vec3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("face {face} has {len} indices, at least 2 are required")]
    FaceTooShort { face: usize, len: usize },

    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// A closed polyline through the listed vertex indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    /// Index pairs `(f[i], f[(i + 1) % len])` in face order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = self.indices.len();
        (0..len).map(move |i| (self.indices[i], self.indices[(i + 1) % len]))
    }
}

/// Vertices and faces of one wireframe object.
///
/// Construction validates every face, so indexing `vertices()` with any
/// index yielded by a face is always in range.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        faces: Vec<Face>,
    ) -> Result<Self, MeshError> {
        let vertex_count = vertices.len();
        for (face_idx, face) in faces.iter().enumerate() {
            if face.indices.len() < 2 {
                return Err(MeshError::FaceTooShort {
                    face: face_idx,
                    len: face.indices.len(),
                });
            }
            if let Some(&index) = face.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    face: face_idx,
                    index,
                    vertex_count,
                });
            }
        }

        let name = name.into();
        tracing::debug!(
            mesh = %name,
            vertices = vertex_count,
            faces = faces.len(),
            "mesh loaded"
        );

        Ok(Self {
            name,
            vertices,
            faces,
        })
    }

    /// Builds a mesh from static literal data.
    pub fn from_slices(
        name: impl Into<String>,
        vertices: &[Vec3],
        faces: &[&[usize]],
    ) -> Result<Self, MeshError> {
        Self::new(
            name,
            vertices.to_vec(),
            faces.iter().map(|f| Face::new(f.to_vec())).collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Every drawn edge, face by face.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces.iter().flat_map(Face::edges)
    }

    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(|f| f.indices.len()).sum()
    }
}

// Cube of side 0.5 centered on the origin. Vertices 0..4 are the z = +0.25
// square, 4..8 the z = -0.25 square, in matching order.
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-0.25, 0.25, 0.25),
    Vec3::new(0.25, 0.25, 0.25),
    Vec3::new(0.25, -0.25, 0.25),
    Vec3::new(-0.25, -0.25, 0.25),
    Vec3::new(-0.25, 0.25, -0.25),
    Vec3::new(0.25, 0.25, -0.25),
    Vec3::new(0.25, -0.25, -0.25),
    Vec3::new(-0.25, -0.25, -0.25),
];

pub const CUBE_FACES: [&[usize]; 6] = [
    &[0, 1, 2, 3],
    &[4, 5, 6, 7],
    &[0, 4],
    &[1, 5],
    &[2, 6],
    &[3, 7],
];

// Square pyramid, apex up.
pub const PYRAMID_VERTICES: [Vec3; 5] = [
    Vec3::new(0.0, 0.3, 0.0),
    Vec3::new(-0.25, -0.2, 0.25),
    Vec3::new(0.25, -0.2, 0.25),
    Vec3::new(0.25, -0.2, -0.25),
    Vec3::new(-0.25, -0.2, -0.25),
];

pub const PYRAMID_FACES: [&[usize]; 5] = [
    &[1, 2, 3, 4],
    &[0, 1],
    &[0, 2],
    &[0, 3],
    &[0, 4],
];

pub const OCTAHEDRON_VERTICES: [Vec3; 6] = [
    Vec3::new(0.0, 0.35, 0.0),
    Vec3::new(0.0, -0.35, 0.0),
    Vec3::new(0.35, 0.0, 0.0),
    Vec3::new(-0.35, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 0.35),
    Vec3::new(0.0, 0.0, -0.35),
];

pub const OCTAHEDRON_FACES: [&[usize]; 3] = [
    // Equator
    &[2, 4, 3, 5],
    // Meridians through the poles
    &[0, 2, 1, 3],
    &[0, 4, 1, 5],
];

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeshPreset {
    #[default]
    Cube,
    Pyramid,
    Octahedron,
}

impl MeshPreset {
    pub const ALL: [MeshPreset; 3] = [
        MeshPreset::Cube,
        MeshPreset::Pyramid,
        MeshPreset::Octahedron,
    ];

    pub fn build(self) -> Result<Mesh, MeshError> {
        match self {
            MeshPreset::Cube => Mesh::from_slices("cube", &CUBE_VERTICES, &CUBE_FACES),
            MeshPreset::Pyramid => {
                Mesh::from_slices("pyramid", &PYRAMID_VERTICES, &PYRAMID_FACES)
            }
            MeshPreset::Octahedron => {
                Mesh::from_slices("octahedron", &OCTAHEDRON_VERTICES, &OCTAHEDRON_FACES)
            }
        }
    }
}

impl fmt::Display for MeshPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshPreset::Cube => write!(f, "cube"),
            MeshPreset::Pyramid => write!(f, "pyramid"),
            MeshPreset::Octahedron => write!(f, "octahedron"),
        }
    }
}

impl FromStr for MeshPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeshPreset::ALL
            .into_iter()
            .find(|preset| preset.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown mesh '{s}', expected one of: cube, pyramid, octahedron")
            })
    }
}
