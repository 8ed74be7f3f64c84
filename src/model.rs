//! Polygonal models
//!
//! Models are read from [Wavefront OBJ](https://en.wikipedia.org/wiki/Wavefront_.obj_file)
//!   files. Vertices keep the numbering of the `v` lines in the file.
//!   Faces with more than three vertices are split into a fan of triangles,
//!   points and lines are skipped. All objects and groups in a file are
//!   merged into a single model.

use crate::Error;
use crate::Result;

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

/// Triangulated model: vertex positions and faces of three vertex indices
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Model {
    verts: Vec<[f64; 3]>,
    faces: Vec<[usize; 3]>,
}

impl Model {
    /// Load a model from an OBJ file
    ///
    /// Material libraries referenced by the file are not read
    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let path = filename.as_ref();
        let obj = obj::Obj::load(path)
            .map_err(|source| Error::Model { path: path.to_path_buf(), source })?;
        let model = Self::from_data(obj.data)?;
        info!(path = %path.display(), nverts = model.nverts(), nfaces = model.nfaces(),
              "loaded model");
        Ok(model)
    }
    /// Load a model from OBJ data in `reader`
    ///
    ///     use wireframe::Model;
    ///
    ///     let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
    ///     let model = Model::from_buf(&mut obj.as_bytes()).unwrap();
    ///     assert_eq!(model.nverts(), 4);
    ///     assert_eq!(model.nfaces(), 2);
    ///
    pub fn from_buf<R: Read>(reader: R) -> Result<Self> {
        Self::from_data(obj::ObjData::load_buf(reader)?)
    }
    /// Keep every `v` line in file order and fan-triangulate the polygons
    ///   of every object and group
    fn from_data(data: obj::ObjData) -> Result<Self> {
        let nverts = data.position.len();
        let verts = data.position.iter()
            .map(|v| [f64::from(v[0]), f64::from(v[1]), f64::from(v[2])])
            .collect();
        let mut faces = vec![];
        for object in &data.objects {
            for group in &object.groups {
                let n0 = faces.len();
                for poly in &group.polys {
                    let idx : Vec<usize> = poly.0.iter().map(|t| t.0).collect();
                    if let Some(&index) = idx.iter().find(|&&i| i >= nverts) {
                        return Err(Error::InvalidFace { face: faces.len(), index, nverts });
                    }
                    // Points and lines have no area
                    for k in 1 .. idx.len().saturating_sub(1) {
                        faces.push([idx[0], idx[k], idx[k+1]]);
                    }
                }
                debug!(object = %object.name, group = %group.name,
                       nfaces = faces.len() - n0, "model group");
            }
        }
        Ok(Model { verts, faces })
    }
    /// Number of vertices
    pub fn nverts(&self) -> usize {
        self.verts.len()
    }
    /// Number of triangular faces
    pub fn nfaces(&self) -> usize {
        self.faces.len()
    }
    /// Position of vertex `i`
    pub fn vert(&self, i: usize) -> [f64; 3] {
        self.verts[i]
    }
    /// Vertex indices of face `i`
    pub fn face(&self, i: usize) -> [usize; 3] {
        self.faces[i]
    }
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }
}
