//! Errors

use std::path::PathBuf;

/// Errors from loading models and writing images
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load model {}: {source}", path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: obj::ObjError,
    },
    #[error("failed to parse model: {0}")]
    Parse(#[from] obj::ObjError),
    #[error("face {face} refers to vertex {index}, model has {nverts} vertices")]
    InvalidFace { face: usize, index: usize, nverts: usize },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
