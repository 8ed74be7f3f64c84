//! Wireframe rendering
//!
//! Every edge of every face is drawn with [draw_line] after an
//!   orthographic projection of the vertices from [-1,1] onto the image
//!
//! [draw_line]: ../line/fn.draw_line.html

use crate::color::{Rgb8, Rgba8};
use crate::line::{draw_line, Point};
use crate::model::Model;
use crate::pixfmt::Pixfmt;
use crate::Color;
use crate::Pixel;
use crate::Result;

use std::path::Path;

use tracing::debug;

/// Model read when none is given on the command line
pub const DEFAULT_MODEL: &str = "obj/friend.obj";
/// Image written by the command line tool
pub const DEFAULT_OUTPUT: &str = "output.tga";

/// Largest distance from the origin, in pixels, of a projected vertex
pub const PROJECT_LIMIT: i64 = 1 << 24;

/// Project a model vertex onto a `width` x `height` image
///
/// x and y in [-1,1] map to [0,width] and [0,height]; z is dropped.
///   Values are truncated toward zero, so 1.0 lands just outside of the image.
///   Results are clamped to [-PROJECT_LIMIT, PROJECT_LIMIT].
///
///     use wireframe::{project,Point};
///     assert_eq!(project([-1.0, -1.0, 0.0], 100, 50), Point::new(0,0));
///     assert_eq!(project([0.0, 0.0, 0.0], 100, 50), Point::new(50,25));
///     assert_eq!(project([0.999, 0.999, 0.0], 100, 50), Point::new(99,49));
///
pub fn project(v: [f64; 3], width: usize, height: usize) -> Point {
    let x = (v[0] + 1.0) * width as f64 / 2.0;
    let y = (v[1] + 1.0) * height as f64 / 2.0;
    Point::new((x as i64).clamp(-PROJECT_LIMIT, PROJECT_LIMIT),
               (y as i64).clamp(-PROJECT_LIMIT, PROJECT_LIMIT))
}

/// Wireframe rendering options
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Wireframe {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Line color
    pub color: Rgba8,
}

impl Default for Wireframe {
    fn default() -> Self {
        Self { width: 1000, height: 1000, color: Rgba8::white() }
    }
}

impl Wireframe {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, ..Default::default() }
    }
    /// Set the line color
    pub fn color<C: Color>(mut self, c: C) -> Self {
        self.color = Rgba8::from_trait(c);
        self
    }
    /// Draw the edges of every face of `model` onto `pix`
    ///
    /// Vertices are projected using the configured width and height.
    ///   Returns the number of edges drawn
    pub fn render<P: Pixel>(&self, model: &Model, pix: &mut P) -> usize {
        let mut edges = 0;
        for face in model.faces() {
            for j in 0 .. 3 {
                let v0 = model.vert(face[j]);
                let v1 = model.vert(face[(j+1) % 3]);
                let p0 = project(v0, self.width, self.height);
                let p1 = project(v1, self.width, self.height);
                draw_line(p0, p1, pix, self.color);
                edges += 1;
            }
        }
        debug!(faces = model.nfaces(), edges, "rendered wireframe");
        edges
    }
    /// Render `model` into a new image and write it to `filename`
    ///
    /// The image is flipped vertically before writing, placing the
    ///   origin in the bottom left corner
    pub fn render_to_file<P: AsRef<Path>>(&self, model: &Model, filename: P) -> Result<Pixfmt<Rgb8>> {
        let mut pix = Pixfmt::<Rgb8>::new(self.width, self.height);
        self.render(model, &mut pix);
        pix.flip_vertically();
        pix.to_file(filename)?;
        Ok(pix)
    }
}
