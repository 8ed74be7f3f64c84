//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::*;
use crate::tga;

use crate::Color;
use crate::Source;
use crate::Pixel;
use crate::PixelData;
use crate::Result;

use std::marker::PhantomData;
use std::path::Path;

/// Pixel Format Wrapper around raw pixel component data
///
/// This is the drawing surface of the renderer
///
#[derive(Debug,Clone)]
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T> Pixfmt<T> where Pixfmt<T>: Pixel {
    /// Create new Pixel Format of width * height * bpp
    ///
    /// Allocates memory of width * height * bpp, all components set to 0
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height, Self::bpp()),
               phantom: PhantomData
        }
    }
    /// Size of Rendering Buffer in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Clear the Image
    ///
    /// All color components are set to 0, including `alpha` if present
    ///
    ///     use wireframe::{Source,Pixfmt,Rgb8,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(2,2);
    ///     pix.fill(Rgb8::white());
    ///     pix.clear();
    ///     assert_eq!(pix.get((1,1)), Rgba8::new(0,0,0,0));
    ///
    pub fn clear(&mut self) {
        self.rbuf.clear();
    }
    /// Set every pixel to [Color] `c`
    ///
    /// [Color]: ../trait.Color.html
    pub fn fill<C: Color>(&mut self, c: C) {
        self.set((0,0), c);
        let pixel = self.rbuf[(0,0)].to_vec();
        self.rbuf.fill(&pixel);
    }
    /// Flip the image top to bottom
    ///
    /// Used before writing so that (0,0) ends up in the bottom left corner
    pub fn flip_vertically(&mut self) {
        self.rbuf.flip_vertically();
    }
    /// Flip the image left to right
    pub fn flip_horizontally(&mut self) {
        self.rbuf.flip_horizontally();
    }
    /// Write the image to `filename`
    ///
    /// Files ending in `.tga` are written as uncompressed Truevision TGA,
    ///   other formats are chosen from the file extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> where Self: tga::ColorType {
        tga::write_file(&self.rbuf.data, self.width(), self.height(),
                        <Self as tga::ColorType>::color_type(), filename)
    }
}

/// Access Pixeldata from a Pixfmt<T>
///
impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl Source for Pixfmt<Rgba8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0],p[1],p[2],p[3])
    }
}
impl Source for Pixfmt<Rgb8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0],p[1],p[2],255)
    }
}
impl Source for Pixfmt<Gray8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0],p[0],p[0],255)
    }
}

impl Pixel for Pixfmt<Rgba8> {
    fn bpp() -> usize { 4 }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
        p[3] = c.alpha8();
    }
}

impl Pixel for Pixfmt<Rgb8> {
    fn bpp() -> usize { 3 }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
    }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
}

impl Pixel for Pixfmt<Gray8> {
    fn bpp() -> usize { 1 }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        self.rbuf[id][0] = Gray8::from_trait(c).value;
    }
    fn height(&self) -> usize {
        self.rbuf.height
    }
    fn width(&self) -> usize {
        self.rbuf.width
    }
}

impl Pixfmt<Rgb8> {
    pub fn raw(&self, id: (usize, usize)) -> Rgb8 {
        Rgb8::from_slice(&self.rbuf[id])
    }
}
