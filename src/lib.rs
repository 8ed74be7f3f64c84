//! Wireframe rendering of polygonal models
//!
//! How does this work
//!    model = Model::load( obj )
//!    pix   = Pixfmt( RenderingBuffer( data ) )
//!    Wireframe::render(model, pix)
//!      for each face, for each edge (a,b) (b,c) (c,a)
//!        project()        -- model space [-1,1] to pixel space, truncated
//!        draw_line()
//!          Bresenham      -- one pixel per step on the longer axis
//!          copy_pixel()   -- ignores pixels outside of the image
//!    pix.flip_vertically()  -- origin at the bottom left
//!    pix.to_file( tga )
//!
//! Drawing a single line
//!
//!     use wireframe::{Pixfmt,Rgb8,Rgba8,Point,Source,draw_line};
//!
//!     let mut pix = Pixfmt::<Rgb8>::new(10,10);
//!     draw_line(Point::new(0,0), Point::new(4,0), &mut pix, Rgb8::white());
//!     for x in 0 .. 5 {
//!         assert_eq!(pix.get((x,0)), Rgba8::white());
//!     }
//!     assert_eq!(pix.get((5,0)), Rgba8::black());
//!

pub mod buffer;
pub mod color;
pub mod error;
pub mod line;
pub mod model;
pub mod pixfmt;
pub mod tga;
pub mod wireframe;

pub use crate::buffer::*;
pub use crate::color::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::model::*;
pub use crate::pixfmt::*;
pub use crate::wireframe::*;

/// Access to the 8-bit components of a color
pub trait Color: std::fmt::Debug + Copy {
    /// Red component
    fn red8(&self) -> u8;
    /// Green component
    fn green8(&self) -> u8;
    /// Blue component
    fn blue8(&self) -> u8;
    /// Alpha component
    fn alpha8(&self) -> u8;
}

/// Access raw pixel component data
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Read pixels back as [Rgba8]
///
/// [Rgba8]: color/struct.Rgba8.html
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Writable surface of pixels
pub trait Pixel {
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Width of the surface in pixels
    fn width(&self) -> usize;
    /// Height of the surface in pixels
    fn height(&self) -> usize;
    /// Copy color `c` to pixel `id`, overwriting the previous value
    ///
    /// `id` must be inside of the surface
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
    /// Copy color `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the surface, including negative
    ///   coordinates, are ignored
    fn copy_pixel<C: Color>(&mut self, x: i64, y: i64, c: C) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() {
            return;
        }
        self.set((x, y), c);
    }
}
