//! Colors

use crate::Color;

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Red Color (255,0,0,255)
    pub fn red() -> Self {
        Self::new(255,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Convert any [Color] into an Rgba8
    ///
    /// [Color]: ../trait.Color.html
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8())
    }
}

impl Color for Rgba8 {
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
    fn alpha8(&self) -> u8 { self.a }
}

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    pub fn red() -> Self {
        Self::new(255,0,0)
    }
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8())
    }
    pub fn from_slice(v: &[u8]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Color for Rgb8 {
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
    fn alpha8(&self) -> u8 { 255 }
}

/// Gray scale
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Gray8 {
    pub value: u8,
}

impl Gray8 {
    /// Create a new gray scale value
    pub fn new(value: u8) -> Self {
        Gray8 { value }
    }
    /// Convert any [Color] to gray scale
    ///
    /// Uses the fixed point luminance weights (77, 150, 29) / 256
    ///
    ///     use wireframe::{Gray8,Rgb8};
    ///     assert_eq!(Gray8::from_trait(Rgb8::white()), Gray8::new(255));
    ///     assert_eq!(Gray8::from_trait(Rgb8::black()), Gray8::new(0));
    ///     assert_eq!(Gray8::from_trait(Rgb8::red()),   Gray8::new(76));
    ///
    /// [Color]: ../trait.Color.html
    pub fn from_trait<C: Color>(c: C) -> Self {
        let (r,g,b) = (u32::from(c.red8()), u32::from(c.green8()), u32::from(c.blue8()));
        Self::new(((r * 77 + g * 150 + b * 29) >> 8) as u8)
    }
}

impl Color for Gray8 {
    fn red8(&self) -> u8   { self.value }
    fn green8(&self) -> u8 { self.value }
    fn blue8(&self) -> u8  { self.value }
    fn alpha8(&self) -> u8 { 255 }
}

impl From<Rgba8> for Rgb8 {
    fn from(c: Rgba8) -> Rgb8 {
        Rgb8::new( c.r, c.g, c.b )
    }
}
impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}
