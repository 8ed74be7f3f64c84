//! Writing of TGA (Truevision) files
//!
//! See <https://en.wikipedia.org/wiki/Truevision_TGA>
//!
//! Images are written uncompressed; other file formats are handed to the
//!   [image](https://docs.rs/image) crate based on the file extension
//!
use crate::color::{Gray8, Rgb8, Rgba8};
use crate::pixfmt::Pixfmt;
use crate::Result;

use image::codecs::tga::TgaEncoder;
use image::ExtendedColorType;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

/// Layout of the pixel components as understood by the encoders
pub trait ColorType {
    fn color_type() -> ExtendedColorType;
}

impl ColorType for Pixfmt<Rgb8> {
    fn color_type() -> ExtendedColorType { ExtendedColorType::Rgb8 }
}
impl ColorType for Pixfmt<Rgba8> {
    fn color_type() -> ExtendedColorType { ExtendedColorType::Rgba8 }
}
impl ColorType for Pixfmt<Gray8> {
    fn color_type() -> ExtendedColorType { ExtendedColorType::L8 }
}

fn is_tga(filename: &Path) -> bool {
    filename.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("tga"))
        .unwrap_or(false)
}

/// Write raw pixel data `buf` to `filename`
///
/// Row 0 of `buf` becomes the top row of the stored image
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize,
                                  color_type: ExtendedColorType,
                                  filename: P) -> Result<()> {
    let filename = filename.as_ref();
    if is_tga(filename) {
        let out = BufWriter::new(File::create(filename)?);
        TgaEncoder::new(out)
            .disable_rle()
            .encode(buf, width as u32, height as u32, color_type)?;
    } else {
        image::save_buffer(filename, buf, width as u32, height as u32, color_type)?;
    }
    info!(path = %filename.display(), width, height, "wrote image");
    Ok(())
}

/// Read an image file as Rgba8 data, returns (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Compare two image files pixel by pixel
///
/// Differences are reported on stdout
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        println!("image sizes differ: {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i/4)%w1,(i/4)/w1,i%4, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
