//! Aliased line drawing
//!
//! Lines are drawn with [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
//!   using only integer arithmetic. One pixel is produced for every step
//!   along the longer axis, so lines have no gaps at any slope, and
//!   swapping the end points produces the same pixels.

use crate::Color;
use crate::Pixel;

use std::convert::TryFrom;
use std::iter::FusedIterator;

/// Integer pixel location
///
/// May lie outside of a surface
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl From<(i64,i64)> for Point {
    fn from((x,y): (i64,i64)) -> Self {
        Point::new(x, y)
    }
}

/// Pixels of a line between two points
///
/// Pixels are returned in increasing order along the longer axis,
///   `max(|dx|,|dy|) + 1` in total
///
///     use wireframe::{Bresenham,Point};
///
///     let pts : Vec<_> = Bresenham::new(Point::new(0,0), Point::new(1,5))
///         .map(|p| (p.x, p.y))
///         .collect();
///     assert_eq!(pts, vec![(0,0),(0,1),(0,2),(1,3),(1,4),(1,5)]);
///
#[derive(Debug,Clone)]
pub struct Bresenham {
    /// Position along the longer (primary) axis
    x: i64,
    /// Position along the shorter (secondary) axis
    y: i64,
    /// Direction of the secondary axis, +1 or -1
    ystep: i64,
    /// Extent of the primary axis
    dx: i128,
    /// 2 * |dy|
    derror2: i128,
    /// Running error, scaled by 2 * dx
    error2: i128,
    /// Primary axis is y; pixels are de-transposed on output
    steep: bool,
    remaining: u128,
}

impl Bresenham {
    /// Create a new line from `p0` to `p1`
    ///
    /// Any pair of points is accepted; extents are computed without overflow
    pub fn new(p0: Point, p1: Point) -> Self {
        let (x0, y0, x1, y1) = (p0.x, p0.y, p1.x, p1.y);
        let steep = x0.abs_diff(x1) < y0.abs_diff(y1);
        let (x0,y0,x1,y1) = if steep { (y0,x0,y1,x1) } else { (x0,y0,x1,y1) };
        // Always walk left to right
        let (x0,y0,x1,y1) = if x0 > x1 { (x1,y1,x0,y0) } else { (x0,y0,x1,y1) };
        let dx = x1.abs_diff(x0);
        let dy = y1.abs_diff(y0);
        Bresenham {
            x: x0,
            y: y0,
            ystep: if y1 > y0 { 1 } else { -1 },
            dx: i128::from(dx),
            derror2: i128::from(dy) * 2,
            error2: 0,
            steep,
            remaining: u128::from(dx) + 1,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Point;
    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = if self.steep {
            Point::new(self.y, self.x)
        } else {
            Point::new(self.x, self.y)
        };
        if self.remaining > 0 {
            self.error2 += self.derror2;
            if self.error2 > self.dx {
                self.y += self.ystep;
                self.error2 -= self.dx * 2;
            }
            self.x += 1;
        }
        Some(p)
    }
    /// Saturates at `usize::MAX` for lines longer than the address space
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bresenham {}
impl FusedIterator for Bresenham {}

/// Draw a line from `p0` to `p1` of color `c`
///
/// Pixels outside of `pix` are ignored by [Pixel::copy_pixel]
///
/// [Pixel::copy_pixel]: ../trait.Pixel.html#method.copy_pixel
pub fn draw_line<P: Pixel, C: Color>(p0: Point, p1: Point, pix: &mut P, c: C) {
    for p in Bresenham::new(p0, p1) {
        pix.copy_pixel(p.x, p.y, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pixfmt, Rgb8, Rgba8, Source};
    use std::collections::BTreeSet;

    fn line(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64,i64)> {
        Bresenham::new(Point::new(x0,y0), Point::new(x1,y1))
            .map(|p| (p.x, p.y))
            .collect()
    }
    fn pixels(x0: i64, y0: i64, x1: i64, y1: i64) -> BTreeSet<(i64,i64)> {
        line(x0,y0,x1,y1).into_iter().collect()
    }

    fn endpoints() -> Vec<(i64,i64,i64,i64)> {
        let mut v = vec![];
        for &(x1,y1) in &[(7,3),(3,7),(-3,7),(-7,3),(-7,-3),(-3,-7),(3,-7),(7,-3),
                          (5,5),(-5,5),(0,6),(6,0),(0,-6),(-6,0),(0,0),(1,5),(13,-2)] {
            v.push((0,0,x1,y1));
            v.push((-4,9,x1-4,y1+9));
        }
        v
    }

    #[test]
    fn symmetry() {
        for (x0,y0,x1,y1) in endpoints() {
            assert_eq!(pixels(x0,y0,x1,y1), pixels(x1,y1,x0,y0),
                       "({},{}) - ({},{})", x0,y0,x1,y1);
        }
    }

    #[test]
    fn connectivity() {
        for (x0,y0,x1,y1) in endpoints() {
            let pts = line(x0,y0,x1,y1);
            for w in pts.windows(2) {
                assert!((w[0].0 - w[1].0).abs() <= 1);
                assert!((w[0].1 - w[1].1).abs() <= 1);
                assert_ne!(w[0], w[1]);
            }
            let ends : BTreeSet<_> = [pts[0], pts[pts.len()-1]].iter().cloned().collect();
            let want : BTreeSet<_> = [(x0,y0), (x1,y1)].iter().cloned().collect();
            assert_eq!(ends, want);
        }
    }

    #[test]
    fn count() {
        for (x0,y0,x1,y1) in endpoints() {
            let n = std::cmp::max((x1-x0).abs(), (y1-y0).abs()) as usize + 1;
            let it = Bresenham::new(Point::new(x0,y0), Point::new(x1,y1));
            assert_eq!(it.len(), n);
            assert_eq!(it.count(), n);
            assert_eq!(pixels(x0,y0,x1,y1).len(), n);
        }
    }

    #[test]
    fn degenerate() {
        assert_eq!(line(5,5,5,5), vec![(5,5)]);
        let mut pix = Pixfmt::<Rgb8>::new(10,10);
        draw_line(Point::new(5,5), Point::new(5,5), &mut pix, Rgb8::red());
        for x in 0 .. 10 {
            for y in 0 .. 10 {
                let want = if (x,y) == (5,5) { Rgba8::red() } else { Rgba8::black() };
                assert_eq!(pix.get((x,y)), want);
            }
        }
    }

    #[test]
    fn horizontal() {
        assert_eq!(line(0,0,4,0), vec![(0,0),(1,0),(2,0),(3,0),(4,0)]);
        assert_eq!(line(0,0,0,4), vec![(0,0),(0,1),(0,2),(0,3),(0,4)]);
        let mut pix = Pixfmt::<Rgb8>::new(6,2);
        draw_line(Point::new(0,0), Point::new(4,0), &mut pix, Rgb8::white());
        for x in 0 .. 6 {
            for y in 0 .. 2 {
                let want = if y == 0 && x <= 4 { Rgba8::white() } else { Rgba8::black() };
                assert_eq!(pix.get((x,y)), want);
            }
        }
    }

    #[test]
    fn steep_line_exactness() {
        let pts = line(0,0,1,5);
        assert_eq!(pts.len(), 6);
        let ys : Vec<_> = pts.iter().map(|p| p.1).collect();
        let xs : Vec<_> = pts.iter().map(|p| p.0).collect();
        assert_eq!(ys, vec![0,1,2,3,4,5]);
        assert_eq!(xs, vec![0,0,0,1,1,1]);
    }

    #[test]
    fn negative_direction() {
        assert_eq!(pixels(4,4,0,0), pixels(0,0,4,4));
        assert_eq!(line(0,0,4,4), vec![(0,0),(1,1),(2,2),(3,3),(4,4)]);
    }

    #[test]
    fn shallow_negative_slope() {
        assert_eq!(line(0,0,4,-2), vec![(0,0),(1,0),(2,-1),(3,-1),(4,-2)]);
    }

    #[test]
    fn nearest_pixel() {
        // Every pixel is within half a pixel of the true line
        for (x0,y0,x1,y1) in endpoints() {
            let steep = (y1-y0).abs() > (x1-x0).abs();
            for (x,y) in line(x0,y0,x1,y1) {
                let (t, s, t0, s0, dt, ds) = if steep {
                    (y, x, y0, x0, y1-y0, x1-x0)
                } else {
                    (x, y, x0, y0, x1-x0, y1-y0)
                };
                if dt == 0 {
                    continue;
                }
                // |s - (s0 + (t-t0) * ds/dt)| <= 1/2
                let err = (s - s0) * dt - (t - t0) * ds;
                assert!(2 * err.abs() <= dt.abs(), "({},{}) on ({},{})-({},{})", x,y,x0,y0,x1,y1);
            }
        }
    }

    #[test]
    fn extreme_end_points() {
        let a = Point::new(i64::MIN, 0);
        let b = Point::new(i64::MAX, 0);
        let mut it = Bresenham::new(a, b);
        assert_eq!(it.len(), usize::MAX);
        assert_eq!(it.next(), Some(a));
        assert_eq!(it.next(), Some(Point::new(i64::MIN + 1, 0)));

        let mut it = Bresenham::new(b, a);
        assert_eq!(it.next(), Some(a));

        let c = Point::new(i64::MAX, i64::MIN);
        let d = Point::new(i64::MIN, i64::MAX);
        let mut it = Bresenham::new(c, d);
        assert_eq!(it.next(), Some(d));
        assert_eq!(it.next(), Some(Point::new(i64::MIN + 1, i64::MAX - 1)));

        // Steep line spanning the whole range
        let e = Point::new(3, i64::MAX);
        let f = Point::new(-3, i64::MIN);
        let mut it = Bresenham::new(e, f);
        assert_eq!(it.next(), Some(f));
        assert_eq!(it.next(), Some(Point::new(-3, i64::MIN + 1)));
    }

    #[test]
    fn extreme_end_points_short() {
        let pts = line(i64::MAX - 2, i64::MIN, i64::MAX, i64::MIN + 1);
        assert_eq!(pts, vec![(i64::MAX - 2, i64::MIN), (i64::MAX - 1, i64::MIN),
                             (i64::MAX, i64::MIN + 1)]);
    }

    #[test]
    fn draw_line_clips_to_surface() {
        let mut pix = Pixfmt::<Rgb8>::new(4,4);
        draw_line(Point::new(-2,-2), Point::new(6,6), &mut pix, Rgb8::white());
        for i in 0 .. 4 {
            assert_eq!(pix.get((i,i)), Rgba8::white());
        }
        assert_eq!(pix.get((1,0)), Rgba8::black());
    }
}
