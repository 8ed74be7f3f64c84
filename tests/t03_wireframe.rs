
extern crate wireframe;
use wireframe::{Error, Model, Rgb8, Wireframe};

use std::path::PathBuf;

fn tmp(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

const TETRA : &str = "\
# tetrahedron
v -0.5 -0.5 0.0
v  0.5 -0.5 0.0
v  0.0  0.5 0.0
v  0.0  0.0 0.5
f 1 2 3
f 1 2 4
f 2 3 4
f 3 1 4
";

#[test]
fn t03_render_to_tga() {
    let obj = tmp("wireframe_test_03.obj");
    std::fs::write(&obj, TETRA).unwrap();
    let model = Model::load(&obj).unwrap();
    assert_eq!(model.nverts(), 4);
    assert_eq!(model.nfaces(), 4);

    let out = tmp("wireframe_test_03.tga");
    let wire = Wireframe::new(100, 100);
    wire.render_to_file(&model, &out).unwrap();

    let (data, w, h) = wireframe::tga::read_file(&out).unwrap();
    assert_eq!((w,h), (100,100));
    let at = |x: usize, y: usize| {
        // Image is stored flipped: model y = 0 is the bottom row
        let i = ((h - 1 - y) * w + x) * 4;
        [data[i], data[i+1], data[i+2]]
    };
    // Vertices project to (25,25) (75,25) (50,75) (50,50)
    for &(x,y) in [(25,25),(75,25),(50,75),(50,50)].iter() {
        assert_eq!(at(x,y), [255,255,255], "({},{})", x, y);
    }
    // Bottom edge
    for x in 25 ..= 75 {
        assert_eq!(at(x,25), [255,255,255]);
    }
    assert_eq!(at(0,0), [0,0,0]);
    assert_eq!(at(50,30), [0,0,0]);
    // Top row in file order is black
    assert!(data[..w*4].chunks(4).all(|p| p[..3] == [0,0,0]));
}

#[test]
fn t03_colored_edges() {
    let model = Model::from_buf(&mut TETRA.as_bytes()).unwrap();
    let mut pix = wireframe::Pixfmt::<Rgb8>::new(100, 100);
    let n = Wireframe::new(100, 100).color(Rgb8::red()).render(&model, &mut pix);
    assert_eq!(n, 12);
    assert_eq!(pix.raw((50,50)), Rgb8::red());
}

#[test]
fn t03_missing_model() {
    let err = Model::load(tmp("wireframe_missing_model.obj")).unwrap_err();
    assert!(matches!(err, Error::Model { .. }));
    assert!(err.to_string().contains("wireframe_missing_model.obj"));
}
