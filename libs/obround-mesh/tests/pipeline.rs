//! End-to-end kernel checks through the public API.

use approx::assert_relative_eq;
use glam::DVec3;
use obround_mesh::{
    clean, create_box, difference, linear_extrude, union, union_all, write_stl, Mesh, Profile2D,
    Tessellation,
};

fn bar(width: f64, height: f64, length: f64, tess: &Tessellation) -> Mesh {
    linear_extrude(&Profile2D::obround(width, height, tess).unwrap(), length).unwrap()
}

fn pad_at(center: DVec3) -> Mesh {
    let mut pad = create_box(DVec3::new(1.3, 0.7, 1.3), true).unwrap();
    pad.translate(center);
    pad
}

#[test]
fn shell_with_pads_conserves_volume() {
    let tess = Tessellation::default();
    let outer = bar(24.0, 8.0, 25.0, &tess);
    let inner = bar(22.8, 6.8, 25.0, &tess);
    let shell = difference(&outer, &inner).unwrap();

    let pads = union_all(&[
        pad_at(DVec3::new(-4.0, -3.2, 8.0)),
        pad_at(DVec3::new(0.0, -3.2, 12.0)),
        pad_at(DVec3::new(4.0, 3.2, 16.0)),
    ])
    .unwrap();

    let metal = clean(&union(&shell, &pads).unwrap());
    let fluid = clean(&difference(&inner, &pads).unwrap());

    let protrusion = 3.0 * 1.3 * 1.3 * 0.55;
    assert_relative_eq!(metal.volume(), shell.volume() + protrusion, epsilon = 1e-6);
    assert_relative_eq!(fluid.volume() + protrusion, inner.volume(), epsilon = 1e-6);
    assert!(metal.validate().is_ok());
    assert!(fluid.validate().is_ok());
}

#[test]
fn exported_files_match_facet_counts() {
    let tess = Tessellation::new(0.1, 0.3).unwrap();
    let shell = clean(
        &difference(&bar(24.0, 8.0, 10.0, &tess), &bar(22.8, 6.8, 10.0, &tess)).unwrap(),
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shell.stl");
    let written = write_stl(&shell, &path).unwrap();

    assert_eq!(written, shell.triangle_count());
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 84 + 50 * written);
}
