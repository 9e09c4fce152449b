//! CPU-side geometry for the card box, star spheres and glow quad.

use bytemuck::{Pod, Zeroable};
use holocard_scene::{FaceSlot, StarfieldParams};
use std::f32::consts::PI;

/// Vertex of the lit card mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CardVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    /// Index into the card material slots (see `FaceSlot::index`).
    pub material: u32,
}

/// Vertex of unlit meshes (stars, glow).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SimpleVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Box of the given size centered at the origin, faces in `+X, -X, +Y, -Y, +Z, -Z` order.
///
/// UV (0, 0) is the top-left of each face as seen from outside, so images
/// appear upright on the front.
pub fn card_box(width: f32, height: f32, depth: f32) -> (Vec<CardVertex>, Vec<u16>) {
    let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);

    // Each face: normal, then corners top-left, top-right, bottom-right, bottom-left.
    #[rustfmt::skip]
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([ 1.0, 0.0, 0.0], [[ x,  y,  z], [ x,  y, -z], [ x, -y, -z], [ x, -y,  z]]),
        ([-1.0, 0.0, 0.0], [[-x,  y, -z], [-x,  y,  z], [-x, -y,  z], [-x, -y, -z]]),
        ([ 0.0, 1.0, 0.0], [[-x,  y, -z], [ x,  y, -z], [ x,  y,  z], [-x,  y,  z]]),
        ([ 0.0,-1.0, 0.0], [[-x, -y,  z], [ x, -y,  z], [ x, -y, -z], [-x, -y, -z]]),
        ([ 0.0, 0.0, 1.0], [[-x,  y,  z], [ x,  y,  z], [ x, -y,  z], [-x, -y,  z]]),
        ([ 0.0, 0.0,-1.0], [[ x,  y, -z], [-x,  y, -z], [-x, -y, -z], [ x, -y, -z]]),
    ];
    const CORNER_UV: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face, (normal, corners)) in faces.iter().enumerate() {
        let base = vertices.len() as u16;
        let material = FaceSlot::BOX_FACES[face].index();
        for (corner, uv) in corners.iter().zip(CORNER_UV) {
            vertices.push(CardVertex {
                position: *corner,
                normal: *normal,
                uv,
                material,
            });
        }
        // counter-clockwise seen from outside
        indices.extend_from_slice(&[base, base + 3, base + 2, base + 2, base + 1, base]);
    }
    (vertices, indices)
}

/// UV sphere with `width_segments` around and `height_segments` pole to pole.
///
/// Segment counts are clamped to [`StarfieldParams::MAX_SEGMENTS`] so every
/// vertex stays addressable by a `u16` index.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> (Vec<SimpleVertex>, Vec<u16>) {
    let w = width_segments.clamp(3, StarfieldParams::MAX_SEGMENTS);
    let h = height_segments.clamp(2, StarfieldParams::MAX_SEGMENTS);

    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let polar = v * PI;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let azimuth = u * 2.0 * PI;
            vertices.push(SimpleVertex {
                position: [
                    -radius * azimuth.cos() * polar.sin(),
                    radius * polar.cos(),
                    radius * azimuth.sin() * polar.sin(),
                ],
                uv: [u, v],
            });
        }
    }

    let row = w + 1;
    let mut indices = Vec::new();
    for iy in 0..h {
        for ix in 0..w {
            let a = (iy * row + ix + 1) as u16;
            let b = (iy * row + ix) as u16;
            let c = ((iy + 1) * row + ix) as u16;
            let d = ((iy + 1) * row + ix + 1) as u16;
            // the pole rows collapse to a single triangle
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    (vertices, indices)
}

/// Quad in the XY plane facing +Z.
pub fn plane(width: f32, height: f32) -> (Vec<SimpleVertex>, Vec<u16>) {
    let (x, y) = (width / 2.0, height / 2.0);
    let vertices = vec![
        SimpleVertex { position: [-x, y, 0.0], uv: [0.0, 0.0] },
        SimpleVertex { position: [x, y, 0.0], uv: [1.0, 0.0] },
        SimpleVertex { position: [x, -y, 0.0], uv: [1.0, 1.0] },
        SimpleVertex { position: [-x, -y, 0.0], uv: [0.0, 1.0] },
    ];
    (vertices, vec![0, 3, 2, 2, 1, 0])
}
