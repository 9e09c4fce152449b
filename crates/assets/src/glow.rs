//! Radial gradient texture for the glow behind the card.
//!
//! Follows 2D canvas radial gradient rules for two concentric circles:
//! inside the inner circle the first stop is used, beyond the outer circle
//! the last one, and colors between stops are blended with premultiplied alpha.

use holocard_common::ColorStop;

use crate::AssetError;
use crate::texture::{ColorSpace, TextureAsset};

/// Render a `size`x`size` radial gradient centered in the texture.
///
/// Both radii are fractions of `size`; an outer radius of `0.5` reaches the
/// middle of each edge.
pub fn radial_gradient(
    size: u32,
    inner_radius: f32,
    outer_radius: f32,
    stops: &[ColorStop],
) -> Result<TextureAsset, AssetError> {
    let mut stops = stops.to_vec();
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    let center = size as f32 / 2.0;
    let r0 = size as f32 * inner_radius;
    let r1 = size as f32 * outer_radius;
    let span = (r1 - r0).max(f32::EPSILON);

    let mut rgba = Vec::with_capacity(size as usize * size as usize * 4);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let d = (dx * dx + dy * dy).sqrt();
            let t = ((d - r0) / span).clamp(0.0, 1.0);
            rgba.extend_from_slice(&sample(&stops, t));
        }
    }

    tracing::debug!(size, stops = stops.len(), "rendered glow gradient");
    TextureAsset::from_rgba("glow", size, size, ColorSpace::Srgb, rgba)
}

/// Color of the gradient at `t`, as straight-alpha RGBA8.
fn sample(stops: &[ColorStop], t: f32) -> [u8; 4] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0, 0, 0, 0];
    };
    if t <= first.offset {
        return straight(premultiply(first));
    }
    if t >= last.offset {
        return straight(premultiply(last));
    }

    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t >= a.offset && t <= b.offset {
            let w = if b.offset > a.offset {
                (t - a.offset) / (b.offset - a.offset)
            } else {
                1.0
            };
            let pa = premultiply(a);
            let pb = premultiply(b);
            let mut mixed = [0.0f32; 4];
            for i in 0..4 {
                mixed[i] = pa[i] + (pb[i] - pa[i]) * w;
            }
            return straight(mixed);
        }
    }
    straight(premultiply(last))
}

fn premultiply(stop: &ColorStop) -> [f32; 4] {
    let c = stop.color;
    let a = c.a.clamp(0.0, 1.0);
    [
        c.r as f32 / 255.0 * a,
        c.g as f32 / 255.0 * a,
        c.b as f32 / 255.0 * a,
        a,
    ]
}

fn straight(pm: [f32; 4]) -> [u8; 4] {
    let a = pm[3];
    if a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [to_u8(pm[0] / a), to_u8(pm[1] / a), to_u8(pm[2] / a), to_u8(a)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocard_common::Rgb;

    fn violet_stops() -> Vec<ColorStop> {
        let violet = Rgb::from_hex(0x8b5cf6);
        vec![
            ColorStop::new(0.0, violet.with_alpha(0.9)),
            ColorStop::new(0.35, violet.with_alpha(0.25)),
            ColorStop::new(1.0, Rgb::BLACK.with_alpha(0.0)),
        ]
    }

    #[test]
    fn center_is_the_first_stop() {
        let tex = radial_gradient(64, 0.05, 0.5, &violet_stops()).unwrap();
        let px = tex.texel(32, 32).unwrap();
        assert_eq!(&px[..3], &[139, 92, 246]);
        assert_eq!(px[3], (0.9f32 * 255.0).round() as u8);
    }

    #[test]
    fn corners_are_transparent() {
        let tex = radial_gradient(64, 0.05, 0.5, &violet_stops()).unwrap();
        assert_eq!(tex.texel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(tex.texel(63, 63), Some([0, 0, 0, 0]));
    }

    #[test]
    fn fading_keeps_hue_with_premultiplied_blend() {
        let stops = violet_stops();
        // halfway between the halo stop and the transparent edge
        let px = sample(&stops, 0.675);
        assert_eq!(&px[..3], &[139, 92, 246]);
        assert!(px[3] > 0 && px[3] < 64);
    }

    #[test]
    fn alpha_decreases_outward() {
        let tex = radial_gradient(128, 0.05, 0.5, &violet_stops()).unwrap();
        let alphas: Vec<u8> = (64..128).map(|x| tex.texel(x, 64).unwrap()[3]).collect();
        assert!(alphas.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn smaller_outer_radius_fades_sooner() {
        let full = radial_gradient(64, 0.05, 0.5, &violet_stops()).unwrap();
        let tight = radial_gradient(64, 0.05, 0.25, &violet_stops()).unwrap();
        // 20 px from the center: inside the full glow, past the tight one
        assert!(full.texel(52, 32).unwrap()[3] > 0);
        assert_eq!(tight.texel(52, 32), Some([0, 0, 0, 0]));
    }

    #[test]
    fn no_stops_is_transparent() {
        let tex = radial_gradient(4, 0.05, 0.5, &[]).unwrap();
        assert!(tex.rgba.iter().all(|b| *b == 0));
    }
}
