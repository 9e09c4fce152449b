/// Per-frame camera and light block shared by all pipelines (group 0).
const FRAME_BLOCK: &str = r#"
struct Frame {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    // rgb = color * intensity
    ambient: vec4<f32>,
    // xyz = unit vector toward the light
    key_dir: vec4<f32>,
    key_color: vec4<f32>,
    // w = cutoff distance, 0 for unlimited
    rim_pos: vec4<f32>,
    // w = decay exponent
    rim_color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: Frame;
"#;

/// WGSL for the card: physically based faces lit by ambient, key and rim lights.
pub fn card_shader() -> String {
    format!("{FRAME_BLOCK}{CARD_BODY}")
}

/// WGSL for instanced unlit star spheres.
pub fn star_shader() -> String {
    format!("{FRAME_BLOCK}{STAR_BODY}")
}

/// WGSL for the alpha-blended glow quad.
pub fn glow_shader() -> String {
    format!("{FRAME_BLOCK}{GLOW_BODY}")
}

const CARD_BODY: &str = r#"
const PI: f32 = 3.141592653589793;
const MIN_ROUGHNESS: f32 = 0.0525;

struct Material {
    base_color: vec4<f32>,
    // metalness, roughness, clearcoat, reflectivity
    params: vec4<f32>,
    // x > 0.5: sample the card texture
    flags: vec4<f32>,
};

struct CardObject {
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    materials: array<Material, 3>,
};

@group(1) @binding(0)
var<uniform> object: CardObject;
@group(1) @binding(1)
var card_texture: texture_2d<f32>;
@group(1) @binding(2)
var card_sampler: sampler;

struct CardVertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) material: u32,
};

struct CardVertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) @interpolate(flat) material: u32,
};

@vertex
fn vs_card(vertex: CardVertexInput) -> CardVertexOutput {
    let world = object.model * vec4<f32>(vertex.position, 1.0);
    var out: CardVertexOutput;
    out.clip_position = frame.view_proj * world;
    out.world_pos = world.xyz;
    out.world_normal = normalize((object.normal_matrix * vec4<f32>(vertex.normal, 0.0)).xyz);
    out.uv = vertex.uv;
    out.material = vertex.material;
    return out;
}

fn d_ggx(n_dot_h: f32, alpha: f32) -> f32 {
    let a2 = alpha * alpha;
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    return a2 / (PI * denom * denom);
}

fn v_smith_correlated(n_dot_l: f32, n_dot_v: f32, alpha: f32) -> f32 {
    let a2 = alpha * alpha;
    let gv = n_dot_l * sqrt(n_dot_v * n_dot_v * (1.0 - a2) + a2);
    let gl = n_dot_v * sqrt(n_dot_l * n_dot_l * (1.0 - a2) + a2);
    return 0.5 / max(gv + gl, 1e-5);
}

fn f_schlick(f0: vec3<f32>, v_dot_h: f32) -> vec3<f32> {
    return f0 + (vec3<f32>(1.0) - f0) * pow(1.0 - v_dot_h, 5.0);
}

fn specular_ggx(n: vec3<f32>, v: vec3<f32>, l: vec3<f32>, f0: vec3<f32>, roughness: f32) -> vec3<f32> {
    let h = normalize(l + v);
    let n_dot_l = clamp(dot(n, l), 0.0, 1.0);
    let n_dot_v = clamp(dot(n, v), 1e-4, 1.0);
    let n_dot_h = clamp(dot(n, h), 0.0, 1.0);
    let v_dot_h = clamp(dot(v, h), 0.0, 1.0);
    let alpha = roughness * roughness;
    return f_schlick(f0, v_dot_h) * v_smith_correlated(n_dot_l, n_dot_v, alpha) * d_ggx(n_dot_h, alpha);
}

// Radiance reflected toward `v` from one light of color `radiance` arriving along `l`.
fn shade_light(
    n: vec3<f32>,
    v: vec3<f32>,
    l: vec3<f32>,
    radiance: vec3<f32>,
    diffuse_color: vec3<f32>,
    f0: vec3<f32>,
    roughness: f32,
    clearcoat: f32,
) -> vec3<f32> {
    let n_dot_l = clamp(dot(n, l), 0.0, 1.0);
    if (n_dot_l <= 0.0) {
        return vec3<f32>(0.0);
    }
    let irradiance = radiance * n_dot_l;
    let diffuse = irradiance * diffuse_color;
    let specular = irradiance * PI * specular_ggx(n, v, l, f0, roughness);

    let h = normalize(l + v);
    let coat_fresnel = f_schlick(vec3<f32>(0.04), clamp(dot(v, h), 0.0, 1.0)).x;
    let coat = irradiance * PI * clearcoat * specular_ggx(n, v, l, vec3<f32>(0.04), MIN_ROUGHNESS);
    return (diffuse + specular) * (1.0 - clearcoat * coat_fresnel) + coat;
}

@fragment
fn fs_card(in: CardVertexOutput) -> @location(0) vec4<f32> {
    let material = object.materials[in.material];
    var albedo = material.base_color.rgb;
    if (material.flags.x > 0.5) {
        albedo = albedo * textureSample(card_texture, card_sampler, in.uv).rgb;
    }

    let metalness = material.params.x;
    let roughness = max(material.params.y, MIN_ROUGHNESS);
    let clearcoat = material.params.z;
    let reflectivity = material.params.w;

    let diffuse_color = albedo * (1.0 - metalness);
    let f0 = mix(vec3<f32>(0.16 * reflectivity * reflectivity), albedo, metalness);

    let n = normalize(in.world_normal);
    let v = normalize(frame.camera_pos.xyz - in.world_pos);

    var color = frame.ambient.rgb * diffuse_color;

    color += shade_light(n, v, frame.key_dir.xyz, frame.key_color.rgb, diffuse_color, f0, roughness, clearcoat);

    let to_rim = frame.rim_pos.xyz - in.world_pos;
    let rim_distance = length(to_rim);
    var falloff = 1.0;
    if (frame.rim_pos.w > 0.0 && frame.rim_color.w > 0.0) {
        falloff = pow(clamp(1.0 - rim_distance / frame.rim_pos.w, 0.0, 1.0), frame.rim_color.w);
    }
    color += shade_light(n, v, to_rim / max(rim_distance, 1e-5), frame.rim_color.rgb * falloff, diffuse_color, f0, roughness, clearcoat);

    return vec4<f32>(color, 1.0);
}
"#;

const STAR_BODY: &str = r#"
struct Unlit {
    model: mat4x4<f32>,
    tint: vec4<f32>,
};

@group(1) @binding(0)
var<uniform> object: Unlit;

struct StarVertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct StarInstanceInput {
    @location(2) offset: vec4<f32>,
};

@vertex
fn vs_star(vertex: StarVertexInput, instance: StarInstanceInput) -> @builtin(position) vec4<f32> {
    let local = vertex.position + instance.offset.xyz;
    return frame.view_proj * object.model * vec4<f32>(local, 1.0);
}

@fragment
fn fs_star() -> @location(0) vec4<f32> {
    return object.tint;
}
"#;

const GLOW_BODY: &str = r#"
struct Unlit {
    model: mat4x4<f32>,
    tint: vec4<f32>,
};

@group(1) @binding(0)
var<uniform> object: Unlit;
@group(1) @binding(1)
var glow_texture: texture_2d<f32>;
@group(1) @binding(2)
var glow_sampler: sampler;

struct GlowVertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct GlowVertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_glow(vertex: GlowVertexInput) -> GlowVertexOutput {
    var out: GlowVertexOutput;
    out.clip_position = frame.view_proj * object.model * vec4<f32>(vertex.position, 1.0);
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_glow(in: GlowVertexOutput) -> @location(0) vec4<f32> {
    return textureSample(glow_texture, glow_sampler, in.uv) * object.tint;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shader_declares_its_entry_points() {
        let card = card_shader();
        assert!(card.contains("fn vs_card") && card.contains("fn fs_card"));
        let star = star_shader();
        assert!(star.contains("fn vs_star") && star.contains("fn fs_star"));
        let glow = glow_shader();
        assert!(glow.contains("fn vs_glow") && glow.contains("fn fs_glow"));
    }

    #[test]
    fn frame_block_is_shared() {
        for src in [card_shader(), star_shader(), glow_shader()] {
            assert_eq!(src.matches("struct Frame").count(), 1);
            assert!(src.contains("@group(0) @binding(0)"));
        }
    }
}
