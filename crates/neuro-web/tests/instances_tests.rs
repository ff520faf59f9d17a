// Host-side tests for instance packing.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod instances {
    include!("../src/render/instances.rs");
}

use glam::{Mat4, Vec3, Vec4};
use instances::*;
use neuro_core::{glow_for, BrainSignals, Particle, SphereVisual};

fn col(m: &[[f32; 4]; 4], i: usize) -> Vec4 {
    Vec4::from(m[i])
}

#[test]
fn layout_is_sphere_glow_particles() {
    let sphere = SphereVisual {
        position: Vec3::new(1.0, 2.0, 0.0),
        ..SphereVisual::default()
    };
    let signals = BrainSignals {
        stress: 100.0,
        ..BrainSignals::default()
    };
    let glow = glow_for(&sphere, &signals, 0.0);
    let particles = [
        Particle {
            position: Vec3::new(0.5, 0.0, 0.0),
            velocity: Vec3::ZERO,
            opacity: 0.25,
        },
        Particle {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            opacity: 1.0,
        },
    ];
    let mut out = Vec::new();
    pack_instances(&sphere, &glow, &particles, &mut out);
    assert_eq!(out.len(), 4);

    let s = &out[SPHERE_SLOT as usize];
    assert_eq!(s.params[0], 1.0);
    assert_eq!(s.color[3], 1.0);
    assert_eq!(col(&s.model, 3), Vec4::new(1.0, 2.0, 0.0, 1.0));

    let g = &out[GLOW_SLOT as usize];
    assert_eq!(g.params[0], 0.0);
    assert!((g.color[3] - 1.0).abs() < 1e-6);
    assert_eq!(col(&g.model, 3).truncate(), sphere.position);

    let p = &out[FIRST_PARTICLE_SLOT as usize];
    assert_eq!(p.color, [1.0, 0.5, 0.0, 0.25]);
    assert!((col(&p.model, 0).x - 0.05).abs() < 1e-6);
    assert_eq!(col(&p.model, 3), Vec4::new(0.5, 0.0, 0.0, 1.0));
}

#[test]
fn repacking_reuses_the_buffer() {
    let sphere = SphereVisual::default();
    let glow = glow_for(&sphere, &BrainSignals::default(), 1.0);
    let mut out = Vec::new();
    pack_instances(&sphere, &glow, &[], &mut out);
    pack_instances(&sphere, &glow, &[], &mut out);
    assert_eq!(out.len(), 2);
    assert_eq!(Mat4::from_cols_array_2d(&out[0].model), sphere.model_matrix());
}

#[test]
fn instance_stride_matches_shader_layout() {
    // model (4 x vec4) + color + params
    assert_eq!(std::mem::size_of::<InstanceData>(), 6 * 16);
}
