// Per-instance data for the scene pass, packed from the core visual state.

use glam::{Mat4, Quat, Vec3};
use neuro_core::constants::{PARTICLE_COLOR, PARTICLE_RADIUS};
use neuro_core::{GlowVisual, Particle, SphereVisual};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// x = lit (1) or unlit (0)
    pub params: [f32; 4],
}

impl InstanceData {
    fn new(model: Mat4, color: Vec3, alpha: f32, lit: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color.x, color.y, color.z, alpha.clamp(0.0, 1.0)],
            params: [if lit { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

pub const SPHERE_SLOT: u32 = 0;
pub const GLOW_SLOT: u32 = 1;
pub const FIRST_PARTICLE_SLOT: u32 = 2;

/// Buffer layout: sphere, glow, then particles.
pub fn pack_instances(
    sphere: &SphereVisual,
    glow: &GlowVisual,
    particles: &[Particle],
    out: &mut Vec<InstanceData>,
) {
    out.clear();
    out.push(InstanceData::new(sphere.model_matrix(), sphere.color, 1.0, true));
    out.push(InstanceData::new(glow.model_matrix(), glow.color, glow.opacity, false));
    let color = Vec3::from(PARTICLE_COLOR);
    let scale = Vec3::splat(PARTICLE_RADIUS);
    out.extend(particles.iter().map(|p| {
        let model = Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, p.position);
        InstanceData::new(model, color, p.opacity, false)
    }));
}
