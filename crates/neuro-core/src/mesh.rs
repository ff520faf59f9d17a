use bytemuck::{Pod, Zeroable};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Unit UV sphere with `segments` around and `rings` from pole to pole.
pub struct SphereMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl SphereMesh {
    pub fn new(segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);
        let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        for r in 0..=rings {
            let v = r as f32 / rings as f32;
            let theta = v * PI;
            let (st, ct) = theta.sin_cos();
            for s in 0..=segments {
                let u = s as f32 / segments as f32;
                let phi = u * TAU;
                let (sp, cp) = phi.sin_cos();
                let n = [st * cp, ct, st * sp];
                vertices.push(MeshVertex {
                    position: n,
                    normal: n,
                });
            }
        }
        // Counter-clockwise when seen from outside.
        let stride = segments + 1;
        let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
        for r in 0..rings {
            for s in 0..segments {
                let a = (r * stride + s) as u16;
                let b = (r * stride + s + 1) as u16;
                let c = ((r + 1) * stride + s) as u16;
                let d = ((r + 1) * stride + s + 1) as u16;
                if r != 0 {
                    indices.extend_from_slice(&[a, b, c]);
                }
                if r != rings - 1 {
                    indices.extend_from_slice(&[b, d, c]);
                }
            }
        }
        Self { vertices, indices }
    }
}
