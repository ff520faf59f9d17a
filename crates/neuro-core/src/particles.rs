use crate::constants::{
    MAX_PARTICLES, PARTICLE_JITTER, PARTICLE_SPEED, PARTICLE_STRESS_PER_EMIT,
    PARTICLE_STRESS_THRESHOLD, SIGNAL_MAX,
};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// World units per frame.
    pub velocity: Vec3,
    pub opacity: f32,
}

/// Particles emitted per frame at `stress`. Zero at or below the threshold.
#[inline]
pub fn emission_count(stress: f32) -> usize {
    if stress > PARTICLE_STRESS_THRESHOLD {
        (stress / PARTICLE_STRESS_PER_EMIT).floor() as usize
    } else {
        0
    }
}

fn centered<R: Rng + ?Sized>(rng: &mut R, spread: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * spread,
    )
}

/// Transient particle set owned by the frame loop.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    capacity: usize,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::with_capacity(MAX_PARTICLES)
    }
}

impl ParticleField {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn `emission_count(stress)` particles around `center`. Returns how
    /// many were spawned. Oldest particles are dropped past capacity.
    pub fn emit<R: Rng + ?Sized>(&mut self, center: Vec3, stress: f32, rng: &mut R) -> usize {
        let n = emission_count(stress);
        for _ in 0..n {
            self.particles.push(Particle {
                position: center + centered(rng, PARTICLE_JITTER),
                velocity: centered(rng, PARTICLE_SPEED),
                opacity: 1.0,
            });
        }
        if self.particles.len() > self.capacity {
            let excess = self.particles.len() - self.capacity;
            self.particles.drain(..excess);
        }
        n
    }

    /// Move every particle by its velocity and fade it by `dt * stress/100`.
    /// Faded-out particles are removed.
    pub fn advance(&mut self, dt_sec: f32, stress: f32) {
        let fade = dt_sec.max(0.0) * (stress / SIGNAL_MAX);
        for p in &mut self.particles {
            p.position += p.velocity;
            p.opacity -= fade;
        }
        self.particles.retain(|p| p.opacity > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
