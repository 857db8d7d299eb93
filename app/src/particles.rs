//! Background specks of the hero section. Purely cosmetic, nothing reads them back.

use rand::Rng;
use std::ops::Range;

pub const PARTICLE_COUNT: usize = 50;

const SIZE_PX: Range<f64> = 1.0..4.0;
const POSITION_PCT: Range<f64> = 0.0..100.0;
const DURATION_S: Range<f64> = 10.0..20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub duration_s: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size_px: rng.random_range(SIZE_PX),
            top_pct: rng.random_range(POSITION_PCT),
            left_pct: rng.random_range(POSITION_PCT),
            duration_s: rng.random_range(DURATION_S),
        }
    }

    /// Inline style for the particle's `<div>`, the `float` keyframes live in `main.scss`.
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; top: {top}%; left: {left}%; animation: float {duration}s linear infinite",
            size = self.size_px,
            top = self.top_pct,
            left = self.left_pct,
            duration = self.duration_s,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField(Vec<Particle>);

impl ParticleField {
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let particles: Vec<Particle> = (0..count).map(|_| Particle::random(rng)).collect();
        log::trace!("generated {} background particles", particles.len());
        Self(particles)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::generate(&mut rng, PARTICLE_COUNT);
        assert_eq!(PARTICLE_COUNT, field.particles().len());
        for p in field.particles() {
            assert!(SIZE_PX.contains(&p.size_px), "{p:?}");
            assert!(POSITION_PCT.contains(&p.top_pct), "{p:?}");
            assert!(POSITION_PCT.contains(&p.left_pct), "{p:?}");
            assert!(DURATION_S.contains(&p.duration_s), "{p:?}");
        }
    }

    #[test]
    fn same_seed_same_field() {
        let lhs = ParticleField::generate(&mut StdRng::seed_from_u64(42), PARTICLE_COUNT);
        let rhs = ParticleField::generate(&mut StdRng::seed_from_u64(42), PARTICLE_COUNT);
        assert_eq!(lhs, rhs);
        let other = ParticleField::generate(&mut StdRng::seed_from_u64(43), PARTICLE_COUNT);
        assert_ne!(lhs, other);
    }

    #[test]
    fn style_loops_the_float_animation() {
        let particle = Particle {
            size_px: 2.5,
            top_pct: 10.0,
            left_pct: 90.0,
            duration_s: 12.0,
        };
        assert_eq!(
            "width: 2.5px; height: 2.5px; top: 10%; left: 90%; animation: float 12s linear infinite",
            particle.style()
        );
    }
}
