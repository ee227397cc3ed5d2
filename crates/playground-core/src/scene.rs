//! Decorative particle scene.
//!
//! A field of randomly placed, randomly colored particles rotating slowly
//! around the origin, plus a central pulsing orb. Purely cosmetic: nothing
//! else reads this state. [`SceneState::step`] advances one animation frame
//! with fixed increments; [`SceneState::projected`] yields normalized 2D
//! points for whatever canvas the front end paints on.

use crate::theme::Rgb;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Scene rotation advance around the X axis per frame.
pub const ROT_X_STEP: f64 = 0.0005;
/// Scene rotation advance around the Y axis per frame.
pub const ROT_Y_STEP: f64 = 0.001;
/// Orb rotation advance per frame.
pub const ORB_ROT_STEP: f64 = 0.005;
/// Milliseconds of scene time per frame, feeding the orb pulse.
pub const STEP_MS: f64 = 50.0;

/// Particle coordinates are drawn uniformly from ±half this spread.
const PARTICLE_SPREAD: f64 = 20.0;
/// Camera distance from the origin.
const CAMERA_Z: f64 = 5.0;
/// Near plane; points closer than this are culled.
const NEAR: f64 = 0.5;
/// Focal factor for a 75 degree vertical field of view.
const FOCAL: f64 = 1.3032;
/// Orb sphere radius in scene units.
const ORB_RADIUS: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
struct Particle {
    pos: [f64; 3],
    color: Rgb,
}

/// A particle projected into normalized screen coordinates: both axes in
/// [-1, 1], origin at screen center, y growing upward.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedPoint {
    /// Horizontal normalized coordinate.
    pub x: f64,
    /// Vertical normalized coordinate.
    pub y: f64,
    /// Particle color.
    pub color: Rgb,
}

/// Central orb pose for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct Orb {
    /// Accumulated rotation angle in radians.
    pub rotation: f64,
    /// Pulse scale factor around 1.0.
    pub scale: f64,
    /// Projected radius in normalized screen units, pulse applied.
    pub radius: f64,
}

/// Animation state for the background scene.
#[derive(Debug, Clone)]
pub struct SceneState {
    particles: Vec<Particle>,
    rot_x: f64,
    rot_y: f64,
    orb_rot: f64,
    time_ms: f64,
}

impl SceneState {
    /// Create a scene with `count` particles, seeded from OS entropy.
    pub fn new(count: usize) -> Self {
        Self::from_rng(count, SmallRng::from_entropy())
    }

    /// Create a scene with a fixed seed for reproducible placement.
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::from_rng(count, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(count: usize, mut rng: SmallRng) -> Self {
        let half = PARTICLE_SPREAD / 2.0;
        let particles = (0..count)
            .map(|_| Particle {
                pos: [
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ],
                color: Rgb::new(
                    rng.gen_range(0..=u8::MAX),
                    rng.gen_range(0..=u8::MAX),
                    rng.gen_range(0..=u8::MAX),
                ),
            })
            .collect();
        Self {
            particles,
            rot_x: 0.0,
            rot_y: 0.0,
            orb_rot: 0.0,
            time_ms: 0.0,
        }
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        self.rot_x += ROT_X_STEP;
        self.rot_y += ROT_Y_STEP;
        self.orb_rot += ORB_ROT_STEP;
        self.time_ms += STEP_MS;
    }

    /// Number of particles in the field.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Current scene rotation angles (x, y) in radians.
    pub fn rotation(&self) -> (f64, f64) {
        (self.rot_x, self.rot_y)
    }

    /// Orb pulse factor: oscillates in [0.8, 1.2].
    pub fn pulse_scale(&self) -> f64 {
        1.0 + (self.time_ms * 0.002).sin() * 0.2
    }

    /// Current orb pose.
    pub fn orb(&self) -> Orb {
        let scale = self.pulse_scale();
        Orb {
            rotation: self.orb_rot,
            scale,
            radius: FOCAL * ORB_RADIUS * scale / CAMERA_Z,
        }
    }

    /// Project every particle through the scene rotation and a simple
    /// perspective camera, culling points behind the near plane or outside
    /// the normalized square.
    pub fn projected(&self) -> impl Iterator<Item = ProjectedPoint> + '_ {
        let (sin_x, cos_x) = self.rot_x.sin_cos();
        let (sin_y, cos_y) = self.rot_y.sin_cos();
        self.particles.iter().filter_map(move |particle| {
            let [x, y, z] = particle.pos;
            // rotate around X, then Y
            let (y1, z1) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);
            let (x2, z2) = (x * cos_y + z1 * sin_y, -x * sin_y + z1 * cos_y);
            let depth = CAMERA_Z - z2;
            if depth <= NEAR {
                return None;
            }
            let sx = FOCAL * x2 / depth;
            let sy = FOCAL * y1 / depth;
            if sx.abs() > 1.0 || sy.abs() > 1.0 {
                return None;
            }
            Some(ProjectedPoint {
                x: sx,
                y: sy,
                color: particle.color,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_advances_by_fixed_increments() {
        let mut scene = SceneState::with_seed(10, 1);
        for _ in 0..3 {
            scene.step();
        }
        let (rot_x, rot_y) = scene.rotation();
        assert!((rot_x - 3.0 * ROT_X_STEP).abs() < 1e-12);
        assert!((rot_y - 3.0 * ROT_Y_STEP).abs() < 1e-12);
    }

    #[test]
    fn pulse_stays_within_band() {
        let mut scene = SceneState::with_seed(0, 1);
        assert_eq!(scene.pulse_scale(), 1.0);
        for _ in 0..10_000 {
            scene.step();
            let scale = scene.pulse_scale();
            assert!((0.8..=1.2).contains(&scale), "scale {scale}");
        }
    }

    #[test]
    fn projection_stays_inside_the_normalized_square() {
        let mut scene = SceneState::with_seed(500, 7);
        for _ in 0..100 {
            scene.step();
        }
        let points: Vec<ProjectedPoint> = scene.projected().collect();
        assert!(!points.is_empty());
        assert!(points.len() <= scene.particle_count());
        for point in &points {
            assert!(point.x.abs() <= 1.0 && point.y.abs() <= 1.0);
        }
    }

    #[test]
    fn particle_colors_vary_across_the_field() {
        let scene = SceneState::with_seed(500, 7);
        let colors: Vec<Rgb> = scene.projected().map(|p| p.color).collect();
        assert!(colors.len() > 1);
        let first = colors[0];
        assert!(colors.iter().any(|c| *c != first));
    }

    #[test]
    fn seeded_scenes_project_identically() {
        let a = SceneState::with_seed(64, 42);
        let b = SceneState::with_seed(64, 42);
        for (pa, pb) in a.projected().zip(b.projected()) {
            assert_eq!(pa.x, pb.x);
            assert_eq!(pa.y, pb.y);
            assert_eq!(pa.color, pb.color);
        }
    }

    #[test]
    fn orb_radius_follows_the_pulse() {
        let mut scene = SceneState::with_seed(0, 1);
        let flat = scene.orb();
        assert!(flat.radius > 0.0);

        // Quarter period of the 0.002 rad/ms pulse: sin peaks at 1.
        while scene.orb().scale < 1.199 {
            scene.step();
        }
        let peak = scene.orb();
        assert!(peak.radius > flat.radius);
        assert!((peak.radius / peak.scale - flat.radius / flat.scale).abs() < 1e-12);
    }
}
