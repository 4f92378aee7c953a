//! Starfield Simulation
//!
//! Drifting particles plus the lines drawn between particles and the
//! pointer. Rendering lives in `components/starfield_canvas.rs`.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub max_particles: usize,
    /// Viewport area (px²) per particle
    pub area_per_particle: f64,
    /// Pointer link distance; particle links use half of it
    pub connection_radius: f64,
    /// Phase advance per frame for the opacity oscillation
    pub phase_step: f64,
    pub line_width: f64,
    pub max_radius: f64,
    pub max_speed: f64,
    pub min_opacity: f64,
    /// RGB of every connection line
    pub link_rgb: (u8, u8, u8),
    /// Opacity at the pointer end of a pointer link
    pub pointer_end_opacity: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 200,
            area_per_particle: 8000.0,
            connection_radius: 150.0,
            phase_step: 0.005,
            line_width: 0.8,
            max_radius: 1.5,
            max_speed: 0.2,
            min_opacity: 0.5,
            link_rgb: (147, 51, 234),
            pointer_end_opacity: 0.2,
        }
    }
}

impl StarfieldConfig {
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        let by_area = (width * height / self.area_per_particle).floor().max(0.0) as usize;
        by_area.min(self.max_particles)
    }

    pub fn link_color(&self, opacity: f64) -> String {
        let (r, g, b) = self.link_rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, opacity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Downward drift per frame
    pub speed: f64,
    pub opacity: f64,
}

/// Gradient line from a particle to the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerLink {
    pub from: (f64, f64),
    pub opacity: f64,
}

/// Plain line between two particles near the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleLink {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Links {
    pub pointer: Vec<PointerLink>,
    pub particles: Vec<ParticleLink>,
}

#[derive(Clone, Debug)]
pub struct Starfield {
    config: StarfieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: (f64, f64),
    phase: f64,
}

impl Starfield {
    pub fn new(config: StarfieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer: (0.0, 0.0),
            phase: 0.0,
        }
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Recreate all particles for a new viewport size
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        let count = self.config.particle_count(width, height);
        let config = self.config;
        self.particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                radius: rng.gen::<f64>() * config.max_radius,
                speed: rng.gen::<f64>() * config.max_speed,
                opacity: config.min_opacity + rng.gen::<f64>() * (1.0 - config.min_opacity),
            })
            .collect();
    }

    /// Drift every particle down; past the bottom edge it restarts
    /// at the top at a random x
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for particle in &mut self.particles {
            particle.y += particle.speed;
            if particle.y > self.height {
                particle.y = 0.0;
                particle.x = rng.gen::<f64>() * self.width;
            }
        }
    }

    /// Advance the phase and collect this frame's connection lines
    pub fn links(&mut self) -> Links {
        self.phase += self.config.phase_step;

        let radius = self.config.connection_radius;
        let (mx, my) = self.pointer;
        let mut links = Links::default();

        for (i, a) in self.particles.iter().enumerate() {
            if distance((a.x, a.y), (mx, my)) >= radius {
                continue;
            }
            links.pointer.push(PointerLink {
                from: (a.x, a.y),
                opacity: 0.4 + (self.phase + a.x).sin() * 0.2,
            });

            for b in &self.particles[i + 1..] {
                if distance((a.x, a.y), (b.x, b.y)) < radius / 2.0 {
                    links.particles.push(ParticleLink {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity: 0.35 + (self.phase + a.x + b.y).sin() * 0.15,
                    });
                }
            }
        }
        links
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(x: f64, y: f64) -> Particle {
        Particle { x, y, radius: 1.0, speed: 0.1, opacity: 1.0 }
    }

    fn field_with(particles: Vec<Particle>, pointer: (f64, f64)) -> Starfield {
        let mut field = Starfield::new(StarfieldConfig::default());
        field.width = 800.0;
        field.height = 600.0;
        field.particles = particles;
        field.pointer = pointer;
        field
    }

    #[test]
    fn test_particle_count_for_viewport() {
        let config = StarfieldConfig::default();
        assert_eq!(config.particle_count(1600.0, 900.0), 180);
        assert_eq!(config.particle_count(4000.0, 3000.0), 200);
        assert_eq!(config.particle_count(50.0, 50.0), 0);
    }

    #[test]
    fn test_resize_creates_particles_within_bounds() {
        let mut field = Starfield::new(StarfieldConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        field.resize(1600.0, 900.0, &mut rng);

        assert_eq!(field.particles().len(), 180);
        for p in field.particles() {
            assert!((0.0..1600.0).contains(&p.x));
            assert!((0.0..900.0).contains(&p.y));
            assert!((0.0..1.5).contains(&p.radius));
            assert!((0.0..0.2).contains(&p.speed));
            assert!((0.5..1.0).contains(&p.opacity));
        }

        field.resize(400.0, 400.0, &mut rng);
        assert_eq!(field.particles().len(), 20);
    }

    #[test]
    fn test_step_drifts_and_wraps() {
        let mut field = field_with(vec![particle(10.0, 100.0), particle(20.0, 599.95)], (0.0, 0.0));
        let mut rng = StdRng::seed_from_u64(2);
        field.step(&mut rng);

        let ps = field.particles();
        assert!((ps[0].y - 100.1).abs() < 1e-9);
        assert_eq!(ps[0].x, 10.0);
        assert_eq!(ps[1].y, 0.0);
        assert!((0.0..800.0).contains(&ps[1].x));
    }

    #[test]
    fn test_links_only_near_pointer() {
        let mut field = field_with(
            vec![particle(100.0, 100.0), particle(140.0, 100.0), particle(700.0, 500.0)],
            (100.0, 150.0),
        );
        let links = field.links();

        // Third particle is far from the pointer
        assert_eq!(links.pointer.len(), 2);
        assert_eq!(links.pointer[0].from, (100.0, 100.0));
        // 40px apart, under half the connection radius
        assert_eq!(links.particles.len(), 1);
        assert_eq!(links.particles[0].to, (140.0, 100.0));
    }

    #[test]
    fn test_particle_links_need_half_radius() {
        let mut field = field_with(vec![particle(100.0, 100.0), particle(180.0, 100.0)], (140.0, 100.0));
        let links = field.links();
        assert_eq!(links.pointer.len(), 2);
        assert!(links.particles.is_empty());
    }

    #[test]
    fn test_link_opacity_oscillates_within_bounds() {
        let mut field = field_with(vec![particle(100.0, 100.0), particle(110.0, 105.0)], (100.0, 100.0));
        for _ in 0..500 {
            let links = field.links();
            for l in &links.pointer {
                assert!(l.opacity > 0.2 - 1e-9 && l.opacity < 0.6 + 1e-9);
            }
            for l in &links.particles {
                assert!(l.opacity > 0.2 - 1e-9 && l.opacity < 0.5 + 1e-9);
            }
        }
        assert!((field.phase - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_link_color() {
        let config = StarfieldConfig::default();
        assert_eq!(config.link_color(0.5), "rgba(147, 51, 234, 0.5)");
    }
}
