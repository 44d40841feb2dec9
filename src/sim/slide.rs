//! Pile particles sliding along the logo's edges
//!
//! World gravity always points down the screen. Seen from the rotating
//! logo it turns the other way, so its projection onto the logo's local
//! axes decides which way a particle slides and when an edge has tipped
//! far enough that nothing can rest on it.

use glam::Vec2;

use super::rotation::Orientation;
use super::state::{Edge, LogoGeometry, PileParticle, SimState, Snowflake};
use crate::consts::FALL_OFF_BIAS;

/// World gravity projected onto the logo's local axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalGravity {
    /// Pull along the top and bottom edges (local X)
    pub along_horizontal: f32,
    /// Pull along the left and right edges (local Y)
    pub along_vertical: f32,
}

impl LocalGravity {
    pub fn new(orientation: Orientation, gravity: f32) -> Self {
        Self {
            along_horizontal: orientation.sin * gravity * 2.0,
            along_vertical: orientation.cos * gravity * 2.0,
        }
    }

    /// The edge faces away from gravity, so nothing can rest on it
    pub fn tips_off(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.along_vertical < 0.0,
            Edge::Bottom => self.along_vertical > 0.0,
            Edge::Left => self.along_horizontal > 0.0,
            Edge::Right => self.along_horizontal < 0.0,
        }
    }

    pub fn along(&self, edge: Edge) -> f32 {
        if edge.is_horizontal() {
            self.along_horizontal
        } else {
            self.along_vertical
        }
    }
}

/// Advance one particle along its edge.
///
/// Returns true when the particle has left the logo.
pub fn slide_particle(
    particle: &mut PileParticle,
    gravity: LocalGravity,
    friction: f32,
    logo: &LogoGeometry,
) -> bool {
    let edge = particle.edge;
    if gravity.tips_off(edge) {
        return true;
    }

    particle.slide_vel = (particle.slide_vel + gravity.along(edge)) * friction;
    if edge.is_horizontal() {
        particle.local.x += particle.slide_vel;
    } else {
        particle.local.y += particle.slide_vel;
    }
    !logo.within_extent(edge, particle.along())
}

/// Free flake for a particle leaving the logo
pub fn release_flake(particle: &PileParticle, center: Vec2, orientation: Orientation) -> Snowflake {
    let pos = orientation.to_world(particle.local) + center;
    let sv = particle.slide_vel;
    let Orientation { sin, cos } = orientation;
    let vel = if particle.edge.is_horizontal() {
        Vec2::new(sv * cos, sv * sin + FALL_OFF_BIAS)
    } else {
        Vec2::new(-sv * sin, sv * cos + FALL_OFF_BIAS)
    };
    Snowflake::new(pos, vel)
}

/// Slide every pile particle and turn the ones that fall off back into snow
pub fn slide_pass(state: &mut SimState, orientation: Orientation) {
    let gravity = LocalGravity::new(orientation, state.settings.gravity);
    let friction = state.settings.friction;

    for i in 0..state.pile.capacity() {
        let Some(particle) = state.pile.get_mut(i) else {
            continue;
        };
        if !slide_particle(particle, gravity, friction, &state.logo) {
            continue;
        }

        let Some(particle) = state.pile.release(i) else {
            continue;
        };
        state.stats.slid_off += 1;
        let flake = release_flake(&particle, state.center, orientation);
        if state.snow.spawn(flake).is_none() {
            state.stats.dropped_snow_full += 1;
            log::trace!("Snow pool full, dropping particle sliding off at {}", flake.pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FRICTION, GRAVITY};
    use crate::settings::Settings;

    #[test]
    fn test_flat_top_edge_decays_geometrically() {
        let logo = LogoGeometry::default();
        let gravity = LocalGravity::new(Orientation::IDENTITY, GRAVITY);
        assert_eq!(gravity.along_horizontal, 0.0);

        let mut p = PileParticle::new(Vec2::new(0.0, -12.0), Edge::Top);
        p.slide_vel = 1.0;
        let mut expected = 1.0_f32;
        for _ in 0..50 {
            assert!(!slide_particle(&mut p, gravity, FRICTION, &logo));
            expected *= FRICTION;
            assert!((p.slide_vel - expected).abs() < 1e-5);
            assert!(p.slide_vel > 0.0);
        }
        assert!(p.slide_vel < 0.1);
    }

    #[test]
    fn test_bottom_edge_falls_when_upright() {
        let logo = LogoGeometry::default();
        let gravity = LocalGravity::new(Orientation::IDENTITY, GRAVITY);
        let mut p = PileParticle::new(Vec2::new(5.0, 12.0), Edge::Bottom);
        assert!(slide_particle(&mut p, gravity, FRICTION, &logo));
        // Immediate fall-off leaves the particle where it was
        assert_eq!(p.local, Vec2::new(5.0, 12.0));
    }

    #[test]
    fn test_side_edges_slide_down_until_they_leave() {
        let logo = LogoGeometry::default();
        let gravity = LocalGravity::new(Orientation::IDENTITY, GRAVITY);
        let mut p = PileParticle::new(Vec2::new(-45.0, 0.0), Edge::Left);
        let mut ticks = 0;
        while !slide_particle(&mut p, gravity, FRICTION, &logo) {
            assert!(p.slide_vel > 0.0);
            ticks += 1;
            assert!(ticks < 1000, "never left the edge");
        }
        assert!(p.local.y > logo.bottom);
    }

    #[test]
    fn test_tilted_logo_tips_edges() {
        // Rotated past vertical: top edge faces down the screen
        let flipped = Orientation::from_angle(std::f32::consts::PI);
        let g = LocalGravity::new(flipped, GRAVITY);
        assert!(g.tips_off(Edge::Top));
        assert!(!g.tips_off(Edge::Bottom));

        let tilted = Orientation::from_angle(0.3);
        let g = LocalGravity::new(tilted, GRAVITY);
        assert!(g.tips_off(Edge::Left));
        assert!(!g.tips_off(Edge::Right));
        assert!(g.along_horizontal > 0.0);
    }

    #[test]
    fn test_release_flake_world_position() {
        let center = Vec2::new(160.0, 120.0);
        let mut p = PileParticle::new(Vec2::new(46.0, -12.0), Edge::Top);
        p.slide_vel = 0.5;
        let flake = release_flake(&p, center, Orientation::IDENTITY);
        assert_eq!(flake.pos, Vec2::new(206.0, 108.0));
        assert_eq!(flake.vel, Vec2::new(0.5, 1.0));
        assert_eq!(flake.prev_pos, flake.pos);

        let mut side = PileParticle::new(Vec2::new(45.0, 13.0), Edge::Right);
        side.slide_vel = 0.5;
        let flake = release_flake(&side, center, Orientation::IDENTITY);
        assert_eq!(flake.vel, Vec2::new(0.0, 1.5));
    }

    #[test]
    fn test_slide_pass_respawns_snow() {
        let mut state = SimState::new(Settings::default(), 0);
        state
            .pile
            .spawn(PileParticle::new(Vec2::new(10.0, 12.0), Edge::Bottom));
        slide_pass(&mut state, Orientation::IDENTITY);
        assert_eq!(state.pile.active_count(), 0);
        let (_, flake) = state.snow.iter().next().expect("respawned flake");
        assert_eq!(flake.pos, Vec2::new(170.0, 132.0));
        assert_eq!(state.stats.slid_off, 1);
    }

    #[test]
    fn test_slide_pass_drops_when_snow_full() {
        let settings = Settings {
            max_snow: 1,
            ..Default::default()
        };
        let mut state = SimState::new(settings, 0);
        state.snow.spawn(Snowflake::new(Vec2::new(1.0, 1.0), Vec2::ZERO));
        state
            .pile
            .spawn(PileParticle::new(Vec2::new(10.0, 12.0), Edge::Bottom));
        slide_pass(&mut state, Orientation::IDENTITY);
        assert_eq!(state.pile.active_count(), 0);
        assert_eq!(state.snow.active_count(), 1);
        assert_eq!(state.stats.dropped_snow_full, 1);
    }
}
