//! Draw pass
//!
//! Reads the simulation and issues primitive draw calls against a
//! [`DrawSurface`]. Nothing here feeds back into the simulation.

pub mod ascii;
pub mod shapes;

pub use ascii::AsciiSurface;
pub use shapes::{LogoArt, rasterize_line};

use glam::{IVec2, Vec2};

use crate::consts::{COLUMN_WIDTH, FLAKE_SIZE};
use crate::sim::{Orientation, SimState, Stage};

/// Palette used by the draw pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
    Blue,
    Cyan,
    Yellow,
}

/// Drawing primitives provided by the host
pub trait DrawSurface {
    fn clear(&mut self, color: Color);
    fn draw_pixel(&mut self, pos: IVec2, color: Color);
    fn draw_rect(&mut self, pos: IVec2, size: IVec2, color: Color);
    fn draw_text(&mut self, pos: IVec2, text: &str, color: Color);
    fn present(&mut self);
}

/// Screen pixel for a logo-local point
#[inline]
fn logo_pixel(local: Vec2, center: IVec2, orientation: Orientation) -> IVec2 {
    let world = orientation.to_world(local);
    IVec2::new(world.x as i32, world.y as i32) + center
}

/// Draw one frame of `state`
pub fn render(state: &SimState, art: &LogoArt, surface: &mut impl DrawSurface) {
    let orientation = state.orientation();
    let center = state.center.as_ivec2();
    let floor = state.ground.floor();
    let flake = IVec2::splat(FLAKE_SIZE as i32);

    surface.clear(Color::Black);

    for (i, &top) in state.ground.heights().iter().enumerate() {
        if top < floor {
            let x = i as i32 * COLUMN_WIDTH;
            surface.draw_rect(
                IVec2::new(x, top),
                IVec2::new(COLUMN_WIDTH, floor - top),
                Color::White,
            );
        }
    }

    for (_, f) in state.snow.iter() {
        surface.draw_rect(IVec2::new(f.pos.x as i32, f.pos.y as i32), flake, Color::White);
    }

    for p in &art.outline {
        surface.draw_pixel(logo_pixel(p.as_vec2(), center, orientation), Color::Blue);
    }
    for p in &art.lettering {
        surface.draw_pixel(logo_pixel(p.as_vec2(), center, orientation), Color::Cyan);
    }

    for (_, p) in state.pile.iter() {
        surface.draw_pixel(logo_pixel(p.local, center, orientation), Color::White);
    }

    draw_hud(state, surface);
    surface.present();
}

fn draw_hud(state: &SimState, surface: &mut impl DrawSurface) {
    match state.stage {
        Stage::Waiting => {
            let secs = state.settings.start_delay_ms.div_ceil(1000);
            surface.draw_text(
                IVec2::new(10, 10),
                &format!("WAIT {secs} SECONDS..."),
                Color::Yellow,
            );
            surface.draw_text(IVec2::new(10, 25), "[ESC]: EXIT", Color::Yellow);
        }
        Stage::Active => {
            let status = if state.rotating { "ROTATING" } else { "PAUSED" };
            surface.draw_text(IVec2::new(5, 5), &format!("[G]: {status}"), Color::Yellow);
            surface.draw_text(IVec2::new(5, 20), "[R]: RESET", Color::Yellow);
            surface.draw_text(IVec2::new(5, 35), "[ESC]: EXIT", Color::Yellow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Edge, PileParticle, Snowflake};

    /// Records every call for inspection
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        pixels: Vec<(IVec2, Color)>,
        rects: Vec<(IVec2, IVec2)>,
        texts: Vec<String>,
        presented: u32,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self, color: Color) {
            self.calls.push(format!("clear {color:?}"));
        }
        fn draw_pixel(&mut self, pos: IVec2, color: Color) {
            self.pixels.push((pos, color));
        }
        fn draw_rect(&mut self, pos: IVec2, size: IVec2, _color: Color) {
            self.rects.push((pos, size));
        }
        fn draw_text(&mut self, _pos: IVec2, text: &str, _color: Color) {
            self.texts.push(text.to_string());
        }
        fn present(&mut self) {
            self.presented += 1;
        }
    }

    #[test]
    fn test_render_waiting_frame() {
        let state = SimState::new(Settings::default(), 0);
        let art = LogoArt::new(&state.logo);
        let mut rec = Recorder::default();
        render(&state, &art, &mut rec);

        assert_eq!(rec.calls, vec!["clear Black"]);
        assert!(rec.rects.is_empty());
        assert_eq!(rec.pixels.len(), art.outline.len() + art.lettering.len());
        assert_eq!(rec.texts, vec!["WAIT 5 SECONDS...", "[ESC]: EXIT"]);
        assert_eq!(rec.presented, 1);
    }

    #[test]
    fn test_render_active_frame() {
        let mut state = SimState::new(Settings::default(), 0);
        state.stage = Stage::Active;
        state.ground.try_land(2, 1000.0);
        state
            .snow
            .spawn(Snowflake::new(Vec2::new(20.7, 30.2), Vec2::ZERO));
        state
            .pile
            .spawn(PileParticle::new(Vec2::new(10.0, -12.0), Edge::Top));
        let art = LogoArt::new(&state.logo);
        let mut rec = Recorder::default();
        render(&state, &art, &mut rec);

        assert_eq!(
            rec.rects,
            vec![
                (IVec2::new(8, 236), IVec2::new(4, 4)),
                (IVec2::new(20, 30), IVec2::new(4, 4)),
            ]
        );
        assert_eq!(rec.pixels.last(), Some(&(IVec2::new(170, 108), Color::White)));
        assert_eq!(rec.texts[0], "[G]: PAUSED");
    }
}
