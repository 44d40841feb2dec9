//! Point clouds for the logo outline and lettering
//!
//! Built once per run; the draw pass only rotates the cached points.

use glam::IVec2;

use crate::sim::LogoGeometry;

/// Stroke table for the "SLASHER006" lettering, `(x0, y0, x1, y1)` in
/// logo-local pixels
const LETTER_STROKES: &[(i32, i32, i32, i32)] = &[
    // S
    (-39, -6, -34, -6),
    (-39, -6, -39, 0),
    (-39, 0, -34, 0),
    (-34, 0, -34, 6),
    (-34, 6, -39, 6),
    // L
    (-31, -6, -31, 6),
    (-31, 6, -26, 6),
    // A
    (-23, 6, -23, -6),
    (-23, -6, -18, -6),
    (-18, -6, -18, 6),
    (-23, 0, -18, 0),
    // S
    (-15, -6, -10, -6),
    (-15, -6, -15, 0),
    (-15, 0, -10, 0),
    (-10, 0, -10, 6),
    (-10, 6, -15, 6),
    // H
    (-7, -6, -7, 6),
    (-2, -6, -2, 6),
    (-7, 0, -2, 0),
    // E
    (1, -6, 1, 6),
    (1, -6, 6, -6),
    (1, 0, 5, 0),
    (1, 6, 6, 6),
    // R
    (9, -6, 9, 6),
    (9, -6, 14, -6),
    (14, -6, 14, 0),
    (9, 0, 14, 0),
    (9, 0, 14, 6),
    // 0
    (17, -6, 17, 6),
    (22, -6, 22, 6),
    (17, -6, 22, -6),
    (17, 6, 22, 6),
    (22, -6, 17, 6),
    // 0
    (25, -6, 25, 6),
    (30, -6, 30, 6),
    (25, -6, 30, -6),
    (25, 6, 30, 6),
    (30, -6, 25, 6),
    // 6
    (33, -6, 38, -6),
    (33, -6, 33, 6),
    (33, 6, 38, 6),
    (38, 0, 38, 6),
    (33, 0, 38, 0),
];

/// Append every pixel on the segment `a`..=`b` (Bresenham).
///
/// A zero-length segment yields exactly one point.
pub fn rasterize_line(a: IVec2, b: IVec2, out: &mut Vec<IVec2>) {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut p = a;

    loop {
        out.push(p);
        if p == b {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            p.x += sx;
        }
        if e2 <= dx {
            err += dx;
            p.y += sy;
        }
    }
}

/// Cached logo pixels in local coordinates
#[derive(Debug, Clone, Default)]
pub struct LogoArt {
    pub outline: Vec<IVec2>,
    pub lettering: Vec<IVec2>,
}

impl LogoArt {
    pub fn new(logo: &LogoGeometry) -> Self {
        let (l, r) = (logo.left as i32, logo.right as i32);
        let (t, b) = (logo.top as i32, logo.bottom as i32);

        let mut outline = Vec::new();
        rasterize_line(IVec2::new(l, t), IVec2::new(r, t), &mut outline);
        rasterize_line(IVec2::new(r, t), IVec2::new(r, b), &mut outline);
        rasterize_line(IVec2::new(r, b), IVec2::new(l, b), &mut outline);
        rasterize_line(IVec2::new(l, b), IVec2::new(l, t), &mut outline);

        let mut lettering = Vec::new();
        for &(x0, y0, x1, y1) in LETTER_STROKES {
            rasterize_line(IVec2::new(x0, y0), IVec2::new(x1, y1), &mut lettering);
        }

        Self { outline, lettering }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_line_is_one_point() {
        let mut pts = Vec::new();
        rasterize_line(IVec2::new(3, -2), IVec2::new(3, -2), &mut pts);
        assert_eq!(pts, vec![IVec2::new(3, -2)]);
    }

    #[test]
    fn test_horizontal_line_inclusive() {
        let mut pts = Vec::new();
        rasterize_line(IVec2::new(2, 0), IVec2::new(-2, 0), &mut pts);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts.first(), Some(&IVec2::new(2, 0)));
        assert_eq!(pts.last(), Some(&IVec2::new(-2, 0)));
    }

    #[test]
    fn test_diagonal_line_steps_both_axes() {
        let mut pts = Vec::new();
        rasterize_line(IVec2::new(0, 0), IVec2::new(4, 4), &mut pts);
        let expected: Vec<_> = (0..=4).map(|i| IVec2::new(i, i)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn test_outline_covers_box_perimeter() {
        let art = LogoArt::new(&LogoGeometry::default());
        // 91 + 25 + 91 + 25 points, corners repeated once per segment
        assert_eq!(art.outline.len(), 232);
        assert!(art.outline.contains(&IVec2::new(-45, -12)));
        assert!(art.outline.contains(&IVec2::new(45, 12)));
        assert!(!art.lettering.is_empty());
        assert!(art.lettering.iter().all(|p| p.x.abs() < 45 && p.y.abs() < 12));
    }
}
