//! Geometry primitives for the radial diagram.
//!
//! Pure functions from (angle range, radius range) to point sequences in unit
//! circle space: annular sector outlines, curved connection paths between two
//! angular positions, directional arrowheads, and the label rotation rule.
//! Every ring reuses these; nothing here holds state.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Point on the circle at `angle` radians and distance `radius` from center.
#[inline]
pub fn polar(angle: f32, radius: f32) -> [f32; 2] {
    [radius * angle.cos(), radius * angle.sin()]
}

/// Normalize an angle into `[0, 2π)`.
pub fn normalize_angle(a: f32) -> f32 {
    let r = a.rem_euclid(TAU);
    if r.is_nan() {
        0.0
    } else {
        r
    }
}

// ─── Sectors ─────────────────────────────────────────────────────────────────

/// Closed outline of an annular sector: outer arc sampled start→end, inner
/// arc end→start.
///
/// Sampling is ~2 points per degree with a floor of 4 steps so near-zero
/// sectors still come out as valid polygons.
pub fn sector_points(angle_start: f32, angle_end: f32, r_inner: f32, r_outer: f32) -> Vec<[f32; 2]> {
    let width = (angle_end - angle_start).abs();
    let steps = ((width.to_degrees() * 2.0).ceil() as usize).max(4);

    let mut points = Vec::with_capacity(2 * (steps + 1));
    for i in 0..=steps {
        let a = angle_start + width * (i as f32 / steps as f32);
        points.push(polar(a, r_outer));
    }
    for i in (0..=steps).rev() {
        let a = angle_start + width * (i as f32 / steps as f32);
        points.push(polar(a, r_inner));
    }
    points
}

// ─── Connection edges ────────────────────────────────────────────────────────

/// Pick the angular destination that makes the sweep from `a_from` to `a_to`
/// the shorter way around: when |Δ| exceeds π, wrap the destination by ±2π.
pub fn shorter_arc_target(a_from: f32, a_to: f32) -> f32 {
    let delta = a_to - a_from;
    if delta > PI {
        a_to - TAU
    } else if delta < -PI {
        a_to + TAU
    } else {
        a_to
    }
}

/// Curved edge between two angular positions at a fixed radius.
///
/// A quadratic Bezier through a control point at the mid-angle, pulled toward
/// the center by `bulge` (0 = flat arc chord, 1 = through the center), sampled
/// into a polyline. The destination end of the polyline is where the arrowhead
/// goes.
pub fn connection_path(a_from: f32, a_to: f32, radius: f32, bulge: f32) -> Vec<[f32; 2]> {
    const STEPS: usize = 24;

    let a_to = shorter_arc_target(a_from, a_to);
    let p0 = polar(a_from, radius);
    let p2 = polar(a_to, radius);
    let ctrl = polar((a_from + a_to) / 2.0, radius * (1.0 - bulge));

    let mut points = Vec::with_capacity(STEPS + 1);
    for i in 0..=STEPS {
        let t = i as f32 / STEPS as f32;
        let u = 1.0 - t;
        let x = u * u * p0[0] + 2.0 * u * t * ctrl[0] + t * t * p2[0];
        let y = u * u * p0[1] + 2.0 * u * t * ctrl[1] + t * t * p2[1];
        points.push([x, y]);
    }
    points
}

/// Straight radial segment, used for edges that touch a center-placed stage.
pub fn radial_connector(angle: f32, r_from: f32, r_to: f32) -> Vec<[f32; 2]> {
    vec![polar(angle, r_from), polar(angle, r_to)]
}

/// Triangular arrowhead with its apex at `tip`, oriented along `dir` (the
/// local tangent at the destination end of an edge).
pub fn arrowhead(tip: [f32; 2], dir: [f32; 2], size: f32) -> [[f32; 2]; 3] {
    let len = (dir[0] * dir[0] + dir[1] * dir[1]).sqrt();
    let (ux, uy) = if len > f32::EPSILON {
        (dir[0] / len, dir[1] / len)
    } else {
        (1.0, 0.0)
    };
    // Perpendicular for the base corners
    let (px, py) = (-uy, ux);

    [
        [tip[0] - size * (ux - px), tip[1] - size * (uy - py)],
        tip,
        [tip[0] - size * (ux + px), tip[1] - size * (uy + py)],
    ]
}

// ─── Labels ──────────────────────────────────────────────────────────────────

/// Rotation for a label at `mid_angle`.
///
/// The raw tangential angle is used as-is in the upper half of the circle;
/// in the lower half (normalized magnitude strictly between π/2 and 3π/2)
/// the label is flipped 180° so text never renders upside-down.
pub fn label_rotation(mid_angle: f32) -> f32 {
    let a = normalize_angle(mid_angle);
    if a > FRAC_PI_2 && a < 3.0 * FRAC_PI_2 {
        mid_angle - PI
    } else {
        mid_angle
    }
}

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending
/// `"..."` if truncated.
pub fn truncate_label(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
