//! Pure geometry primitives over landmarks.
//!
//! All distances are 2-D (x, y only) — detector z values are too noisy to
//! gate thresholds on.  Angles are unsigned degrees in [0, 180].

use crate::landmark::Landmark;

/// Euclidean distance between two landmarks in the image plane.
pub fn distance(a: Landmark, b: Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Unsigned angle in degrees at vertex `b`, formed by rays b→a and b→c.
///
/// Returns 0.0 when either ray is degenerate (coincident points).
pub fn angle_deg(a: Landmark, b: Landmark, c: Landmark) -> f32 {
    let (ux, uy) = (a.x - b.x, a.y - b.y);
    let (vx, vy) = (c.x - b.x, c.y - b.y);
    let lu = (ux * ux + uy * uy).sqrt();
    let lv = (vx * vx + vy * vy).sqrt();
    if lu <= f32::EPSILON || lv <= f32::EPSILON {
        return 0.0;
    }
    let cos = ((ux * vx + uy * vy) / (lu * lv)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

// ── Tests ──────────────────────────────────────────────────
