//! Proximity links between particle pairs

use glam::Vec2;

/// Opacity of a link spanning `distance`: 1 at zero, fading linearly to 0 at
/// `threshold` and beyond.
#[inline]
pub fn link_opacity(distance: f32, threshold: f32) -> f32 {
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}

/// Opacity of the link between `a` and `b`, or `None` when they are at
/// least `threshold` apart.
pub fn linked(a: Vec2, b: Vec2, threshold: f32) -> Option<f32> {
    let distance = a.distance(b);
    if distance < threshold {
        Some(link_opacity(distance, threshold))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LINK_DISTANCE;

    #[test]
    fn test_opacity_endpoints() {
        assert_eq!(link_opacity(0.0, LINK_DISTANCE), 1.0);
        assert_eq!(link_opacity(LINK_DISTANCE, LINK_DISTANCE), 0.0);
        assert_eq!(link_opacity(400.0, LINK_DISTANCE), 0.0);
        assert!((link_opacity(75.0, LINK_DISTANCE) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_no_link_at_threshold() {
        let a = Vec2::ZERO;
        assert_eq!(linked(a, Vec2::new(150.0, 0.0), LINK_DISTANCE), None);
        assert!(linked(a, Vec2::new(149.9, 0.0), LINK_DISTANCE).is_some());
    }

    #[test]
    fn test_coincident_particles_fully_opaque() {
        let p = Vec2::new(42.0, 17.0);
        assert_eq!(linked(p, p, LINK_DISTANCE), Some(1.0));
    }

    #[test]
    fn test_link_symmetric() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(90.0, -13.0);
        assert_eq!(linked(a, b, LINK_DISTANCE), linked(b, a, LINK_DISTANCE));
    }

    #[test]
    fn test_diagonal_distance() {
        // 3-4-5 triangle scaled by 10
        let opacity = linked(Vec2::ZERO, Vec2::new(30.0, 40.0), LINK_DISTANCE).unwrap();
        assert!((opacity - (1.0 - 50.0 / 150.0)).abs() < 1e-6);
    }
}
