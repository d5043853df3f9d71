//! Mesh generation for the ball and paddles
//!
//! Both meshes are centered on the origin and scaled per instance by the
//! renderer: the ball disc by its diameter, the paddle quad by its size.

use glam::Vec2;

/// Generate a triangle fan approximating a disc.
///
/// Vertex 0 is the center, vertices `1..=triangle_count` lie on the circle.
/// The last triangle closes the fan back onto vertex 1.
///
/// # Panics
///
/// Panics if `triangle_count < 3`.
pub fn generate_disc(triangle_count: u32, radius: f32) -> (Vec<Vec2>, Vec<u32>) {
    assert!(
        triangle_count >= 3,
        "a disc needs at least 3 triangles, got {triangle_count}"
    );

    let mut vertices = Vec::with_capacity(triangle_count as usize + 1);
    let mut indices = Vec::with_capacity(triangle_count as usize * 3);

    vertices.push(Vec2::ZERO);

    let step = std::f32::consts::TAU / triangle_count as f32;
    for i in 0..triangle_count {
        let theta = step * i as f32;
        vertices.push(Vec2::new(radius * theta.cos(), radius * theta.sin()));

        indices.push(0);
        indices.push(i + 1);
        indices.push(i + 2);
    }

    // 0, n, n+1 -> 0, n, 1
    if let Some(last) = indices.last_mut() {
        *last = 1;
    }

    (vertices, indices)
}

/// Unit square centered on the origin, used for both paddles
pub fn unit_quad() -> ([Vec2; 4], [u32; 6]) {
    let vertices = [
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
    ];
    let indices = [0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_counts_and_bounds() {
        for n in 3..=64 {
            let (vertices, indices) = generate_disc(n, 1.0);
            assert_eq!(vertices.len(), n as usize + 1, "vertex count for n={n}");
            assert_eq!(indices.len(), 3 * n as usize, "index count for n={n}");
            assert!(
                indices.iter().all(|&i| i < n + 1),
                "index out of range for n={n}"
            );
            assert_eq!(indices[indices.len() - 1], 1, "fan must close for n={n}");
        }
    }

    #[test]
    fn test_disc_fan_layout() {
        let (vertices, indices) = generate_disc(4, 2.0);
        assert_eq!(vertices[0], Vec2::ZERO);
        assert!((vertices[1] - Vec2::new(2.0, 0.0)).length() < 1e-5);
        assert!((vertices[2] - Vec2::new(0.0, 2.0)).length() < 1e-5);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1]);
    }

    #[test]
    fn test_disc_rim_lies_on_radius() {
        let (vertices, _) = generate_disc(20, 0.5);
        for v in &vertices[1..] {
            assert!((v.length() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    #[should_panic(expected = "at least 3 triangles")]
    fn test_disc_rejects_degenerate_count() {
        generate_disc(2, 1.0);
    }

    #[test]
    fn test_unit_quad() {
        let (vertices, indices) = unit_quad();
        assert!(vertices.iter().all(|v| v.x.abs() == 0.5 && v.y.abs() == 0.5));
        assert_eq!(indices, [0, 1, 2, 2, 3, 0]);
    }
}
