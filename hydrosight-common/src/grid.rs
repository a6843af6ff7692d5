//! Synthetic neighborhood pressure grid.
//!
//! Sensor positions live in a 100x100 unit square. The connective "grid"
//! drawn between them is a Delaunay triangulation built with the
//! Bowyer-Watson algorithm.

use rand::Rng;

/// Side length of the square sensors are placed in.
pub const GRID_EXTENT: f64 = 100.0;
/// Pressure assigned to outlier (low-pressure) sensors, in psi.
pub const LOW_PRESSURE_PSI: f64 = 45.0;
/// Lower bound of the normal pressure band, in psi.
pub const NORMAL_PRESSURE_MIN: f64 = 65.0;
/// Width of the normal pressure band, in psi.
pub const NORMAL_PRESSURE_SPAN: f64 = 10.0;
/// Readings below this are flagged as low.
pub const LOW_PRESSURE_LIMIT: f64 = 50.0;
/// A draw above this makes a sensor an outlier (about 10%).
pub const OUTLIER_THRESHOLD: f64 = 0.9;

/// Pressure classification of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureStatus {
    Normal,
    Low,
}

impl PressureStatus {
    pub fn from_pressure(pressure: f64) -> Self {
        if pressure < LOW_PRESSURE_LIMIT {
            PressureStatus::Low
        } else {
            PressureStatus::Normal
        }
    }

    /// Verdict shown in the sensor detail panel.
    pub fn verdict(self) -> &'static str {
        match self {
            PressureStatus::Normal => "OPTIMAL FLOW",
            PressureStatus::Low => "POSSIBLE LEAK / BREAK",
        }
    }
}

/// One synthetic neighborhood sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborData {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Line pressure in psi.
    pub pressure: f64,
    pub status: PressureStatus,
}

/// Generate `count` sensors with randomized positions and pressures.
///
/// About 90% of sensors read 65-75 psi; the rest read a flat 45 psi.
pub fn generate_neighborhood<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<NeighborData> {
    let sensors: Vec<_> = (0..count)
        .map(|i| {
            let x = rng.random::<f64>() * GRID_EXTENT;
            let y = rng.random::<f64>() * GRID_EXTENT;
            let pressure = if rng.random::<f64>() > OUTLIER_THRESHOLD {
                LOW_PRESSURE_PSI
            } else {
                NORMAL_PRESSURE_MIN + rng.random::<f64>() * NORMAL_PRESSURE_SPAN
            };

            NeighborData {
                id: format!("house-{}", i),
                x,
                y,
                pressure,
                status: PressureStatus::from_pressure(pressure),
            }
        })
        .collect();

    let low = sensors
        .iter()
        .filter(|s| s.status == PressureStatus::Low)
        .count();
    tracing::debug!(sensors = sensors.len(), low, "Generated neighborhood grid");

    sensors
}

/// A triangle with its cached circumcircle.
#[derive(Debug, Clone, Copy)]
struct Triangle {
    vertices: [usize; 3],
    center: (f64, f64),
    radius_sq: f64,
}

impl Triangle {
    fn new(vertices: [usize; 3], points: &[(f64, f64)]) -> Self {
        let (ax, ay) = points[vertices[0]];
        let (bx, by) = points[vertices[1]];
        let (cx, cy) = points[vertices[2]];

        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
        if d.abs() < f64::EPSILON {
            // Collinear: treat the circumcircle as unbounded so the triangle is replaced.
            return Self {
                vertices,
                center: (0.0, 0.0),
                radius_sq: f64::INFINITY,
            };
        }

        let a_sq = ax * ax + ay * ay;
        let b_sq = bx * bx + by * by;
        let c_sq = cx * cx + cy * cy;
        let ux = (a_sq * (by - cy) + b_sq * (cy - ay) + c_sq * (ay - by)) / d;
        let uy = (a_sq * (cx - bx) + b_sq * (ax - cx) + c_sq * (bx - ax)) / d;

        Self {
            vertices,
            center: (ux, uy),
            radius_sq: (ax - ux).powi(2) + (ay - uy).powi(2),
        }
    }

    fn circumcircle_contains(&self, (px, py): (f64, f64)) -> bool {
        if !self.radius_sq.is_finite() {
            return true;
        }
        let dist_sq = (px - self.center.0).powi(2) + (py - self.center.1).powi(2);
        dist_sq < self.radius_sq
    }

    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}

fn same_edge(a: (usize, usize), b: (usize, usize)) -> bool {
    (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
}

/// Delaunay triangulation of `points`, as triples of indices into `points`.
///
/// Fewer than three points yield no triangles.
pub fn triangulate(points: &[(f64, f64)]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let (min_x, min_y, max_x, max_y) = points.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(min_x, min_y, max_x, max_y), &(x, y)| {
            (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
        },
    );
    let delta = (max_x - min_x).max(max_y - min_y).max(1.0);
    let mid = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

    // Super-triangle enclosing every point; its vertices sit at n, n+1, n+2.
    let mut vertices = points.to_vec();
    vertices.push((mid.0 - 20.0 * delta, mid.1 - delta));
    vertices.push((mid.0, mid.1 + 20.0 * delta));
    vertices.push((mid.0 + 20.0 * delta, mid.1 - delta));

    let mut triangles = vec![Triangle::new([n, n + 1, n + 2], &vertices)];

    for i in 0..n {
        let point = vertices[i];
        let (bad, good): (Vec<Triangle>, Vec<Triangle>) = triangles
            .into_iter()
            .partition(|t| t.circumcircle_contains(point));

        // Boundary of the cavity: edges belonging to exactly one bad triangle.
        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for edge in bad.iter().flat_map(Triangle::edges) {
            match boundary.iter().position(|&e| same_edge(e, edge)) {
                Some(pos) => {
                    boundary.swap_remove(pos);
                }
                None => boundary.push(edge),
            }
        }

        triangles = good;
        triangles.extend(
            boundary
                .into_iter()
                .map(|(a, b)| Triangle::new([a, b, i], &vertices)),
        );
    }

    triangles
        .into_iter()
        .filter(|t| t.vertices.iter().all(|&v| v < n))
        .map(|t| t.vertices)
        .collect()
}

/// Distinct undirected edges of a triangulation, each as `(low, high)`.
pub fn triangle_edges(triangles: &[[usize; 3]]) -> Vec<(usize, usize)> {
    let mut edges: Vec<(usize, usize)> = triangles
        .iter()
        .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
        .map(|(a, b)| (a.min(b), a.max(b)))
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripted::ScriptedRng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_generate_neighborhood() {
        let mut rng = SmallRng::seed_from_u64(3);
        let sensors = generate_neighborhood(&mut rng, 50);

        assert_eq!(sensors.len(), 50);
        assert_eq!(sensors[0].id, "house-0");
        assert_eq!(sensors[49].id, "house-49");

        for sensor in &sensors {
            assert!((0.0..GRID_EXTENT).contains(&sensor.x));
            assert!((0.0..GRID_EXTENT).contains(&sensor.y));
            match sensor.status {
                PressureStatus::Low => assert_eq!(sensor.pressure, LOW_PRESSURE_PSI),
                PressureStatus::Normal => {
                    assert!((65.0..=75.0).contains(&sensor.pressure));
                }
            }
        }
    }

    #[test]
    fn test_outlier_draw_gives_low_pressure() {
        // x, y, outlier draw for one sensor; then x, y, normal draw, band draw.
        let mut rng = ScriptedRng::new([0.1, 0.2, 0.95, 0.3, 0.4, 0.5, 0.5]);
        let sensors = generate_neighborhood(&mut rng, 2);

        assert_eq!(sensors[0].status, PressureStatus::Low);
        assert_eq!(sensors[0].pressure, 45.0);
        assert_eq!(sensors[0].status.verdict(), "POSSIBLE LEAK / BREAK");

        assert_eq!(sensors[1].status, PressureStatus::Normal);
        assert!((sensors[1].pressure - 70.0).abs() < 1e-9);
        assert_eq!(sensors[1].status.verdict(), "OPTIMAL FLOW");
    }

    #[test]
    fn test_triangulate_small_inputs() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[(0.0, 0.0), (1.0, 1.0)]).is_empty());

        let single = triangulate(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_triangulate_with_interior_point() {
        // Hull of three points plus one inside: three triangles.
        let points = [(0.0, 0.0), (100.0, 0.0), (50.0, 90.0), (50.0, 30.0)];
        let triangles = triangulate(&points);
        assert_eq!(triangles.len(), 3);
        assert!(triangles.iter().all(|t| t.contains(&3)));
        assert_eq!(triangle_edges(&triangles).len(), 6);
    }

    #[test]
    fn test_triangulation_is_delaunay() {
        let mut rng = SmallRng::seed_from_u64(42);
        let sensors = generate_neighborhood(&mut rng, 50);
        let points: Vec<_> = sensors.iter().map(|s| (s.x, s.y)).collect();
        let triangles = triangulate(&points);

        assert!(!triangles.is_empty());
        // Planar triangulation bound: at most 2n - 5 triangles.
        assert!(triangles.len() <= 2 * points.len() - 5);

        for t in &triangles {
            let circle = Triangle::new(*t, &points);
            for (i, &p) in points.iter().enumerate() {
                if t.contains(&i) {
                    continue;
                }
                let dist_sq = (p.0 - circle.center.0).powi(2) + (p.1 - circle.center.1).powi(2);
                assert!(
                    dist_sq >= circle.radius_sq - 1e-6,
                    "point {} inside circumcircle of {:?}",
                    i,
                    t
                );
            }
        }

        // Every sensor is connected to the grid.
        let edges = triangle_edges(&triangles);
        for i in 0..points.len() {
            assert!(edges.iter().any(|&(a, b)| a == i || b == i), "sensor {} isolated", i);
        }
    }
}
