use lawson::api::drawable_segments;
use lawson::Triangulation;
use serde::Serialize;

/// What the viewer's status overlay shows, plus flip counters from the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub points: usize,
    pub application_points: usize,
    pub triangles: usize,
    pub drawable_triangles: usize,
    pub flips: usize,
    pub unmeshed: Vec<usize>,
}

impl Summary {
    pub fn new(tri: &Triangulation, flips: usize, unmeshed: &[usize]) -> Self {
        Self {
            points: tri.point_count(),
            application_points: tri.application_points().len(),
            triangles: tri.triangle_count(),
            drawable_triangles: tri.drawable_triangles().count(),
            flips,
            unmeshed: unmeshed.to_vec(),
        }
    }

    /// Plain-text overlay: `Triangles: N` and `Points: M`.
    pub fn overlay(&self) -> String {
        format!("Triangles: {}\nPoints: {}", self.triangles, self.points)
    }
}

/// One `x1 y1 x2 y2` line per drawable edge.
pub fn edge_lines(tri: &Triangulation) -> Vec<String> {
    drawable_segments(tri)
        .into_iter()
        .map(|(a, b)| format!("{} {} {} {}", a.x, a.y, b.x, b.y))
        .collect()
}
