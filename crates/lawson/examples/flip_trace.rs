//! Insert the built-in demo points one by one and print what each insertion did.
//!
//! Usage:
//!   cargo run -p lawson --example flip_trace

use lawson::sample::demo_points;
use lawson::prelude::*;

fn main() {
    let mut tri = Triangulation::new();
    for p in demo_points() {
        match tri.insert_point(p) {
            Insertion::Split(stats) => println!(
                "({:>5.1}, {:>5.1}): flips={} examined={} max_stack={} triangles={}",
                p.x,
                p.y,
                stats.flips,
                stats.examined,
                stats.max_stack,
                tri.triangle_count()
            ),
            other => println!("({:>5.1}, {:>5.1}): {other:?}", p.x, p.y),
        }
    }
    println!("drawable triangles: {}", tri.drawable_triangles().count());
}
