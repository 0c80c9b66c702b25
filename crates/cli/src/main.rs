mod report;
mod script;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lawson::api::check;
use lawson::sample::{demo_points, uniform_in_triangle};
use lawson::{Insertion, MeshCfg, Triangulation, Vec2};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use report::{edge_lines, Summary};
use script::{load_script, Command};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless driver for the incremental Delaunay triangulation")]
struct Cmd {
    /// Treat a point that lands in no triangle as an error
    #[arg(long, global = true)]
    strict: bool,

    /// Print the summary as JSON instead of the text overlay
    #[arg(long, global = true)]
    json: bool,

    /// Also print every drawable edge as `x1 y1 x2 y2`
    #[arg(long, global = true)]
    edges: bool,

    /// Validate manifold and Delaunay properties at the end
    #[arg(long, global = true)]
    check: bool,

    /// Barycentric tolerance for point location
    #[arg(long, global = true, default_value_t = lawson::predicates::BARY_TOL)]
    bary_tol: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay `click X Y` / `triangulate` / `reset` lines from a file (stdin if omitted)
    Replay { script: Option<PathBuf> },
    /// Insert uniformly sampled points inside the bounding triangle
    Random {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Rebuild from scratch after inserting
        #[arg(long)]
        triangulate: bool,
    },
    /// Insert the built-in sample points, then rebuild
    Demo,
}

/// A triangulation plus counters accumulated across commands.
struct Session {
    tri: Triangulation,
    strict: bool,
    flips: usize,
    unmeshed: Vec<usize>,
}

impl Session {
    fn new(cfg: MeshCfg, strict: bool) -> Self {
        Self {
            tri: Triangulation::with_cfg(cfg),
            strict,
            flips: 0,
            unmeshed: Vec::new(),
        }
    }

    fn apply(&mut self, cmd: &Command) -> Result<()> {
        match cmd {
            Command::Click(p) => self.click(*p),
            Command::Triangulate => {
                tracing::info!(points = self.tri.point_count(), "triangulate");
                let rebuild = self.tri.triangulate();
                self.flips += rebuild.stats.flips;
                if self.strict {
                    if let Some(&index) = rebuild.unmeshed.first() {
                        bail!("point {index} left unmeshed during rebuild");
                    }
                }
                self.unmeshed = rebuild.unmeshed;
                Ok(())
            }
            Command::Reset => {
                tracing::info!("reset");
                self.tri.reset();
                self.flips = 0;
                self.unmeshed.clear();
                Ok(())
            }
        }
    }

    fn click(&mut self, p: Vec2<f64>) -> Result<()> {
        tracing::info!(x = p.x, y = p.y, "click");
        let res = if self.strict {
            self.tri.insert_point_strict(p)?
        } else {
            self.tri.insert_point(p)
        };
        match res {
            Insertion::Split(stats) => self.flips += stats.flips,
            Insertion::Unmeshed { index, .. } => self.unmeshed.push(index),
            Insertion::Pending | Insertion::Seeded => {}
        }
        Ok(())
    }

    fn finish(&self, json: bool, edges: bool, validate: bool) -> Result<()> {
        let summary = Summary::new(&self.tri, self.flips, &self.unmeshed);
        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", summary.overlay());
        }
        if edges {
            for line in edge_lines(&self.tri) {
                println!("{line}");
            }
        }
        if validate {
            let bad = check(&self.tri, 1e-9);
            for v in &bad {
                tracing::error!("{v}");
            }
            if !bad.is_empty() {
                bail!("{} property violations", bad.len());
            }
            tracing::info!("mesh is manifold and Delaunay");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = MeshCfg {
        bary_tol: cmd.bary_tol,
        ..MeshCfg::default()
    };
    let mut session = Session::new(cfg, cmd.strict);
    let commands = match cmd.action {
        Action::Replay { script } => load_script(script.as_deref())?,
        Action::Random {
            count,
            seed,
            triangulate,
        } => {
            tracing::info!(count, seed, "random");
            let bounding = session.tri.cfg().bounding;
            let mut cmds: Vec<Command> = uniform_in_triangle(bounding, count, seed)
                .into_iter()
                .map(Command::Click)
                .collect();
            if triangulate {
                cmds.push(Command::Triangulate);
            }
            cmds
        }
        Action::Demo => {
            let mut cmds: Vec<Command> = demo_points().into_iter().map(Command::Click).collect();
            cmds.push(Command::Triangulate);
            cmds
        }
    };
    for c in &commands {
        session.apply(c)?;
    }
    session.finish(cmd.json, cmd.edges, cmd.check)
}
