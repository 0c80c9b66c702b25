use anyhow::{anyhow, bail, Context, Result};
use lawson::Vec2;
use std::io::Read;
use std::path::Path;

/// One input event, as the interactive viewer would have produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Insert a point (right click).
    Click(Vec2<f64>),
    /// Rebuild from all stored points ("Triangulate" button).
    Triangulate,
    /// Back to the bounding triangle.
    Reset,
}

/// Parse one script line; `None` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();
    let cmd = match head {
        "click" => {
            let x = parse_coord(words.next(), "x")?;
            let y = parse_coord(words.next(), "y")?;
            Command::Click(Vec2::new(x, y))
        }
        "triangulate" => Command::Triangulate,
        "reset" => Command::Reset,
        other => bail!("unknown command `{other}`"),
    };
    if let Some(extra) = words.next() {
        bail!("unexpected argument `{extra}` after `{head}`");
    }
    Ok(Some(cmd))
}

fn parse_coord(word: Option<&str>, name: &str) -> Result<f64> {
    let word = word.ok_or_else(|| anyhow!("missing {name} coordinate"))?;
    let v: f64 = word
        .parse()
        .with_context(|| format!("parsing {name} coordinate `{word}`"))?;
    if !v.is_finite() {
        bail!("{name} coordinate must be finite, got `{word}`");
    }
    Ok(v)
}

/// Parse a whole script; errors carry the 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(cmd) = parse_line(line).with_context(|| format!("line {}", i + 1))? {
            out.push(cmd);
        }
    }
    Ok(out)
}

/// Read a script from `path`, or from stdin when `None`.
pub fn load_script(path: Option<&Path>) -> Result<Vec<Command>> {
    let text = match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading script {}", p.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading script from stdin")?;
            buf
        }
    };
    parse_script(&text)
}
