//! Shared pieces of the `knight-path` command-line tool: argument parsing,
//! random obstacle generation and the printed report.

mod logging;

use clap::Parser;
use knight_core::Square;
use knight_paths::{ObstacleSet, PathError, find_knight_path};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

pub use logging::init_logging;

/// Find the shortest knight path between two squares.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start square in algebraic notation (e.g. a1).
    pub start: String,
    /// Goal square in algebraic notation (e.g. h8).
    pub goal: String,
    /// Blocked square; repeat the flag or separate squares with commas.
    #[arg(short = 'o', long = "obstacle", value_delimiter = ',')]
    pub obstacles: Vec<String>,
    /// Block this many extra random squares (never the start or goal).
    #[arg(long, default_value_t = 0)]
    pub random: usize,
    /// Fix the RNG seed for reproducible obstacles (e.g. --seed 12345).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of one search, as printed by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub start: Square,
    pub goal: Square,
    /// All blocked squares, fixed and random, in board order.
    pub obstacles: Vec<Square>,
    pub path: Option<Vec<String>>,
    pub moves: Option<usize>,
}

impl Report {
    /// One-line human readable summary.
    pub fn to_text(&self) -> String {
        match &self.path {
            Some(path) => {
                let moves = path.len().saturating_sub(1);
                let plural = if moves == 1 { "" } else { "s" };
                format!("{} ({moves} move{plural})", path.join(" -> "))
            }
            None => format!("no path from {} to {}", self.start, self.goal),
        }
    }
}

/// Pick `count` distinct open squares, skipping `fixed` obstacles and the
/// `keep_clear` squares. Fewer are returned if the board runs out.
pub fn random_obstacles(
    rng: &mut StdRng,
    count: usize,
    fixed: &ObstacleSet,
    keep_clear: &[Square],
) -> Vec<Square> {
    let mut candidates: Vec<Square> = Square::all()
        .filter(|&sq| !fixed.contains(sq) && !keep_clear.contains(&sq))
        .collect();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates.sort();
    candidates
}

/// Run one search for the parsed command line.
pub fn run(cli: &Cli) -> Result<Report, PathError> {
    let start = knight_core::parse(&cli.start)?;
    let goal = knight_core::parse(&cli.goal)?;
    let mut blocked = ObstacleSet::build(&cli.obstacles)?;

    if cli.random > 0 {
        let mut rng = match cli.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let extra = random_obstacles(&mut rng, cli.random, &blocked, &[start, goal]);
        log::info!("added {} random obstacles", extra.len());
        blocked.extend(extra);
    }

    let obstacles: Vec<Square> = blocked.iter().collect();
    let notations: Vec<String> = obstacles.iter().map(|&sq| knight_core::format(sq)).collect();
    let path = find_knight_path(&cli.start, &cli.goal, &notations[..])?;
    let moves = path.as_ref().map(|p| p.len().saturating_sub(1));

    Ok(Report {
        start,
        goal,
        obstacles,
        path,
        moves,
    })
}
