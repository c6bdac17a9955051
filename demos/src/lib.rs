//! Terminal front end for the trailmap router.
//!
//! Builds a terrain map from command-line options, validates the route
//! request the way an interactive editor would, runs the router, and draws
//! the map with the route overlaid.

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trailmap_core::{
    Coordinate, Material, TerrainConfig, TerrainMap, parse::WALL_NAME, parse_coordinate_in,
};
use trailmap_paths::{CostMode, PathFinder, PathFinderAlgorithm, path_cost};

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Command-line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "trailmap", version, about = "Find the cheapest route across a terrain grid")]
pub struct Args {
    /// Map width in cells (ignored with --layout)
    #[arg(long, default_value_t = TerrainConfig::default().width)]
    pub width: i32,
    /// Map height in cells (ignored with --layout)
    #[arg(long, default_value_t = TerrainConfig::default().height)]
    pub height: i32,
    /// Terrain as layout rows separated by '/', e.g. "..#/.5./..." ('.' cost 1, digits cost, '#' obstacle)
    #[arg(long)]
    pub layout: Option<String>,
    /// Start cell as "x,y"
    #[arg(long)]
    pub start: String,
    /// End cell as "x,y"
    #[arg(long)]
    pub end: String,
    /// Waypoint "x,y", visited in the order given (repeatable)
    #[arg(long = "via")]
    pub via: Vec<String>,
    /// Mark "x,y" as an obstacle (repeatable)
    #[arg(long = "wall")]
    pub walls: Vec<String>,
    /// Set the cost of a cell, "x,y=cost" (repeatable)
    #[arg(long = "cost")]
    pub costs: Vec<String>,
    /// Cost mode: "costs" or "costs-and-points"
    #[arg(long, default_value_t = CostMode::CostsOnly)]
    pub mode: CostMode,
    /// Fraction of cells to turn into obstacles at random (0.0 - 1.0)
    #[arg(long)]
    pub random_walls: Option<f64>,
    /// Seed for --random-walls
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// Plain output without terminal colours
    #[arg(long)]
    pub no_color: bool,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A route request whose coordinates have been checked against the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub start: Coordinate,
    pub end: Coordinate,
    pub via: Vec<Coordinate>,
    pub mode: CostMode,
}

/// Outcome of one run, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub route: Vec<Coordinate>,
    /// Cost of the route on the unmodified map.
    pub cost: Option<u64>,
    pub picture: String,
}

impl Report {
    pub fn summary(&self) -> String {
        match self.cost {
            Some(cost) if !self.route.is_empty() => {
                format!("route: {} cells, cost {cost}", self.route.len())
            }
            _ => "no path found".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Map construction
// ---------------------------------------------------------------------------

/// Build the terrain described by `args`, without random walls.
pub fn build_map(args: &Args) -> Result<TerrainMap> {
    let mut map = match &args.layout {
        Some(layout) => TerrainMap::from_layout(&layout.replace('/', "\n"))
            .context("invalid --layout")?,
        None => {
            if args.width <= 0 || args.height <= 0 {
                bail!("please use a width and height > 0");
            }
            TerrainMap::from_config(&TerrainConfig::new(args.width, args.height))
        }
    };

    for text in &args.walls {
        let at = parse_coordinate_in(text, map.bounds())
            .with_context(|| format!("invalid --wall {text:?}"))?;
        map.set(at, Material::wall(WALL_NAME))?;
    }
    for text in &args.costs {
        let (at, cost) = parse_cost_edit(text, &map)
            .with_context(|| format!("invalid --cost {text:?}"))?;
        map.get_mut(at)?.set_cost(cost);
    }
    Ok(map)
}

/// Parse `"x,y=cost"`. Negative costs are accepted and clamp to 0 when
/// applied.
pub fn parse_cost_edit(text: &str, map: &TerrainMap) -> Result<(Coordinate, i64)> {
    let Some((coord, cost)) = text.split_once('=') else {
        bail!("expected \"x,y=cost\"");
    };
    let at = parse_coordinate_in(coord, map.bounds())?;
    let cost = cost
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid cost {:?}", cost.trim()))?;
    Ok((at, cost))
}

/// Parse and bounds-check the route coordinates in `args`.
pub fn parse_request(args: &Args, map: &TerrainMap) -> Result<Request> {
    let bounds = map.bounds();
    let start = parse_coordinate_in(&args.start, bounds).context("invalid --start")?;
    let end = parse_coordinate_in(&args.end, bounds).context("invalid --end")?;
    let via = args
        .via
        .iter()
        .enumerate()
        .map(|(i, text)| {
            parse_coordinate_in(text, bounds)
                .with_context(|| format!("invalid waypoint {} {text:?}", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Request {
        start,
        end,
        via,
        mode: args.mode,
    })
}

/// Turn roughly `fraction` of the cells into obstacles, never touching the
/// cells named in `request`.
pub fn scatter_walls(map: &mut TerrainMap, request: &Request, fraction: f64, seed: u64) -> Result<usize> {
    if !(0.0..=1.0).contains(&fraction) {
        bail!("--random-walls must be between 0 and 1, got {fraction}");
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let keep: Vec<Coordinate> = [request.start, request.end]
        .into_iter()
        .chain(request.via.iter().copied())
        .collect();
    let mut placed = 0;
    for p in map.bounds() {
        if keep.contains(&p) || !rng.random_bool(fraction) {
            continue;
        }
        map.set(p, Material::wall(WALL_NAME))?;
        placed += 1;
    }
    log::debug!("scattered {placed} walls (seed {seed})");
    Ok(placed)
}

// ---------------------------------------------------------------------------
// Running and drawing
// ---------------------------------------------------------------------------

/// Build the map, route, and draw the result.
pub fn run(args: &Args) -> Result<Report> {
    let mut map = build_map(args)?;
    let request = parse_request(args, &map)?;
    if let Some(fraction) = args.random_walls {
        scatter_walls(&mut map, &request, fraction, args.seed)?;
    }

    let finder = PathFinderAlgorithm::new();
    let route = finder
        .route_via(&map, request.start, request.end, &request.via, request.mode)
        .context("cannot route")?;
    let cost = if route.is_empty() {
        None
    } else {
        Some(path_cost(&map, &route)?)
    };
    let picture = render(&map, &route, &request, !args.no_color);
    Ok(Report {
        route,
        cost,
        picture,
    })
}

/// Draw `map` one character per cell with `route` overlaid.
///
/// `S` start, `E` end, `o` waypoint, `*` route, `#` obstacle, otherwise
/// the cell's layout character.
pub fn render(map: &TerrainMap, route: &[Coordinate], request: &Request, color: bool) -> String {
    let mut out = String::new();
    let layout = map.to_layout();
    for (y, line) in layout.lines().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let p = Coordinate::new(x as i32, y as i32);
            let glyph = if p == request.start {
                Glyph::Start
            } else if p == request.end {
                Glyph::End
            } else if request.via.contains(&p) {
                Glyph::Waypoint
            } else if route.contains(&p) {
                Glyph::Route
            } else if ch == '#' {
                Glyph::Wall
            } else {
                Glyph::Ground(ch)
            };
            glyph.push_to(&mut out, color);
        }
        out.push('\n');
    }
    out
}

#[derive(Clone, Copy, Debug)]
enum Glyph {
    Start,
    End,
    Waypoint,
    Route,
    Wall,
    Ground(char),
}

impl Glyph {
    fn push_to(self, out: &mut String, color: bool) {
        let ch = match self {
            Glyph::Start => 'S',
            Glyph::End => 'E',
            Glyph::Waypoint => 'o',
            Glyph::Route => '*',
            Glyph::Wall => '#',
            Glyph::Ground(ch) => ch,
        };
        if !color {
            out.push(ch);
            return;
        }
        let styled = match self {
            Glyph::Start | Glyph::End => ch.green().bold().to_string(),
            Glyph::Waypoint => ch.yellow().bold().to_string(),
            Glyph::Route => ch.red().to_string(),
            Glyph::Wall => ch.dark_grey().to_string(),
            Glyph::Ground(_) => ch.to_string(),
        };
        out.push_str(&styled);
    }
}
