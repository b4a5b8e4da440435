use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use symgroup::cfg::MAX_VERTICES;
use symgroup::plane_map::{dual_code, gyro_code};
use symgroup::relabel::{mirror, shuffle};
use symgroup::report::Report;
use symgroup::{families, GroupPattern, Workspace};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod planar_code;

use planar_code::{write_code, write_header, PlanarCodeReader};

#[derive(Parser)]
#[command(name = "symgroup", version)]
#[command(about = "Point groups of plane maps in planar_code")]
struct Cmd {
    /// Log more (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the point group of every map in a planar_code stream
    Classify {
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Only print maps whose group matches, e.g. `D5h`, `C*v`, `S6`
        #[arg(long)]
        only: Option<GroupPattern>,
    },
    /// Write one standard map as planar_code
    Generate {
        #[arg(long, value_enum)]
        family: Family,
        /// Ring size for the parametric families
        #[arg(long)]
        n: Option<usize>,
        /// Replace the map by its gyro (drops all reflections)
        #[arg(long)]
        gyro: bool,
        /// Write the dual map instead
        #[arg(long)]
        dual: bool,
        /// Write the mirror image
        #[arg(long)]
        mirror: bool,
        /// Randomly relabel vertices and rotation starts with this seed
        #[arg(long)]
        shuffle_seed: Option<u64>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Family {
    Tetrahedron,
    Octahedron,
    Cube,
    Dodecahedron,
    Icosahedron,
    Prism,
    Antiprism,
    Pyramid,
    Bipyramid,
    GyroelongatedBipyramid,
    ChiralAntiprism,
    PyritohedralCube,
}

/// Derived-map steps applied after the family is generated, in field order.
#[derive(Clone, Copy, Debug, Default)]
struct Steps {
    gyro: bool,
    dual: bool,
    mirror: bool,
    shuffle_seed: Option<u64>,
}

/// Counts for one classify run, logged when the stream is done.
#[derive(Debug, Default, Serialize)]
struct Summary {
    graphs: usize,
    printed: usize,
    groups: BTreeMap<String, usize>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Classify {
            input,
            format,
            only,
        } => {
            let bytes = read_input(input.as_deref())?;
            let stdout = std::io::stdout();
            let summary = classify(&bytes, format, only, &mut stdout.lock())?;
            tracing::info!(
                graphs = summary.graphs,
                printed = summary.printed,
                groups = %serde_json::to_string(&summary.groups)?,
                "summary"
            );
            Ok(())
        }
        Action::Generate {
            family,
            n,
            gyro,
            dual,
            mirror,
            shuffle_seed,
            out,
        } => {
            let steps = Steps {
                gyro,
                dual,
                mirror,
                shuffle_seed,
            };
            let code = generate(family, n, steps)?;
            tracing::info!(?family, nv = code[0], "generated");
            match out {
                Some(path) => {
                    let mut file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    write_planar_code(&mut file, &code)
                }
                None => write_planar_code(&mut std::io::stdout().lock(), &code),
            }
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("reading stdin")?;
            Ok(bytes)
        }
    }
}

/// Classify every map of `bytes` and write one line per printed map to `out`.
///
/// Lines written before a failing map are flushed before the error is returned.
fn classify<W: Write>(
    bytes: &[u8],
    format: Format,
    only: Option<GroupPattern>,
    out: &mut W,
) -> Result<Summary> {
    let mut ws = Workspace::new();
    let mut summary = Summary::default();
    for (i, code) in PlanarCodeReader::new(bytes)?.enumerate() {
        let graph = i + 1;
        let classified = code
            .and_then(|code| ws.classify(&code).map_err(Into::into))
            .with_context(|| format!("graph {graph}"));
        let classification = match classified {
            Ok(c) => c,
            Err(err) => {
                out.flush()?;
                return Err(err);
            }
        };
        summary.graphs += 1;
        *summary
            .groups
            .entry(classification.group.to_string())
            .or_default() += 1;
        if only.is_some_and(|p| !p.matches(classification.group)) {
            continue;
        }
        let report = Report::new(graph, ws.map(), &classification);
        match format {
            Format::Text => writeln!(out, "{report}")?,
            Format::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
        }
        summary.printed += 1;
    }
    out.flush()?;
    Ok(summary)
}

fn generate(family: Family, n: Option<usize>, steps: Steps) -> Result<Vec<u32>> {
    let ring = |min: usize, vertices_per_step: usize| -> Result<usize> {
        let Some(n) = n else {
            bail!("--n is required for {family:?}");
        };
        if n < min {
            bail!("--n must be at least {min} for {family:?}");
        }
        if n * vertices_per_step + 2 > MAX_VERTICES {
            bail!("--n {n} exceeds the vertex limit {MAX_VERTICES}");
        }
        Ok(n)
    };
    let mut code = match family {
        Family::Tetrahedron => families::tetrahedron(),
        Family::Octahedron => families::octahedron(),
        Family::Cube => families::cube(),
        Family::Dodecahedron => families::dodecahedron(),
        Family::Icosahedron => families::icosahedron(),
        Family::Prism => families::prism(ring(3, 2)?),
        Family::Antiprism => families::antiprism(ring(3, 2)?),
        Family::Pyramid => families::pyramid(ring(3, 1)?),
        Family::Bipyramid => families::bipyramid(ring(3, 1)?),
        Family::GyroelongatedBipyramid => families::gyroelongated_bipyramid(ring(3, 2)?),
        Family::ChiralAntiprism => families::chiral_antiprism(ring(4, 3)?),
        Family::PyritohedralCube => families::pyritohedral_cube(),
    };
    let mut ws = Workspace::new();
    if steps.gyro {
        let map = ws.load(&code).context("loading map for the gyro")?;
        code = gyro_code(map);
        if code[0] as usize > MAX_VERTICES {
            bail!("gyro has {} vertices, above the limit {MAX_VERTICES}", code[0]);
        }
    }
    if steps.dual {
        let map = ws.load(&code).context("loading map for the dual")?;
        code = dual_code(map);
    }
    if steps.mirror {
        code = mirror(&code)?;
    }
    if let Some(seed) = steps.shuffle_seed {
        code = shuffle(&code, &mut StdRng::seed_from_u64(seed))?;
    }
    Ok(code)
}

fn write_planar_code<W: Write>(out: &mut W, code: &[u32]) -> Result<()> {
    write_header(out)?;
    write_code(out, code)?;
    out.flush()?;
    Ok(())
}
