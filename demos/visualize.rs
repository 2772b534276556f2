//! Terminal replay of a shortest-path search.
//!
//! Run: cargo run --bin visualize -- [CONFIG.json] [--walls] [--seed N] [--instant]
//!
//! Set `RUST_LOG=debug` to see search and scheduling summaries.

use std::error::Error;
use std::io::Write;

use log::info;
use pathviz_anim::Session;
use pathviz_core::VisualizerConfig;
use pathviz_demos::Frame;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    walls: bool,
    seed: Option<u64>,
    instant: bool,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--walls" => args.walls = true,
            "--instant" => args.instant = true,
            "--seed" => {
                let v = it.next().ok_or("--seed needs a value")?;
                args.seed = Some(v.parse()?);
            }
            s if s.starts_with("--") => return Err(format!("unknown flag {s}").into()),
            _ => args.config = Some(arg),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&str>) -> Result<VisualizerConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(VisualizerConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = Session::new(config, rng)?;
    if args.walls {
        session.randomize_walls();
    }

    let outcome = session.visualize()?.clone();
    info!(
        "{} nodes visited, path {}",
        outcome.visited.len(),
        outcome
            .hops()
            .map_or_else(|| "not found".to_string(), |h| format!("of {h} hops"))
    );

    let mut frame = Frame::new(session.grid());
    let mut out = std::io::stdout().lock();
    if args.instant {
        session.finish(&mut frame);
        write!(out, "{frame}")?;
    } else {
        // Clear once, then redraw in place from the top-left corner.
        write!(out, "\x1b[2J\x1b[H{frame}")?;
        out.flush()?;
        while let Some(wait) = session.next_due() {
            std::thread::sleep(wait);
            if session.advance(wait, &mut frame) > 0 {
                write!(out, "\x1b[H{frame}")?;
                out.flush()?;
            }
        }
    }
    writeln!(
        out,
        "visited {}, path {}",
        frame.visits(),
        if outcome.found() {
            format!("{} nodes", frame.path_len())
        } else {
            "not found".to_string()
        }
    )?;
    Ok(())
}
