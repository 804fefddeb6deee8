use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use figures::{Coord, Shape, ShapeCollection, ShapeError, ShapeKind, TokenReader};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Build, query and edit collections of planar shapes")]
struct Cmd {
    /// Verbosity of diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Walk through adding, listing, erasing and moving sample shapes
    Demo,
    /// Read shapes from stdin (`x y` pairs) and list their areas and centroids
    Read {
        #[arg(long, value_enum)]
        kind: Kind,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, value_enum, default_value_t = Elem::F64)]
        elem: Elem,
        /// Warn and continue on shapes that fail validation
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print a JSON summary of the sample collection
    Report {
        #[arg(long, value_enum, default_value_t = Elem::F64)]
        elem: Elem,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Square,
    Rectangle,
    Triangle,
}

impl From<Kind> for ShapeKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Square => ShapeKind::Square,
            Kind::Rectangle => ShapeKind::Rectangle,
            Kind::Triangle => ShapeKind::Triangle,
        }
    }
}

/// Coordinate element type.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Elem {
    F64,
    F32,
    I32,
    I64,
}

impl Elem {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Elem::F64 => "f64",
            Elem::F32 => "f32",
            Elem::I32 => "i32",
            Elem::I64 => "i64",
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(Level::from(cmd.log_level))
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Demo => demo::run(),
        Action::Read {
            kind,
            count,
            elem,
            skip_invalid,
        } => {
            let kind = ShapeKind::from(kind);
            match elem {
                Elem::F64 => read::<f64>(kind, count, skip_invalid),
                Elem::F32 => read::<f32>(kind, count, skip_invalid),
                Elem::I32 => read::<i32>(kind, count, skip_invalid),
                Elem::I64 => read::<i64>(kind, count, skip_invalid),
            }
        }
        Action::Report { elem } => {
            let summary = match elem {
                Elem::F64 => report::sample_summary::<f64>(elem)?,
                Elem::F32 => report::sample_summary::<f32>(elem)?,
                Elem::I32 => report::sample_summary::<i32>(elem)?,
                Elem::I64 => report::sample_summary::<i64>(elem)?,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}

fn read<N: Coord>(kind: ShapeKind, count: usize, skip_invalid: bool) -> Result<()> {
    tracing::info!(%kind, count, skip_invalid, "read");
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut reader = TokenReader::new(stdin.lock());
    let mut shapes = ShapeCollection::<N>::new();
    for i in 0..count {
        if interactive {
            println!(
                "Input {} {} vertices (x y format, separated by spaces):",
                kind.vertex_count(),
                kind.name().to_lowercase()
            );
        }
        match Shape::<N>::read(kind, &mut reader) {
            Ok(shape) => shapes.add(shape.into_handle()),
            Err(ShapeError::InvalidGeometry { .. }) if skip_invalid => {
                tracing::warn!(index = i, %kind, "skipping invalid shape");
            }
            Err(e) => return Err(e).with_context(|| format!("reading {kind} #{i}")),
        }
    }

    println!("--- Areas ---");
    shapes.display_areas()?;
    println!("--- Centroids ---");
    shapes.display_centroids()?;
    println!("Total area: {:.2}", shapes.total_area());
    tracing::info!(len = shapes.len(), "read done");
    Ok(())
}
