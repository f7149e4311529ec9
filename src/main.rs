//! Tooltip simulator CLI.
//!
//! Usage:
//!   tooltip-sim position --target 100,100,50,20 --tooltip 80,30 --gravity n --offset 5
//!   tooltip-sim table --target 100,100,50,20 --tooltip 80,30
//!   tooltip-sim demo --options tooltip.json --event mouseenter

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use styled_tooltip::dump::print_tree;
use styled_tooltip::event::{EventQueue, TriggerEvent};
use styled_tooltip::widget::{position, ElementKind, Point, Rect, Size};
use styled_tooltip::{Gravity, SimDocument, TooltipOptions, TooltipRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tooltip-sim")]
#[command(about = "Compute and simulate gravity-positioned tooltips")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tooltip position for one gravity as JSON
    Position {
        /// Target box as left,top,width,height
        #[arg(long, value_parser = parse_rect)]
        target: Rect,

        /// Tooltip box as width,height
        #[arg(long, value_parser = parse_size)]
        tooltip: Size,

        /// Gravity (n, s, e, w, ne, nw, se, sw, en, es, wn, ws)
        #[arg(short, long, default_value = "n")]
        gravity: String,

        /// Signed pixel offset along the pointing axis
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },

    /// Print positions for all twelve gravities
    Table {
        #[arg(long, value_parser = parse_rect)]
        target: Rect,

        #[arg(long, value_parser = parse_size)]
        tooltip: Size,

        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },

    /// Attach a tooltip in a simulated document, replay events, dump the tree
    Demo {
        /// JSON options file
        #[arg(long)]
        options: Option<PathBuf>,

        /// Override the gravity from the options file
        #[arg(short, long)]
        gravity: Option<String>,

        /// Target box as left,top,width,height
        #[arg(long, value_parser = parse_rect, default_value = "100,100,50,20")]
        target: Rect,

        /// Events to fire on the target, in order (click, mouseenter, mouseleave)
        #[arg(short, long = "event")]
        events: Vec<String>,
    },
}

#[derive(Serialize)]
struct Placement {
    gravity: Gravity,
    arrow: Size,
    #[serde(flatten)]
    position: Point,
}

impl Placement {
    fn compute(target: Rect, tooltip: Size, gravity: Gravity, offset: i32) -> Self {
        let arrow = gravity.arrow().size;
        Self {
            gravity,
            arrow,
            position: position(target, tooltip, arrow, gravity, offset),
        }
    }
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    values
        .try_into()
        .map_err(|v: Vec<f32>| format!("expected {N} comma-separated numbers, got {}", v.len()))
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [left, top, width, height] = parse_numbers::<4>(s)?;
    Ok(Rect::new(left, top, width, height))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let [width, height] = parse_numbers::<2>(s)?;
    Ok(Size::new(width, height))
}

fn run_demo(
    options: Option<PathBuf>,
    gravity: Option<String>,
    target_rect: Rect,
    events: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = match options {
        Some(path) => TooltipOptions::from_path(&path)?,
        None => TooltipOptions::new("images").size(80.0, 30.0).content("Tooltip"),
    };
    if let Some(gravity) = gravity {
        options.gravity = Some(gravity);
    }

    let mut doc = SimDocument::new();
    let target = doc.add_element(doc.root(), ElementKind::Span, target_rect)?;
    let mut registry = TooltipRegistry::new();
    registry.attach(&mut doc, target, &options)?;

    let mut queue = EventQueue::new();
    for name in &events {
        match TriggerEvent::from_str(name) {
            Some(event) => queue.push(target, event),
            None => tracing::warn!("Ignoring unknown event {:?}", name),
        }
    }
    for (element, event) in queue.drain() {
        let handled = registry.dispatch(&mut doc, element, event)?;
        tracing::info!("{} on {} (handled: {})", event, element, handled);
    }

    print_tree(&doc);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Position {
            target,
            tooltip,
            gravity,
            offset,
        } => {
            let placement = Placement::compute(target, tooltip, Gravity::normalize(&gravity), offset);
            println!("{}", serde_json::to_string_pretty(&placement)?);
        }
        Commands::Table {
            target,
            tooltip,
            offset,
        } => {
            let rows: Vec<Placement> = Gravity::ALL
                .iter()
                .map(|g| Placement::compute(target, tooltip, *g, offset))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Commands::Demo {
            options,
            gravity,
            target,
            events,
        } => run_demo(options, gravity, target, events)?,
    }
    Ok(())
}
