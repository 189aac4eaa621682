// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explore a dataset from the command line.
//!
//! Loads a JSON data document, selects up to two dimensions, applies filters,
//! and prints the resulting view and the details of the selected node.
//!
//! Run:
//! - `cargo run -p dimlens_demos --example explore_dataset -- demos/data/sample.json -d age -d team -f age=30..`
//! - `RUST_LOG=debug cargo run -p dimlens_demos --example explore_dataset -- demos/data/sample.json -d joined`

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dimlens_demos::{apply_filter_arg, init_tracing};
use dimlens_explorer::{Dataset, Explorer, ExplorerConfig, ViewMode};
use dimlens_value::format_number;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Data document with `nodes` and `dimensions`.
    data: PathBuf,
    /// Explorer configuration document.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Dimension to select; repeat for a scatter plot.
    #[arg(short, long = "dimension")]
    dimensions: Vec<String>,
    /// Filter as `dimension=low..high` or `dimension=label|label`.
    #[arg(short, long = "filter")]
    filters: Vec<String>,
    /// Node whose details to show instead of the first visible one.
    #[arg(short, long)]
    node: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
            ExplorerConfig::from_json_str(&text).map_err(|e| e.to_string())?
        }
        None => ExplorerConfig::default(),
    };
    let file = File::open(&args.data).map_err(|e| format!("{}: {e}", args.data.display()))?;
    let dataset = Dataset::from_reader(BufReader::new(file)).map_err(|e| e.to_string())?;
    let mut explorer = Explorer::with_config(dataset, config);

    for dimension in &args.dimensions {
        explorer.toggle_dimension(dimension);
    }
    if let Some(notice) = explorer.selection_notice() {
        println!("note: {notice}");
    }
    for filter in &args.filters {
        let outcome = apply_filter_arg(&mut explorer, filter)?;
        println!("filter {filter}: {outcome:?}");
    }
    if let Some(node) = &args.node {
        explorer.select_node(Some(node.as_str()));
    }

    println!(
        "{} of {} nodes visible",
        explorer.filtered_nodes().len(),
        explorer.dataset().nodes().len()
    );
    print_view(&explorer);
    print_details(&explorer);
    Ok(())
}

fn print_view(explorer: &Explorer) {
    match explorer.view_mode() {
        ViewMode::Empty => {
            println!("\nselect a dimension to plot; available:");
            for dimension in explorer.dataset().dimensions() {
                println!("  {} ({}, {})", dimension.id, dimension.name, dimension.kind);
            }
        }
        ViewMode::OneD => match explorer.one_d_view() {
            Some(view) => {
                println!("\n{} along x:", view.dimension.name);
                for tick in &view.ticks {
                    println!("  tick {:>8} {}", format_number(tick.offset), tick.label);
                }
                for entry in &view.entries {
                    let marker = if entry.selected { '*' } else { ' ' };
                    let note = if entry.has_value { "" } else { " (no value)" };
                    println!(
                        "{marker} {:>8} {}{note}",
                        format_number(entry.x.round()),
                        entry.node.label
                    );
                }
            }
            None => println!("\nselected dimension is not available"),
        },
        ViewMode::TwoD => match explorer.scatter_view() {
            Some(view) => {
                println!(
                    "\n{} (x) against {} (y):",
                    view.x_dimension.name, view.y_dimension.name
                );
                for point in &view.points {
                    let marker = if point.selected { '*' } else { ' ' };
                    println!(
                        "{marker} ({:>6}, {:>6}) {}",
                        format_number(point.position.x.round()),
                        format_number(point.position.y.round()),
                        point.node.label
                    );
                }
            }
            None => println!("\na selected dimension is not available"),
        },
    }
}

fn print_details(explorer: &Explorer) {
    let Some(details) = explorer
        .selection()
        .selected_node()
        .and_then(|id| explorer.node_details(id))
    else {
        println!("\nno nodes match");
        return;
    };
    println!("\n{} [{}]", details.label, details.id);
    for row in &details.rows {
        println!("  {:<16} {}", row.dimension.name, row.display);
    }
}
