use anyhow::{Context, Result};
use log::info;
use quad_aspect::config::batch::load_config;
use quad_aspect::io::write_json_file;
use quad_aspect::{Pt2, RectificationReport, Rectifier};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = env::args().nth(1).context(usage())?;
    let config = load_config(Path::new(&config_path))?;
    let principal_point = config.resolve_principal_point();
    info!(
        "aspect_batch: {} quad(s), principal point ({:.1}, {:.1})",
        config.quads.len(),
        principal_point.x,
        principal_point.y
    );

    let rectifier = Rectifier::new(config.options);
    let points: Vec<Vec<Pt2>> = config.quads.iter().map(|q| q.points()).collect();
    let reports = rectifier.process_batch(&points, principal_point);

    let entries: Vec<BatchEntry> = config
        .quads
        .iter()
        .enumerate()
        .zip(reports)
        .map(|((index, quad), report)| BatchEntry {
            label: quad.label.clone().unwrap_or_else(|| format!("quad{index}")),
            report,
        })
        .collect();

    for entry in &entries {
        println!("{:<16} {}", entry.label, entry.report.summary());
    }
    let succeeded = entries.iter().filter(|e| e.report.outcome.is_ok()).count();

    let output = BatchOutput {
        principal_point,
        options: config.options,
        succeeded,
        failed: entries.len() - succeeded,
        results: entries,
    };
    write_json_file(&config.output.result_json, &output)?;
    println!(
        "Saved {} result(s) to {}",
        output.results.len(),
        config.output.result_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: aspect_batch <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchEntry {
    label: String,
    report: RectificationReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchOutput {
    principal_point: Pt2,
    options: quad_aspect::RectifyOptions,
    succeeded: usize,
    failed: usize,
    results: Vec<BatchEntry>,
}
