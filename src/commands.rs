// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command implementations for the `belyi` shell.
//!
//! Reporting only: every computation goes through the library.

use belyi_monodromy::dessin::export::ExportFormat;
use belyi_monodromy::{
    build_dessin, compose, cycles, search_with, Cycle, MonodromyTriple, Permutation,
    SearchOptions, SearchStrategy,
};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

pub struct SearchArgs {
    pub degree: usize,
    pub show: Option<usize>,
    pub strategy: SearchStrategy,
    pub export_dir: Option<PathBuf>,
    pub format: ExportFormat,
    pub json: bool,
}

#[derive(Serialize)]
struct TripleSummary<'a> {
    index: usize,
    triple: &'a MonodromyTriple,
    cycles: [Vec<Cycle>; 3],
    passport: belyi_monodromy::monodromy::Passport,
    dessin_components: usize,
}

pub fn run_search(args: SearchArgs) -> Result<(), String> {
    let options = SearchOptions::default().with_strategy(args.strategy);
    let report = search_with(args.degree, &options).map_err(|e| e.to_string())?;
    tracing::info!(
        degree = report.degree,
        strategy = %report.strategy,
        candidates = report.candidates,
        triples = report.triples.len(),
        "search finished"
    );

    let shown = match args.show {
        Some(k) => &report.triples[..k.min(report.triples.len())],
        None => &report.triples[..],
    };

    let summaries: Vec<TripleSummary> = shown
        .iter()
        .enumerate()
        .map(|(i, triple)| TripleSummary {
            index: i + 1,
            triple,
            cycles: [
                cycles(triple.sigma_0()),
                cycles(triple.sigma_1()),
                cycles(triple.sigma_inf()),
            ],
            passport: triple.passport(),
            dessin_components: build_dessin(triple).component_count(),
        })
        .collect();

    if args.json {
        let payload = json!({
            "degree": report.degree,
            "strategy": report.strategy,
            "count": report.triples.len(),
            "candidates": report.candidates,
            "shown": summaries,
        });
        let text = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        println!("=== Degree {} Monodromy Groups ===\n", report.degree);
        println!("Found {} valid permutation triples:", report.triples.len());
        for summary in &summaries {
            let triple = summary.triple;
            println!("\nTriple {}:", summary.index);
            println!("  σ₀ = {}", triple.sigma_0());
            println!("  σ₁ = {}", triple.sigma_1());
            println!("  σ∞ = {}", triple.sigma_inf());
            println!(
                "  Cycles: σ₀={}, σ₁={}, σ∞={}",
                format_cycles(&summary.cycles[0]),
                format_cycles(&summary.cycles[1]),
                format_cycles(&summary.cycles[2])
            );
            println!("  Passport: {}", summary.passport);
            println!("  Dessin components: {}", summary.dessin_components);
        }
    }

    if let Some(dir) = &args.export_dir {
        fs::create_dir_all(dir)
            .map_err(|e| format!("failed to create export directory {}: {e}", dir.display()))?;
        for summary in &summaries {
            let path = dir.join(format!(
                "dessin_{}.{}",
                summary.index,
                args.format.extension()
            ));
            let title = format!("Dessin {}: {}", summary.index, summary.triple);
            let text = build_dessin(summary.triple).export(args.format, &title);
            fs::write(&path, text)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            // stdout carries JSON when requested, so report paths on stderr then
            if args.json {
                eprintln!("Dessin saved to: {}", path.display());
            } else {
                println!("Dessin saved to: {}", path.display());
            }
        }
    }

    Ok(())
}

pub fn run_compose(a: &Permutation, b: &Permutation) -> Result<(), String> {
    let r = compose(a, b).map_err(|e| e.to_string())?;
    println!("{r}");
    println!("{}", r.cycle_notation());
    Ok(())
}

pub fn run_cycles(p: &Permutation, json: bool) -> Result<(), String> {
    let decomposition = cycles(p);
    if json {
        let payload = json!({
            "permutation": p,
            "cycles": decomposition,
            "cycle_type": p.cycle_type(),
        });
        let text = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        println!("{}", format_cycles(&decomposition));
        println!("cycle type: {:?}", p.cycle_type());
    }
    Ok(())
}

pub fn run_dessin(
    sigma_0: Permutation,
    sigma_1: Permutation,
    sigma_inf: Permutation,
    format: ExportFormat,
) -> Result<(), String> {
    let triple = MonodromyTriple::try_new(sigma_0, sigma_1, sigma_inf).map_err(|e| e.to_string())?;
    let title = triple.to_string();
    print!("{}", build_dessin(&triple).export(format, &title));
    Ok(())
}

/// Python-like list rendering, `[[1, 2], [3, 4]]`.
fn format_cycles(cycles: &[Cycle]) -> String {
    let parts: Vec<String> = cycles
        .iter()
        .map(|c| {
            let elements: Vec<String> = c.elements().iter().map(usize::to_string).collect();
            format!("[{}]", elements.join(", "))
        })
        .collect();
    format!("[{}]", parts.join(", "))
}
