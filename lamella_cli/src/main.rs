//! # Lamella CLI
//!
//! Terminal interface for the CLT beam response engine. Prompts for a beam
//! configuration, runs the deflection/moment/shear analyses, prints a
//! summary with sampled diagram tables, and dumps the result bundles as JSON
//! for API/LLM consumers.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use lamella_core::analysis::{Analysis, BeamAnalysis, Condition};
use lamella_core::beam::Beam;
use lamella_core::diagram::{sample, Diagram, DEFAULT_STEP_M};
use lamella_core::materials::{presets, Material};
use lamella_core::units::{KnPerMeter, Meters};
use lamella_core::CalcResult;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn choose_material() -> Material {
    println!("Available materials:");
    for (i, m) in presets().iter().enumerate() {
        println!(
            "  [{}] {} ({} layers, {:.0} mm)",
            i + 1,
            m.name,
            m.layup.len(),
            m.total_thickness_mm()
        );
    }
    let choice = prompt_f64("Select material [2]: ", 2.0) as usize;
    presets()
        .get(choice.saturating_sub(1))
        .cloned()
        .unwrap_or_default()
}

fn print_diagram_table(diagram: &Diagram) {
    println!("  {}", diagram.axis_label);
    println!("  {:>8}  {:>12}", "x (m)", "value");

    let mut rows: Vec<(f64, f64)> = diagram.primary.points.clone();
    if let Some(secondary) = &diagram.secondary {
        rows.extend(secondary.points.iter().copied());
    }
    for (x, y) in rows {
        println!("  {:>8.2}  {:>12.4}", x, y);
    }
    if let Some(extreme) = diagram.extreme {
        println!("  extreme: {:.4} at x = {:.2} m", extreme.y, extreme.x);
    }
    println!();
}

fn run_quantity(analysis: CalcResult<Analysis>, step_m: f64) -> CalcResult<(Analysis, Diagram)> {
    let analysis = analysis?;
    let diagram = sample(&analysis, step_m)?;
    Ok((analysis, diagram))
}

fn main() -> ExitCode {
    println!("Lamella CLI - CLT Beam Response Calculator");
    println!("==========================================");
    println!();

    println!("Conditions:");
    for c in Condition::ALL {
        println!("  {:<20} {}", c.tag(), c.display_name());
    }
    let tag = prompt_str("Condition [simply-supported]: ", "simply-supported");
    let condition = match Condition::from_str(&tag) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let primary_span_m = prompt_f64("Primary span (m) [4.0]: ", 4.0);
    let secondary_span_m = match condition {
        Condition::SimplySupported => 0.0,
        Condition::TwoSpanUnequal => prompt_f64("Secondary span (m) [3.0]: ", 3.0),
    };
    let load_kn_m = prompt_f64("Uniform load (kN/m) [5.0]: ", 5.0);
    let material = choose_material();
    let step_m = prompt_f64("Sampling step (m) [0.1]: ", DEFAULT_STEP_M);

    let beam = Beam::two_span("CLI", primary_span_m, secondary_span_m, material);
    let request = BeamAnalysis::new(beam, load_kn_m, condition);

    let results = [
        run_quantity(request.shear_force(), step_m),
        run_quantity(request.bending_moment(), step_m),
        run_quantity(request.deflection(), step_m),
    ];

    println!();
    println!("═══════════════════════════════════════");
    println!("  BEAM RESPONSE RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Condition: {}", condition.display_name());
    if secondary_span_m > 0.0 {
        println!(
            "  Spans:     {:.2} m + {:.2} m",
            primary_span_m, secondary_span_m
        );
    } else {
        println!("  Span:      {:.2} m", primary_span_m);
    }
    let total_load = KnPerMeter(load_kn_m).over(Meters(request.beam.total_span_m()));
    println!("  Load:      {:.2} kN/m ({:.2} kN total)", load_kn_m, total_load.0);
    println!("  Material:  {}", request.beam.material.name);
    println!();

    let mut analyses: Vec<&Analysis> = Vec::new();
    for result in &results {
        match result {
            Ok((analysis, diagram)) => {
                print_diagram_table(diagram);
                analyses.push(analysis);
            }
            Err(e) => {
                eprintln!("Error [{}]: {}", e.error_code(), e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(shear) = analyses.first() {
        if let Some(r) = shear.equation.reactions() {
            println!("Reactions:");
            println!("  R1 = {:>8.3} kN (left support)", r.r1);
            println!("  R2 = {:>8.3} kN (interior support)", r.r2);
            println!("  R3 = {:>8.3} kN (right support)", r.r3);
            println!("  M1 = {:>8.3} kNm (support moment)", r.m1);
            println!();
        }
    }

    println!("═══════════════════════════════════════");
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&analyses) {
        println!("{}", json);
    }

    ExitCode::SUCCESS
}
