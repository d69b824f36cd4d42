//! # Sectify CLI Application
//!
//! Terminal-based column design and detailing demo: prompts for section
//! parameters, sizes the bars, lays out the cross-section, and prints a
//! report plus JSON for LLM/API use.

use std::io::{self, BufRead, Write};

use section_core::design::column::{calculate, ColumnDesignInput};
use section_core::layout::{layout_section, BarRole};
use section_core::paths::stirrup_path;
use section_core::rebar::BarSize;
use section_core::units::{KiloNewtons, Millimeters};

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

fn main() {
    println!("Sectify CLI - Column Design & Detailing");
    println!("========================================");
    println!();

    let width_mm = prompt_f64("Enter column width (mm) [300]: ", 300.0);
    let depth_mm = prompt_f64("Enter column depth (mm) [300]: ", 300.0);
    let axial_kn = prompt_f64("Enter ultimate axial load (kN) [1500]: ", 1500.0);
    let fcu = prompt_f64("Enter concrete cube strength (N/mm²) [30]: ", 30.0);
    let cover_mm = prompt_f64("Enter cover (mm) [40]: ", 40.0);

    println!();
    println!("Designing column with fy = 500 N/mm² steel and H8 links...");
    println!();

    let input = ColumnDesignInput {
        label: "CLI-Demo".to_string(),
        axial_load_kn: axial_kn,
        concrete_strength_nmm2: fcu,
        steel_strength_nmm2: 500.0,
        width_mm,
        depth_mm,
    };

    let result = match calculate(&input) {
        Ok(result) => result,
        Err(e) => {
            report_error(&e);
            return;
        }
    };

    let spec = result.detailing_spec(&input, cover_mm, BarSize::H8, 1.0);
    let layout = match layout_section(&spec) {
        Ok(layout) => layout,
        Err(e) => {
            report_error(&e);
            return;
        }
    };

    let side_bars = layout
        .bars
        .iter()
        .filter(|b| b.role == BarRole::Side)
        .count();

    println!("═══════════════════════════════════════");
    println!("  COLUMN DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Section:  {} x {}", Millimeters(width_mm), Millimeters(depth_mm));
    println!("  Load:     {}", KiloNewtons(axial_kn));
    println!("  Concrete: fcu = {:.0} N/mm², cover = {}", fcu, Millimeters(cover_mm));
    println!();
    println!("Reinforcement:");
    println!("  Required: {:.0} mm²", result.required_area_mm2);
    println!(
        "  Provided: {}{} = {:.0} mm² ({:.1}% of section)",
        result.bar_count,
        result.bar_size,
        result.provided_area_mm2,
        result.steel_ratio * 100.0
    );
    println!(
        "  Capacity: {} ({:.2} utilized) {}",
        KiloNewtons(result.capacity_kn),
        result.utilization,
        status_icon(result.passes())
    );
    println!();
    println!("Detailing:");
    println!("  Bars: 4 corner + {} side", side_bars);
    match stirrup_path(width_mm, depth_mm, cover_mm, BarSize::H8) {
        Ok(path) => println!(
            "  Link cutting length: {} (incl. hooks)",
            Millimeters(path.total_length_mm().round())
        ),
        Err(e) => println!("  Link cutting length: n/a ({})", e),
    }
    for warning in &layout.warnings {
        println!("  WARNING: {:?}", warning);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if result.passes() { "PASS" } else { "FAIL" }
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
    println!();
    println!("Layout JSON (for rendering backends):");
    if let Ok(json) = serde_json::to_string_pretty(&layout) {
        println!("{}", json);
    }
}

fn report_error(e: &section_core::SectionError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(&e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
