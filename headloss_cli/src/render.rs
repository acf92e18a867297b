//! Plain-text rendering of calculation results and the fitting catalog.

use headloss_core::calculations::head_loss::MarginRecommendations;
use headloss_core::materials::fittings::{catalog, FittingEntry};
use headloss_core::{Advisory, CalculationInput, CalculationResult, NominalDiameter, PipeMaterial};

use crate::error::CliError;

const RULE: &str = "═══════════════════════════════════════";

/// Print a calculation as a human-readable report.
pub fn print_result(input: &CalculationInput, result: &CalculationResult) {
    println!("{RULE}");
    println!("  HEAD LOSS RESULTS");
    println!("{RULE}");
    println!();
    println!("Input:");
    println!("  Flow:       {:.2} m³/h", input.flow_rate_m3_per_hour);
    println!("  Diameter:   {:.1} mm (internal)", input.internal_diameter_mm);
    println!("  Length:     {:.2} m straight + {:.2} m equivalent", input.straight_length_m, input.total_equivalent_length_m);
    println!("  Material:   {} (C={:.0})", input.material, result.hazen_williams_c);
    println!();
    println!("Losses:");
    println!("  Linear (Hf):     {:.3} mca", result.linear_loss_mca);
    println!("  Localized (Hl):  {:.3} mca", result.localized_loss_mca);
    println!("  TOTAL (ΔH):      {:.3} mca", result.total_loss_mca);
    println!("  Velocity:        {:.2} m/s {}", result.velocity_m_per_s, status_icon(result.velocity_in_range()));

    if !result.advisories.is_empty() {
        println!();
        for advisory in &result.advisories {
            print_notice(advisory);
        }
    }

    println!();
    print_margins(&result.margins);
    println!("{RULE}");
}

fn print_margins(margins: &MarginRecommendations) {
    println!("Safety recommendations:");
    if let Some(ten) = margins.ten_percent_mca {
        println!("  +10% margin: {:.3} mca", ten);
    }
    println!("  +20% margin: {:.3} mca", margins.twenty_percent_mca);
    if margins.add_static_head {
        println!("  {}", MarginRecommendations::STATIC_HEAD_NOTE);
    }
}

/// Print one advisory line, tagged WARNING or NOTICE.
pub fn print_notice(advisory: &Advisory) {
    let tag = if advisory.is_warning() { "WARNING" } else { "NOTICE" };
    println!("{tag}: {}", advisory.message());
}

/// Print an error; calculator errors are followed by their JSON form.
pub fn print_error(error: &CliError) {
    eprintln!("Error: {}", error);
    let Some(calc) = error.calc() else {
        return;
    };
    if let Ok(json) = serde_json::to_string_pretty(calc) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

/// Print the fitting catalog, optionally filtered.
pub fn print_catalog(material: Option<PipeMaterial>, diameter: Option<NominalDiameter>) {
    let rows: Vec<&FittingEntry> = catalog()
        .iter()
        .filter(|e| material.map_or(true, |m| e.material == m))
        .filter(|e| diameter.map_or(true, |d| e.diameter == d))
        .collect();

    println!("{:<28} {:<8} {:<6} {:>8}", "Fitting", "Material", "DN", "Le (m)");
    println!("{}", "─".repeat(53));
    for e in rows {
        println!(
            "{:<28} {:<8} {:<6} {:>8.1}",
            e.fitting.display_name(),
            e.material.display_name(),
            e.diameter.to_string(),
            e.equivalent_length_m
        );
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[CHECK]" }
}
