//! # Headloss CLI Application
//!
//! Terminal front end for the Hazen-Williams head loss calculator.
//!
//! - `headloss` / `headloss interactive` - prompt for each value, re-asking
//!   until the field is valid
//! - `headloss calc ...` - one-shot calculation from flags, optionally as JSON
//! - `headloss fittings` - print the fitting equivalent-length catalog

mod error;
mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::Level;

use headloss_core::calculations::head_loss::{check_field, parse_number};
use headloss_core::{
    Advisory, CalcError, CalcOptions, CalcResult, CalculationInput, FittingTally, FittingType, HeadLossCalculator,
    InputField, MaterialCoefficient, NominalDiameter, PipeMaterial,
};

use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "headloss")]
#[command(about = "Headloss CLI - Hazen-Williams pipe head loss calculator", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for each value (default)
    Interactive,
    /// Calculate from command-line values
    Calc(CalcArgs),
    /// Print the fitting equivalent-length catalog
    Fittings {
        /// Only show this material
        #[arg(long)]
        material: Option<String>,
        /// Only show this nominal diameter (50, 75 or 100)
        #[arg(long)]
        dn: Option<u32>,
    },
}

#[derive(Args)]
struct CalcArgs {
    /// Flow rate (m³/h)
    #[arg(long)]
    flow: String,
    /// Internal diameter (mm)
    #[arg(long)]
    diameter: String,
    /// Straight pipe length (m)
    #[arg(long)]
    length: String,
    /// Equivalent length of fittings (m), added to any catalog fittings
    #[arg(long, default_value = "0")]
    equivalent_length: String,
    /// Pipe material (PVC, Copper, Steel; Portuguese names accepted)
    #[arg(long, default_value = "PVC")]
    material: String,
    /// Nominal diameter for catalog lookups (50, 75 or 100)
    #[arg(long)]
    dn: Option<u32>,
    /// Catalog fitting as TYPE=QTY (e.g. elbow90=4), repeatable
    #[arg(long = "fitting", value_name = "TYPE=QTY")]
    fittings: Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Omit the +10% margin
    #[arg(long)]
    compact: bool,
    /// Omit the reminder to add static head
    #[arg(long)]
    no_static_head: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            render::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => cmd_interactive(),
        Commands::Calc(args) => cmd_calc(args),
        Commands::Fittings { material, dn } => Ok(cmd_fittings(material.as_deref(), dn)?),
    }
}

fn calc_options(args: &CalcArgs) -> CalcOptions {
    CalcOptions::full()
        .with_ten_percent_margin(!args.compact)
        .with_static_head_reminder(!args.no_static_head)
}

fn cmd_calc(args: CalcArgs) -> CliResult<()> {
    let options = calc_options(&args);

    let flow = parse_number(&args.flow, InputField::FlowRate)?;
    let diameter_mm = parse_number(&args.diameter, InputField::InternalDiameter)?;
    let length = parse_number(&args.length, InputField::StraightLength)?;
    let material = MaterialCoefficient::parse(&args.material);

    let mut tally = FittingTally::new()
        .with_additional_m(parse_number(&args.equivalent_length, InputField::TotalEquivalentLength)?);
    for arg in &args.fittings {
        let (fitting, quantity) = parse_fitting_arg(arg)?;
        tally.add(fitting, quantity);
    }

    let total_equivalent_length_m = if tally.has_fittings() {
        let dn = resolve_dn(args.dn, diameter_mm)?;
        tally.total_equivalent_length(material.material(), dn)?.value()
    } else {
        tally.additional_m
    };

    let input = CalculationInput::new(flow, diameter_mm, length, total_equivalent_length_m, material);
    let result = HeadLossCalculator::new(options).compute(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render::print_result(&input, &result);
    }
    Ok(())
}

/// Parse `TYPE=QTY`; a bare `TYPE` counts as one fitting.
fn parse_fitting_arg(arg: &str) -> CalcResult<(FittingType, u32)> {
    let (name, quantity) = match arg.split_once('=') {
        Some((name, qty)) => {
            let qty: u32 = qty
                .trim()
                .parse()
                .map_err(|_| CalcError::invalid_fitting_quantity(arg))?;
            (name, qty)
        }
        None => (arg, 1),
    };
    Ok((FittingType::from_str_flexible(name)?, quantity))
}

/// Catalog diameter from `--dn`, or from the internal diameter when it
/// happens to be a catalog size.
fn resolve_dn(dn: Option<u32>, diameter_mm: f64) -> CalcResult<NominalDiameter> {
    let mm = match dn {
        Some(mm) => mm,
        None if diameter_mm.fract() == 0.0 && diameter_mm > 0.0 && diameter_mm <= f64::from(u32::MAX) => {
            diameter_mm as u32
        }
        None => 0,
    };
    NominalDiameter::from_mm(mm).ok_or_else(|| CalcError::CatalogEntryMissing {
        fitting: "any fitting".to_string(),
        material: "any material".to_string(),
        diameter: format!("{} mm (use --dn 50, 75 or 100)", dn.map_or(diameter_mm, f64::from)),
    })
}

fn cmd_fittings(material: Option<&str>, dn: Option<u32>) -> CalcResult<()> {
    let (material, notice) = match material {
        Some(name) => {
            let (material, notice) = catalog_material(name);
            (Some(material), notice)
        }
        None => (None, None),
    };
    let diameter = match dn {
        Some(mm) => Some(resolve_dn(Some(mm), f64::from(mm))?),
        None => None,
    };
    if let Some(notice) = notice {
        render::print_notice(&notice);
    }
    render::print_catalog(material, diameter);
    Ok(())
}

/// Catalog column for a material name, with the fallback notice when the
/// name was not recognized.
fn catalog_material(name: &str) -> (PipeMaterial, Option<Advisory>) {
    let material = MaterialCoefficient::parse(name);
    (material.material(), Advisory::for_material(&material))
}

// ============================================================================
// Interactive mode
// ============================================================================

fn cmd_interactive() -> CliResult<()> {
    println!("Headloss - Pipe Head Loss Calculator");
    println!("====================================");
    println!("(Hazen-Williams formula)");
    println!();

    let flow = prompt_field(InputField::FlowRate)?;
    let diameter = prompt_field(InputField::InternalDiameter)?;
    let length = prompt_field(InputField::StraightLength)?;
    let material = MaterialCoefficient::parse(&prompt_line("Pipe material (PVC, Copper, Steel): ")?);
    let total_equivalent_length_m = prompt_equivalent_length(&material)?;

    let input = CalculationInput::new(flow, diameter, length, total_equivalent_length_m, material);
    let result = HeadLossCalculator::new(CalcOptions::full()).compute(&input)?;
    println!();
    render::print_result(&input, &result);
    Ok(())
}

/// Either sum fittings from the catalog or take the total directly.
fn prompt_equivalent_length(material: &MaterialCoefficient) -> CliResult<f64> {
    let text = prompt_line("Nominal diameter for the fitting catalog (50/75/100, blank to skip): ")?;
    if text.trim().is_empty() {
        return prompt_field(InputField::TotalEquivalentLength);
    }

    match text.trim().parse::<u32>().ok().and_then(NominalDiameter::from_mm) {
        Some(dn) => {
            let tally = prompt_tally()?;
            let total = tally.total_equivalent_length(material.material(), dn)?;
            println!("Total equivalent length of fittings: {:.2} m", total.value());
            Ok(total.value())
        }
        None => {
            println!("Not a catalog diameter; enter the equivalent length directly.");
            prompt_field(InputField::TotalEquivalentLength)
        }
    }
}

fn prompt_tally() -> CliResult<FittingTally> {
    let mut tally = FittingTally::new();
    println!("Enter the quantity of each fitting (blank = 0):");
    for fitting in FittingType::ALL {
        loop {
            let text = prompt_line(&format!("  {}: ", fitting.display_name()))?;
            match text.trim() {
                "" => break,
                t => match t.parse::<u32>() {
                    Ok(qty) => {
                        tally.add(fitting, qty);
                        break;
                    }
                    Err(_) => println!("  Enter a whole number."),
                },
            }
        }
    }
    let extra = loop {
        let text = prompt_line("Additional equivalent length (m) [0]: ")?;
        if text.trim().is_empty() {
            break 0.0;
        }
        match parse_number(&text, InputField::TotalEquivalentLength)
            .and_then(|v| check_field(InputField::TotalEquivalentLength, v))
        {
            Ok(v) => break v,
            Err(e) => println!("Error: {}. Try again.", e),
        }
    };
    Ok(tally.with_additional_m(extra))
}

/// Ask for one numeric field until it passes validation.
fn prompt_field(field: InputField) -> CliResult<f64> {
    loop {
        let text = prompt_line(&format!("{}: ", field.label()))?;
        match parse_number(&text, field).and_then(|v| check_field(field, v)) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(%field, input = %text.trim(), "rejected input");
                println!("Error: {}. Try again.", e);
            }
        }
    }
}

fn prompt_line(prompt: &str) -> CliResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Err(CliError::InputClosed);
    }
    Ok(input)
}
