//! csvscrub CLI - column-wise CSV transformation
//!
//! # Commands
//!
//! ```bash
//! csvscrub transform -i users.csv -o clean.csv           # interactive plan
//! csvscrub transform -i users.csv -o clean.csv -p plan.json
//! csvscrub operations                                    # list kinds
//! csvscrub example-plan                                  # print example plan
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use csvscrub::{
    build_plan_interactive, example_plan, kinds_description, read_csv_file, transform_parsed,
    TransformPlan,
};

#[derive(Parser)]
#[command(name = "csvscrub")]
#[command(about = "Transform CSV columns: pseudonymize IDs, redact names and emails, normalize dates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a CSV file (interactive when no plan is given)
    Transform {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Plan JSON file mapping columns to transformation kinds
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output column order, comma-separated (overrides the plan's order)
        #[arg(long)]
        order: Option<String>,

        /// Save the effective plan to a file (useful after an interactive run)
        #[arg(long)]
        save_plan: Option<PathBuf>,
    },

    /// Show available transformation kinds
    Operations,

    /// Print an example transformation plan
    ExamplePlan,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transform {
            input,
            output,
            plan,
            delimiter,
            order,
            save_plan,
        } => cmd_transform(
            &input,
            &output,
            plan.as_deref(),
            delimiter,
            order.as_deref(),
            save_plan.as_deref(),
        ),

        Commands::Operations => cmd_operations(),

        Commands::ExamplePlan => cmd_example_plan(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_transform(
    input: &Path,
    output: &Path,
    plan_path: Option<&Path>,
    delimiter: Option<char>,
    order: Option<&str>,
    save_plan: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let parsed = read_csv_file(input, delimiter)?;

    eprintln!("   Encoding: {}", parsed.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(parsed.delimiter),
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", parsed.headers.join(", "));
    eprintln!("   Rows: {}", parsed.records.len());

    let mut plan = match plan_path {
        Some(p) => {
            eprintln!("   Plan: {}", p.display());
            TransformPlan::from_file(p)?
        }
        None => build_plan_interactive(&parsed.headers)?,
    };

    if let Some(order) = order {
        let columns: Vec<String> = order
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if !columns.is_empty() {
            plan.column_order = Some(columns);
        }
    }

    if let Some(save_path) = save_plan {
        std::fs::write(save_path, plan.to_json()?)?;
        eprintln!("   💾 Plan saved to: {}", save_path.display());
    }

    let summary = transform_parsed(parsed, &plan, output)?;

    if summary.ids_mapped > 0 {
        eprintln!("   🔢 Mapped {} distinct identifiers", summary.ids_mapped);
    }
    if summary.output_columns != summary.input_columns {
        eprintln!("   Column order: {}", summary.output_columns.join(", "));
    }
    eprintln!("\n💾 Output saved to: {}", output.display());

    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn cmd_operations() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", kinds_description());
    Ok(())
}

fn cmd_example_plan() -> Result<(), Box<dyn std::error::Error>> {
    let plan = example_plan();
    println!("{}", plan.to_json()?);
    Ok(())
}
