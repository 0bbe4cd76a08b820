//! Interactive configuration prompt.
//!
//! Builds a [`TransformPlan`] by asking, for each detected column, which
//! transformation to apply, then optionally asking for an output column
//! order. Prompts go to stderr so stdout stays free for data.

use std::io::{self, BufRead, Write};

use crate::transform::{TransformPlan, Transformation};

/// Build a plan interactively on the controlling terminal.
pub fn build_plan_interactive(columns: &[String]) -> io::Result<TransformPlan> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stderr();
    build_plan(&mut input, &mut out, columns)
}

/// Build a plan by dialogue over the given streams.
///
/// EOF at any point returns the plan built so far.
pub fn build_plan<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    columns: &[String],
) -> io::Result<TransformPlan> {
    writeln!(out, "CSV Transformer")?;
    writeln!(out)?;
    writeln!(out, "Detected columns: {}", columns.join(", "))?;
    writeln!(out)?;
    writeln!(out, "Available transformations:")?;
    for (i, kind) in Transformation::ALL.iter().enumerate() {
        writeln!(out, "  [{}] {}", i + 1, kind)?;
    }
    writeln!(out, "  [0] No transformation")?;

    let mut plan = TransformPlan::new();
    let max = Transformation::ALL.len();

    for column in columns {
        loop {
            write!(out, "Transform '{}' with (0-{}): ", column, max)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(plan);
            }

            match line.trim().parse::<usize>() {
                Ok(0) => break,
                Ok(n) if n <= max => {
                    plan.transforms
                        .insert(column.clone(), Transformation::ALL[n - 1]);
                    break;
                }
                _ => {
                    writeln!(out, "  Please enter a number between 0 and {}", max)?;
                }
            }
        }
    }

    writeln!(out)?;
    write!(out, "Reorder columns? (y/n): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(plan);
    }

    if line.trim().eq_ignore_ascii_case("y") {
        writeln!(out, "Current order: {}", columns.join(", "))?;
        write!(out, "Enter desired order (comma-separated): ")?;
        out.flush()?;

        let mut order_line = String::new();
        if input.read_line(&mut order_line)? > 0 {
            let order: Vec<String> = order_line
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            if !order.is_empty() {
                plan.column_order = Some(order);
            }
        }
    }

    Ok(plan)
}
