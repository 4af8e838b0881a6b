use super::ui;
use crate::core::sum::{sum_to_n_formula, sum_to_n_iterative, sum_to_n_recursive};
use anyhow::Result;
use comfy_table::Cell;

/// Largest `n` the recursive variant is attempted for; each step adds a
/// stack frame, so unbounded input would abort the process instead of
/// returning the absent result.
const RECURSION_DEPTH_LIMIT: u64 = 10_000;

fn compute_results(n: u64) -> (Option<u64>, Option<u64>, Option<u64>) {
    let iterative = sum_to_n_iterative(n);
    let formula = sum_to_n_formula(n);
    let recursive = if n <= RECURSION_DEPTH_LIMIT {
        sum_to_n_recursive(n)
    } else {
        None
    };
    (iterative, formula, recursive)
}

pub fn run(n: u64) -> Result<()> {
    let (iterative, formula, recursive) = compute_results(n);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Approach"),
        ui::header_cell(&format!("Sum to {n}")),
    ]);
    table.add_row(vec![
        Cell::new("Iterative"),
        ui::format_optional_cell(iterative, |v| v.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Closed form"),
        ui::format_optional_cell(formula, |v| v.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Recursive"),
        ui::format_optional_cell(recursive, |v| v.to_string()),
    ]);
    println!("{table}");

    if n > RECURSION_DEPTH_LIMIT {
        println!(
            "{}",
            ui::style_text(
                &format!("Recursive variant skipped above n = {RECURSION_DEPTH_LIMIT}"),
                ui::StyleType::Subtle,
            )
        );
    }

    Ok(())
}
