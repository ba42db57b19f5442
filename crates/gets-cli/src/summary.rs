use std::fmt::Write;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gets_model::{Readiness, RuleName};
use gets_score::Analysis;
use gets_validate::rule_definition;

/// Issues listed in the table report before the rest are summarised.
const MAX_ISSUE_ROWS: usize = 50;

/// Renders the table report. `styled` enables colors and attributes.
pub fn render_analysis(analysis: &Analysis, styled: bool) -> String {
    let mut out = String::new();
    let readiness = analysis.readiness_level;
    let _ = writeln!(
        out,
        "Overall score: {}/100 ({})",
        analysis.overall_score, readiness
    );
    let validation = &analysis.validation_results;
    let _ = writeln!(
        out,
        "Rows: {} checked, {} passed, {} failed (validation score {}%)",
        validation.rows_checked, validation.passed, validation.failed, validation.score
    );
    let coverage = &analysis.coverage_analysis.summary;
    let _ = writeln!(
        out,
        "Coverage: {}/{} standard fields mapped ({}%)",
        coverage.mapped_fields, coverage.total_standard_fields, coverage.coverage_percentage
    );

    let mut categories = Table::new();
    categories.set_header(vec![header_cell("Category"), header_cell("Score")]);
    apply_summary_table_style(&mut categories, styled);
    align_column(&mut categories, 1, CellAlignment::Right);
    let scores = &analysis.category_scores;
    for (label, score) in [
        ("Data quality", scores.data),
        ("Field coverage", scores.coverage),
        ("Rule compliance", scores.rules),
        ("Technical posture", scores.posture),
    ] {
        categories.add_row(vec![Cell::new(label), score_cell(score)]);
    }
    let _ = writeln!(out, "{categories}");

    let mut rules = Table::new();
    rules.set_header(vec![
        header_cell("Rule"),
        header_cell("Name"),
        header_cell("Passed"),
        header_cell("Failed"),
        header_cell("Success"),
    ]);
    apply_summary_table_style(&mut rules, styled);
    for index in 2..=4 {
        align_column(&mut rules, index, CellAlignment::Right);
    }
    for (rule, result) in &validation.rule_results {
        rules.add_row(vec![
            Cell::new(rule.as_str()).add_attribute(Attribute::Bold),
            Cell::new(rule_definition(*rule).name),
            Cell::new(result.passed),
            count_cell(result.failed),
            Cell::new(format!("{:.0}%", result.success_rate())),
        ]);
    }
    let _ = writeln!(out, "{rules}");

    if !validation.issues.is_empty() {
        let mut issues = Table::new();
        issues.set_header(vec![
            header_cell("Row"),
            header_cell("Rule"),
            header_cell("Field"),
            header_cell("Source"),
            header_cell("Message"),
        ]);
        apply_issue_table_style(&mut issues, styled);
        align_column(&mut issues, 0, CellAlignment::Right);
        for issue in validation.issues.iter().take(MAX_ISSUE_ROWS) {
            let row = match issue.line {
                Some(line) => format!("{}.{line}", issue.row),
                None => issue.row.to_string(),
            };
            issues.add_row(vec![
                Cell::new(row),
                rule_cell(issue.rule),
                text_or_dash(&issue.field),
                text_or_dash(&issue.source_field),
                Cell::new(&issue.error),
            ]);
        }
        let _ = writeln!(out, "Issues:");
        let _ = writeln!(out, "{issues}");
        let hidden = validation.issues.len().saturating_sub(MAX_ISSUE_ROWS);
        if hidden > 0 {
            let _ = writeln!(out, "... and {hidden} more issues (use --format json)");
        }
    }

    let missing: Vec<&str> = analysis
        .coverage_analysis
        .missing_required()
        .map(|field| field.field.as_str())
        .collect();
    if !missing.is_empty() {
        let _ = writeln!(out, "Missing required fields: {}", missing.join(", "));
    }

    let _ = writeln!(out, "Recommendations:");
    for recommendation in &analysis.recommendations {
        let _ = writeln!(out, "- {recommendation}");
    }
    out.trim_end().to_string()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    if !styled {
        table.force_no_tty();
    }
}

fn apply_issue_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if !styled {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn score_cell(score: Option<u8>) -> Cell {
    match score {
        Some(value) => Cell::new(value).fg(readiness_color(Readiness::from_score(value))),
        None => dim_cell("-"),
    }
}

fn readiness_color(readiness: Readiness) -> Color {
    match readiness {
        Readiness::High => Color::Green,
        Readiness::Medium => Color::Cyan,
        Readiness::Low => Color::Yellow,
        Readiness::NeedsAttention => Color::Red,
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn rule_cell(rule: RuleName) -> Cell {
    Cell::new(rule.as_str()).fg(Color::Yellow)
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
