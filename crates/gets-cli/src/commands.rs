use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use gets_cli::inputs::{load_mapping, load_questionnaire};
use gets_cli::logging::redact_value;
use gets_ingest::{detect_column_types, read_upload};
use gets_map::{MappingSummary, suggest_mappings};
use gets_score::{Analysis, analyze, rule_weight};
use gets_standards::{SchemaRegistry, field_description};
use gets_validate::rule_definitions;
use tracing::{debug, info, info_span, trace};

use crate::cli::{AnalyzeArgs, ReportFormatArg, SuggestArgs};
use crate::summary::{apply_table_style, render_analysis};

pub fn run_fields(registry: &SchemaRegistry) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Path", "Type", "Required", "Constraint", "Description"]);
    apply_table_style(&mut table);
    for field in registry.fields() {
        let constraint = match (&field.allowed_values, &field.pattern) {
            (Some(values), _) => values.join(", "),
            (None, Some(pattern)) => pattern.clone(),
            (None, None) => "-".to_string(),
        };
        table.add_row(vec![
            field.path.clone(),
            field.field_type.to_string(),
            if field.required { "yes" } else { "no" }.to_string(),
            constraint,
            field_description(&field.path).to_string(),
        ]);
    }
    println!("Schema: {} v{}", registry.name(), registry.version());
    println!("{table}");
    Ok(())
}

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Name", "Category", "Weight", "Description"]);
    apply_table_style(&mut table);
    for definition in rule_definitions() {
        table.add_row(vec![
            definition.rule.to_string(),
            definition.name.to_string(),
            definition.category.to_string(),
            format!("{:.2}", rule_weight(definition.rule)),
            definition.description.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_suggest(args: &SuggestArgs, registry: &SchemaRegistry) -> Result<()> {
    let span = info_span!("suggest", file = %args.file.display());
    let _guard = span.enter();

    let upload = read_upload(&args.file)
        .with_context(|| format!("read upload: {}", args.file.display()))?;
    for (column, detected) in detect_column_types(&upload.rows) {
        debug!(column = %column, detected = %detected, "column type");
    }
    let mapping = suggest_mappings(&upload.columns, registry);
    let summary = MappingSummary::new(&mapping, registry);
    info!(
        columns = summary.source_columns,
        mapped = summary.mapped_fields,
        standard_fields = summary.total_standard_fields,
        required = summary.required_mapped,
        required_total = summary.required_total,
        "mapping suggested"
    );
    let json = serde_json::to_string_pretty(&mapping).context("serialize mapping")?;
    write_output(args.output.as_deref(), &json)
}

pub fn run_analyze(args: &AnalyzeArgs, registry: &SchemaRegistry) -> Result<Analysis> {
    let span = info_span!("analyze", file = %args.file.display());
    let _guard = span.enter();

    let mapping = load_mapping(&args.mapping, registry)?;
    let questionnaire = match &args.questionnaire {
        Some(path) => load_questionnaire(path)?,
        None => None,
    };
    let upload = read_upload(&args.file)
        .with_context(|| format!("read upload: {}", args.file.display()))?;

    let analysis = analyze(&upload.rows, &mapping, questionnaire.as_ref(), registry);
    for issue in &analysis.validation_results.issues {
        trace!(
            row = issue.row,
            rule = %issue.rule,
            field = %issue.field,
            value = redact_value(&issue.value.to_string()),
            "issue"
        );
    }
    info!(
        overall = analysis.overall_score,
        readiness = %analysis.readiness_level,
        "analysis complete"
    );

    match args.format {
        ReportFormatArg::Json => {
            let json = serde_json::to_string_pretty(&analysis).context("serialize analysis")?;
            write_output(args.output.as_deref(), &json)?;
        }
        ReportFormatArg::Table => {
            let styled = args.output.is_none();
            write_output(args.output.as_deref(), &render_analysis(&analysis, styled))?;
        }
    }
    Ok(analysis)
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("write stdout")?;
        }
    }
    Ok(())
}
