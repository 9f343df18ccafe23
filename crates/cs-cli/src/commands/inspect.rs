//! Inspect command implementation

use crate::cli::{GlobalArgs, InspectArgs, InspectOutput};
use crate::commands::common::{self, format_table};
use anyhow::{Context, Result};
use cs_analysis::{build_model, ContractModel, PassManager};
use cs_scan::CallKind;
use serde::Serialize;

#[derive(Serialize)]
struct PassInfo {
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct InspectDocument<'a> {
    passes: Vec<PassInfo>,
    model: &'a ContractModel,
}

/// Execute the inspect command
pub(crate) async fn execute(args: &InspectArgs, global: &GlobalArgs) -> Result<()> {
    let (config, layout) = common::load_project(global, None)?;
    let model = build_model(&config, &layout)
        .await
        .context("Failed to build contract model")?;

    match args.output {
        InspectOutput::Json => {
            let passes = PassManager::with_defaults()
                .describe()
                .into_iter()
                .map(|(name, description)| PassInfo { name, description })
                .collect();
            let doc = InspectDocument {
                passes,
                model: &model,
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        InspectOutput::Table => println!("{}", render_tables(&model)),
    }
    Ok(())
}

fn section(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return format!("{} (0)\n", title);
    }
    format!("{} ({})\n{}\n", title, rows.len(), format_table(headers, &rows))
}

fn render_tables(model: &ContractModel) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "Contracts directory: {}\n",
        model.contracts_dir().unwrap_or("(not found)")
    ));

    let files: Vec<Vec<String>> = model
        .contract_files()
        .iter()
        .map(|f| {
            let status = if f.exists { "found" } else { "missing" };
            vec![
                f.file.clone(),
                format!("{:?}", f.kind).to_lowercase(),
                status.to_string(),
            ]
        })
        .collect();
    out.push(section("Contract files", &["FILE", "KIND", "STATUS"], files));

    let rls = model.schema().map(|s| &s.value.rls_enabled);
    let tables: Vec<Vec<String>> = model
        .tables()
        .iter()
        .map(|t| {
            let enabled = rls.is_some_and(|set| set.contains(&t.name));
            vec![
                t.name.clone(),
                t.columns.len().to_string(),
                if enabled { "yes" } else { "no" }.to_string(),
                format!("{}:{}", t.file, t.line),
            ]
        })
        .collect();
    out.push(section("Tables", &["TABLE", "COLUMNS", "RLS", "FILE"], tables));

    let interfaces: Vec<Vec<String>> = model
        .interfaces()
        .map(|e| e.value.interfaces.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|i| {
            vec![
                i.name.clone(),
                i.fields.len().to_string(),
                format!("{}:{}", i.file, i.line),
            ]
        })
        .collect();
    out.push(section("Interfaces", &["INTERFACE", "FIELDS", "FILE"], interfaces));

    let endpoints: Vec<Vec<String>> = model
        .endpoints()
        .map(|e| e.value.templates.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|t| {
            vec![
                t.key.clone().unwrap_or_else(|| "-".to_string()),
                t.path.clone(),
                format!("{}:{}", t.file, t.line),
            ]
        })
        .collect();
    out.push(section("Endpoints", &["KEY", "PATH", "FILE"], endpoints));

    let scan = model.scan();
    let calls: Vec<Vec<String>> = scan
        .calls
        .iter()
        .map(|c| {
            let target = match &c.kind {
                CallKind::Literal => c.path().unwrap_or_default(),
                CallKind::EndpointRef { key } => format!("ref {}", key),
            };
            vec![format!("{}:{}", c.file, c.line), target]
        })
        .collect();
    out.push(section("Call sites", &["LOCATION", "TARGET"], calls));

    let routes: Vec<Vec<String>> = scan
        .routes
        .iter()
        .map(|r| {
            vec![
                r.method.to_string(),
                r.path.clone(),
                format!("{}:{}", r.file, r.line),
            ]
        })
        .collect();
    out.push(section("Routes", &["METHOD", "PATH", "FILE"], routes));

    out.push(format!("{} source file(s) scanned", scan.files_scanned));
    out.join("\n")
}
