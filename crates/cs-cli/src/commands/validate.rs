//! Validate command implementation

use crate::cli::{GlobalArgs, ValidateArgs, ValidateOutput};
use crate::commands::common::{self, ExitCode};
use anyhow::{bail, Context, Result};
use cs_analysis::{build_model, reconcile, PassManager};

/// Execute the validate command
pub(crate) async fn execute(args: &ValidateArgs, global: &GlobalArgs) -> Result<()> {
    let (mut config, layout) = common::load_project(global, args.contracts_only.as_deref())?;

    if let Some(threads) = args.threads {
        if threads == 0 {
            bail!("--threads must be at least 1");
        }
        config.scan.threads = threads;
    }

    if let Some(filter) = &args.pass {
        let available = PassManager::with_defaults().pass_names();
        if let Some(unknown) = filter.iter().find(|p| !available.contains(&p.as_str())) {
            bail!(
                "Unknown pass '{}'. Available passes: {}",
                unknown,
                available.join(", ")
            );
        }
    }

    log::info!("Validating integration in: {}", layout.root.display());
    let model = build_model(&config, &layout)
        .await
        .context("Failed to build contract model")?;
    let report = reconcile(&model, &config, args.pass.as_deref()).with_strict(args.strict);

    match args.output {
        ValidateOutput::Text => print!("{}", report.render_text()),
        ValidateOutput::Json => println!("{}", report.to_json()?),
        ValidateOutput::Jsonl => print!("{}", report.to_jsonl()?),
    }

    if report.passed() {
        Ok(())
    } else {
        Err(ExitCode(1).into())
    }
}
