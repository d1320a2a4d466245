use crate::error::{CliError, Result};
use crate::ui;
use dialoguer::{Confirm, theme::ColorfulTheme};
use http_probe::{
    FakeTransport, HttpTransport, Outcome, Runner, Transport,
    config::{ProbeConfig, ensure_config_file_exists},
};
use std::path::Path;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub config_path: String,
    pub base_url: Option<String>,
    pub path: Option<String>,
    pub params: Vec<String>,
    pub seed: Option<u64>,
    pub live: bool,
    pub json: bool,
    pub init: bool,
    pub verbose: bool,
}

/// Returns whether the probe cycle ended in the success outcome
pub fn execute(args: RunArgs) -> Result<bool> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: RunArgs) -> Result<bool> {
    let config_path = Path::new(&args.config_path);

    // Check that the configuration file exists, create it if needed
    if args.init || !config_path.exists() {
        if args.init {
            ui::section_header("Probe Configuration Setup");
        } else {
            ui::warning_message("Configuration file not found");
        }

        let should_create = if args.init {
            true
        } else {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Would you like to create a default configuration file?")
                .interact()?
        };

        if !should_create {
            return Err(CliError::Other(
                "A configuration file is required to run the probe".to_string(),
            ));
        }

        ui::status_message("Creating configuration file...");
        let generated = ensure_config_file_exists(&args.config_path, true)?;
        if generated {
            ui::success_message("Configuration file created successfully!");
            ui::info_message(&format!(
                "Edit {} to point the probe at your target",
                config_path.display()
            ));

            // Created on request mid-run: stop here so the user can review it
            if !args.init {
                return Ok(true);
            }
        }
    }

    let mut config = ProbeConfig::load_from_file(config_path)?;
    apply_overrides(&mut config, &args)?;
    config.validate()?;

    if args.verbose {
        ui::info_message(&format!("Target: {}{}", config.base_url, config.path));
        ui::info_message(&format!(
            "Transport: {}",
            if args.live { "live HTTP" } else { "fake (random draw)" }
        ));
        if let Some(seed) = config.seed {
            ui::info_message(&format!("Seed: {}", seed));
        }
    }

    let outcome = if args.live {
        let timeout = config.timeout_seconds.unwrap_or(30);
        let follow_redirects = config.follow_redirects.unwrap_or(true);
        let transport = HttpTransport::new(timeout, follow_redirects)?;
        run_and_report(&args, Runner::new(config, transport)).await?
    } else {
        let transport = match config.seed {
            Some(seed) => FakeTransport::with_seed(seed),
            None => FakeTransport::new(),
        };
        run_and_report(&args, Runner::new(config, transport)).await?
    };

    Ok(outcome.is_success())
}

async fn run_and_report<T: Transport>(args: &RunArgs, runner: Runner<T>) -> Result<Outcome> {
    let outcome = runner.run().await;

    if args.json {
        let payload = serde_json::json!({
            "success": outcome.is_success(),
            "outcome": outcome.name(),
            "line": outcome.line(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", outcome.line());
    }

    if args.verbose {
        ui::info_message(&format!(
            "Resource lock balance: {} acquired, {} released",
            runner.lock().acquire_count(),
            runner.lock().release_count()
        ));
    }

    Ok(outcome)
}

fn apply_overrides(config: &mut ProbeConfig, args: &RunArgs) -> Result<()> {
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(path) = &args.path {
        config.path = path.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    for pair in &args.params {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            CliError::Other(format!("Invalid --param '{}'. Expected KEY=VALUE.", pair))
        })?;
        config.params.insert(key.to_string(), value.to_string());
    }

    Ok(())
}
