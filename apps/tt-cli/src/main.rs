use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tt_app::{AppResult, IntegratorType, Scenario, load_scenario, run_scenario, to_csv, to_json};

#[derive(Parser)]
#[command(name = "tt-cli")]
#[command(about = "Tanktherm CLI - heated water tank simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and physical parameters
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Print the default scenario as YAML
    Defaults,
    /// Run a simulation
    Run {
        /// Path to the scenario YAML file (defaults to the reference scenario)
        scenario_path: Option<PathBuf>,
        /// Integrator to use
        #[arg(long, value_enum, default_value = "rk4")]
        integrator: IntegratorChoice,
        /// Output file for the series (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export the full run as JSON instead of CSV
        #[arg(long)]
        json: bool,
        /// Print the summary only, skip series output
        #[arg(long)]
        summary_only: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum IntegratorChoice {
    Rk4,
    Euler,
}

impl From<IntegratorChoice> for IntegratorType {
    fn from(choice: IntegratorChoice) -> Self {
        match choice {
            IntegratorChoice::Rk4 => IntegratorType::RK4,
            IntegratorChoice::Euler => IntegratorType::ForwardEuler,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Defaults => cmd_defaults(),
        Commands::Run {
            scenario_path,
            integrator,
            output,
            json,
            summary_only,
        } => cmd_run(
            scenario_path.as_deref(),
            integrator.into(),
            output.as_deref(),
            json,
            summary_only,
        ),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    scenario.validate()?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_defaults() -> AppResult<()> {
    print!("{}", Scenario::default().to_yaml()?);
    Ok(())
}

fn cmd_run(
    scenario_path: Option<&Path>,
    integrator: IntegratorType,
    output: Option<&Path>,
    json: bool,
    summary_only: bool,
) -> AppResult<()> {
    let scenario = match scenario_path {
        Some(path) => load_scenario(path)?,
        None => Scenario::default(),
    };
    // Reject degenerate inputs before deriving dt from them
    scenario.validate()?;

    println!("Running scenario: {}", scenario.name);
    println!(
        "  {} samples over {:.0} s (dt = {:.3} s)",
        scenario.sample_count,
        scenario.duration_s,
        scenario.duration_s / (scenario.sample_count - 1) as f64
    );

    let result = run_scenario(&scenario, integrator)?;
    println!("✓ Simulation completed");

    let s = &result.summary;
    println!("\nRun summary:");
    println!("  Ambient:           {:.2} °C", s.ambient_temp_c);
    println!("  Heater-on equilib: {:.2} °C", s.equilibrium_temp_c);
    println!("  Final:             {:.3} °C", s.final_temp_c);
    println!("  Min / Max:         {:.3} / {:.3} °C", s.min_temp_c, s.max_temp_c);

    if summary_only {
        return Ok(());
    }

    let series = if json {
        to_json(&result)?
    } else {
        to_csv(&result)
    };

    if let Some(path) = output {
        std::fs::write(path, series)?;
        println!(
            "✓ Exported {} data points to {}",
            result.time_s.len(),
            path.display()
        );
    } else {
        print!("{}", series);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        dir.push(format!("{}_{}", prefix, nanos));
        dir
    }

    #[test]
    fn run_rejects_degenerate_sample_count() {
        let dir = unique_temp_dir("tt_cli_degenerate");
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        let path = dir.join("scenario.yaml");

        // Zero samples must surface as a validation error, not arithmetic
        fs::write(&path, "sample_count: 0\n").expect("failed to write scenario file");
        let err = cmd_run(Some(&path), IntegratorType::RK4, None, false, true).unwrap_err();
        assert!(format!("{err}").contains("at least 2 samples"));

        // A single sample cannot form an interval either
        fs::write(&path, "sample_count: 1\n").expect("failed to write scenario file");
        assert!(cmd_run(Some(&path), IntegratorType::RK4, None, false, true).is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
