//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvMarketData;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::html_report::HtmlReportAdapter;
use crate::domain::catalog;
use crate::domain::config_validation::validate_simulation_config;
use crate::domain::error::EtfSimError;
use crate::domain::report::build_report;
use crate::domain::selection::{parse_selection, InstrumentSelection};
use crate::domain::simulation::{
    DateWindow, SimulationConfig, DEFAULT_BENCHMARK, DEFAULT_RISK_FREE_RATE,
};
use crate::ports::config_port::ConfigPort;
use crate::ports::market_data_port::MarketDataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "etfsim", about = "ETF investment comparison simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an investment simulation
    Simulate {
        #[arg(short, long)]
        config: PathBuf,
        /// Override the configured fund selection (1-3 symbols or labels)
        #[arg(long)]
        funds: Option<String>,
        /// Override the configured initial capital
        #[arg(long)]
        capital: Option<f64>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        dry_run: bool,
    },
    /// List the fund catalog and available data
    ListFunds {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the stored data range for a symbol
    Info {
        #[arg(long)]
        symbol: String,
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a simulation configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Simulate {
            config,
            funds,
            capital,
            output,
            dry_run,
        } => {
            if dry_run {
                run_validate(&config)
            } else {
                run_simulate(&config, funds.as_deref(), capital, output.as_ref())
            }
        }
        Command::ListFunds { config } => run_list_funds(config.as_ref()),
        Command::Info { symbol, config } => run_info(&symbol, &config),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = EtfSimError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_simulation_config(adapter: &dyn ConfigPort) -> Result<SimulationConfig, EtfSimError> {
    let mode = adapter
        .get_string("simulation", "date_mode")
        .unwrap_or_else(|| "range".to_string());

    let window = match mode.as_str() {
        "period" => {
            let period = adapter.get_string("simulation", "period").ok_or_else(|| {
                EtfSimError::ConfigMissing {
                    section: "simulation".into(),
                    key: "period".into(),
                }
            })?;
            DateWindow::Period(period.parse().map_err(|reason| {
                EtfSimError::ConfigInvalid {
                    section: "simulation".into(),
                    key: "period".into(),
                    reason,
                }
            })?)
        }
        _ => {
            let start = parse_config_date(adapter, "start_date")?;
            let end = parse_config_date(adapter, "end_date")?;
            DateWindow::Range { start, end }
        }
    };

    Ok(SimulationConfig {
        initial_capital: adapter.get_double("simulation", "initial_capital", 1000.0),
        window,
        risk_free_rate: adapter.get_double("simulation", "risk_free_rate", DEFAULT_RISK_FREE_RATE),
        benchmark_symbol: adapter
            .get_string("simulation", "benchmark")
            .unwrap_or_else(|| DEFAULT_BENCHMARK.to_string()),
        include_benchmark: adapter.get_bool("simulation", "include_benchmark", true),
    })
}

fn parse_config_date(adapter: &dyn ConfigPort, field: &str) -> Result<NaiveDate, EtfSimError> {
    let value = adapter.get_string("simulation", field).ok_or_else(|| {
        EtfSimError::ConfigMissing {
            section: "simulation".into(),
            key: field.into(),
        }
    })?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| EtfSimError::ConfigInvalid {
        section: "simulation".into(),
        key: field.into(),
        reason: "invalid date format (expected YYYY-MM-DD)".into(),
    })
}

pub fn build_selection(
    adapter: &dyn ConfigPort,
    funds_override: Option<&str>,
) -> Result<InstrumentSelection, EtfSimError> {
    let funds = match funds_override {
        Some(f) => f.to_string(),
        None => adapter.get_string("simulation", "funds").ok_or_else(|| {
            EtfSimError::ConfigMissing {
                section: "simulation".into(),
                key: "funds".into(),
            }
        })?,
    };
    Ok(parse_selection(&funds)?)
}

fn data_adapter(adapter: &dyn ConfigPort) -> CsvMarketData {
    let path = adapter
        .get_string("data", "path")
        .unwrap_or_else(|| "./data".to_string());
    CsvMarketData::new(PathBuf::from(path))
}

fn run_simulate(
    config_path: &PathBuf,
    funds_override: Option<&str>,
    capital_override: Option<f64>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_simulation_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Build simulation parameters and selection
    let mut sim_config = match build_simulation_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Some(capital) = capital_override {
        if capital <= 0.0 {
            eprintln!("error: --capital must be positive");
            return ExitCode::from(2);
        }
        sim_config.initial_capital = capital;
    }

    let selection = match build_selection(&adapter, funds_override) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Fetch, align, compute
    let data_port = data_adapter(&adapter);
    eprintln!(
        "Simulating {} fund(s) over {} with ${:.2}",
        selection.count(),
        sim_config.window,
        sim_config.initial_capital,
    );

    let report = match build_report(&data_port, &selection, &sim_config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    // Stage 4: Console summary
    eprintln!("\n=== Simulation Results ===");
    eprintln!(
        "Chart: {} dates, {} series",
        report.chart.row_count(),
        report.chart.columns.len()
    );
    for (symbol, metrics) in &report.metrics {
        eprintln!("\n{} ({})", symbol, catalog::label_for(symbol));
        eprintln!(
            "  Final Value:           ${:.2} (from ${:.2})",
            metrics.final_value, sim_config.initial_capital
        );
        eprintln!(
            "  Annualized Return:     {:.2}%",
            metrics.annualized_return_pct
        );
        eprintln!(
            "  Annualized Volatility: {:.2}%",
            metrics.annualized_volatility_pct
        );
        eprintln!("  Sharpe Ratio:          {:.2}", metrics.sharpe_ratio);
    }

    // Stage 5: Write the HTML report
    let output = output_path
        .cloned()
        .or_else(|| adapter.get_string("report", "output_path").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("report.html"));

    let report_adapter = match adapter.get_string("report", "template_path") {
        Some(path) if !path.trim().is_empty() => match fs::read_to_string(&path) {
            Ok(template) => HtmlReportAdapter::with_template(template),
            Err(e) => {
                eprintln!("error: failed to read template {}: {}", path, e);
                return ExitCode::from(1);
            }
        },
        _ => HtmlReportAdapter::new(),
    };

    let output_str = output.display().to_string();
    match report_adapter.write(&report, &selection, &sim_config, &output_str) {
        Ok(()) => {
            eprintln!("\nReport written to: {}", output_str);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write report: {e}");
            ExitCode::from(1)
        }
    }
}

fn run_list_funds(config_path: Option<&PathBuf>) -> ExitCode {
    let available = match config_path {
        Some(path) => {
            let adapter = match load_config(path) {
                Ok(a) => a,
                Err(code) => return code,
            };
            match data_adapter(&adapter).list_symbols() {
                Ok(symbols) => Some(symbols),
                Err(e) => {
                    eprintln!("warning: {}", e);
                    None
                }
            }
        }
        None => None,
    };

    for fund in catalog::FUNDS {
        let marker = match &available {
            Some(symbols) if symbols.contains(&fund.symbol.to_string()) => " [data]",
            Some(_) => "",
            None => "",
        };
        println!("{:<8} {}{}", fund.symbol, fund.label, marker);
        if let Some(description) = fund.description {
            println!("         {}", description);
        }
    }
    eprintln!("{} funds in catalog", catalog::FUNDS.len());
    ExitCode::SUCCESS
}

fn run_info(symbol: &str, config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let data_port = data_adapter(&adapter);
    match data_port.get_data_range(symbol) {
        Ok(Some((first, last, count))) => {
            println!("{}: {} to {} ({} rows)", symbol.to_uppercase(), first, last, count);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("No data for {}", symbol.to_uppercase());
            ExitCode::from(3)
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_simulation_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let sim_config = match build_simulation_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let selection = match build_selection(&adapter, None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nSelection:");
    for instrument in &selection.instruments {
        eprintln!("  {} ({})", instrument.symbol, instrument.label);
    }
    eprintln!("\nParameters:");
    eprintln!("  initial_capital: ${:.2}", sim_config.initial_capital);
    eprintln!("  window:          {}", sim_config.window);
    eprintln!("  risk_free_rate:  {:.2}%", sim_config.risk_free_rate);
    if sim_config.include_benchmark {
        eprintln!("  benchmark:       {}", sim_config.benchmark_symbol);
    }

    eprintln!("\nConfiguration is valid");
    ExitCode::SUCCESS
}
