use anyhow::Context;
use clap::Parser;
use loggen::utils::{logger, validation::Validate};
use loggen::{
    CliConfig, DirectoryWriter, Generator, RoundManifest, TracingDiagnostics, DEFAULT_LOG_FACILITY,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting loggen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let manifest = RoundManifest::from_file(&config.manifest)
        .with_context(|| format!("failed to load manifest {}", config.manifest))?;

    if let Err(e) = manifest.validate() {
        tracing::error!("Manifest validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // CLI flag beats the manifest; the facility default matches what the
    // generated code has always called.
    let facility = config
        .log_facility
        .clone()
        .or_else(|| manifest.log_facility().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LOG_FACILITY.to_string());

    let candidates = manifest.candidates();
    let writer = DirectoryWriter::new(config.out.clone());
    let generator = Generator::new(writer, TracingDiagnostics, facility);

    let report = generator.run_round(&candidates);

    if let Some(path) = &config.summary_json {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write summary to {}", path))?;
    }

    if report.aborted {
        for message in &report.diagnostics {
            eprintln!("❌ {}", message);
        }
        std::process::exit(1);
    }

    println!(
        "✅ Generated {} file(s) under {}",
        report.written.len(),
        config.out
    );
    if report.failed_writes > 0 {
        eprintln!("⚠️  {} file(s) could not be written", report.failed_writes);
    }

    Ok(())
}
