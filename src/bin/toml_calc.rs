use anyhow::Context;
use clap::Parser;
use endfed_calc::core::input::parse_length;
use endfed_calc::core::ranges::bad_ranges;
use endfed_calc::core::ConfigProvider;
use endfed_calc::utils::{logger, validation::Validate};
use endfed_calc::{LocalStorage, OutputFormat, ReportEngine, Selection, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-calc")]
#[command(about = "End-fed wire analysis driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "endfed.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the wire length from config
    #[arg(short, long)]
    length: Option<f64>,

    /// Override the output format from config
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Dry run - show what would be analyzed without writing any report
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    logger::init_logger(args.verbose || config.verbose(), config.json_logs());
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(length) = args.length {
        config.analysis.length = Some(length);
        tracing::info!("🔧 Length overridden to: {} ft", length);
    }
    if let Some(format) = args.format {
        config.output.format = Some(format);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No report will be written");
        perform_dry_run(&config)?;
        return Ok(());
    }

    let engine = ReportEngine::new(config, LocalStorage::new("."));
    match engine.run().await {
        Ok(rendered) => match engine.config().output_path() {
            Some(path) => println!("📁 Report saved to: {}", path),
            None => print!("{}", rendered),
        },
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let selection = Selection::resolve(config.band_names(), config.preset())?;
    let length_input = config.length_input();

    println!("📋 Configuration Summary:");
    println!(
        "  Length: {} ft (from '{}')",
        parse_length(&length_input),
        length_input
    );
    println!("  Format: {:?}", config.output_format());
    println!("  Output: {}", config.output_path().unwrap_or("stdout"));
    if let Some(step) = config.sweep_step() {
        println!("  Sweep step: {} ft", step);
    }

    println!();
    println!("📡 Bands ({}):", selection.len());
    for band in selection.bands() {
        println!(
            "  {} {}-{} MHz: {} problematic ranges",
            band.name,
            band.low_mhz,
            band.high_mhz,
            bad_ranges(band).len()
        );
    }

    println!();
    println!("✅ Dry run complete.");
    Ok(())
}
