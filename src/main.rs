use clap::Parser;

#[derive(Parser)]
#[command(name = "oar", about = "oar — inspect decoded marketplace order reports")]
struct Cli {
    /// Path to a decoded report document (JSON).
    report: std::path::PathBuf,

    /// Ignore ~/.config/oar/config.toml and use built-in defaults.
    #[arg(long)]
    no_config: bool,

    /// Write debug logs to /tmp/oar-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/oar-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("oar debug log started — tail -f /tmp/oar-debug.log");
    }

    let config = if cli.no_config {
        oar_core::Config::defaults()
    } else {
        oar_core::Config::load()?
    };

    let file = std::fs::File::open(&cli.report)?;
    let doc: serde_json::Value = serde_json::from_reader(std::io::BufReader::new(file))?;
    let report = oar::report::parse(doc, &config.report)?;

    for (index, order) in report.orders().iter().enumerate() {
        let id = order.amazon_order_number().unwrap_or("<no id>");
        let date = order
            .order_date()
            .map(|date| date.to_rfc3339())
            .unwrap_or_else(|err| format!("<{err}>"));
        let items = order.items()?.count();
        println!("{index:>4}  {id:<22} {date:<28} {items:>3} item(s)");
    }

    Ok(())
}
