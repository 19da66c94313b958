//! a2a-courier binary entry point.

use clap::Parser;

use a2a_courier::cli::{init_tracing, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.load_config() {
        Ok(config) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            a2a_courier::runner::run(&config, &cli.run_options(), &mut out).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(source) = std::error::Error::source(&e) {
            eprintln!("Caused by: {source}");
        }
        std::process::exit(1);
    }
}
