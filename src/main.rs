use clap::Parser;
use lpscan::cli::{run_cli, Cli};
use lpscan::display::print_error;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run_cli(cli).await {
        Ok(()) => {
            // Success - no additional output needed
        }
        Err(e) => {
            print_error(&format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
