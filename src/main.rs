// src/main.rs

use changewatch::{cli, logging, run, SupervisorExit};

#[tokio::main]
async fn main() {
    match run_main().await {
        // Every non-error ending, forced kill included, is a success.
        Ok(_) => std::process::exit(0),
        Err(err) => {
            eprintln!("changewatch error: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<SupervisorExit> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
