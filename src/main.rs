use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = launchkit::cli::Cli::parse();
    launchkit::logging::init(cli.verbose);

    if let Err(err) = launchkit::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
