use clap::Parser;

fn main() {
    let cli = tourmate::cli::Cli::parse();

    if let Err(err) = tourmate::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
