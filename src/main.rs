use clap::Parser;

fn main() {
    let cli = iccdump::cli::Cli::parse();

    if let Err(err) = iccdump::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
