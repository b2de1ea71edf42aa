fn main() {
    if let Err(err) = assetgraph_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
