fn main() {
    if let Err(e) = genbind::run() {
        eprintln!("genbind: {e:#}");
        std::process::exit(1);
    }
}
