use std::process;

fn main() {
    if let Err(e) = taskbranch::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
