// Wed Oct 14 2026 - Alex

use adata_dsect::ui::cli;
use colored::Colorize;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
