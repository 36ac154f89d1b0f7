//! `calc` — evaluate single-digit arithmetic expressions.
//!
//! Usage:
//!   calc [--json] [--strict-division] [--permissive] [--options JSON] [EXPR...]
//!
//! Expression arguments are joined with spaces and evaluated once. Without
//! them every non-empty line of stdin is evaluated.

use calculation::cli::execute;
use std::io;

fn main() {
    env_logger::builder().format_timestamp(None).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = execute(
        &args,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    std::process::exit(code);
}
