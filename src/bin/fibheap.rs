//! Command-line entry point: wires the driver loop to stdin/stdout.

use std::io;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    fibheap::driver::run(stdin.lock(), stdout.lock())
}
