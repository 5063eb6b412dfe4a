//! Entrypoint for the `ipguard` binary.
//!
//! This binary checks IPv4 and IPv6 addresses against the reserved address space known
//! to the `reserved-ip` library and reports which ones are not public host addresses.

use clap::Parser;
use common::{
    input::{open_address_source, read_addresses},
    logging::enable_logger,
    report::{write_network_table, write_reports, EXIT_IO_ERROR},
};
use reserved_ip::reserved_networks;
use std::{
    io::{self, BufRead},
    path::PathBuf,
};

mod common;

#[derive(Debug, Parser)]
#[clap(author, version, about="Flag reserved and non-public IP addresses", long_about = None)]
struct Args {
    /// Addresses to check. If none are given (and no file is set), addresses are read from STDIN
    addresses: Vec<String>,

    /// A file containing newline-delimited addresses to check ("-" reads from STDIN)
    #[clap(short, long)]
    file: Option<PathBuf>,

    /// Print the reserved network table and exit
    #[clap(long, conflicts_with_all = ["addresses", "file"])]
    list: bool,

    /// Emit one JSON object per line instead of tab-separated text
    #[clap(long)]
    json: bool,

    /// Enable verbose logging
    #[clap(short, long)]
    verbose: bool,
}

impl Args {
    /// Collect every address to check from the chosen sources. `stdin` is only read when nothing else was given
    pub fn addresses<R: BufRead>(&self, stdin: R) -> io::Result<Vec<String>> {
        let mut addresses = self.addresses.clone();
        match &self.file {
            Some(path) => {
                log::debug!("Reading addresses from {}", path.display());
                addresses.extend(read_addresses(open_address_source(path)?)?);
            }
            None if addresses.is_empty() => {
                log::debug!("No addresses given. Reading from STDIN");
                addresses.extend(read_addresses(stdin)?);
            }
            None => {}
        }
        Ok(addresses)
    }
}

pub fn main() {
    // Parse CLI args
    let args = Args::parse();

    // Initialize logging
    if let Err(error) = enable_logger(args.verbose) {
        eprintln!("Failed to initialize logging: {error}");
    }

    // All results go through one locked handle
    let mut stdout = io::stdout().lock();

    // Dump the table if requested
    if args.list {
        std::process::exit(write_network_table(&mut stdout, args.json));
    }

    // Gather input
    let addresses = match args.addresses(io::stdin().lock()) {
        Ok(addresses) => addresses,
        Err(error) => {
            log::error!("Failed to read addresses: {}", error);
            std::process::exit(EXIT_IO_ERROR);
        }
    };
    log::debug!(
        "Checking {} addresses against {} reserved networks",
        addresses.len(),
        reserved_networks().len()
    );

    // Classify everything, printing as we go
    std::process::exit(write_reports(&mut stdout, &addresses, args.json));
}
