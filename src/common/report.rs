//! Per-address results and how they are printed

use ipnet::IpNet;
use reserved_ip::{classify_text, reserved_networks, Classification, ReservedNetwork};
use std::io::{self, Write};

/// Nothing went wrong
pub const EXIT_SUCCESS: i32 = 0;
/// Every input parsed and is public
pub const EXIT_PUBLIC: i32 = 0;
/// At least one input is reserved
pub const EXIT_RESERVED: i32 = 1;
/// At least one input was not an IP address
pub const EXIT_INVALID: i32 = 2;
/// The address source could not be read, or output could not be written
pub const EXIT_IO_ERROR: i32 = 3;

/// The result of checking one input line
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    pub address: String,
    pub reserved: Option<bool>,
    pub reason: Option<String>,
    pub error: Option<String>,
}

impl Report {
    /// Classify a single textual address
    pub fn new(address: &str) -> Self {
        let (reserved, reason, error) = match classify_text(address) {
            Ok(Classification::Reserved(reason)) => (Some(true), Some(reason.to_string()), None),
            Ok(Classification::Public) => (Some(false), None, None),
            Err(error) => (None, None, Some(error.to_string())),
        };
        Self {
            address: address.to_owned(),
            reserved,
            reason,
            error,
        }
    }

    /// Render as a tab-separated line
    pub fn to_text(&self) -> String {
        match (self.reserved, &self.reason, &self.error) {
            (Some(true), Some(reason), _) => format!("{}\treserved\t{}", self.address, reason),
            (Some(true), None, _) => format!("{}\treserved", self.address),
            (Some(false), _, _) => format!("{}\tpublic", self.address),
            (None, _, error) => format!(
                "{}\tinvalid\t{}",
                self.address,
                error.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Work out the process exit status for a batch of reports. Invalid input wins over reserved input.
pub fn exit_code(reports: &[Report]) -> i32 {
    if reports.iter().any(|report| report.reserved.is_none()) {
        EXIT_INVALID
    } else if reports.iter().any(|report| report.reserved == Some(true)) {
        EXIT_RESERVED
    } else {
        EXIT_PUBLIC
    }
}

/// One row of `--list` output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NetworkRecord {
    pub network: IpNet,
    pub description: &'static str,
}

impl From<&ReservedNetwork> for NetworkRecord {
    fn from(entry: &ReservedNetwork) -> Self {
        Self {
            network: entry.network(),
            description: entry.description(),
        }
    }
}

impl NetworkRecord {
    pub fn to_text(&self) -> String {
        format!("{}\t{}", self.network, self.description)
    }
}

/// Turn the outcome of a batch of writes into an exit status.
///
/// A closed pipe (e.g. output piped into `head`) is not an error. The status computed so far stands.
fn finish(result: io::Result<()>, status: i32) -> i32 {
    match result {
        Ok(()) => status,
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed early");
            status
        }
        Err(error) => {
            log::error!("Failed to write output: {}", error);
            EXIT_IO_ERROR
        }
    }
}

/// Classify and write every address, collecting the reports written so far
fn write_each_report<W: Write>(
    writer: &mut W,
    addresses: &[String],
    json: bool,
    reports: &mut Vec<Report>,
) -> io::Result<()> {
    for address in addresses {
        let report = Report::new(address);
        if let Some(error) = &report.error {
            log::warn!("{}", error);
        }
        let line = match json {
            true => serde_json::to_string(&report)?,
            false => report.to_text(),
        };
        reports.push(report);
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Classify every address, writing one line per result. Returns the process exit status.
pub fn write_reports<W: Write>(writer: &mut W, addresses: &[String], json: bool) -> i32 {
    let mut reports = Vec::with_capacity(addresses.len());
    let result = write_each_report(writer, addresses, json, &mut reports);
    finish(result, exit_code(&reports))
}

/// Write the reserved network table, one entry per line. Returns the process exit status.
pub fn write_network_table<W: Write>(writer: &mut W, json: bool) -> i32 {
    let result = reserved_networks()
        .iter()
        .map(NetworkRecord::from)
        .try_for_each(|record| {
            let line = match json {
                true => serde_json::to_string(&record)?,
                false => record.to_text(),
            };
            writeln!(writer, "{line}")
        })
        .and_then(|()| writer.flush());
    finish(result, EXIT_SUCCESS)
}
