//! Reading addresses from files and STDIN

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Open a newline-delimited address source. A path of `-` means STDIN.
pub fn open_address_source(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

/// Read every address from a newline-delimited source.
///
/// Surrounding whitespace is trimmed. Blank lines and `#` comments are skipped.
pub fn read_addresses<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        addresses.push(line.to_owned());
    }
    Ok(addresses)
}
