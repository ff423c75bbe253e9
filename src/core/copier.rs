use crate::utils::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub lines: u64,
    pub bytes: u64,
}

/// Copies `source` to `dest` one line at a time, terminators included.
///
/// Lines are read as raw bytes up to and including `\n`, so `\r\n` endings
/// and a final line without a terminator round-trip byte-for-byte. The
/// destination is opened with `create_new`, so an existing file is never
/// truncated even if it appeared after the caller's precheck. Both handles
/// are released on every exit path.
pub fn copy_lines(source: &Path, dest: &Path) -> Result<CopyReport> {
    let infile = File::open(source)?;
    let outfile = OpenOptions::new().write(true).create_new(true).open(dest)?;

    let mut reader = BufReader::new(infile);
    let mut writer = BufWriter::new(outfile);

    let mut line = Vec::new();
    let mut report = CopyReport::default();

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }
        writer.write_all(&line)?;
        report.lines += 1;
        report.bytes += n as u64;
    }

    writer.flush()?;
    Ok(report)
}
