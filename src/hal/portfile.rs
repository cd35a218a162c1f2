use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use super::types::{PortGroup, PortNameTable};

/// Outcome of reading one port file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfileStatus {
    /// File could not be opened
    Missing,
    /// File was read to the end
    Loaded,
    /// Reading stopped early (line too long or read error)
    Aborted,
}

impl PortfileStatus {
    pub fn is_opened(&self) -> bool {
        !matches!(self, PortfileStatus::Missing)
    }
}

enum Line {
    Complete(Vec<u8>),
    TooLong,
    Eof,
}

/// Read one `\n`-terminated line of at most `max_len` bytes.
/// An unterminated tail at end of file is dropped.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>, max_len: usize) -> std::io::Result<Line> {
    buf.clear();
    let limit = max_len as u64 + 1;
    reader.by_ref().take(limit).read_until(b'\n', buf)?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
        return Ok(Line::Complete(std::mem::take(buf)));
    }

    // A full-length read with more data behind it is an overlong line
    if buf.len() > max_len && !reader.fill_buf()?.is_empty() {
        Ok(Line::TooLong)
    } else {
        if !buf.is_empty() {
            log::debug!("Ignoring unterminated last line ({} bytes)", buf.len());
        }
        Ok(Line::Eof)
    }
}

/// Leading integer of `s`, read the way C `atoi` does: optional whitespace and
/// sign, then digits. Anything unparsable yields 0.
fn parse_key(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative { -value } else { value }
}

/// Load `index=name` pairs from `path` into the empty slots of `group`.
///
/// Comment lines start with `#`. Malformed lines and out-of-range indices are
/// logged and skipped; a line longer than `max_line_len` stops reading this file.
/// Slots that already hold a name are left untouched.
pub fn load_portfile(
    path: &Path,
    table: &mut PortNameTable,
    group: PortGroup,
    max_line_len: usize,
) -> PortfileStatus {
    log::info!("Trying to load port names from {}", path.display());

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("Port file {} not available: {}", path.display(), e);
            return PortfileStatus::Missing;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut lineno = 0usize;

    loop {
        lineno += 1;

        let line = match read_line(&mut reader, &mut buf, max_line_len) {
            Ok(Line::Complete(line)) => line,
            Ok(Line::Eof) => return PortfileStatus::Loaded,
            Ok(Line::TooLong) => {
                log::warn!(
                    "Error while reading {:?}: line {} is too long (max {} characters)",
                    path,
                    lineno,
                    max_line_len
                );
                return PortfileStatus::Aborted;
            }
            Err(e) => {
                log::warn!("Error while reading {:?}: {}", path, e);
                return PortfileStatus::Aborted;
            }
        };

        if line.first() == Some(&b'#') {
            continue;
        }

        let line = String::from_utf8_lossy(&line);
        let Some((key, value)) = line.split_once('=') else {
            log::warn!(
                "Error while reading {:?}: line {} has no key=value syntax",
                path,
                lineno
            );
            continue;
        };

        let key = parse_key(key);
        let slot = usize::try_from(key).ok().and_then(|position| group.slot(position));
        match slot {
            Some(index) => {
                // Earlier files take precedence
                table.fill(index, value);
            }
            None => {
                log::warn!(
                    "Error while reading {:?}: key {} out of range in line {} (1..{})",
                    path,
                    key,
                    lineno,
                    group.size
                );
            }
        }
    }
}
