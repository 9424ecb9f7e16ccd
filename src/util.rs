// util.rs

use std::io::{ErrorKind, Write};

/// Write one transcript block followed by a blank spacer line. A closed pipe
/// is not an error; the visitor simply stopped reading.
pub fn write_block<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    let text = s.as_ref();
    let result = if text.is_empty() {
        writeln!(w)
    } else {
        writeln!(w, "{text}\n")
    };
    match result.and_then(|()| w.flush()) {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
