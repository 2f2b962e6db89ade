use anyhow::Context;
use serde::Serialize;
use std::io::Write;

/// Pretty-print `value` (2-space indent, non-ASCII kept literal) plus a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut w: W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut w, value).context("serialize json")?;
    writeln!(w).context("write output")?;
    w.flush().context("flush output")?;
    Ok(())
}
