use std::io::{self, Write};

use crate::models::RenamedFolder;

pub fn write_renamed<W: Write>(writer: &mut W, renamed: &RenamedFolder) -> io::Result<()> {
    writeln!(
        writer,
        "Renamed folder: {} -> {}",
        renamed.from.display(),
        renamed.to.display()
    )?;
    writer.flush()
}
