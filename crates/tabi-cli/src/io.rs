//! Input and output plumbing shared by the commands.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

/// Read a whole input file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {}", path.display()))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };

    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    if let Some(path) = output {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
