use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::{build_report, write_report};

pub fn run(file: &str, output: Option<&str>) -> Result<()> {
    let path = PathBuf::from(file);
    let text = std::fs::read_to_string(&path)?;
    let source = path.file_name().and_then(|n| n.to_str());
    let (report, skipped) = build_report(&text, source)?;

    match output {
        Some(out) => {
            write_report(&report, Path::new(out))?;
            println!(
                "Wrote {} transactions and {} months to {out} ({} rows skipped)",
                report.transactions.len(),
                report.monthly_summaries.len(),
                skipped.total()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
