use crate::models::SeriesBin;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a filtered series as CSV with header.
pub fn save_csv<P: AsRef<Path>>(series: &[SeriesBin], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("date", "left", "right", "temp", "min", "max"))?;
    for b in series {
        wtr.serialize((
            b.date.to_string(),
            b.left.to_string(),
            b.right.to_string(),
            b.temp,
            b.min,
            b.max,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a filtered series as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(series: &[SeriesBin], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(series)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
