use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::AppResult;
use crate::profile::record::ProfileRecord;

pub fn render(record: &ProfileRecord) -> AppResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    record.serialize(&mut serializer)?;

    Ok(buffer)
}

pub fn write_record(path: &Path, record: &ProfileRecord) -> AppResult<()> {
    let payload = render(record)?;
    fs::write(path, payload)?;

    Ok(())
}
