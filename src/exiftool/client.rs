use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::profile::record::ProfileRecord;

use super::args;

const EXIFTOOL_PROGRAM: &str = "exiftool";

pub trait MetadataSource {
    fn extract_all(&self, path: &Path, include_hex_ids: bool) -> AppResult<ProfileRecord>;
    fn extract_binary(&self, path: &Path, tag: &str) -> AppResult<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct ExiftoolClient {
    program: PathBuf,
}

impl ExiftoolClient {
    pub fn new() -> Self {
        Self::with_program(EXIFTOOL_PROGRAM)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn capture(&self, args: Vec<OsString>) -> AppResult<Vec<u8>> {
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|err| map_spawn_error(&self.program, err))?;

        if !output.status.success() {
            return Err(map_tool_failure(&output));
        }

        Ok(output.stdout)
    }
}

impl Default for ExiftoolClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for ExiftoolClient {
    fn extract_all(&self, path: &Path, include_hex_ids: bool) -> AppResult<ProfileRecord> {
        let stdout = self.capture(args::extract_all_args(path, include_hex_ids))?;

        parse_extract_output(&stdout, include_hex_ids, path)
    }

    fn extract_binary(&self, path: &Path, tag: &str) -> AppResult<Vec<u8>> {
        self.capture(args::extract_binary_args(path, tag))
    }
}

fn parse_extract_output(
    stdout: &[u8],
    include_hex_ids: bool,
    path: &Path,
) -> AppResult<ProfileRecord> {
    let records: Vec<Map<String, Value>> = serde_json::from_slice(stdout)?;
    let count = records.len();
    let mut records = records.into_iter();

    match (records.next(), records.next()) {
        (Some(raw), None) => Ok(ProfileRecord::from_raw(raw, include_hex_ids)),
        _ => Err(AppError::Tool(format!(
            "expected exactly 1 record for {}, got {count}",
            path.display()
        ))),
    }
}

fn map_spawn_error(program: &Path, err: io::Error) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        return AppError::Tool(format!(
            "{} not found on PATH; install exiftool to dump profiles",
            program.display()
        ));
    }

    AppError::Io(err)
}

fn map_tool_failure(output: &Output) -> AppError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let detail = if stderr.is_empty() {
        "no error output"
    } else {
        stderr
    };

    AppError::Tool(format!("{detail} ({})", output.status))
}
