pub mod walker;
pub mod writer;

use std::fs;
use std::path::Path;

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::exiftool::MetadataSource;
use crate::profile::binary;
use crate::profile::{IgnoreSet, ProfileRecord};

pub fn run(ctx: &AppContext, profile_dir: &Path, output_dir: &Path) -> AppResult<()> {
    run_with_source(
        &ctx.exiftool,
        &ctx.ignore,
        ctx.include_hex_ids,
        profile_dir,
        output_dir,
    )
}

pub fn run_with_source<S: MetadataSource>(
    source: &S,
    ignore: &IgnoreSet,
    include_hex_ids: bool,
    profile_dir: &Path,
    output_dir: &Path,
) -> AppResult<()> {
    if !profile_dir.is_dir() {
        return Err(AppError::InvalidInput(format!(
            "profile directory {} does not exist or is not a directory",
            profile_dir.display()
        )));
    }
    fs::create_dir_all(output_dir)?;

    for input in walker::icc_files(profile_dir)? {
        let input = input?;
        let target = walker::json_output_path(output_dir, &input);
        println!("Dumping {} to {} ...", input.display(), target.display());
        let record = process_profile(source, ignore, include_hex_ids, &input)?;
        writer::write_record(&target, &record)?;
    }
    println!("DONE.");

    Ok(())
}

pub fn process_profile<S: MetadataSource>(
    source: &S,
    ignore: &IgnoreSet,
    include_hex_ids: bool,
    input: &Path,
) -> AppResult<ProfileRecord> {
    let mut record = source.extract_all(input, include_hex_ids)?;
    record.strip_ignored(ignore);
    binary::resolve_binary_tags(source, input, &mut record)?;

    Ok(record)
}
