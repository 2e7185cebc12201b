use color_eyre::eyre::{WrapErr, eyre};
use exif_normalizer::presence::absence_note;
use exif_normalizer::{FileInfo, Normalizer, RawTags};
use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a dump of the form `{ "file": { "FileName": ..., ... }, "exif": { ... } }`.
fn read_dump(path: &Path) -> color_eyre::Result<(FileInfo, RawTags)> {
    let contents =
        fs::read_to_string(path).wrap_err_with(|| format!("Reading {}", path.display()))?;
    let dump: Value = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Parsing {}", path.display()))?;
    let file = FileInfo::from_json(&dump["file"])?;
    let tags = RawTags::from_json(&dump["exif"])?;
    Ok((file, tags))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        return Err(eyre!("Usage: exif_normalizer <dump.json>..."));
    }

    let normalizer = Normalizer::default();
    let items = paths
        .par_iter()
        .map(|path| -> color_eyre::Result<(FileInfo, RawTags)> {
            let (file, tags) = read_dump(path)?;
            normalizer.check_file(&file)?;
            Ok((file, tags))
        })
        .collect::<color_eyre::Result<Vec<_>>>()?;

    for result in normalizer.normalize_batch(items) {
        if !result.has_metadata {
            let media_type = result.metadata.basic.media_type.as_ref().map(ToString::to_string);
            eprintln!("{}", absence_note(media_type.as_deref().unwrap_or_default()));
        }
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
