use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use scrub_clean::{CleanConfig, build_default_pipeline};
use scrub_ingest::{load_table, read_sample, sniff_delimiter, write_csv};

use crate::cli::{CleanArgs, DetectArgs};
use crate::types::{CleanResult, DetectResult};

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let input = &args.input;
    if !input.is_file() {
        bail!("input file not found: {}", input.display());
    }
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let hint = match &args.delimiter {
        Some(raw) => Some(delimiter_byte(raw)?),
        None => sniff_input(input)?,
    };
    let loaded = load_table(input, hint)
        .with_context(|| format!("load {}", input.display()))?;
    let rows_in = loaded.table.height();
    let columns_in = loaded.table.width();
    info!(
        rows = rows_in,
        columns = columns_in,
        delimiter = %(loaded.delimiter as char).escape_default(),
        "table loaded"
    );

    let pipeline = build_default_pipeline(&CleanConfig::default());
    let (cleaned, state) = pipeline.execute(loaded.table)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    let output = if args.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        write_csv(&cleaned, &output_path)
            .with_context(|| format!("write {}", output_path.display()))?;
        Some(output_path)
    };

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        rows_out = cleaned.height(),
        "cleaning finished"
    );
    Ok(CleanResult {
        input: input.clone(),
        output,
        delimiter: loaded.delimiter as char,
        rows_in,
        rows_out: cleaned.height(),
        columns_in,
        columns_out: cleaned.width(),
        duplicates_removed: state.duplicates_removed,
        pruned_columns: state.pruned_columns,
        imputed_cells: state.imputed_cells,
        clipped_cells: state.clipped_cells,
        missing_remaining: cleaned.missing_total(),
    })
}

pub fn run_detect(args: &DetectArgs) -> Result<DetectResult> {
    let input = &args.input;
    if !input.is_file() {
        bail!("input file not found: {}", input.display());
    }
    let hint = sniff_input(input)?;
    let loaded = load_table(input, hint)
        .with_context(|| format!("load {}", input.display()))?;
    Ok(DetectResult {
        input: input.clone(),
        delimiter: loaded.delimiter as char,
        columns: loaded.table.width(),
    })
}

/// Sniff the bounded sample, degrading to no hint on failure.
fn sniff_input(input: &Path) -> Result<Option<u8>> {
    let sample = read_sample(input).with_context(|| format!("read {}", input.display()))?;
    match sniff_delimiter(&sample) {
        Ok(delimiter) => {
            debug!(delimiter = %(delimiter as char).escape_default(), "delimiter sniffed");
            Ok(Some(delimiter))
        }
        Err(error) => {
            warn!(%error, "sniffing failed, trying fallback delimiters");
            Ok(None)
        }
    }
}

/// Turn a `--delimiter` argument into a single delimiter byte.
fn delimiter_byte(raw: &str) -> Result<u8> {
    match raw {
        "tab" | "\\t" => Ok(b'\t'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => bail!("delimiter must be a single ASCII character or \"tab\""),
            }
        }
    }
}

/// `<stem>_cleaned.csv` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_cleaned.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_byte_accepts_named_tab() {
        assert_eq!(delimiter_byte("tab").unwrap(), b'\t');
        assert_eq!(delimiter_byte(";").unwrap(), b';');
        assert!(delimiter_byte("ab").is_err());
        assert!(delimiter_byte("").is_err());
    }

    #[test]
    fn default_output_sits_next_to_the_input() {
        let path = default_output_path(Path::new("/data/survey.tsv"));
        assert_eq!(path, Path::new("/data/survey_cleaned.csv"));
    }

    #[test]
    fn clean_run_produces_the_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("people.csv");
        std::fs::write(&input, "Name,Age\nAlice,30\nAlice,30\nBob,\n").unwrap();

        let args = CleanArgs {
            input: input.clone(),
            output: None,
            delimiter: None,
            dry_run: false,
            json: false,
        };
        let result = run_clean(&args).unwrap();
        assert_eq!(result.rows_in, 3);
        assert_eq!(result.rows_out, 2);
        assert_eq!(result.duplicates_removed, 1);
        assert_eq!(result.delimiter, ',');
        assert_eq!(result.missing_remaining, 0);
        assert!(dir.path().join("people_cleaned.csv").is_file());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("people.csv");
        std::fs::write(&input, "Name,Age\nAlice,30\nBob,41\n").unwrap();

        let args = CleanArgs {
            input: input.clone(),
            output: None,
            delimiter: None,
            dry_run: true,
            json: false,
        };
        let result = run_clean(&args).unwrap();
        assert!(result.output.is_none());
        assert!(!dir.path().join("people_cleaned.csv").exists());
    }
}
