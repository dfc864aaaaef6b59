use std::fs::File;
use std::io::{self, BufWriter, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use hodiya_core::mapping::MappingTable;
use hodiya_core::translit::{suggest_direction, transliterate_batch, Direction};

use super::{die, init_mapping, read_file, CliError};

/// One line of `batch` output.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub input: String,
    pub output: String,
}

pub fn convert_cmd(text: &str, direction: Option<Direction>, mapping: Option<&str>) {
    let table = die!(init_mapping(mapping), "Error loading mapping: {}");
    let direction = direction.unwrap_or_else(|| suggest_direction(text));
    println!("{}", direction.apply(table, text));
}

pub fn batch_cmd(direction: Direction, mapping: Option<&str>, input_file: &str, output_file: &str) {
    let table = die!(init_mapping(mapping), "Error loading mapping: {}");
    let content = die!(read_file(input_file), "Error reading input: {}");
    let lines: Vec<&str> = content.lines().collect();
    let records = batch_records(table, &lines, direction);

    let file = die!(
        File::create(output_file).map_err(|source| CliError::Io {
            path: output_file.to_string(),
            source,
        }),
        "Error creating output: {}"
    );
    let mut writer = BufWriter::new(file);
    die!(
        write_jsonl(&mut writer, output_file, &records),
        "Error writing output: {}"
    );
    debug!(records = records.len(), %direction, "batch written");
    eprintln!("Wrote {} records to {output_file}", records.len());
}

pub fn batch_records(table: &MappingTable, lines: &[&str], direction: Direction) -> Vec<BatchRecord> {
    transliterate_batch(table, lines, direction)
        .into_iter()
        .zip(lines)
        .map(|(output, input)| BatchRecord {
            input: input.to_string(),
            output,
        })
        .collect()
}

/// Write one JSON object per line. `path` names the destination in errors.
pub fn write_jsonl<W: Write>(
    writer: &mut W,
    path: &str,
    records: &[BatchRecord],
) -> Result<(), CliError> {
    let io_err = |source: io::Error| CliError::Io {
        path: path.to_string(),
        source,
    };
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{line}").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}
