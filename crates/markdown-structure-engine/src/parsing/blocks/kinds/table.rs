use crate::models::{self, Block};
use crate::parsing::blocks::types::Extraction;
use crate::parsing::lines::join_lines;

/// Pipe table: header row, separator row, then data rows.
///
/// The separator row is skipped without checking its dashes or colons, so a
/// second header-like row in that position is silently discarded.
pub struct PipeTable;

impl PipeTable {
    pub const SEPARATOR: char = '|';

    /// Rows of a table are any lines containing the separator.
    pub fn opens(line: &str) -> bool {
        line.contains(Self::SEPARATOR)
    }

    /// Splits a row into trimmed cells, dropping empty ones so outer pipes
    /// don't create phantom columns.
    pub fn cells(line: &str) -> Vec<String> {
        line.split(Self::SEPARATOR)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn extract(lines: &[&str]) -> Extraction {
        let run = lines.iter().take_while(|l| Self::opens(l)).count();
        if run < 2 {
            log::debug!("dropping table candidate without separator row: {:?}", lines.first());
            return Extraction::skip();
        }

        let table_lines = &lines[..run];
        let headers = Self::cells(table_lines[0]);
        if headers.is_empty() {
            log::debug!("dropping table without header cells: {:?}", table_lines[0]);
            return Extraction::skip();
        }

        let rows = table_lines[2..]
            .iter()
            .map(|l| Self::cells(l))
            .filter(|row| !row.is_empty())
            .collect();

        Extraction::emit(
            Block::Table(models::Table::new(headers, rows, join_lines(table_lines))),
            run,
        )
    }
}
