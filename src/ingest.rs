//! Delimited-text ingest for the population dataset.
//!
//! Parsing is deliberately forgiving at the row level: a row whose numeric
//! fields fail coercion is dropped with a warning and the load continues.
//! Only structural problems (missing columns, empty input) fail the load.

use tracing::{debug, warn};

use crate::core::types::CountryRecord;
use crate::error::{ChartError, ChartResult};

/// Column positions resolved from the header line.
///
/// Header names are matched after trimming, which absorbs the
/// ` Population (000s) ` variant with surrounding whitespace.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    country: usize,
    year: usize,
    population: usize,
    density: usize,
    growth_rate: usize,
    region: Option<usize>,
}

impl ColumnLayout {
    fn resolve(header: &[String]) -> ChartResult<Self> {
        let find = |name: &'static str| -> ChartResult<usize> {
            header
                .iter()
                .position(|cell| cell.trim() == name)
                .ok_or_else(|| ChartError::Parse {
                    line: 1,
                    field: name,
                    reason: "missing column".to_owned(),
                })
        };

        Ok(Self {
            country: find("Country")?,
            year: find("Year")?,
            population: find("Population (000s)")?,
            density: find("Population_Density")?,
            growth_rate: find("Population_Growth_Rate")?,
            region: header.iter().position(|cell| cell.trim() == "Region"),
        })
    }
}

/// Parses the full dataset text into validated rows.
///
/// Rows that fail numeric coercion, and rows whose growth rate comes out as
/// zero (almost always a failed lenient parse of noisy text), are skipped.
pub fn parse_rows(text: &str) -> ChartResult<Vec<CountryRecord>> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return Err(ChartError::InvalidData(
            "dataset text contains no header line".to_owned(),
        ));
    };
    let layout = ColumnLayout::resolve(&split_delimited(header_line))?;

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for (index, line) in lines {
        let line_number = index + 1;
        match parse_row(&split_delimited(line), layout, line_number) {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => {
                dropped += 1;
                warn!(line = line_number, "dropping row with zero growth rate");
            }
            Err(err) => {
                dropped += 1;
                warn!(line = line_number, error = %err, "dropping unparseable row");
            }
        }
    }

    debug!(parsed = rows.len(), dropped, "parsed dataset");
    Ok(rows)
}

fn parse_row(
    cells: &[String],
    layout: ColumnLayout,
    line: usize,
) -> ChartResult<Option<CountryRecord>> {
    let cell = |index: usize, field: &'static str| -> ChartResult<&str> {
        cells
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| ChartError::Parse {
                line,
                field,
                reason: "missing cell".to_owned(),
            })
    };

    let parse_f64 = |text: &str, field: &'static str| -> ChartResult<f64> {
        text.trim().parse().map_err(|_| ChartError::Parse {
            line,
            field,
            reason: format!("`{text}` is not a number"),
        })
    };

    let year: i32 = cell(layout.year, "Year")?
        .trim()
        .parse()
        .map_err(|_| ChartError::Parse {
            line,
            field: "Year",
            reason: "not an integer year".to_owned(),
        })?;

    // Population values carry thousands separators, e.g. "1,347,350".
    let population_text: String = cell(layout.population, "Population (000s)")?
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let population = parse_f64(&population_text, "Population (000s)")?;

    let density = parse_f64(cell(layout.density, "Population_Density")?, "Population_Density")?;

    let growth_rate = lenient_number(cell(layout.growth_rate, "Population_Growth_Rate")?)
        .map_err(|err| ChartError::Parse {
            line,
            field: "Population_Growth_Rate",
            reason: err.to_string(),
        })?;
    if growth_rate == 0.0 {
        return Ok(None);
    }

    let region = layout
        .region
        .and_then(|index| cells.get(index))
        .map_or("", |cell| cell.trim());

    Ok(Some(CountryRecord::new(
        cell(layout.country, "Country")?.trim(),
        region,
        year,
        population,
        density,
        growth_rate,
    )))
}

/// Lenient numeric extraction for noisy columns.
///
/// Tolerates non-numeric characters around the value but requires the
/// numeric core to be a single well-formed number: optional sign, digits,
/// at most one decimal point. Two separate digit runs (`"1,2"`, `"1.2.3"`)
/// are ambiguous and fail instead of silently producing a wrong number.
pub fn lenient_number(text: &str) -> ChartResult<f64> {
    let chars: Vec<char> = text.chars().collect();
    let mut run: Option<String> = None;
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        if run.is_some() {
            return Err(ChartError::InvalidData(format!(
                "`{text}` contains more than one numeric run"
            )));
        }
        // A bare decimal point before the digits (".5") is out of grammar;
        // accepting it would silently read 5 instead of 0.5.
        if i > 0 && chars[i - 1] == '.' {
            return Err(ChartError::InvalidData(format!(
                "`{text}` starts its numeric run with a bare decimal point"
            )));
        }

        let mut core = String::new();
        if i > 0 && (chars[i - 1] == '-' || chars[i - 1] == '+') {
            core.push(chars[i - 1]);
        }
        let mut dot_seen = false;
        while i < chars.len() {
            if chars[i].is_ascii_digit() {
                core.push(chars[i]);
            } else if chars[i] == '.'
                && !dot_seen
                && chars.get(i + 1).is_some_and(char::is_ascii_digit)
            {
                dot_seen = true;
                core.push('.');
            } else {
                break;
            }
            i += 1;
        }
        run = Some(core);
    }

    let Some(core) = run else {
        return Err(ChartError::InvalidData(format!(
            "`{text}` contains no numeric content"
        )));
    };
    core.parse().map_err(|_| {
        ChartError::InvalidData(format!("`{core}` is not a plausible number"))
    })
}

/// Splits one line on commas, honoring double-quoted cells so values like
/// `"1,347,350"` stay intact, with `""` as the in-quote escape.
fn split_delimited(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}
