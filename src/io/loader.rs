//! Builds a [`Graph`] from `from,to,weight` line records.
//!
//! A bad record never aborts the load: it is logged, collected in the
//! [`LoadSummary`] and skipped, and everything loaded so far stays valid.
//! Only I/O failures stop the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::graph::Graph;
use crate::{Error, Result};

/// One parsed `from,to,weight` line
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Outcome of a load
#[derive(Debug, Default)]
pub struct LoadSummary {
    /// Non-blank lines seen
    pub records: usize,
    /// Records applied to the graph
    pub loaded: usize,
    /// One [`Error::MalformedRecord`] per rejected line
    pub errors: Vec<Error>,
}

impl LoadSummary {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses a single record; `line` is 1-based and only used for error reporting
pub fn parse_record(line: usize, text: &str) -> Result<Record> {
    let malformed = |reason: String| Error::MalformedRecord { line, reason };

    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "expected 3 comma-separated fields, found {}",
            fields.len()
        )));
    }

    let (from, to, weight) = (fields[0], fields[1], fields[2]);
    if from.is_empty() || to.is_empty() {
        return Err(malformed("empty vertex label".to_string()));
    }

    let weight: f64 = weight
        .parse()
        .map_err(|e| malformed(format!("invalid weight '{}': {}", weight, e)))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(malformed(format!(
            "weight must be finite and non-negative, got {}",
            weight
        )));
    }

    Ok(Record {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

/// Adds both endpoints and the edge in both directions, weighted
pub fn apply_record(graph: &mut Graph<String, String>, record: &Record) -> Result<()> {
    let Record { from, to, weight } = record;

    graph.add_vertex(from.clone());
    graph.add_vertex(to.clone());

    graph.add_edge(from, to, format!("{}-{}", from, to))?;
    graph.add_edge(to, from, format!("{}-{}", to, from))?;

    graph.set_edge_weight(from, to, *weight)?;
    graph.set_edge_weight(to, from, *weight)?;

    Ok(())
}

/// Loads every record from `reader` into `graph`
pub fn load_records<R: BufRead>(reader: R, graph: &mut Graph<String, String>) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        summary.records += 1;

        let outcome = parse_record(line_no, &line).and_then(|record| {
            apply_record(graph, &record).map_err(|e| Error::MalformedRecord {
                line: line_no,
                reason: e.to_string(),
            })
        });

        match outcome {
            Ok(()) => summary.loaded += 1,
            Err(e) => {
                warn!("Skipping record: {}", e);
                summary.errors.push(e);
            }
        }
    }

    info!(
        "Loaded {} of {} records ({} vertices, {} edges)",
        summary.loaded,
        summary.records,
        graph.number_vertices(),
        graph.number_edges()
    );

    Ok(summary)
}

/// Opens `path` and loads it with [`load_records`]
pub fn load_file<P: AsRef<Path>>(path: P, graph: &mut Graph<String, String>) -> Result<LoadSummary> {
    let path = path.as_ref();
    info!("Loading data from {}", path.display());
    let file = File::open(path)?;
    load_records(BufReader::new(file), graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_trims_fields() {
        let record = parse_record(1, " torino , milano , 125.5 ").unwrap();
        assert_eq!(record.from, "torino");
        assert_eq!(record.to, "milano");
        assert_eq!(record.weight, 125.5);
    }

    #[test]
    fn test_parse_record_rejections() {
        for bad in ["a,b", "a,b,c,d", ",b,1", "a,b,x", "a,b,-1", "a,b,inf", "a,b,NaN"] {
            match parse_record(7, bad) {
                Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 7),
                other => panic!("{:?} should be malformed, got {:?}", bad, other),
            }
        }
    }
}
