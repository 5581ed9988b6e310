use std::fmt::{Debug, Display, Write};
use std::hash::Hash;

use colored::Colorize;
use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::Result;

/// What a shortest path run says about one destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub source: String,
    pub destination: String,
    /// Labels from source to destination; empty when unreachable
    pub path: Vec<String>,
    /// Edges on the path; `None` when unreachable
    pub hops: Option<usize>,
    /// Shortest distance; `None` stands for an infinite distance
    pub distance: Option<f64>,
}

impl PathReport {
    /// Looks `destination` up in `result` and walks its predecessors back to the source
    pub fn new<L>(result: &ShortestPathResult<L>, source: &L, destination: &L) -> Self
    where
        L: Eq + Hash + Clone + Debug + Display,
    {
        let path: Vec<String> = result
            .path(destination)
            .map(|labels| labels.iter().map(ToString::to_string).collect())
            .unwrap_or_default();

        let (hops, distance) = if path.is_empty() {
            (None, None)
        } else {
            (Some(path.len() - 1), Some(result.distance(destination)))
        };

        PathReport {
            source: source.to_string(),
            destination: destination.to_string(),
            path,
            hops,
            distance,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Distance as a plain number, `f64::INFINITY` when unreachable
    pub fn distance(&self) -> f64 {
        self.distance.unwrap_or(f64::INFINITY)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human readable, colored rendering
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        match self.distance {
            Some(distance) => {
                let _ = writeln!(out, "{}", "Vertices crossed:".cyan());
                for (i, label) in self.path.iter().enumerate() {
                    if i == 0 || i + 1 == self.path.len() {
                        let _ = writeln!(out, "\t{}", label.purple().bold());
                    } else {
                        let _ = writeln!(out, "\t{}", label);
                    }
                }
                let _ = writeln!(
                    out,
                    "{} {}",
                    "Number of hops:".cyan(),
                    self.hops.unwrap_or(0).to_string().green().bold()
                );
                let _ = writeln!(
                    out,
                    "{} {}",
                    format!("Distance between {} and {}:", self.source, self.destination).cyan(),
                    format!("{:.2}", distance).green().bold()
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{} {}",
                    format!("Distance between {} and {}:", self.source, self.destination).cyan(),
                    "inf".red().bold()
                );
            }
        }

        out
    }
}
