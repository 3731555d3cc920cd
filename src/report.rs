// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Human-readable change summary.
//!
//! One row per surviving mutation across all zones, rendered as a plain
//! column-aligned table. Printed once at the end of a run, and only when
//! at least one mutation survived the diff.

use crate::records::RecordMutation;

/// One row of the change summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Zone the mutation targets
    pub zone_id: String,
    /// Record name
    pub name: String,
    /// Record type
    pub record_type: &'static str,
    /// TTL in seconds
    pub ttl: i64,
    /// Address values, comma-joined for display
    pub values: Vec<String>,
}

impl ReportRow {
    /// Build a row for a surviving mutation in `zone_id`.
    #[must_use]
    pub fn from_mutation(zone_id: &str, mutation: &RecordMutation) -> Self {
        Self {
            zone_id: zone_id.to_string(),
            name: mutation.name.clone(),
            record_type: mutation.record_type(),
            ttl: mutation.ttl,
            values: mutation.values.clone(),
        }
    }
}

const HEADERS: [&str; 5] = ["ZONE", "RECORD", "TYPE", "TTL", "VALUES"];

/// Render the summary table. Returns `None` when there are no rows.
#[must_use]
pub fn render_table(rows: &[ReportRow]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.zone_id.clone(),
                row.name.clone(),
                row.record_type.to_string(),
                row.ttl.to_string(),
                row.values.join(","),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    Some(out)
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // The last column is ragged; pad the rest to their column width
        if i < cells.len() - 1 {
            for _ in cell.len()..*width {
                line.push(' ');
            }
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
