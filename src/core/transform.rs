//! Line-by-line conversion of a console log into CSV rows.

use crate::core::symbols::substitute_symbols;
use crate::domain::model::{ConversionSummary, LineKind, MarkerCounters, TransformResult};

/// Classifies a raw line. "input" wins over "output", and both win over a
/// leading digit.
pub fn classify(line: &str) -> LineKind {
    if line.contains("input") {
        LineKind::InputMarker
    } else if line.contains("output") {
        LineKind::OutputMarker
    } else if line.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        LineKind::Numeric
    } else {
        LineKind::Other
    }
}

/// Collapses " - " into "-", then turns every remaining space into a comma.
pub fn normalize_delimiters(line: &str) -> String {
    line.replace(" - ", "-").replace(' ', ",")
}

/// Splits text into lines that keep their trailing '\n'.
///
/// "\r\n" and lone '\r' are read as '\n' first. The last line has no
/// terminator when the text doesn't end with one.
pub fn split_lines(text: &str) -> Vec<String> {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified.split_inclusive('\n').map(str::to_string).collect()
}

#[derive(Debug, Default)]
pub struct LineConverter {
    counters: MarkerCounters,
    drop_marker_lines: bool,
    summary: ConversionSummary,
}

impl LineConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker lines still count, but produce no row.
    pub fn with_drop_marker_lines(drop_marker_lines: bool) -> Self {
        Self {
            drop_marker_lines,
            ..Self::default()
        }
    }

    pub fn counters(&self) -> MarkerCounters {
        self.counters
    }

    /// Converts one line. Returns `None` only for marker lines when they are
    /// being dropped.
    pub fn convert_line(&mut self, line: &str) -> Option<String> {
        let kind = classify(line);
        self.summary.lines_read += 1;
        self.counters.record(kind);

        let annotated = match kind {
            LineKind::InputMarker => {
                self.summary.input_markers += 1;
                line.to_string()
            }
            LineKind::OutputMarker => {
                self.summary.output_markers += 1;
                line.to_string()
            }
            LineKind::Numeric => {
                self.summary.numeric_lines += 1;
                let counts = self.counters.take();
                // drops the last character, normally the '\n'
                let mut body = line.to_string();
                body.pop();
                format!("{} {} {}\n", body, counts.input, counts.output)
            }
            LineKind::Other => {
                self.summary.other_lines += 1;
                line.to_string()
            }
        };

        tracing::trace!(?kind, line = line.trim_end(), "classified line");

        if self.drop_marker_lines && kind.is_marker() {
            return None;
        }

        let (substituted, replaced) = substitute_symbols(&annotated);
        self.summary.substitutions += replaced;
        self.summary.lines_written += 1;

        Some(normalize_delimiters(&substituted))
    }

    pub fn finish(self) -> ConversionSummary {
        self.summary
    }
}

/// Converts lines that already carry their own terminators.
pub fn convert_lines<I>(lines: I, drop_marker_lines: bool) -> TransformResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut converter = LineConverter::with_drop_marker_lines(drop_marker_lines);
    let mut csv_output = String::new();

    for line in lines {
        if let Some(row) = converter.convert_line(line.as_ref()) {
            csv_output.push_str(&row);
        }
    }

    TransformResult {
        csv_output,
        summary: converter.finish(),
    }
}

/// Converts a whole console log held in memory.
pub fn convert_text(text: &str, drop_marker_lines: bool) -> TransformResult {
    convert_lines(split_lines(text), drop_marker_lines)
}
