use serde::{Deserialize, Serialize};

/// How a console line is treated by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Contains "input"; bumps the input counter.
    InputMarker,
    /// Contains "output" (and not "input"); bumps the output counter.
    OutputMarker,
    /// Starts with an ASCII digit; receives the counters and resets them.
    Numeric,
    Other,
}

impl LineKind {
    pub fn is_marker(self) -> bool {
        matches!(self, LineKind::InputMarker | LineKind::OutputMarker)
    }
}

/// Markers seen since the last numeric line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerCounters {
    pub input: usize,
    pub output: usize,
}

impl MarkerCounters {
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::InputMarker => self.input += 1,
            LineKind::OutputMarker => self.output += 1,
            LineKind::Numeric | LineKind::Other => {}
        }
    }

    /// Returns the current counts and resets both to zero.
    pub fn take(&mut self) -> MarkerCounters {
        std::mem::take(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub lines_read: usize,
    pub lines_written: usize,
    pub numeric_lines: usize,
    pub input_markers: usize,
    pub output_markers: usize,
    pub other_lines: usize,
    pub substitutions: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub csv_output: String,
    pub summary: ConversionSummary,
}
