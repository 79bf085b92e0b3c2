/// Counts describing a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    pub total_lines: usize,
    pub transformed_lines_count: usize,
    /// Always zero: no check currently detects out-of-order counters.
    pub skipped_out_of_order_count: usize,
    pub multi_match_warning_count: usize,
    /// Transformed lines per level; entry `i` belongs to level `i + 1`.
    pub level_match_counts: Vec<usize>,
    /// 1-based indices of levels that never transformed a line, ascending.
    pub levels_with_zero_matches: Vec<usize>,
}

/// Output of one run: rewritten lines, warnings, and the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingResult {
    pub output_lines: Vec<String>,
    pub warnings: Vec<String>,
    pub summary: ProcessingSummary,
}

/// Accumulates output and counts during a pass.
#[derive(Debug)]
pub struct SummaryAggregator {
    output_lines: Vec<String>,
    warnings: Vec<String>,
    summary: ProcessingSummary,
}

impl SummaryAggregator {
    pub fn new(total_lines: usize, levels: usize) -> Self {
        Self {
            output_lines: Vec::with_capacity(total_lines),
            warnings: Vec::new(),
            summary: ProcessingSummary {
                total_lines,
                level_match_counts: vec![0; levels],
                ..ProcessingSummary::default()
            },
        }
    }

    pub fn record_unchanged(&mut self, line: &str) {
        self.output_lines.push(line.to_string());
    }

    pub fn record_transformed(&mut self, level: usize, line: String) {
        self.output_lines.push(line);
        self.summary.transformed_lines_count += 1;
        if let Some(count) = self.summary.level_match_counts.get_mut(level - 1) {
            *count += 1;
        }
    }

    pub fn record_multi_match(&mut self, warning: String) {
        self.summary.multi_match_warning_count += 1;
        self.warnings.push(warning);
    }

    /// Finalises the summary, computing the zero-match levels.
    pub fn finish(mut self) -> ProcessingResult {
        self.summary.levels_with_zero_matches = self
            .summary
            .level_match_counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == 0)
            .map(|(i, _)| i + 1)
            .collect();

        ProcessingResult {
            output_lines: self.output_lines,
            warnings: self.warnings,
            summary: self.summary,
        }
    }
}
