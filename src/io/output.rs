use crate::config::Thresholds;
use crate::core::{ClassroomAnalysis, GraphNode};
use crate::risk::RiskLevel;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Presentation settings shared by the human-readable writers.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub grade: String,
    /// Maximum rows in the at-risk table
    pub top: usize,
    pub thresholds: Thresholds,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            grade: String::new(),
            top: 10,
            thresholds: Thresholds::default(),
        }
    }
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: OutputOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: OutputOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_at_risk(results)?;
        self.write_tensions(results)?;
        self.write_isolated(results)?;
        self.write_recommendations(results)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()> {
        let analysis = &results.analysis;
        let level = analysis.global_level(&self.options.thresholds);
        writeln!(self.writer, "# Classroom Risk Report: {}", self.options.grade)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Students | {} |", results.nodes.len())?;
        writeln!(self.writer, "| Relations | {} |", results.edges.len())?;
        writeln!(
            self.writer,
            "| Global risk | {}/100 ({level}) |",
            analysis.global_risk
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_at_risk(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Students at Risk")?;
        writeln!(self.writer)?;
        let at_risk = &results.analysis.at_risk_students;
        if at_risk.is_empty() {
            writeln!(self.writer, "No students above the risk threshold.")?;
            writeln!(self.writer)?;
            return Ok(());
        }
        writeln!(
            self.writer,
            "| Student | Risk | Popularity (in) | Conflicts (in) |"
        )?;
        writeln!(self.writer, "|---------|------|-----------------|----------------|")?;
        for node in at_risk.iter().take(self.options.top) {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                node.student.name,
                node.risk_score(),
                node.in_degree(),
                node.conflict_score()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_tensions(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Mutual Conflicts")?;
        writeln!(self.writer)?;
        let tensions = &results.analysis.tension_groups;
        if tensions.is_empty() {
            writeln!(self.writer, "No reciprocal rejections detected.")?;
        }
        for pair in tensions {
            writeln!(
                self.writer,
                "- {} ↔ {}",
                display_name(results, pair.first().as_str()),
                display_name(results, pair.second().as_str())
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_isolated(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Isolated Students")?;
        writeln!(self.writer)?;
        let isolated = &results.analysis.isolated_students;
        if isolated.is_empty() {
            writeln!(self.writer, "Every student was chosen by at least one peer.")?;
        }
        for node in isolated {
            writeln!(
                self.writer,
                "- {} (chose {} peers)",
                node.student.name,
                node.out_degree()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()> {
        if results.analysis.recommendations.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", results.analysis.recommendations)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    options: OutputOptions,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: OutputOptions) -> Self {
        Self { writer, options }
    }

    fn colorize_score(&self, score: u8) -> ColoredString {
        let text = score.to_string();
        match RiskLevel::classify(score, &self.options.thresholds) {
            RiskLevel::High => text.red().bold(),
            RiskLevel::Elevated => text.yellow(),
            RiskLevel::Low => text.green(),
        }
    }

    fn print_node_row(&mut self, node: &GraphNode) -> anyhow::Result<()> {
        let score = self.colorize_score(node.risk_score());
        writeln!(
            self.writer,
            "  {:<24} risk {:>3}  in {:>2}  out {:>2}  conflicts {:>2}",
            node.student.name,
            score,
            node.in_degree(),
            node.out_degree(),
            node.conflict_score()
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &ClassroomAnalysis) -> anyhow::Result<()> {
        let analysis = &results.analysis;

        writeln!(self.writer, "{}", "Classroom Risk Report".bold().blue())?;
        writeln!(self.writer, "{}", "=====================".blue())?;
        if !self.options.grade.is_empty() {
            writeln!(self.writer, "  Class: {}", self.options.grade)?;
        }
        writeln!(
            self.writer,
            "  Students: {}  Relations: {}",
            results.nodes.len(),
            results.edges.len()
        )?;
        let level = analysis.global_level(&self.options.thresholds);
        writeln!(
            self.writer,
            "  Global risk: {}/100 ({})",
            self.colorize_score(analysis.global_risk),
            level
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "At-risk students:".bold())?;
        if analysis.at_risk_students.is_empty() {
            writeln!(self.writer, "  none")?;
        }
        for node in analysis.at_risk_students.iter().take(self.options.top) {
            self.print_node_row(node)?;
        }
        let hidden = analysis
            .at_risk_students
            .len()
            .saturating_sub(self.options.top);
        if hidden > 0 {
            writeln!(self.writer, "  ... and {hidden} more")?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Mutual conflicts:".bold())?;
        if analysis.tension_groups.is_empty() {
            writeln!(self.writer, "  none")?;
        }
        for pair in &analysis.tension_groups {
            writeln!(
                self.writer,
                "  {} <-> {}",
                display_name(results, pair.first().as_str()).red(),
                display_name(results, pair.second().as_str()).red()
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Isolated students:".bold())?;
        if analysis.isolated_students.is_empty() {
            writeln!(self.writer, "  none")?;
        }
        for node in &analysis.isolated_students {
            self.print_node_row(node)?;
        }

        if !analysis.recommendations.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Recommendations:".bold())?;
            writeln!(self.writer, "{}", analysis.recommendations)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn display_name<'a>(results: &'a ClassroomAnalysis, id: &'a str) -> &'a str {
    results
        .node(id)
        .map(|node| node.student.name.as_str())
        .unwrap_or(id)
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    options: OutputOptions,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, options)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, options)),
    }
}
