use std::io::{self, Write};

use shared::{
    domain::{Project, StepStatus},
    glossary::STITCH_GLOSSARY,
    protocol::ProjectSummary,
};
use tracker_core::{progress_summary, step_overview};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn render_list(summaries: &[ProjectSummary], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Your Projects")?;
    if summaries.is_empty() {
        writeln!(out, "No projects yet. Start by generating a pattern!")?;
        return Ok(());
    }

    for summary in summaries {
        writeln!(
            out,
            "{}  [{}] {}  Row {} of {}  last worked {}",
            summary.project_id,
            summary.category,
            summary.title,
            summary.counter,
            summary.step_count,
            summary.last_modified.format(DATE_FORMAT)
        )?;
    }
    Ok(())
}

pub fn render_project(project: &Project, out: &mut dyn Write) -> io::Result<()> {
    let pattern = &project.pattern;
    let summary = progress_summary(project);

    writeln!(out, "{} ({})", pattern.title, pattern.difficulty)?;
    writeln!(
        out,
        "Row {}  |  {}/{} steps done  |  started {}  |  last worked {}",
        project.counter,
        summary.completed,
        summary.total,
        project.start_date.format(DATE_FORMAT),
        project.last_modified.format(DATE_FORMAT)
    )?;
    if !pattern.description.is_empty() {
        writeln!(out, "{}", pattern.description)?;
    }

    writeln!(out)?;
    writeln!(out, "Materials Needed")?;
    for material in &pattern.materials {
        writeln!(out, "  - {material}")?;
    }
    writeln!(out, "  - Hook Size: {}", pattern.hook_size)?;

    writeln!(out)?;
    writeln!(out, "Pattern Instructions")?;
    for view in step_overview(project) {
        let marker = match view.status {
            StepStatus::Complete => "[x]",
            StepStatus::Current => "[>]",
            StepStatus::Upcoming => "[ ]",
        };
        writeln!(out, "  {marker} {}: {}", view.step.round_or_row, view.step.step)?;
    }
    if summary.is_finished {
        writeln!(out, "  Pattern complete!")?;
    }

    if !pattern.abbreviations.is_empty() {
        writeln!(out)?;
        writeln!(out, "Stitch Glossary")?;
        for (key, expansion) in &pattern.abbreviations {
            writeln!(out, "  {}: {expansion}", key.to_uppercase())?;
        }
    }

    if !project.notes.is_empty() {
        writeln!(out)?;
        writeln!(out, "Notes")?;
        for line in project.notes.lines() {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

pub fn render_glossary(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Learning Center")?;
    for entry in STITCH_GLOSSARY {
        writeln!(out, "  {}: {}", entry.name, entry.description)?;
    }
    Ok(())
}
