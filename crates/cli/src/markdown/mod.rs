// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown documents as ordered, typed sections.
//!
//! Every line carries a [`LineId`] assigned once at parse time. Rules address
//! lines by id, so inserting or removing lines in one place never redirects
//! a patch aimed at another line.

pub mod mark;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Stable identifier of a document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u32);

/// One line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub text: String,
}

/// Kind of a top-level documentation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    FrontMatter,
    Title,
    Example,
    Arguments,
    Attributes,
    Timeouts,
    Import,
    Api,
    Unknown,
}

impl SectionKind {
    /// Classify a `#`/`##` heading line.
    pub fn from_heading(heading: &str) -> Self {
        let level = heading.chars().take_while(|c| *c == '#').count();
        if level == 1 {
            return SectionKind::Title;
        }
        let text = heading.trim_start_matches('#').trim().to_lowercase();
        match text.as_str() {
            t if t.starts_with("example") => SectionKind::Example,
            "argument reference" | "arguments reference" | "arguments" => SectionKind::Arguments,
            "attribute reference" | "attributes reference" | "attributes" => {
                SectionKind::Attributes
            }
            "timeouts" => SectionKind::Timeouts,
            "import" => SectionKind::Import,
            "api providers" => SectionKind::Api,
            _ => SectionKind::Unknown,
        }
    }

    /// Position in the canonical section order, `None` for unknown sections.
    pub fn rank(self) -> Option<usize> {
        match self {
            SectionKind::FrontMatter => Some(0),
            SectionKind::Title => Some(1),
            SectionKind::Example => Some(2),
            SectionKind::Arguments => Some(3),
            SectionKind::Attributes => Some(4),
            SectionKind::Timeouts => Some(5),
            SectionKind::Import => Some(6),
            SectionKind::Api => Some(7),
            SectionKind::Unknown => None,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::FrontMatter => "Front Matter",
            SectionKind::Title => "Title",
            SectionKind::Example => "Example Usage",
            SectionKind::Arguments => "Arguments Reference",
            SectionKind::Attributes => "Attributes Reference",
            SectionKind::Timeouts => "Timeouts",
            SectionKind::Import => "Import",
            SectionKind::Api => "API Providers",
            SectionKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// A section: its heading line (if any) followed by its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<Line>,
}

impl Section {
    /// The heading line, when the section starts with one.
    pub fn heading(&self) -> Option<&Line> {
        self.lines.first().filter(|l| l.text.starts_with('#'))
    }

    /// Lines after the heading.
    pub fn body(&self) -> &[Line] {
        match self.heading() {
            Some(_) => &self.lines[1..],
            None => &self.lines,
        }
    }

    pub fn contains(&self, id: LineId) -> bool {
        self.lines.iter().any(|l| l.id == id)
    }

    /// Section lines joined with `\n`.
    pub fn content(&self) -> String {
        self.lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n")
    }
}

/// A markdown documentation file.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    sections: Vec<Section>,
    next_id: u32,
    trailing_newline: bool,
    has_change: bool,
}

impl Document {
    /// Parse document content into sections.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        let mut doc = Document {
            path: path.into(),
            sections: Vec::new(),
            next_id: 0,
            trailing_newline: content.ends_with('\n'),
            has_change: false,
        };

        let mut in_front_matter = false;
        let mut in_fence = false;

        for (idx, text) in content.lines().enumerate() {
            let line = doc.new_line(text);

            if idx == 0 && mark::is_rule(text) {
                in_front_matter = true;
                doc.sections.push(Section { kind: SectionKind::FrontMatter, lines: vec![line] });
                continue;
            }
            if in_front_matter {
                if mark::is_rule(text) {
                    in_front_matter = false;
                }
                doc.push_line(line);
                continue;
            }

            if text.trim_start().starts_with("```") {
                in_fence = !in_fence;
            }
            let is_section_heading =
                !in_fence && (text.starts_with("# ") || text.starts_with("## "));
            if is_section_heading {
                let kind = SectionKind::from_heading(text);
                doc.sections.push(Section { kind, lines: vec![line] });
            } else {
                doc.push_line(line);
            }
        }

        doc
    }

    /// Read and parse a document from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(path, &content))
    }

    fn new_line(&mut self, text: &str) -> Line {
        let id = LineId(self.next_id);
        self.next_id += 1;
        Line { id, text: text.to_string() }
    }

    fn push_line(&mut self, line: Line) {
        match self.sections.last_mut() {
            Some(section) => section.lines.push(line),
            None => self.sections.push(Section { kind: SectionKind::Unknown, lines: vec![line] }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section of the given kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Current text of a line.
    pub fn line(&self, id: LineId) -> Option<&str> {
        self.lines().find(|l| l.id == id).map(|l| l.text.as_str())
    }

    /// Current 1-indexed position of a line in the file.
    pub fn line_number(&self, id: LineId) -> Option<usize> {
        self.lines().position(|l| l.id == id).map(|p| p + 1)
    }

    fn lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(|s| s.lines.iter())
    }

    /// Replace the text of a line. Returns true when the text changed.
    pub fn set_line(&mut self, id: LineId, text: &str) -> bool {
        let Some(line) = self
            .sections
            .iter_mut()
            .flat_map(|s| s.lines.iter_mut())
            .find(|l| l.id == id)
        else {
            return false;
        };
        if line.text == text {
            return false;
        }
        line.text = text.to_string();
        self.has_change = true;
        true
    }

    /// Remove a line. Returns true when it existed.
    pub fn remove_line(&mut self, id: LineId) -> bool {
        for section in &mut self.sections {
            if let Some(pos) = section.lines.iter().position(|l| l.id == id) {
                section.lines.remove(pos);
                self.has_change = true;
                return true;
            }
        }
        false
    }

    /// Replace every line after the heading of the first section of `kind`.
    ///
    /// New lines get fresh ids; ids of lines in other sections are unaffected.
    /// Returns true when the content changed.
    pub fn replace_section_body(&mut self, kind: SectionKind, body: &[String]) -> bool {
        let Some(idx) = self.sections.iter().position(|s| s.kind == kind) else {
            return false;
        };
        let section = &self.sections[idx];
        let keep = usize::from(section.heading().is_some());
        let current: Vec<&str> = section.lines[keep..].iter().map(|l| l.text.as_str()).collect();
        if current == body.iter().map(String::as_str).collect::<Vec<_>>() {
            return false;
        }

        let new_lines: Vec<Line> = body.iter().map(|text| self.new_line(text)).collect();
        let section = &mut self.sections[idx];
        section.lines.truncate(keep);
        section.lines.extend(new_lines);
        self.has_change = true;
        true
    }

    /// True once any line was changed.
    pub fn has_change(&self) -> bool {
        self.has_change
    }

    /// Serialize the document back to markdown.
    pub fn render(&self) -> String {
        let mut out = self.lines().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }

    /// Write the document back to its path.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, self.render()).map_err(|e| Error::io(&self.path, e))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
