//! Bounded section splicing
//!
//! A section starts at a heading line and runs until the next heading of the
//! same or higher level, or the end of the document. Splicing replaces exactly
//! that span and keeps every other line as it was.
//!
//! Lines are handled with their terminators attached, so joining the result
//! reproduces untouched content byte-for-byte.

use std::cell::Cell;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// ATX header: up to three spaces of indentation, 1-6 `#`, then space or EOL.
static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]|$)").expect("Invalid header regex"));

/// Opening or closing code fence.
static FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(`{3,}|~{3,})").expect("Invalid fence regex"));

/// Split text into lines, each keeping its `\n` terminator.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Level of a markdown ATX header line, if it is one.
pub fn header_level(line: &str) -> Option<usize> {
    HEADER_REGEX
        .captures(strip_terminator(line))
        .map(|caps| caps[1].len())
}

/// Locate the span opened by the first `is_start` line.
///
/// The span ends before the first later line satisfying `is_end`, or at the
/// end of the document. Each line is passed to exactly one predicate, in
/// document order, so predicates may carry state between calls.
pub fn find_section(
    lines: &[String],
    mut is_start: impl FnMut(&str) -> bool,
    mut is_end: impl FnMut(&str) -> bool,
) -> Option<Range<usize>> {
    let start = lines.iter().position(|line| is_start(line))?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| is_end(line))
        .map_or(lines.len(), |offset| start + 1 + offset);
    Some(start..end)
}

/// Replace `span` with `section`, or append `section` when there is no span.
///
/// Appending to a non-empty document terminates its last line and inserts a
/// blank separator line unless the document already ends with one.
pub fn splice_section(lines: &[String], span: Option<Range<usize>>, section: &[String]) -> Vec<String> {
    match span {
        Some(span) => {
            let mut result = Vec::with_capacity(lines.len() - span.len() + section.len());
            result.extend_from_slice(&lines[..span.start]);
            result.extend_from_slice(section);
            result.extend_from_slice(&lines[span.end..]);
            result
        }
        None => {
            let mut result = lines.to_vec();
            if let Some(last) = result.last_mut() {
                if !last.ends_with('\n') {
                    last.push('\n');
                }
                if !last.trim().is_empty() {
                    result.push("\n".to_string());
                }
            }
            result.extend_from_slice(section);
            result
        }
    }
}

/// [`find_section`] followed by [`splice_section`].
pub fn replace_section(
    lines: &[String],
    is_start: impl FnMut(&str) -> bool,
    is_end: impl FnMut(&str) -> bool,
    section: &[String],
) -> Vec<String> {
    splice_section(lines, find_section(lines, is_start, is_end), section)
}

/// Tracks fenced code blocks so `#` lines inside them are not taken as headers.
#[derive(Debug, Default)]
struct FenceTracker {
    open: Cell<Option<(char, usize)>>,
}

impl FenceTracker {
    /// Header level of `line` unless it is a fence or inside a fenced block.
    fn header_level(&self, line: &str) -> Option<usize> {
        let text = strip_terminator(line);
        if let Some(caps) = FENCE_REGEX.captures(text) {
            let marker = &caps[1];
            let fence_char = marker.chars().next()?;
            match self.open.get() {
                None => self.open.set(Some((fence_char, marker.len()))),
                Some((open_char, open_len)) if open_char == fence_char && marker.len() >= open_len => {
                    self.open.set(None)
                }
                Some(_) => {}
            }
            return None;
        }
        if self.open.get().is_some() {
            return None;
        }
        header_level(text)
    }
}

/// Deepest section heading accepted. Rendered collection headers sit two
/// levels below it and must stay valid ATX headers.
pub const MAX_HEADING_LEVEL: usize = 4;

/// Recognizes the start and end of the regenerated section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatcher {
    heading: String,
    canonical: String,
    level: usize,
}

impl HeadingMatcher {
    /// Build a matcher for a canonical heading line such as `## Datasets`.
    pub fn new(heading: &str) -> Result<Self> {
        let heading = heading.trim();
        let level = header_level(heading)
            .filter(|level| *level <= MAX_HEADING_LEVEL)
            .ok_or_else(|| Error::InvalidHeading {
                heading: heading.to_string(),
            })?;
        Ok(Self {
            heading: heading.to_string(),
            canonical: heading.to_lowercase(),
            level,
        })
    }

    /// The canonical heading line, without terminator.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Case-insensitive match of a line against the canonical heading.
    pub fn is_start(&self, line: &str) -> bool {
        strip_terminator(line)
            .trim()
            .to_lowercase()
            .starts_with(&self.canonical)
    }

    /// Whether `line` is a header that closes the section.
    pub fn ends_section(&self, line: &str) -> bool {
        header_level(line).is_some_and(|level| level <= self.level)
    }

    /// Span of the section in `lines`, ignoring headers inside code fences.
    pub fn locate(&self, lines: &[String]) -> Option<Range<usize>> {
        let fences = FenceTracker::default();
        find_section(
            lines,
            |line| fences.header_level(line).is_some() && self.is_start(line),
            |line| fences.header_level(line).is_some() && self.ends_section(line),
        )
    }

    /// Replace the section in `lines` with `section`, appending if absent.
    pub fn replace(&self, lines: &[String], section: &[String]) -> Vec<String> {
        splice_section(lines, self.locate(lines), section)
    }
}

impl Default for HeadingMatcher {
    fn default() -> Self {
        Self {
            heading: "## Datasets".to_string(),
            canonical: "## datasets".to_string(),
            level: 2,
        }
    }
}
