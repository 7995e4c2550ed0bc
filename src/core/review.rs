//! Review step between automatic selection and commit
//!
//! A [`Reviewer`] receives the proposed [`Selection`] and returns the final
//! one. [`PromptReviewer`] runs an interactive loop: it asks whether the
//! user wants to edit, applies one `add <CRN>` / `remove <CRN>` command per
//! round, re-checking only the credit cap, and stops on "n", "done", or end
//! of input.

use crate::core::models::Course;
use crate::core::selector::{EditOutcome, Selection};
use std::io::{self, BufRead, Write};

/// Decides the final selection before it is committed
pub trait Reviewer {
    /// Review and possibly edit `selection`
    ///
    /// # Arguments
    /// * `selection` - The automatically chosen courses
    /// * `available` - Every loaded course, for additions
    /// * `max_credits` - Cap every edit is checked against
    ///
    /// # Errors
    /// Returns an error if interaction with the user fails
    fn review(
        &mut self,
        selection: Selection,
        available: &[Course],
        max_credits: f32,
    ) -> io::Result<Selection>;
}

/// Accepts the automatic selection unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Reviewer for AcceptAll {
    fn review(
        &mut self,
        selection: Selection,
        _available: &[Course],
        _max_credits: f32,
    ) -> io::Result<Selection> {
        Ok(selection)
    }
}

/// One edit typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum EditCommand {
    Add(String),
    Remove(String),
    Done,
}

impl EditCommand {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().map(str::to_ascii_lowercase);
        let arg = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return None;
        }

        match (verb.as_deref(), arg) {
            (None | Some("done" | "d"), None) => Some(Self::Done),
            (Some("add" | "a"), Some(crn)) => Some(Self::Add(crn)),
            (Some("remove" | "rm" | "r"), Some(crn)) => Some(Self::Remove(crn)),
            _ => None,
        }
    }
}

/// Interactive reviewer over any line-based input and output
#[derive(Debug)]
pub struct PromptReviewer<R, W> {
    input: R,
    output: W,
}

impl PromptReviewer<io::StdinLock<'static>, io::Stdout> {
    /// Reviewer reading stdin and writing stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptReviewer<R, W> {
    /// Create a reviewer over the given streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the reviewer, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for and apply one edit; returns `false` when the user is done
    fn edit_once(
        &mut self,
        selection: &mut Selection,
        available: &[Course],
        max_credits: f32,
    ) -> io::Result<bool> {
        let others: Vec<&Course> = available
            .iter()
            .filter(|c| !selection.contains(c.crn()))
            .collect();
        if !others.is_empty() {
            writeln!(self.output, "Other available courses:")?;
            for course in others {
                writeln!(self.output, "  {course}")?;
            }
        }

        let Some(line) = self.ask("Enter 'add <CRN>', 'remove <CRN>', or 'done': ")? else {
            return Ok(false);
        };

        match EditCommand::parse(&line) {
            Some(EditCommand::Done) => return Ok(false),
            Some(EditCommand::Add(crn)) => {
                let Some(course) = available.iter().find(|c| c.crn() == crn) else {
                    writeln!(self.output, "✗ No course with CRN {crn}")?;
                    return Ok(true);
                };
                match selection.try_add(course.clone(), max_credits) {
                    EditOutcome::Added => writeln!(
                        self.output,
                        "✓ Added {} ({crn}); total {} credits",
                        course.name,
                        selection.total_credits()
                    )?,
                    EditOutcome::ExceedsCap { would_total } => writeln!(
                        self.output,
                        "✗ Cannot add {crn}: total would be {would_total} credits (cap {max_credits})"
                    )?,
                    _ => writeln!(self.output, "✗ {crn} is already in the schedule")?,
                }
            }
            Some(EditCommand::Remove(crn)) => match selection.remove(&crn) {
                EditOutcome::Removed => writeln!(
                    self.output,
                    "✓ Removed {crn}; total {} credits",
                    selection.total_credits()
                )?,
                _ => writeln!(self.output, "✗ {crn} is not in the schedule")?,
            },
            None => writeln!(self.output, "✗ Unrecognized command: '{line}'")?,
        }
        Ok(true)
    }
}

impl<R: BufRead, W: Write> Reviewer for PromptReviewer<R, W> {
    fn review(
        &mut self,
        selection: Selection,
        available: &[Course],
        max_credits: f32,
    ) -> io::Result<Selection> {
        let mut selection = selection;

        loop {
            writeln!(self.output, "\nProposed schedule:\n{selection}")?;
            let Some(answer) = self.ask("Would you like to edit this schedule? (y/n): ")? else {
                break;
            };

            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => {
                    if !self.edit_once(&mut selection, available, max_credits)? {
                        break;
                    }
                }
                "n" | "no" => break,
                _ => writeln!(self.output, "Please answer 'y' or 'n'.")?,
            }
        }

        Ok(selection)
    }
}
