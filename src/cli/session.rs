use std::io::{BufRead, Write};
use tracing::warn;
use crate::core::database::Database;
use crate::core::error::{ErrorKind, Result};

/// Literal token that ends an interactive session
pub const EXIT_TOKEN: &str = "exit";

const PROMPT: &str = "Enter word/prefix (exit to quit): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub answered: usize,
    pub rejected: usize,
    pub exited: bool,
}

/// Reads whitespace-separated terms and prints both searches for each
pub struct QuerySession<'a, W: Write> {
    db: &'a Database,
    out: W,
    format: OutputFormat,
    prompt: bool,
}

impl<'a, W: Write> QuerySession<'a, W> {
    pub fn new(db: &'a Database, out: W, format: OutputFormat) -> Self {
        QuerySession {
            db,
            out,
            format,
            prompt: false,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Answer terms until `exit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.show_prompt()?;

        for line in input.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                if token == EXIT_TOKEN {
                    summary.exited = true;
                    return Ok(summary);
                }
                self.answer(token, &mut summary)?;
            }
            self.show_prompt()?;
        }
        Ok(summary)
    }

    /// Non-interactive: answer each term in order
    pub fn run_terms<I, S>(&mut self, terms: I) -> Result<SessionSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = SessionSummary::default();
        for term in terms {
            let term = term.as_ref();
            if term == EXIT_TOKEN {
                summary.exited = true;
                break;
            }
            self.answer(term, &mut summary)?;
        }
        Ok(summary)
    }

    fn answer(&mut self, raw: &str, summary: &mut SessionSummary) -> Result<()> {
        match self.db.query(raw) {
            Ok(report) => {
                match self.format {
                    OutputFormat::Text => writeln!(self.out, "\n{}", report)?,
                    OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string(&report)?)?,
                }
                summary.answered += 1;
            }
            Err(e) if e.kind() == ErrorKind::InvalidQuery => {
                warn!(term = raw, error = %e, "rejected query");
                writeln!(self.out, "Invalid query: {}", e.context)?;
                summary.rejected += 1;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn show_prompt(&mut self) -> Result<()> {
        if self.prompt {
            write!(self.out, "\n{}", PROMPT)?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn db() -> Database {
        let mut writer = Database::writer(Config::default()).unwrap();
        writer.add_document("cat.txt", "The cat sat on the mat").unwrap();
        writer.finish()
    }

    fn run_text(db: &Database, input: &str) -> (SessionSummary, String) {
        let mut session = QuerySession::new(db, Vec::new(), OutputFormat::Text);
        let summary = session.run(input.as_bytes()).unwrap();
        (summary, String::from_utf8(session.into_inner()).unwrap())
    }

    #[test]
    fn exit_stops_without_output() {
        let db = db();
        let (summary, out) = run_text(&db, "exit\ncat\n");
        assert!(summary.exited);
        assert_eq!(summary.answered, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn answers_each_token_until_exit() {
        let db = db();
        let (summary, out) = run_text(&db, "Cat dog\nexit mat\n");
        assert_eq!(summary.answered, 2);
        assert!(summary.exited);
        assert!(out.contains("Word: cat"));
        assert!(out.contains("Word not found"));
        assert!(out.contains("No prefix matches found"));
        assert!(!out.contains("Word: mat"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let db = db();
        let (summary, _) = run_text(&db, "mat");
        assert!(!summary.exited);
        assert_eq!(summary.answered, 1);
    }

    #[test]
    fn over_length_term_is_rejected_and_session_continues() {
        let db = db();
        let input = format!("{} cat\n", "x".repeat(200));
        let (summary, out) = run_text(&db, &input);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.answered, 1);
        assert!(out.contains("Invalid query"));
    }

    #[test]
    fn json_output_is_one_report_per_line() {
        let db = db();
        let mut session = QuerySession::new(&db, Vec::new(), OutputFormat::Json);
        session.run_terms(["cat", "dog"]).unwrap();
        let out = String::from_utf8(session.into_inner()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["term"], "cat");
        assert_eq!(first["exact"]["status"], "found");
    }
}
