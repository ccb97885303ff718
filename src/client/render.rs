// src/client/render.rs
use console::style;
use serde::Deserialize;
use std::io::{self, Write};

/// Line separator between rendered entries.
pub const LINE_BREAK: &str = "<br>";

/// A password entry as read back from the service. The score is kept as the
/// raw JSON number so fractional scores survive.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceivedPassword {
    pub password: String,
    pub score_percent: serde_json::Number,
}

/// The two shapes a `/generate` response can take. An empty `error` counts
/// as absent, so such a body must carry `passwords`.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawOutcome")]
pub enum GenerateOutcome {
    Failed { error: String },
    Generated { passwords: Vec<ReceivedPassword> },
}

#[derive(Deserialize)]
struct RawOutcome {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    passwords: Option<Vec<ReceivedPassword>>,
}

impl TryFrom<RawOutcome> for GenerateOutcome {
    type Error = &'static str;

    fn try_from(raw: RawOutcome) -> Result<Self, Self::Error> {
        match (raw.error.filter(|e| !e.is_empty()), raw.passwords) {
            (Some(error), _) => Ok(GenerateOutcome::Failed { error }),
            (None, Some(passwords)) => Ok(GenerateOutcome::Generated { passwords }),
            (None, None) => Err("response has neither an error nor passwords"),
        }
    }
}

/// Whole-valued scores print without a fractional part, as a browser would.
fn format_score(score: &serde_json::Number) -> String {
    match score.as_f64() {
        Some(f) if !score.is_i64() && !score.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => score.to_string(),
    }
}

/// What ends up in the result node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultContent {
    /// Assigned as plain text, never interpreted as markup.
    Text(String),
    /// Assigned as markup.
    Html(String),
}

/// Write access to the result node.
pub trait ResultSink {
    fn set_text_content(&mut self, text: &str);

    fn set_inner_html(&mut self, html: &str);
}

pub fn render(outcome: &GenerateOutcome) -> ResultContent {
    match outcome {
        GenerateOutcome::Failed { error } => ResultContent::Text(error.clone()),
        GenerateOutcome::Generated { passwords } => ResultContent::Html(
            passwords
                .iter()
                .map(|entry| format!("{} — {}%", entry.password, format_score(&entry.score_percent)))
                .collect::<Vec<_>>()
                .join(LINE_BREAK),
        ),
    }
}

impl ResultContent {
    pub fn apply_to<S: ResultSink + ?Sized>(&self, sink: &mut S) {
        match self {
            ResultContent::Text(text) => sink.set_text_content(text),
            ResultContent::Html(html) => sink.set_inner_html(html),
        }
    }
}

/// A detached result node that remembers the last assignment.
#[derive(Debug, Clone, Default)]
pub struct ResultNode {
    pub content: Option<ResultContent>,
}

impl ResultSink for ResultNode {
    fn set_text_content(&mut self, text: &str) {
        self.content = Some(ResultContent::Text(text.to_string()));
    }

    fn set_inner_html(&mut self, html: &str) {
        self.content = Some(ResultContent::Html(html.to_string()));
    }
}

/// Prints the result to a terminal, one entry per line.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::error!("Failed to write result: {}", e);
        }
    }
}

impl<W: Write> ResultSink for TerminalSink<W> {
    fn set_text_content(&mut self, text: &str) {
        self.write_line(&style(text).red().to_string());
    }

    fn set_inner_html(&mut self, html: &str) {
        for line in html.split(LINE_BREAK) {
            self.write_line(&style(line).green().to_string());
        }
    }
}
