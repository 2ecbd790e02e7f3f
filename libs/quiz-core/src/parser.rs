//! Quiz markdown parser.
//!
//! # Format
//! ```markdown
//! # Customer survey
//! ## Tell us about your visit
//!
//! ### Which store did you visit?
//! □ Shibuya
//! □ Shinjuku
//! 正解: Shibuya
//!
//! ##### [yesno] Would you come back?
//!
//! ---
//!
//! # Next quiz
//! $$$-2 Rank our products
//! □ Coffee
//! □ Tea
//! □ Cake
//! ```
//!
//! Parsing never fails. Lines that cannot be placed are skipped and reported
//! through [`parse_with_diagnostics`].

use crate::classify::{classify_line, LineKind};
use crate::error::Diagnostic;
use crate::heading::{resolve, HeadingResolution};
use crate::types::{Question, QuestionType, Quiz, YES_NO_OPTIONS};

/// Parse quiz markdown into finalized quizzes.
pub fn parse(content: &str) -> Vec<Quiz> {
    parse_with_diagnostics(content).quizzes
}

/// Quizzes plus everything the parser had to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub quizzes: Vec<Quiz>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse quiz markdown, keeping diagnostics for skipped lines.
pub fn parse_with_diagnostics(content: &str) -> ParseOutcome {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let normalized = content.replace('\r', "");

    normalized
        .lines()
        .enumerate()
        .map(|(idx, line)| ClassifiedLine {
            line_number: idx + 1,
            kind: classify_line(line),
        })
        .fold(ParserState::new(), ParserState::apply)
        .finish()
}

/// A classified line and its 1-based position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub line_number: usize,
    pub kind: LineKind<'a>,
}

impl<'a> ClassifiedLine<'a> {
    pub fn new(line_number: usize, kind: LineKind<'a>) -> Self {
        Self { line_number, kind }
    }
}

/// A quiz that is still receiving lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBuilder {
    title: String,
    description: Option<String>,
    questions: Vec<Question>,
    start_line: usize,
}

impl QuizBuilder {
    fn new(title: &str, start_line: usize) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            questions: Vec::new(),
            start_line,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn build(self) -> Result<Quiz, Diagnostic> {
        if self.title.is_empty() || self.questions.is_empty() {
            return Err(Diagnostic::QuizDropped {
                line: self.start_line,
                title: self.title,
            });
        }

        Ok(Quiz {
            title: self.title,
            description: self.description,
            questions: self.questions,
        })
    }
}

/// Assembler state threaded through the fold over input lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    output: Vec<Quiz>,
    current_quiz: Option<QuizBuilder>,
    current_question: Option<Question>,
    diagnostics: Vec<Diagnostic>,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &[Quiz] {
        &self.output
    }

    pub fn current_quiz(&self) -> Option<&QuizBuilder> {
        self.current_quiz.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Apply one classified line and return the next state.
    pub fn apply(mut self, line: ClassifiedLine<'_>) -> Self {
        let line_num = line.line_number;
        match line.kind {
            LineKind::Separator => self.close_quiz(),
            LineKind::QuizTitle(title) => self.handle_title(title, line_num),
            LineKind::QuizDescription(text) => self.handle_description(text, line_num),
            LineKind::QuestionHeading(raw) => self.handle_heading(raw, line_num),
            LineKind::Option(value) => self.handle_option(value, line_num),
            LineKind::Answer(value) => self.handle_answer(value, line_num),
            LineKind::Ignore => {}
        }
        self
    }

    /// Close everything still open and return the result.
    pub fn finish(mut self) -> ParseOutcome {
        self.close_quiz();
        ParseOutcome {
            quizzes: self.output,
            diagnostics: self.diagnostics,
        }
    }

    fn handle_title(&mut self, title: &str, line_num: usize) {
        self.close_quiz();
        self.current_quiz = Some(QuizBuilder::new(title, line_num));
    }

    fn handle_description(&mut self, text: &str, line_num: usize) {
        match self.current_quiz.as_mut() {
            Some(quiz) if quiz.description.is_none() => {
                quiz.description = Some(text.to_string());
            }
            Some(_) => self
                .diagnostics
                .push(Diagnostic::DuplicateDescription { line: line_num }),
            None => self
                .diagnostics
                .push(Diagnostic::OrphanedDescription { line: line_num }),
        }
    }

    fn handle_heading(&mut self, raw: &str, line_num: usize) {
        if self.current_quiz.is_none() {
            self.diagnostics
                .push(Diagnostic::HeadingOutsideQuiz { line: line_num });
            return;
        }

        self.close_question();

        let order_index = self.current_quiz.as_ref().map_or(0, |q| q.questions.len());
        match resolve(raw, order_index) {
            HeadingResolution::Opened(question) => self.current_question = Some(question),
            HeadingResolution::Invalid => {
                tracing::debug!(line = line_num, "skipping malformed question heading");
                self.diagnostics.push(Diagnostic::MalformedHeading {
                    line: line_num,
                    text: raw.to_string(),
                });
            }
        }
    }

    fn handle_option(&mut self, value: &str, line_num: usize) {
        match self.current_question.as_mut() {
            Some(question) => question.options.push(value.to_string()),
            None => self
                .diagnostics
                .push(Diagnostic::OrphanedOption { line: line_num }),
        }
    }

    fn handle_answer(&mut self, value: &str, line_num: usize) {
        match self.current_question.as_mut() {
            Some(question) => question.correct_answer = Some(canonical_answer(value)),
            None => self
                .diagnostics
                .push(Diagnostic::OrphanedAnswer { line: line_num }),
        }
    }

    fn close_question(&mut self) {
        let Some(question) = self.current_question.take() else {
            return;
        };
        if let Some(quiz) = self.current_quiz.as_mut() {
            quiz.questions.push(finalize_question(question));
        }
    }

    fn close_quiz(&mut self) {
        self.close_question();

        let Some(builder) = self.current_quiz.take() else {
            return;
        };
        match builder.build() {
            Ok(quiz) => self.output.push(quiz),
            Err(diag) => {
                tracing::debug!(line = diag.line(), "dropping quiz without title or questions");
                self.diagnostics.push(diag);
            }
        }
    }
}

/// Apply closing defaults to a question.
fn finalize_question(mut question: Question) -> Question {
    if question.question_type == QuestionType::YesNo && question.options.is_empty() {
        question.options = YES_NO_OPTIONS.iter().map(|s| s.to_string()).collect();
    }
    question
}

/// `"A,  B ,C"` becomes `"A, B, C"`.
fn canonical_answer(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
