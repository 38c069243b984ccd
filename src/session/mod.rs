//! Assessment session controller
//!
//! Owns one assessment attempt: the current question index, the recorded
//! answers, the pending (not yet confirmed) selection, and the highest
//! progression level reached. The controller never scores anything itself;
//! it feeds the answer list to the scoring engines on demand.
//!
//! All operations are fail-soft: confirming without a selection, submitting
//! against the wrong question, or navigating past the ends are no-ops, not
//! errors. The surrounding UI disables the affected controls; the
//! controller just refuses quietly.

use crate::catalog::{Question, Scale};
use crate::models::{DassReport, OptionKey, StarReport, UserAnswer};
use crate::scoring;

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

/// Outcome of [`AssessmentSession::confirm_and_advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No pending selection (or no active session); nothing changed.
    Ignored,
    /// Moved to the next question. `level_up` carries the newly reached
    /// level when this step crossed a level boundary - a one-shot signal
    /// for the presentation layer to animate.
    Next { level_up: Option<u32> },
    /// Final question answered; the session is complete.
    Completed,
}

/// Result of a finished (or partial) session, shaped by its scale.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleResult {
    Dass(DassReport),
    Star(StarReport),
}

/// Progress through the catalog, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current question; equals `total` once
    /// completed, 0 before starting.
    pub position: usize,
    pub total: usize,
    pub percent: u32,
}

/// One assessment attempt over a single catalog.
pub struct AssessmentSession {
    scale: Scale,
    catalog: &'static [Question],
    state: SessionState,
    index: usize,
    level_reached: u32,
    answers: Vec<UserAnswer>,
    pending: Option<OptionKey>,
}

impl AssessmentSession {
    pub fn new(scale: Scale) -> Self {
        let catalog = scale.questions();
        AssessmentSession {
            scale,
            catalog,
            state: SessionState::NotStarted,
            index: 0,
            level_reached: catalog.first().map(|q| q.level).unwrap_or(1),
            answers: Vec::new(),
            pending: None,
        }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Recorded answers so far, in catalog order.
    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    /// Highest progression level seen this attempt.
    pub fn level_reached(&self) -> u32 {
        self.level_reached
    }

    /// The not-yet-confirmed selection for the current question.
    pub fn pending(&self) -> Option<OptionKey> {
        self.pending
    }

    /// Begin (or restart) the assessment. Any previous answers are gone.
    pub fn start(&mut self) {
        self.state = SessionState::InProgress;
        self.index = 0;
        self.level_reached = self.catalog.first().map(|q| q.level).unwrap_or(1);
        self.answers.clear();
        self.pending = None;
    }

    /// The question awaiting an answer, while one is.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            SessionState::InProgress => self.catalog.get(self.index),
            _ => None,
        }
    }

    /// Stage an option for the current question without advancing.
    pub fn select_option(&mut self, key: OptionKey) {
        if self.state == SessionState::InProgress {
            self.pending = Some(key);
        }
    }

    /// Record the pending selection and move forward.
    ///
    /// Without a pending selection this is a no-op; the UI is expected to
    /// keep its confirm control disabled until one exists.
    pub fn confirm_and_advance(&mut self) -> Advance {
        if self.state != SessionState::InProgress {
            return Advance::Ignored;
        }
        let (question, key) = match (self.current_question(), self.pending) {
            (Some(q), Some(k)) => (q, k),
            _ => return Advance::Ignored,
        };

        let answer = UserAnswer {
            question_id: question.id,
            selected: key,
            score: question.option(key).score,
        };
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == question.id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
        self.pending = None;

        if self.index + 1 >= self.catalog.len() {
            self.state = SessionState::Completed;
            return Advance::Completed;
        }

        self.index += 1;
        let next_level = self.catalog[self.index].level;
        let level_up = if next_level > self.level_reached {
            self.level_reached = next_level;
            Some(next_level)
        } else {
            None
        };
        Advance::Next { level_up }
    }

    /// Step back one question, restoring the removed answer as the pending
    /// selection. From the first question this abandons the session; from a
    /// completed session it reopens the final question.
    pub fn go_back(&mut self) {
        match self.state {
            SessionState::NotStarted => {}
            SessionState::Completed => {
                self.state = SessionState::InProgress;
                self.pending = self.remove_answer_at(self.index);
            }
            SessionState::InProgress => {
                if self.index == 0 {
                    // Backing out of the first question abandons the attempt
                    *self = AssessmentSession::new(self.scale);
                    return;
                }
                self.index -= 1;
                self.pending = self.remove_answer_at(self.index);
                let regained = self.catalog[self.index].level;
                if regained < self.level_reached {
                    self.level_reached = regained;
                }
            }
        }
    }

    /// External input contract: answer `question_id` with `key` in one
    /// step. Ignored unless it targets the current question.
    pub fn submit_answer(&mut self, question_id: u32, key: OptionKey) -> Advance {
        match self.current_question() {
            Some(q) if q.id == question_id => {
                self.select_option(key);
                self.confirm_and_advance()
            }
            _ => Advance::Ignored,
        }
    }

    /// Progress through the catalog.
    pub fn progress(&self) -> Progress {
        let total = self.catalog.len();
        let position = match self.state {
            SessionState::NotStarted => 0,
            SessionState::InProgress => self.index + 1,
            SessionState::Completed => total,
        };
        let percent = if total == 0 {
            0
        } else {
            (position as f64 / total as f64 * 100.0).round() as u32
        };
        Progress {
            position,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Score the answers recorded so far. Valid in any state; partial
    /// sessions produce partial (fail-soft) results.
    pub fn result(&self) -> ScaleResult {
        match self.scale {
            Scale::Dass => ScaleResult::Dass(scoring::dass::compute(&self.answers)),
            Scale::Star => ScaleResult::Star(scoring::star::compute(&self.answers)),
        }
    }

    fn remove_answer_at(&mut self, index: usize) -> Option<OptionKey> {
        let id = self.catalog.get(index)?.id;
        let pos = self.answers.iter().position(|a| a.question_id == id)?;
        Some(self.answers.remove(pos).selected)
    }
}
