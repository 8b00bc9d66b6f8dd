//! The one-way funnel state machine.
//!
//! Intro -> Quiz -> Capture -> Calculating -> Result, no backward edges.
//! There is deliberately no retake path; a session lives exactly as long
//! as the process. All transitions are explicit methods on [`Session`] so
//! the machine can be driven and tested without any front-end attached.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intro,
    Quiz,
    Capture,
    Calculating,
    Result,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no option selected for the current question")]
    NoSelection,
    #[error("a valid email address is required")]
    InvalidEmail,
    #[error("operation not allowed in stage {0:?}")]
    WrongStage(Stage),
}

#[derive(Debug)]
pub struct Session {
    stage: Stage,
    question_count: usize,
    index: usize,
    scores: Vec<u32>,
    selected: Option<u32>,
    email: String,
}

impl Session {
    pub fn new(question_count: usize) -> Self {
        Self {
            stage: Stage::Intro,
            question_count,
            index: 0,
            scores: Vec::with_capacity(question_count),
            selected: None,
            email: String::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Intro -> Quiz. Unconditional.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.stage != Stage::Intro {
            return Err(SessionError::WrongStage(self.stage));
        }
        self.stage = Stage::Quiz;
        Ok(())
    }

    /// Highlights an option for the current question without recording it.
    pub fn select_score(&mut self, score: u32) -> Result<(), SessionError> {
        if self.stage != Stage::Quiz {
            return Err(SessionError::WrongStage(self.stage));
        }
        self.selected = Some(score);
        Ok(())
    }

    /// Whether the continue action is enabled. Advancing without a
    /// selection is prevented structurally, not reported at runtime.
    pub fn can_advance(&self) -> bool {
        self.stage == Stage::Quiz && self.selected.is_some()
    }

    /// Records the highlighted score and moves to the next question, or to
    /// the capture stage after the last one. The selection resets either way.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.stage != Stage::Quiz {
            return Err(SessionError::WrongStage(self.stage));
        }
        let score = self.selected.take().ok_or(SessionError::NoSelection)?;
        self.scores.push(score);
        debug_assert!(self.scores.len() <= self.question_count);
        if self.index + 1 < self.question_count {
            self.index += 1;
        } else {
            self.stage = Stage::Capture;
        }
        Ok(())
    }

    /// Email stays editable until unlock.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), SessionError> {
        if self.stage != Stage::Capture {
            return Err(SessionError::WrongStage(self.stage));
        }
        self.email = email.into();
        Ok(())
    }

    /// Capture -> Calculating. The only validation is the presence of an
    /// '@'; anything stricter is the webhook endpoint's job. Not
    /// re-enterable once calculating, so the result is computed once.
    pub fn unlock(&mut self) -> Result<(), SessionError> {
        if self.stage != Stage::Capture {
            return Err(SessionError::WrongStage(self.stage));
        }
        if !self.email.contains('@') {
            return Err(SessionError::InvalidEmail);
        }
        self.stage = Stage::Calculating;
        Ok(())
    }

    /// Calculating -> Result, fired by the stage timer. Result is terminal.
    pub fn finish_calculating(&mut self) -> Result<(), SessionError> {
        if self.stage != Stage::Calculating {
            return Err(SessionError::WrongStage(self.stage));
        }
        self.stage = Stage::Result;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_session(question_count: usize) -> Session {
        let mut session = Session::new(question_count);
        session.begin().expect("begin");
        session
    }

    #[test]
    fn begin_is_unconditional_and_single_shot() {
        let mut session = Session::new(3);
        assert_eq!(session.stage(), Stage::Intro);
        session.begin().expect("begin");
        assert_eq!(session.stage(), Stage::Quiz);
        assert_eq!(session.begin(), Err(SessionError::WrongStage(Stage::Quiz)));
    }

    #[test]
    fn advance_requires_a_selection_at_every_index() {
        let mut session = quiz_session(3);
        for _ in 0..3 {
            assert!(!session.can_advance());
            assert_eq!(session.advance(), Err(SessionError::NoSelection));
            session.select_score(6).expect("select");
            assert!(session.can_advance());
            session.advance().expect("advance");
        }
    }

    #[test]
    fn index_increments_by_one_and_selection_resets() {
        let mut session = quiz_session(4);
        for step in 0..3 {
            assert_eq!(session.index(), step);
            session.select_score(10).expect("select");
            session.advance().expect("advance");
            assert_eq!(session.selected(), None);
            assert_eq!(session.index(), step + 1);
            assert_eq!(session.stage(), Stage::Quiz);
        }
        assert_eq!(session.scores().len(), 3);
    }

    #[test]
    fn last_advance_enters_capture_exactly_once() {
        let mut session = quiz_session(2);
        session.select_score(5).expect("select");
        session.advance().expect("advance");
        assert_eq!(session.stage(), Stage::Quiz);
        session.select_score(5).expect("select");
        session.advance().expect("advance");
        assert_eq!(session.stage(), Stage::Capture);
        assert_eq!(session.index(), 1);
        assert_eq!(session.scores().len(), 2);
        // No further quiz actions once captured.
        assert_eq!(
            session.advance(),
            Err(SessionError::WrongStage(Stage::Capture))
        );
        assert_eq!(
            session.select_score(5),
            Err(SessionError::WrongStage(Stage::Capture))
        );
    }

    #[test]
    fn unlock_rejects_email_without_at_sign() {
        let mut session = quiz_session(1);
        session.select_score(10).expect("select");
        session.advance().expect("advance");
        session.set_email("founder.corp.com").expect("set email");
        assert_eq!(session.unlock(), Err(SessionError::InvalidEmail));
        assert_eq!(session.stage(), Stage::Capture);
        session.set_email("a@b").expect("set email");
        session.unlock().expect("unlock");
        assert_eq!(session.stage(), Stage::Calculating);
    }

    #[test]
    fn unlock_is_not_reentrant_while_calculating() {
        let mut session = quiz_session(1);
        session.select_score(10).expect("select");
        session.advance().expect("advance");
        session.set_email("a@b").expect("set email");
        session.unlock().expect("unlock");
        assert_eq!(
            session.unlock(),
            Err(SessionError::WrongStage(Stage::Calculating))
        );
        assert_eq!(
            session.set_email("other@b"),
            Err(SessionError::WrongStage(Stage::Calculating))
        );
    }

    #[test]
    fn result_is_terminal() {
        let mut session = quiz_session(1);
        session.select_score(10).expect("select");
        session.advance().expect("advance");
        session.set_email("a@b").expect("set email");
        session.unlock().expect("unlock");
        session.finish_calculating().expect("finish");
        assert_eq!(session.stage(), Stage::Result);
        assert_eq!(
            session.finish_calculating(),
            Err(SessionError::WrongStage(Stage::Result))
        );
        assert_eq!(session.begin(), Err(SessionError::WrongStage(Stage::Result)));
    }

    #[test]
    fn email_cannot_be_set_during_quiz() {
        let mut session = quiz_session(2);
        assert_eq!(
            session.set_email("a@b"),
            Err(SessionError::WrongStage(Stage::Quiz))
        );
    }
}
