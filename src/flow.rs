//! Question Flow Controller
//!
//! Walks a fixed list of questions. An answer is recorded as soon as it is
//! given and the flow moves forward separately; the final commit completes the flow and hands the answers over
//! exactly once. Going back is only allowed to questions already answered.

use thiserror::Error;

use crate::models::{Answer, AnswerMap, Question, ResultsHandoff};

/// Pause between a committed answer and the next question (ms)
pub const ADVANCE_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowStage {
    Answering(usize),
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    Advanced { to: usize },
    /// First completion only
    Completed(ResultsHandoff),
    /// Last question re-answered after completion
    Revised,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    #[error("question {0} does not exist")]
    OutOfRange(usize),
    #[error("question {0} is not behind the current one")]
    NotBehind(usize),
    #[error("question {0} has not been answered yet")]
    NotAnswered(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionFlow {
    questions: Vec<Question>,
    stage: FlowStage,
    answers: AnswerMap,
    completed: bool,
}

impl QuestionFlow {
    pub fn new(questions: Vec<Question>) -> Self {
        let stage = if questions.is_empty() {
            FlowStage::Complete
        } else {
            FlowStage::Answering(0)
        };
        Self {
            questions,
            stage,
            answers: AnswerMap::new(),
            completed: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    pub fn is_complete(&self) -> bool {
        self.stage == FlowStage::Complete
    }

    /// Stays true after reopening an earlier question
    pub fn has_completed(&self) -> bool {
        self.completed
    }

    /// Index on screen; a completed flow keeps showing the last question
    pub fn current_index(&self) -> usize {
        match self.stage {
            FlowStage::Answering(index) => index,
            FlowStage::Complete => self.questions.len().saturating_sub(1),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index())
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.current_question()
            .and_then(|question| self.answers.get(&question.id))
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.questions
            .get(index)
            .is_some_and(|question| self.answers.contains_key(&question.id))
    }

    /// Record the answer and move on in one step
    pub fn commit(&mut self, answer: Answer) -> Option<FlowEvent> {
        self.record(answer).or_else(|| self.advance())
    }

    /// Store the answer for the question on screen without moving.
    ///
    /// Answering the last question completes the flow right away; any other
    /// question waits for `advance`.
    pub fn record(&mut self, answer: Answer) -> Option<FlowEvent> {
        let index = self.current_index();
        let question_id = self.questions.get(index)?.id;
        self.answers.insert(question_id, answer);
        log::debug!("[FLOW] question {} answered", question_id);

        if index + 1 < self.questions.len() {
            return None;
        }
        self.stage = FlowStage::Complete;
        if self.completed {
            log::debug!("[FLOW] question {} revised after completion", question_id);
            return Some(FlowEvent::Revised);
        }
        self.completed = true;
        log::info!("[FLOW] all {} questions answered", self.questions.len());
        Some(FlowEvent::Completed(self.handoff_unchecked()))
    }

    /// Move past the question on screen once it has an answer
    pub fn advance(&mut self) -> Option<FlowEvent> {
        let FlowStage::Answering(index) = self.stage else {
            return None;
        };
        if index + 1 >= self.questions.len() || !self.is_answered(index) {
            return None;
        }
        self.stage = FlowStage::Answering(index + 1);
        Some(FlowEvent::Advanced { to: index + 1 })
    }

    /// Reopen an earlier, already answered question
    pub fn go_to(&mut self, index: usize) -> Result<(), FlowError> {
        if index >= self.questions.len() {
            return Err(FlowError::OutOfRange(index));
        }
        if index >= self.current_index() {
            return Err(FlowError::NotBehind(index));
        }
        if !self.is_answered(index) {
            return Err(FlowError::NotAnswered(index));
        }
        self.stage = FlowStage::Answering(index);
        Ok(())
    }

    pub fn go_back(&mut self) -> Result<(), FlowError> {
        let current = self.current_index();
        if current == 0 {
            return Err(FlowError::NotBehind(0));
        }
        self.go_to(current - 1)
    }

    /// Questions and answers, once the flow has completed
    pub fn handoff(&self) -> Option<ResultsHandoff> {
        self.completed.then(|| self.handoff_unchecked())
    }

    fn handoff_unchecked(&self) -> ResultsHandoff {
        ResultsHandoff {
            questions: self.questions.clone(),
            answers: self.answers.clone(),
        }
    }
}
