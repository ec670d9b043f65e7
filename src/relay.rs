//! Results/Analysis Relay
//!
//! Formats the answers into a timeline, submits it once, and reports the
//! view state the analysis panel should show. No retry and no caching:
//! every run issues a fresh request.

use crate::api::{AnalysisError, AnalysisTransport};
use crate::models::{AnswerMap, Question};
use crate::timeline::TimelineDocument;

/// The four mutually exclusive states of the analysis panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisView {
    Loading,
    Failed(String),
    Empty,
    Narrative(String),
}

impl AnalysisView {
    pub fn settle(result: Result<String, AnalysisError>) -> Self {
        match result {
            Ok(markdown) if markdown.trim().is_empty() => AnalysisView::Empty,
            Ok(markdown) => AnalysisView::Narrative(markdown),
            Err(e) => AnalysisView::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisView::Loading)
    }
}

/// Submit the answers and report every view transition to `on_view`.
///
/// Nothing is sent when there are no questions or no answers.
pub async fn run_analysis<T: AnalysisTransport>(
    transport: &T,
    questions: &[Question],
    answers: &AnswerMap,
    mut on_view: impl FnMut(AnalysisView),
) -> AnalysisView {
    if questions.is_empty() || answers.is_empty() {
        log::info!("[ANALYSIS] nothing to analyze");
        on_view(AnalysisView::Empty);
        return AnalysisView::Empty;
    }

    on_view(AnalysisView::Loading);
    let document = TimelineDocument::build(questions, answers);
    log::debug!("[ANALYSIS] submitting {} timeline entries", document.timeline.len());

    let result = match transport.analyze(&document).await {
        Ok(response) => response.into_narrative(),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        log::error!("[ANALYSIS] request failed: {}", e);
    }

    let view = AnalysisView::settle(result);
    on_view(view.clone());
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::api::AnalysisResponse;
    use crate::flow::{FlowEvent, QuestionFlow};
    use crate::models::Answer;
    use crate::questions::flood_scenario;

    /// Records submitted documents and replays a canned result
    struct FakeTransport {
        reply: fn() -> Result<AnalysisResponse, AnalysisError>,
        submitted: RefCell<Vec<serde_json::Value>>,
    }

    impl FakeTransport {
        fn new(reply: fn() -> Result<AnalysisResponse, AnalysisError>) -> Self {
            Self { reply, submitted: RefCell::new(Vec::new()) }
        }
    }

    impl AnalysisTransport for FakeTransport {
        async fn analyze(&self, document: &TimelineDocument) -> Result<AnalysisResponse, AnalysisError> {
            self.submitted.borrow_mut().push(serde_json::to_value(document).unwrap());
            (self.reply)()
        }
    }

    fn narrative_reply() -> Result<AnalysisResponse, AnalysisError> {
        Ok(AnalysisResponse {
            status: Some(200),
            message: None,
            data: Some("**Bonne réaction** au premier événement.".to_string()),
        })
    }

    fn network_failure() -> Result<AnalysisResponse, AnalysisError> {
        Err(AnalysisError::Server("502 Bad Gateway: upstream unreachable".to_string()))
    }

    fn empty_reply() -> Result<AnalysisResponse, AnalysisError> {
        Ok(AnalysisResponse { status: Some(201), message: None, data: Some("  ".to_string()) })
    }

    fn completed_handoff() -> (Vec<Question>, AnswerMap) {
        let mut flow = QuestionFlow::new(flood_scenario());
        let mut handoffs = Vec::new();
        for id in [1, 2, 3] {
            if let Some(FlowEvent::Completed(handoff)) =
                flow.commit(Answer::Choice { id, text: format!("action {}", id) })
            {
                handoffs.push(handoff);
            }
        }
        assert_eq!(handoffs.len(), 1);
        let handoff = handoffs.remove(0);
        (handoff.questions, handoff.answers)
    }

    #[test]
    fn test_completed_flow_submits_once() {
        let (questions, answers) = completed_handoff();
        let transport = FakeTransport::new(narrative_reply);
        let mut views = Vec::new();

        let last = tokio_test::block_on(run_analysis(&transport, &questions, &answers, |v| views.push(v)));

        let submitted = transport.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        let timeline = submitted[0]["timeline"].as_object().unwrap();
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline["situation_1"]["situation"], "Flooding");
        assert!(timeline["situation_2"].get("situation").is_none());
        assert!(timeline["situation_3"].get("situation").is_none());

        assert_eq!(views.first(), Some(&AnalysisView::Loading));
        assert!(matches!(last, AnalysisView::Narrative(ref md) if md.contains("Bonne réaction")));
        assert_eq!(views.len(), 2);
    }

    #[test]
    fn test_failure_clears_loading_and_shows_error() {
        let (questions, answers) = completed_handoff();
        let transport = FakeTransport::new(network_failure);
        let mut views = Vec::new();

        let last = tokio_test::block_on(run_analysis(&transport, &questions, &answers, |v| views.push(v)));

        assert_eq!(
            last,
            AnalysisView::Failed("Server error: 502 Bad Gateway: upstream unreachable".to_string())
        );
        assert!(!last.is_loading());
        assert!(!views.iter().any(|v| matches!(v, AnalysisView::Narrative(_))));
    }

    #[test]
    fn test_blank_narrative_is_empty_state() {
        let (questions, answers) = completed_handoff();
        let transport = FakeTransport::new(empty_reply);
        let last = tokio_test::block_on(run_analysis(&transport, &questions, &answers, |_| {}));
        assert_eq!(last, AnalysisView::Empty);
    }

    #[test]
    fn test_no_answers_sends_nothing() {
        let transport = FakeTransport::new(narrative_reply);
        let mut views = Vec::new();
        let last = tokio_test::block_on(run_analysis(&transport, &flood_scenario(), &AnswerMap::new(), |v| views.push(v)));

        assert_eq!(last, AnalysisView::Empty);
        assert_eq!(views, vec![AnalysisView::Empty]);
        assert!(transport.submitted.borrow().is_empty());
    }

    #[test]
    fn test_rejected_status_is_failure() {
        let result = Ok::<_, AnalysisError>(AnalysisResponse {
            status: Some(400),
            message: None,
            data: None,
        })
        .and_then(AnalysisResponse::into_narrative);
        assert_eq!(
            AnalysisView::settle(result),
            AnalysisView::Failed("Server responded with status: 400".to_string())
        );
    }
}
