//! Results Scene
//!
//! Lists every question with the chosen answer and mounts the analysis
//! panel. Works from the navigation handoff when present; after a reload it
//! falls back to the questions kept in session storage.

use leptos::prelude::*;

use crate::components::AnalysisPanel;
use crate::context::use_app_context;
use crate::models::{AnswerMap, Question, QuestionSummary, ResultsHandoff};
use crate::questions::fallback_questions;
use crate::router::{self, Route};
use crate::storage;
use crate::store::{use_app_store, AppStateStoreFields};

/// What the results scene shows
#[derive(Debug, Clone, PartialEq)]
struct ResultsModel {
    listed: Vec<QuestionSummary>,
    answers: AnswerMap,
    /// Full questions for the analysis call; empty disables the panel
    analysis_questions: Vec<Question>,
}

fn resolve_results(handoff: Option<ResultsHandoff>, stored: Option<Vec<Question>>) -> ResultsModel {
    let ResultsHandoff { questions, answers } = handoff.unwrap_or_default();
    let listed = if questions.is_empty() {
        fallback_questions()
    } else {
        questions.iter().map(QuestionSummary::from).collect()
    };
    let analysis_questions = if questions.is_empty() {
        stored.unwrap_or_default()
    } else {
        questions
    };
    ResultsModel {
        listed,
        answers,
        analysis_questions,
    }
}

#[component]
pub fn ResultsScene() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let handoff = store.handoff().get_untracked().or_else(router::results_state);
    let stored = storage::load_questions().unwrap_or_else(|e| {
        log::warn!("[RESULTS] stored questions unavailable: {}", e);
        None
    });
    let model = resolve_results(handoff, stored);
    if model.answers.is_empty() {
        log::info!("[RESULTS] no answers in navigation state");
    }

    let rows = model
        .listed
        .iter()
        .map(|question| {
            let answer = model
                .answers
                .get(&question.id)
                .map(|a| a.text().to_string())
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| "Not answered".to_string());
            view! {
                <li>
                    <strong>{question.text.clone()}</strong>
                    <span class="answer">{answer}</span>
                </li>
            }
        })
        .collect_view();

    let panel = (!model.analysis_questions.is_empty()).then(|| {
        view! {
            <AnalysisPanel questions=model.analysis_questions.clone() answers=model.answers.clone() />
        }
    });

    view! {
        <section class="scene results-scene">
            <h1>"Results"</h1>
            <ul class="results-list">{rows}</ul>
            {panel}
            <nav class="results-nav">
                <button on:click=move |_| ctx.navigate(Route::InteractiveGuide)>"Return to Questions"</button>
                <button class="primary" on:click=move |_| ctx.navigate(Route::Location)>"Return to Home"</button>
            </nav>
        </section>
    }
}
