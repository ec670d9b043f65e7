//! Analysis Panel Component
//!
//! Submits the answers once per mount and shows loading, error, empty or
//! the rendered narrative.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AnalysisClient;
use crate::config::AppConfig;
use crate::markdown::parse_markdown;
use crate::models::{AnswerMap, Question};
use crate::relay::{run_analysis, AnalysisView};

const LOG_TAIL_LINES: usize = 12;

/// Last lines of the in-app log, shown under an analysis error
fn recent_log_tail() -> String {
    let lines = rolling_logger::installed()
        .map(|logger| logger.recent_lines())
        .unwrap_or_default();
    let skip = lines.len().saturating_sub(LOG_TAIL_LINES);
    lines[skip..].join("\n")
}

#[component]
pub fn AnalysisPanel(questions: Vec<Question>, answers: AnswerMap) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (view_state, set_view_state) = signal(AnalysisView::Loading);

    let client = AnalysisClient::from_config(&config);
    spawn_local(async move {
        run_analysis(&client, &questions, &answers, |view| {
            let _ = set_view_state.try_set(view);
        })
        .await;
    });

    view! {
        <div class="analysis-panel">
            <h2>"Choice Analysis"</h2>
            {move || match view_state.get() {
                AnalysisView::Loading => view! {
                    <div class="analysis-loading">"Analyzing your choices..."</div>
                }.into_any(),
                AnalysisView::Failed(message) => view! {
                    <div class="alert error">{format!("Error during analysis: {}", message)}</div>
                    <details class="log-tail">
                        <summary>"Details"</summary>
                        <pre>{recent_log_tail()}</pre>
                    </details>
                }.into_any(),
                AnalysisView::Empty => view! {
                    <div class="alert info">"No analysis available at the moment."</div>
                }.into_any(),
                AnalysisView::Narrative(markdown) => view! {
                    <div class="markdown-body" inner_html=parse_markdown(&markdown)></div>
                }.into_any(),
            }}
        </div>
    }
}
