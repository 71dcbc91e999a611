//! One question with its answer surface.
//!
//! Prompts are markdown; answer inputs vary by question kind. Inputs are
//! disabled once the attempt seals so the UI matches the state: edits after
//! lockdown are discarded anyway.

#[cfg(test)]
#[path = "question_card_test.rs"]
mod question_card_test;

use leptos::prelude::*;

use crate::net::types::{AnswerValue, Question, QuestionKind, QuestionOption};
use crate::state::exam::ExamState;
use crate::util::markdown::render_markdown;

/// The text held by a free-text response, if any.
fn answer_text(answer: Option<&AnswerValue>) -> String {
    match answer {
        Some(AnswerValue::Text(text)) => text.clone(),
        _ => String::new(),
    }
}

/// Whether `option_id` is selected in a choice response.
fn choice_selected(answer: Option<&AnswerValue>, option_id: &str) -> bool {
    match answer {
        Some(AnswerValue::Choices(ids)) => ids.iter().any(|id| id == option_id),
        _ => false,
    }
}

/// A question card with the input surface for its kind.
#[component]
pub fn QuestionCard(question: Question, index: usize, total: usize) -> impl IntoView {
    let exam = expect_context::<RwSignal<ExamState>>();
    let locked = move || exam.get().answers_locked;

    let prompt_html = render_markdown(&question.prompt);
    let points_line = if question.points > 0.0 {
        format!("{} pts", question.points)
    } else {
        String::new()
    };

    let body = match question.kind {
        QuestionKind::FreeText => free_text_input(exam, question.id.clone(), locked).into_any(),
        QuestionKind::SingleChoice => {
            choice_inputs(exam, question.id.clone(), question.options.clone(), false, locked).into_any()
        }
        QuestionKind::MultiChoice => {
            choice_inputs(exam, question.id.clone(), question.options.clone(), true, locked).into_any()
        }
    };

    view! {
        <section class="question-card">
            <header class="question-card__header">
                <span class="question-card__number">{format!("Question {} of {total}", index + 1)}</span>
                <span class="question-card__points">{points_line}</span>
            </header>
            <div class="question-card__prompt" inner_html=prompt_html></div>
            {body}
        </section>
    }
}

fn free_text_input(
    exam: RwSignal<ExamState>,
    question_id: String,
    locked: impl Fn() -> bool + Send + Sync + 'static,
) -> impl IntoView {
    let qid_value = question_id.clone();
    let current_text = move || exam.with(|e| answer_text(e.answer(&qid_value)));

    view! {
        <textarea
            class="question-card__text"
            rows="5"
            placeholder="Type your answer…"
            prop:value=current_text
            on:input=move |ev| {
                exam.update(|e| {
                    e.set_answer(&question_id, AnswerValue::Text(event_target_value(&ev)));
                });
            }
            disabled=locked
        ></textarea>
    }
}

fn choice_inputs(
    exam: RwSignal<ExamState>,
    question_id: String,
    options: Vec<QuestionOption>,
    multi: bool,
    locked: impl Fn() -> bool + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let input_type = if multi { "checkbox" } else { "radio" };
    let rows = options
        .into_iter()
        .map(|option| {
            let qid_checked = question_id.clone();
            let qid_change = question_id.clone();
            let option_checked = option.id.clone();
            let option_change = option.id.clone();

            let checked = move || exam.with(|e| choice_selected(e.answer(&qid_checked), &option_checked));
            let on_change = move |_| {
                exam.update(|e| {
                    if multi {
                        e.toggle_choice(&qid_change, &option_change);
                    } else {
                        e.set_answer(&qid_change, AnswerValue::Choices(vec![option_change.clone()]));
                    }
                });
            };

            view! {
                <label class="question-card__option">
                    <input
                        type=input_type
                        name=question_id.clone()
                        prop:checked=checked
                        on:change=on_change
                        disabled=locked
                    />
                    <span>{option.label}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="question-card__options">{rows}</div> }
}
