use dioxus::prelude::*;
use rakhi_core::games::{FamilyQuiz, ANSWER_REVEAL, QUESTIONS};
use rakhi_core::GamePhase;

/// Reveal colors once an answer is picked
fn answer_class(selected: Option<usize>, index: usize, correct: usize) -> &'static str {
    match selected {
        Some(_) if index == correct => "quiz-answer correct",
        Some(picked) if picked == index => "quiz-answer wrong",
        _ => "quiz-answer",
    }
}

#[component]
pub fn FamilyQuizGame(on_score: EventHandler<u32>) -> Element {
    let mut quiz = use_signal(FamilyQuiz::new);

    let mut answer = move |index: usize| {
        if quiz.write().answer(index).is_none() {
            return;
        }
        spawn(async move {
            tokio::time::sleep(ANSWER_REVEAL).await;
            let finished = quiz.write().advance();
            if let Some(score) = finished {
                on_score.call(score);
            }
        });
    };

    let state = quiz.read().clone();

    if state.phase() == GamePhase::Complete {
        let score = state.score().unwrap_or_default();
        let correct = state.correct_answers();
        let total = QUESTIONS.len();
        return rsx! {
            div { class: "notice",
                h3 { "Score: {score}" }
                p { "{correct} of {total} correct" }
                p { "{state.verdict()}" }
                button { class: "btn btn-primary", onclick: move |_| quiz.write().restart(), "Play Again" }
            }
        };
    }

    let Some(question) = state.question() else {
        return rsx! {};
    };
    let number = state.question_index() + 1;
    let total = QUESTIONS.len();
    let selected = state.selected();

    rsx! {
        p { class: "entry-meta", "Question {number} of {total}" }
        h3 { style: "margin: 0.5rem 0 1rem;", "{question.question}" }
        div { class: "stack",
            for (index, text) in question.answers.iter().copied().enumerate() {
                button {
                    key: "{index}",
                    class: answer_class(selected, index, question.correct),
                    disabled: selected.is_some(),
                    onclick: move |_| answer(index),
                    "{text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_reveal_classes() {
        assert_eq!(answer_class(None, 3, 3), "quiz-answer");
        assert_eq!(answer_class(Some(1), 3, 3), "quiz-answer correct");
        assert_eq!(answer_class(Some(1), 1, 3), "quiz-answer wrong");
        assert_eq!(answer_class(Some(1), 0, 3), "quiz-answer");
    }
}
