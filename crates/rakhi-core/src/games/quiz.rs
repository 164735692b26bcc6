use std::time::Duration;

use super::GamePhase;

/// How long the right answer is shown before moving on
pub const ANSWER_REVEAL: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub question: &'static str,
    pub answers: [&'static str; 4],
    pub correct: usize,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        question: "What makes sisters so special?",
        answers: [
            "Their unconditional love",
            "Their caring nature",
            "Their ability to always cheer you up",
            "All of the above!",
        ],
        correct: 3,
    },
    Question {
        question: "What's the best Raksha Bandhan gift?",
        answers: [
            "Expensive presents",
            "Handmade rakhi",
            "Quality time together",
            "A heartfelt promise to always protect",
        ],
        correct: 3,
    },
    Question {
        question: "When you feel sad, what should you remember?",
        answers: [
            "Your brothers are always there for you",
            "You're stronger than you think",
            "This too shall pass",
            "All of these comforting thoughts",
        ],
        correct: 3,
    },
];

/// Three question family quiz
#[derive(Debug, Clone, Default)]
pub struct FamilyQuiz {
    current: usize,
    correct: u32,
    selected: Option<usize>,
    phase: GamePhase,
    score: Option<u32>,
}

impl FamilyQuiz {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Active,
            ..Self::default()
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Zero-based index of the question on screen
    pub fn question_index(&self) -> usize {
        self.current
    }

    pub fn question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.current)
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct
    }

    /// Answer picked for the current question, while it is revealed
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    /// Pick an answer. Returns whether it was right, or `None` if the
    /// current question was already answered.
    pub fn answer(&mut self, index: usize) -> Option<bool> {
        if self.phase != GamePhase::Active || self.selected.is_some() {
            return None;
        }
        let question = self.question()?;
        if index >= question.answers.len() {
            return None;
        }

        self.selected = Some(index);
        let right = index == question.correct;
        if right {
            self.correct += 1;
        }
        Some(right)
    }

    /// Move past the revealed answer. Returns the score after the last one.
    pub fn advance(&mut self) -> Option<u32> {
        if self.selected.take().is_none() {
            return None;
        }

        if self.current + 1 < QUESTIONS.len() {
            self.current += 1;
            return None;
        }

        let score = self.correct * 100 / QUESTIONS.len() as u32;
        self.score = Some(score);
        self.phase = GamePhase::Complete;
        Some(score)
    }

    /// Closing remark for a finished quiz
    pub fn verdict(&self) -> &'static str {
        let total = QUESTIONS.len() as u32;
        if self.correct == total {
            "Perfect! You know what makes sisters special!"
        } else if self.correct * 2 >= total {
            "Great job! You understand sisterly love!"
        } else {
            "Keep learning about the beautiful bond between siblings!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_quiz() {
        let mut quiz = FamilyQuiz::new();
        let mut score = None;
        for _ in 0..QUESTIONS.len() {
            assert_eq!(quiz.answer(3), Some(true));
            score = quiz.advance();
        }
        assert_eq!(score, Some(100));
        assert_eq!(quiz.phase(), GamePhase::Complete);
        assert_eq!(quiz.verdict(), "Perfect! You know what makes sisters special!");
    }

    #[test]
    fn test_partial_score_is_floored() {
        let mut quiz = FamilyQuiz::new();
        quiz.answer(3);
        quiz.advance();
        quiz.answer(0);
        quiz.advance();
        quiz.answer(1);
        assert_eq!(quiz.advance(), Some(33));
        assert_eq!(quiz.verdict(), "Keep learning about the beautiful bond between siblings!");

        let mut quiz = FamilyQuiz::new();
        quiz.answer(3);
        quiz.advance();
        quiz.answer(3);
        quiz.advance();
        quiz.answer(2);
        assert_eq!(quiz.advance(), Some(66));
    }

    #[test]
    fn test_answer_once_per_question() {
        let mut quiz = FamilyQuiz::new();
        assert_eq!(quiz.answer(0), Some(false));
        assert_eq!(quiz.answer(3), None);
        assert_eq!(quiz.correct_answers(), 0);

        assert_eq!(quiz.advance(), None);
        assert_eq!(quiz.question_index(), 1);
        // Advancing without an answer does nothing
        assert_eq!(quiz.advance(), None);
        assert_eq!(quiz.question_index(), 1);
        assert_eq!(quiz.answer(7), None);
    }
}
