use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub label: char,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: [QuizOption; 4],
    pub correct_answer: char,
    pub explanation: &'static str,
}

impl QuizQuestion {
    pub fn has_option(&self, label: char) -> bool {
        self.options.iter().any(|option| option.label == label)
    }
}

const fn opt(label: char, text: &'static str) -> QuizOption {
    QuizOption { label, text }
}

pub static QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        question: "What percentage of the ocean floor do coral reefs cover?",
        options: [
            opt('a', "Less than 1%"),
            opt('b', "About 10%"),
            opt('c', "About 25%"),
            opt('d', "More than 50%"),
        ],
        correct_answer: 'a',
        explanation: "Despite covering less than 1% of the ocean floor, coral reefs are home to more than 25% of marine species!",
    },
    QuizQuestion {
        id: 2,
        question: "What do coral polyps need to build their skeletons?",
        options: [
            opt('a', "Sand"),
            opt('b', "Calcium carbonate"),
            opt('c', "Salt"),
            opt('d', "Plankton"),
        ],
        correct_answer: 'b',
        explanation: "Coral polyps extract calcium and carbonate from seawater to build their hard skeletons, which form the structure of coral reefs.",
    },
    QuizQuestion {
        id: 3,
        question: "What causes coral bleaching?",
        options: [
            opt('a', "Pollution from sunscreen"),
            opt('b', "Natural aging of coral"),
            opt('c', "Rising ocean temperatures"),
            opt('d', "Predatory fish"),
        ],
        correct_answer: 'c',
        explanation: "When ocean temperatures rise, corals expel the colorful algae living in their tissues, causing them to turn white or 'bleach'. If the stress continues, the coral will die.",
    },
    QuizQuestion {
        id: 4,
        question: "Which of these is NOT a type of coral reef?",
        options: [
            opt('a', "Fringing reef"),
            opt('b', "Barrier reef"),
            opt('c', "Mountain reef"),
            opt('d', "Atoll"),
        ],
        correct_answer: 'c',
        explanation: "The three main types of coral reefs are fringing reefs, barrier reefs, and atolls. 'Mountain reef' is not a type of coral reef.",
    },
    QuizQuestion {
        id: 5,
        question: "How old can some coral reefs be?",
        options: [
            opt('a', "Up to 100 years"),
            opt('b', "Up to 1,000 years"),
            opt('c', "Up to 10,000 years"),
            opt('d', "Up to 50 million years"),
        ],
        correct_answer: 'd',
        explanation: "Some coral reefs are ancient, with the oldest reef systems dating back 50 million years. The Great Barrier Reef is between 6,000 and 8,000 years old.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for (or holding) a selection that has not been checked yet.
    Answering,
    /// Answer locked in; correctness and explanation are visible.
    Checked,
    /// Advanced past the last question. Only `reset` leaves this state.
    Completed,
}

/// How a single option should be highlighted in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
    Selected,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Great,
    KeepLearning,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect Score! You're a Coral Reef Expert!",
            Verdict::Great => "Great job! You know your coral reefs!",
            Verdict::KeepLearning => "Good effort! Keep learning about coral reefs!",
        }
    }
}

/// Per-visit quiz state. Transitions whose preconditions are not met leave
/// the session untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    index: usize,
    selected: Option<char>,
    answered: bool,
    score: usize,
    completed: bool,
}

impl QuizSession {
    /// # Panics
    ///
    /// Panics if `questions` is empty.
    pub fn with_questions(questions: &'static [QuizQuestion]) -> Self {
        assert!(!questions.is_empty(), "a quiz needs at least one question");
        Self {
            questions,
            index: 0,
            selected: None,
            answered: false,
            score: 0,
            completed: false,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.completed {
            QuizPhase::Completed
        } else if self.answered {
            QuizPhase::Checked
        } else {
            QuizPhase::Answering
        }
    }

    pub fn current_question(&self) -> &'static QuizQuestion {
        &self.questions[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question_number(&self) -> usize {
        self.index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected(&self) -> Option<char> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Questions whose answer has been checked so far.
    pub fn questions_answered(&self) -> usize {
        if self.completed {
            self.questions.len()
        } else {
            self.index + usize::from(self.answered)
        }
    }

    pub fn progress_percent(&self) -> f64 {
        (self.question_number() as f64 / self.total_questions() as f64) * 100.0
    }

    pub fn select(&mut self, label: char) {
        if self.phase() != QuizPhase::Answering {
            return;
        }
        if self.current_question().has_option(label) {
            self.selected = Some(label);
        }
    }

    pub fn check(&mut self) {
        if self.phase() != QuizPhase::Answering {
            return;
        }
        let Some(selected) = self.selected else {
            return;
        };
        self.answered = true;
        if selected == self.current_question().correct_answer {
            self.score += 1;
        }
    }

    pub fn advance(&mut self) {
        if self.phase() != QuizPhase::Checked {
            return;
        }
        if self.is_last_question() {
            self.completed = true;
        } else {
            self.index += 1;
            self.selected = None;
            self.answered = false;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_questions(self.questions);
    }

    pub fn mark_for(&self, label: char) -> OptionMark {
        let is_selected = self.selected == Some(label);
        if self.answered {
            if label == self.current_question().correct_answer {
                OptionMark::Correct
            } else if is_selected {
                OptionMark::Incorrect
            } else {
                OptionMark::Neutral
            }
        } else if is_selected {
            OptionMark::Selected
        } else {
            OptionMark::Neutral
        }
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_last_question() {
            "See Results"
        } else {
            "Next Question"
        }
    }

    pub fn verdict(&self) -> Verdict {
        let total = self.total_questions();
        if self.score == total {
            Verdict::Perfect
        } else if self.score as f64 >= total as f64 / 2.0 {
            Verdict::Great
        } else {
            Verdict::KeepLearning
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::with_questions(&QUIZ_QUESTIONS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Select(char),
    Check,
    Advance,
    Reset,
}

impl Reducible for QuizSession {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QuizAction::Select(label) => next.select(label),
            QuizAction::Check => next.check(),
            QuizAction::Advance => next.advance(),
            QuizAction::Reset => next.reset(),
        }
        if next == *self {
            return self;
        }
        log::debug!(
            "quiz {:?}: question {} / {}, phase {:?}, score {}",
            action,
            next.question_number(),
            next.total_questions(),
            next.phase(),
            next.score()
        );
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(session: &mut QuizSession, label: char) {
        session.select(label);
        session.check();
        session.advance();
    }

    fn correct_labels() -> Vec<char> {
        QUIZ_QUESTIONS.iter().map(|q| q.correct_answer).collect()
    }

    #[test]
    fn starts_answering_first_question() {
        let session = QuizSession::default();
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected(), None);
        assert_eq!(session.total_questions(), 5);
        assert_eq!(session.progress_percent(), 20.0);
    }

    #[test]
    fn check_without_selection_is_noop() {
        let mut session = QuizSession::default();
        let before = session.clone();
        session.check();
        assert_eq!(session, before);
    }

    #[test]
    fn advance_before_check_is_noop() {
        let mut session = QuizSession::default();
        session.select('b');
        let before = session.clone();
        session.advance();
        assert_eq!(session, before);
    }

    #[test]
    fn reselect_replaces_pending_choice_until_checked() {
        let mut session = QuizSession::default();
        session.select('b');
        session.select('b');
        assert_eq!(session.selected(), Some('b'));
        session.select('a');
        assert_eq!(session.selected(), Some('a'));

        session.check();
        session.select('c');
        assert_eq!(session.selected(), Some('a'));
        assert_eq!(session.phase(), QuizPhase::Checked);
    }

    #[test]
    fn unknown_label_is_ignored() {
        let mut session = QuizSession::default();
        session.select('z');
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn score_counts_once_per_question() {
        let mut session = QuizSession::default();
        session.select('a');
        session.check();
        session.check();
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn perfect_run_scores_five() {
        let mut session = QuizSession::default();
        for label in correct_labels() {
            answer(&mut session, label);
        }
        assert_eq!(session.phase(), QuizPhase::Completed);
        assert_eq!(session.score(), 5);
        assert_eq!(session.verdict(), Verdict::Perfect);
        assert_eq!(session.verdict().message(), "Perfect Score! You're a Coral Reef Expert!");
    }

    #[test]
    fn wrong_first_answer_scores_four() {
        let mut session = QuizSession::default();
        let mut labels = correct_labels();
        labels[0] = 'd';
        for label in labels {
            answer(&mut session, label);
        }
        assert_eq!(session.phase(), QuizPhase::Completed);
        assert_eq!(session.score(), 4);
        assert_eq!(session.verdict(), Verdict::Great);
    }

    #[test]
    fn every_answer_combination_scores_its_matches() {
        let labels = ['a', 'b', 'c', 'd'];
        let total = QUIZ_QUESTIONS.len() as u32;
        for combo in 0..4usize.pow(total) {
            let mut session = QuizSession::default();
            let mut expected = 0;
            let mut rest = combo;
            for (i, question) in QUIZ_QUESTIONS.iter().enumerate() {
                let label = labels[rest % 4];
                rest /= 4;
                if label == question.correct_answer {
                    expected += 1;
                }
                session.select(label);
                session.check();
                assert!(session.score() <= session.questions_answered());
                assert!(session.score() <= session.total_questions());
                assert_eq!(session.questions_answered(), i + 1);
                session.advance();
            }
            assert_eq!(session.phase(), QuizPhase::Completed);
            assert_eq!(session.score(), expected);
        }
    }

    #[test]
    fn completed_is_terminal_until_reset() {
        let mut session = QuizSession::default();
        for label in correct_labels() {
            answer(&mut session, label);
        }
        let done = session.clone();
        session.select('a');
        session.check();
        session.advance();
        assert_eq!(session, done);

        session.reset();
        assert_eq!(session, QuizSession::default());
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.index(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn reset_mid_quiz_starts_over() {
        let mut session = QuizSession::default();
        answer(&mut session, 'a');
        session.select('c');
        session.reset();
        assert_eq!(session, QuizSession::default());
    }

    #[test]
    fn marks_follow_phase() {
        let mut session = QuizSession::default();
        session.select('b');
        assert_eq!(session.mark_for('b'), OptionMark::Selected);
        assert_eq!(session.mark_for('a'), OptionMark::Neutral);

        session.check();
        assert_eq!(session.mark_for('a'), OptionMark::Correct);
        assert_eq!(session.mark_for('b'), OptionMark::Incorrect);
        assert_eq!(session.mark_for('c'), OptionMark::Neutral);
    }

    #[test]
    fn advance_label_changes_on_last_question() {
        let mut session = QuizSession::default();
        assert_eq!(session.advance_label(), "Next Question");
        for label in correct_labels().into_iter().take(4) {
            answer(&mut session, label);
        }
        assert!(session.is_last_question());
        assert_eq!(session.advance_label(), "See Results");
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn verdict_thresholds() {
        let labels = correct_labels();
        let run = |correct: usize| {
            let mut session = QuizSession::default();
            for (i, label) in labels.iter().enumerate() {
                let pick = if i < correct { *label } else if *label == 'a' { 'b' } else { 'a' };
                answer(&mut session, pick);
            }
            session.verdict()
        };
        assert_eq!(run(3), Verdict::Great);
        assert_eq!(run(2), Verdict::KeepLearning);
        assert_eq!(run(0), Verdict::KeepLearning);
    }

    #[test]
    fn reducer_returns_same_rc_for_noop() {
        let state = Rc::new(QuizSession::default());
        let next = state.clone().reduce(QuizAction::Check);
        assert!(Rc::ptr_eq(&state, &next));

        let next = next.reduce(QuizAction::Select('a'));
        assert_eq!(next.selected(), Some('a'));
        let next = next.reduce(QuizAction::Check);
        assert_eq!(next.phase(), QuizPhase::Checked);
        assert_eq!(next.score(), 1);
    }
}
