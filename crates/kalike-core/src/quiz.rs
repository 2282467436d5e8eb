//! Quiz engine: random question with three distractors, four-strikes rules.
//!
//! The session is pure state driven by the caller; the RNG is injected so
//! tests can seed it.

use rand::prelude::*;

use crate::content::{CardEntry, ContentLibrary, Level};

/// Wrong answers allowed before the game ends
pub const MAX_WRONG: u32 = 4;
/// Choices presented per question (one correct, three distractors)
pub const OPTION_COUNT: usize = 4;

/// Which quiz a session belongs to; doubles as the score-store key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizKind {
    Letters,
    Words,
    Sentences,
}

impl QuizKind {
    pub fn key(&self) -> &'static str {
        match self {
            QuizKind::Letters => "letters",
            QuizKind::Words => "words",
            QuizKind::Sentences => "sentences",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuizKind::Letters => "Letter Quiz",
            QuizKind::Words => "Word Quiz",
            QuizKind::Sentences => "Sentence Quiz",
        }
    }
}

/// One quizzable item: what is shown, what must be picked, what is spoken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    pub prompt: String,
    pub answer: String,
    pub spoken: String,
}

impl QuizItem {
    fn from_entry<E: CardEntry>(entry: &E) -> Self {
        Self {
            prompt: entry.script().to_string(),
            // Letters quiz on the transliteration, words and sentences on the
            // translation when one exists.
            answer: entry
                .translation()
                .unwrap_or_else(|| entry.transliteration())
                .to_string(),
            spoken: entry.spoken().to_string(),
        }
    }
}

/// Result of answering the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong { correct: String },
    GameOver { final_score: u32 },
    /// Answer arrived while no question was pending (already answered)
    Ignored,
}

/// A running quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    kind: QuizKind,
    /// Items a question may be drawn from
    question_pool: Vec<QuizItem>,
    /// Items distractors may be drawn from (superset of the question pool)
    option_pool: Vec<QuizItem>,
    question: Option<QuizItem>,
    options: Vec<String>,
    /// Set once the current question has been answered, until `advance`
    answered: Option<usize>,
    score: u32,
    wrong_count: u32,
    game_over: bool,
}

impl QuizSession {
    /// Letter quiz: vowels and consonants pooled together
    pub fn letters(library: &ContentLibrary, rng: &mut impl Rng) -> Self {
        let pool: Vec<QuizItem> = library
            .all_letters()
            .into_iter()
            .map(QuizItem::from_entry)
            .collect();
        Self::new(QuizKind::Letters, pool.clone(), pool, rng)
    }

    /// Word quiz: questions from one level, distractors from every level
    pub fn words(library: &ContentLibrary, level: Level, rng: &mut impl Rng) -> Self {
        let questions = library
            .words
            .level(level)
            .iter()
            .map(QuizItem::from_entry)
            .collect();
        let options = library.words.all().map(QuizItem::from_entry).collect();
        Self::new(QuizKind::Words, questions, options, rng)
    }

    /// Sentence quiz: questions from one level, distractors from every level
    pub fn sentences(library: &ContentLibrary, level: Level, rng: &mut impl Rng) -> Self {
        let questions = library
            .sentences
            .level(level)
            .iter()
            .map(QuizItem::from_entry)
            .collect();
        let options = library.sentences.all().map(QuizItem::from_entry).collect();
        Self::new(QuizKind::Sentences, questions, options, rng)
    }

    fn new(
        kind: QuizKind,
        question_pool: Vec<QuizItem>,
        option_pool: Vec<QuizItem>,
        rng: &mut impl Rng,
    ) -> Self {
        let mut session = Self {
            kind,
            question_pool,
            option_pool,
            question: None,
            options: Vec::new(),
            answered: None,
            score: 0,
            wrong_count: 0,
            game_over: false,
        };
        session.generate_question(rng);
        session
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn question(&self) -> Option<&QuizItem> {
        self.question.as_ref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index the player picked for the current question, if already answered
    pub fn answered(&self) -> Option<usize> {
        self.answered
    }

    /// Index of the correct option within `options`
    pub fn correct_index(&self) -> Option<usize> {
        let question = self.question.as_ref()?;
        self.options.iter().position(|o| *o == question.answer)
    }

    /// Answer the current question by option index.
    ///
    /// The question stays on screen with the outcome visible; call
    /// [`advance`](Self::advance) to move to the next one.
    pub fn answer(&mut self, index: usize) -> AnswerOutcome {
        if self.game_over || self.answered.is_some() {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.question.as_ref() else {
            return AnswerOutcome::Ignored;
        };
        let Some(choice) = self.options.get(index) else {
            return AnswerOutcome::Ignored;
        };

        self.answered = Some(index);

        if *choice == question.answer {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            self.wrong_count += 1;
            if self.wrong_count >= MAX_WRONG {
                self.game_over = true;
                AnswerOutcome::GameOver {
                    final_score: self.score,
                }
            } else {
                AnswerOutcome::Wrong {
                    correct: question.answer.clone(),
                }
            }
        }
    }

    /// Move on to the next question after an answer was shown
    pub fn advance(&mut self, rng: &mut impl Rng) {
        if self.game_over {
            return;
        }
        self.generate_question(rng);
    }

    /// Reset score and strikes and deal a fresh question
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.score = 0;
        self.wrong_count = 0;
        self.game_over = false;
        self.answered = None;
        self.generate_question(rng);
    }

    fn generate_question(&mut self, rng: &mut impl Rng) {
        self.answered = None;

        let Some(correct) = self.question_pool.choose(rng).cloned() else {
            self.game_over = true;
            return;
        };

        // Distractors must differ from the answer and from each other.
        let mut seen = vec![correct.answer.clone()];
        let candidates: Vec<&QuizItem> = self
            .option_pool
            .iter()
            .filter(|item| {
                if item.prompt == correct.prompt || seen.contains(&item.answer) {
                    false
                } else {
                    seen.push(item.answer.clone());
                    true
                }
            })
            .collect();

        let mut options: Vec<String> = candidates
            .choose_multiple(rng, OPTION_COUNT - 1)
            .map(|item| item.answer.clone())
            .collect();
        options.push(correct.answer.clone());
        options.shuffle(rng);

        self.question = Some(correct);
        self.options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn library() -> ContentLibrary {
        ContentLibrary::load_default().unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_letter_quiz_has_four_distinct_options() {
        let library = library();
        let mut rng = rng();
        let session = QuizSession::letters(&library, &mut rng);

        let options = session.options();
        assert_eq!(options.len(), OPTION_COUNT);
        let mut unique = options.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), OPTION_COUNT, "duplicate options: {options:?}");
    }

    #[test]
    fn test_options_contain_the_answer() {
        let library = library();
        let mut rng = rng();
        let session = QuizSession::letters(&library, &mut rng);
        let answer = &session.question().unwrap().answer;
        assert!(session.options().contains(answer));
    }

    #[test]
    fn test_correct_answer_increments_score() {
        let library = library();
        let mut rng = rng();
        let mut session = QuizSession::letters(&library, &mut rng);
        let correct = session.correct_index().unwrap();

        assert_eq!(session.answer(correct), AnswerOutcome::Correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.wrong_count(), 0);
    }

    #[test]
    fn test_second_answer_to_same_question_is_ignored() {
        let library = library();
        let mut rng = rng();
        let mut session = QuizSession::letters(&library, &mut rng);
        let correct = session.correct_index().unwrap();

        session.answer(correct);
        assert_eq!(session.answer(correct), AnswerOutcome::Ignored);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_four_wrong_answers_end_the_game() {
        let library = library();
        let mut rng = rng();
        let mut session = QuizSession::letters(&library, &mut rng);

        for strike in 1..=MAX_WRONG {
            let correct = session.correct_index().unwrap();
            let wrong = (0..session.options().len())
                .find(|i| *i != correct)
                .unwrap();
            let outcome = session.answer(wrong);
            if strike < MAX_WRONG {
                assert!(matches!(outcome, AnswerOutcome::Wrong { .. }));
                session.advance(&mut rng);
            } else {
                assert!(matches!(outcome, AnswerOutcome::GameOver { final_score: 0 }));
            }
        }
        assert!(session.is_game_over());
    }

    #[test]
    fn test_restart_resets_state() {
        let library = library();
        let mut rng = rng();
        let mut session = QuizSession::letters(&library, &mut rng);
        let correct = session.correct_index().unwrap();
        session.answer(correct);

        session.restart(&mut rng);
        assert_eq!(session.score(), 0);
        assert_eq!(session.wrong_count(), 0);
        assert!(!session.is_game_over());
        assert!(session.question().is_some());
        assert!(session.answered().is_none());
    }

    #[test]
    fn test_word_quiz_questions_come_from_selected_level() {
        let library = library();
        let mut rng = rng();
        let level1: Vec<String> = library
            .words
            .level1
            .iter()
            .map(|w| w.script.clone())
            .collect();

        for _ in 0..20 {
            let mut session = QuizSession::words(&library, Level::One, &mut rng);
            let prompt = session.question().unwrap().prompt.clone();
            assert!(level1.contains(&prompt), "question {prompt:?} not in level 1");
            session.advance(&mut rng);
        }
    }

    #[test]
    fn test_empty_pool_ends_immediately() {
        let mut rng = rng();
        let session = QuizSession::new(QuizKind::Words, Vec::new(), Vec::new(), &mut rng);
        assert!(session.is_game_over());
    }
}
