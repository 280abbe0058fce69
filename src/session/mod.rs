//! Estado en memoria de un intento en curso.
//!
//! Una `QuizSession` se crea al abrir la pantalla del quiz y se descarta al
//! enviar o al salir; nada de lo que contiene se persiste.

use std::collections::{BTreeSet, HashMap};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::SessionError;
use crate::model::{AnswerData, Question, QuestionId, QuestionKind, Quiz, QuizBundle};

pub mod navigation;
pub mod timer;

pub use navigation::{NavButtons, NavCommand};
pub use timer::QuestionTimer;

#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    questions: Vec<Question>,
    current: usize,
    answers: HashMap<QuestionId, AnswerData>,
    bookmarks: BTreeSet<QuestionId>,
    time_spent: HashMap<QuestionId, u64>,
}

impl QuizSession {
    pub fn new(bundle: QuizBundle) -> Result<Self, SessionError> {
        Self::with_rng(bundle, &mut rand::thread_rng())
    }

    /// Igual que `new` pero con un generador explícito (los tests usan una semilla fija).
    pub fn with_rng<R: Rng + ?Sized>(bundle: QuizBundle, rng: &mut R) -> Result<Self, SessionError> {
        let QuizBundle { quiz, mut questions } = bundle;
        if questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }

        if quiz.randomize_questions {
            questions.shuffle(rng);
        }
        if quiz.randomize_options {
            for q in &mut questions {
                if let QuestionKind::MultipleChoice { options } = &mut q.kind {
                    options.shuffle(rng);
                }
            }
        }

        log::debug!(
            "session opened for quiz {} with {} questions",
            quiz.id,
            questions.len()
        );

        Ok(Self {
            quiz,
            questions,
            current: 0,
            answers: HashMap::new(),
            bookmarks: BTreeSet::new(),
            time_spent: HashMap::new(),
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        // `new` rechaza quizzes vacíos y `current` siempre está acotado
        &self.questions[self.current]
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    fn ensure_known(&self, question_id: &str) -> Result<(), SessionError> {
        if self.questions.iter().any(|q| q.id == question_id) {
            Ok(())
        } else {
            Err(SessionError::UnknownQuestion(question_id.to_string()))
        }
    }

    // ---- Respuestas ----

    /// Sustituye la respuesta previa de la pregunta. No se valida la forma del
    /// payload contra el tipo de pregunta; de eso se encarga el widget.
    pub fn set_answer(&mut self, question_id: &str, data: AnswerData) -> Result<(), SessionError> {
        self.ensure_known(question_id)?;
        self.answers.insert(question_id.to_string(), data);
        Ok(())
    }

    pub fn answer(&self, question_id: &str) -> Option<&AnswerData> {
        self.answers.get(question_id)
    }

    pub fn answers(&self) -> &HashMap<QuestionId, AnswerData> {
        &self.answers
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers
            .get(question_id)
            .map(|a| !a.is_blank())
            .unwrap_or(false)
    }

    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.is_answered(&q.id))
            .count()
    }

    // ---- Marcadores ----

    /// Devuelve `true` si la pregunta queda marcada tras el cambio.
    pub fn toggle_bookmark(&mut self, question_id: &str) -> Result<bool, SessionError> {
        self.ensure_known(question_id)?;
        if self.bookmarks.remove(question_id) {
            Ok(false)
        } else {
            self.bookmarks.insert(question_id.to_string());
            Ok(true)
        }
    }

    pub fn is_bookmarked(&self, question_id: &str) -> bool {
        self.bookmarks.contains(question_id)
    }

    pub fn bookmarks(&self) -> &BTreeSet<QuestionId> {
        &self.bookmarks
    }

    // ---- Tiempo ----

    /// Suma segundos a la pregunta activa. Solo la pregunta activa acumula
    /// tiempo, así que cualquier otra se rechaza.
    pub fn add_question_time(&mut self, question_id: &str, seconds: u64) -> Result<u64, SessionError> {
        self.ensure_known(question_id)?;
        if self.current_question().id != question_id {
            return Err(SessionError::InactiveQuestion(question_id.to_string()));
        }
        let total = self.time_spent.entry(question_id.to_string()).or_insert(0);
        *total = total.saturating_add(seconds);
        Ok(*total)
    }

    pub fn time_on(&self, question_id: &str) -> u64 {
        self.time_spent.get(question_id).copied().unwrap_or(0)
    }

    pub fn total_time(&self) -> u64 {
        self.time_spent.values().sum()
    }

    /// Segundos restantes del límite del quiz, si lo tiene.
    pub fn time_remaining(&self) -> Option<u64> {
        self.quiz
            .time_limit_minutes
            .map(|min| u64::from(min) * 60)
            .map(|limit| limit.saturating_sub(self.total_time()))
    }

    pub fn is_time_up(&self) -> bool {
        self.time_remaining() == Some(0)
    }

    // ---- Navegación ----

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.questions.len()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    /// Avanza una pregunta. En la última no hace nada.
    pub fn next_question(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Retrocede una pregunta. En la primera no hace nada.
    pub fn prev_question(&mut self) -> bool {
        if self.has_prev() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.questions.len() && index != self.current {
            self.current = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{ChoiceOption, Difficulty};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    pub(crate) fn quiz(n: usize) -> Quiz {
        Quiz {
            id: "quiz-1".into(),
            title: "Ownership".into(),
            description: None,
            time_limit_minutes: None,
            passing_score: 60.0,
            max_attempts: None,
            randomize_questions: false,
            randomize_options: false,
            total_questions: n,
            total_points: n as f64,
        }
    }

    pub(crate) fn question(id: &str, kind: QuestionKind) -> Question {
        Question {
            id: id.into(),
            prompt: format!("Pregunta {id}"),
            points: 1.0,
            difficulty: Difficulty::Medium,
            kind,
        }
    }

    pub(crate) fn mc(id: &str) -> Question {
        question(
            id,
            QuestionKind::MultipleChoice {
                options: ["A", "B", "C", "D"]
                    .iter()
                    .map(|o| ChoiceOption {
                        id: o.to_string(),
                        text: format!("Opción {o}"),
                        is_correct: None,
                    })
                    .collect(),
            },
        )
    }

    pub(crate) fn three_question_bundle() -> QuizBundle {
        QuizBundle {
            quiz: quiz(3),
            questions: vec![
                mc("q1"),
                question("q2", QuestionKind::TrueFalse { correct_answer: None }),
                question(
                    "q3",
                    QuestionKind::Essay { min_words: Some(50), max_words: None },
                ),
            ],
        }
    }

    fn session(n: usize) -> QuizSession {
        let questions = (0..n).map(|i| mc(&format!("q{i}"))).collect();
        QuizSession::new(QuizBundle { quiz: quiz(n), questions }).unwrap()
    }

    #[test]
    fn empty_quiz_is_rejected() {
        let bundle = QuizBundle { quiz: quiz(0), questions: vec![] };
        assert_eq!(QuizSession::new(bundle).unwrap_err(), SessionError::EmptyQuiz);
    }

    #[test]
    fn answers_for_unknown_questions_are_rejected() {
        let mut s = session(2);
        let err = s
            .set_answer("nope", AnswerData::Boolean { value: true })
            .unwrap_err();
        assert_eq!(err, SessionError::UnknownQuestion("nope".into()));
        assert!(s.answers().is_empty());
    }

    #[test]
    fn prev_at_first_question_stays_put() {
        let mut s = session(3);
        assert!(!s.prev_question());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn next_stops_at_last_question() {
        let mut s = session(2);
        assert!(s.next_question());
        assert!(!s.next_question());
        assert_eq!(s.current_index(), 1);
        assert!(!s.has_next());
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut s = session(3);
        assert!(s.go_to(2));
        assert!(!s.go_to(3));
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn time_only_accrues_to_active_question() {
        let mut s = session(2);
        assert_eq!(s.add_question_time("q0", 3).unwrap(), 3);
        assert_eq!(
            s.add_question_time("q1", 1).unwrap_err(),
            SessionError::InactiveQuestion("q1".into())
        );
        s.next_question();
        s.add_question_time("q1", 2).unwrap();
        assert_eq!(s.total_time(), 5);
    }

    #[test]
    fn time_remaining_counts_down_from_limit() {
        let mut bundle = three_question_bundle();
        bundle.quiz.time_limit_minutes = Some(1);
        let mut s = QuizSession::new(bundle).unwrap();
        assert_eq!(s.time_remaining(), Some(60));
        s.add_question_time("q1", 45).unwrap();
        assert_eq!(s.time_remaining(), Some(15));
        s.add_question_time("q1", 30).unwrap();
        assert!(s.is_time_up());
    }

    #[test]
    fn randomization_keeps_every_question_and_option() {
        let mut bundle = QuizBundle {
            quiz: quiz(8),
            questions: (0..8).map(|i| mc(&format!("q{i}"))).collect(),
        };
        bundle.quiz.randomize_questions = true;
        bundle.quiz.randomize_options = true;
        let mut rng = StdRng::seed_from_u64(7);
        let s = QuizSession::with_rng(bundle, &mut rng).unwrap();

        let mut ids: Vec<_> = s.questions().iter().map(|q| q.id.clone()).collect();
        ids.sort();
        assert_eq!(ids, (0..8).map(|i| format!("q{i}")).collect::<Vec<_>>());
        for q in s.questions() {
            let QuestionKind::MultipleChoice { options } = &q.kind else {
                panic!("expected multiple choice");
            };
            let mut opt: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
            opt.sort();
            assert_eq!(opt, ["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn answered_count_ignores_blank_text() {
        let mut s = QuizSession::new(three_question_bundle()).unwrap();
        s.set_answer("q3", AnswerData::Essay { text: "  ".into() }).unwrap();
        assert_eq!(s.answered_count(), 0);
        s.set_answer("q2", AnswerData::Boolean { value: false }).unwrap();
        assert_eq!(s.answered_count(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Set(usize, bool),
        Bookmark(usize),
        Time(u64),
        Next,
        Prev,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..5, any::<bool>()).prop_map(|(i, v)| Op::Set(i, v)),
            (0usize..5).prop_map(Op::Bookmark),
            (0u64..5).prop_map(Op::Time),
            Just(Op::Next),
            Just(Op::Prev),
        ]
    }

    proptest! {
        #[test]
        fn store_invariants_hold(ops in prop::collection::vec(op(), 0..80)) {
            let mut s = session(5);
            let mut last_time: HashMap<String, u64> = HashMap::new();
            for op in ops {
                match op {
                    Op::Set(i, v) => {
                        let id = format!("q{i}");
                        s.set_answer(&id, AnswerData::Boolean { value: v }).unwrap();
                        prop_assert_eq!(s.answer(&id), Some(&AnswerData::Boolean { value: v }));
                    }
                    Op::Bookmark(i) => { s.toggle_bookmark(&format!("q{i}")).unwrap(); }
                    Op::Time(secs) => {
                        let id = s.current_question().id.clone();
                        s.add_question_time(&id, secs).unwrap();
                    }
                    Op::Next => { s.next_question(); }
                    Op::Prev => { s.prev_question(); }
                }
                prop_assert!(s.current_index() < s.len());
                prop_assert!(s.answers().len() <= s.len());
                prop_assert!(s.answers().keys().all(|k| s.question(k).is_some()));
                for q in s.questions() {
                    let now = s.time_on(&q.id);
                    let before = last_time.insert(q.id.clone(), now).unwrap_or(0);
                    prop_assert!(now >= before);
                }
            }
        }

        #[test]
        fn double_toggle_restores_bookmarks(
            seed in prop::collection::vec(0usize..5, 0..5),
            target in 0usize..5,
        ) {
            let mut s = session(5);
            for i in seed {
                s.toggle_bookmark(&format!("q{i}")).unwrap();
            }
            let before = s.bookmarks().clone();
            let id = format!("q{target}");
            s.toggle_bookmark(&id).unwrap();
            s.toggle_bookmark(&id).unwrap();
            prop_assert_eq!(s.bookmarks(), &before);
        }
    }
}
