use crate::model::QuestionId;
use crate::session::QuizSession;

/// Intervalo del contador por pregunta, en segundos.
pub const TICK_SECONDS: f64 = 1.0;

/// Contador por pregunta alimentado por el reloj de egui (`InputState::time`).
///
/// Funciona como un `setInterval` de un segundo: al cambiar de pregunta se
/// descarta el intervalo anterior (y la fracción de segundo pendiente) y se
/// arranca otro. No se pausa cuando la ventana pierde el foco, así que el
/// tiempo acumulado es una cota superior.
#[derive(Debug, Default, Clone)]
pub struct QuestionTimer {
    running: Option<Running>,
}

#[derive(Debug, Clone)]
struct Running {
    question_id: QuestionId,
    anchor: f64,
}

impl QuestionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn active_question(&self) -> Option<&str> {
        self.running.as_ref().map(|r| r.question_id.as_str())
    }

    /// Reinicia el intervalo si la pregunta activa cambió o si estaba parado.
    pub fn sync(&mut self, question_id: &str, now: f64) {
        let same = self
            .running
            .as_ref()
            .map(|r| r.question_id == question_id)
            .unwrap_or(false);
        if !same {
            self.running = Some(Running {
                question_id: question_id.to_string(),
                anchor: now,
            });
        }
    }

    pub fn stop(&mut self) {
        self.running = None;
    }

    /// Devuelve los ticks completos transcurridos desde el último.
    pub fn tick(&mut self, now: f64) -> Option<(QuestionId, u64)> {
        let running = self.running.as_mut()?;
        if now < running.anchor {
            // reloj reiniciado: volvemos a anclar sin contar nada
            running.anchor = now;
            return None;
        }
        let ticks = ((now - running.anchor) / TICK_SECONDS).floor() as u64;
        if ticks == 0 {
            return None;
        }
        running.anchor += ticks as f64 * TICK_SECONDS;
        Some((running.question_id.clone(), ticks))
    }

    /// Sincroniza con la pregunta actual de la sesión y le suma los ticks.
    pub fn drive(&mut self, session: &mut QuizSession, now: f64) {
        let current = session.current_question().id.clone();
        self.sync(&current, now);
        if let Some((question_id, ticks)) = self.tick(now) {
            if let Err(err) = session.add_question_time(&question_id, ticks * TICK_SECONDS as u64) {
                log::warn!("timer tick dropped: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::three_question_bundle;

    #[test]
    fn counts_whole_seconds_only() {
        let mut t = QuestionTimer::new();
        t.sync("q1", 10.0);
        assert_eq!(t.tick(10.9), None);
        assert_eq!(t.tick(11.2), Some(("q1".to_string(), 1)));
        assert_eq!(t.tick(13.5), Some(("q1".to_string(), 2)));
    }

    #[test]
    fn question_change_restarts_interval() {
        let mut t = QuestionTimer::new();
        t.sync("q1", 0.0);
        t.sync("q2", 0.8);
        assert_eq!(t.active_question(), Some("q2"));
        assert_eq!(t.tick(1.5), None);
        assert_eq!(t.tick(1.8), Some(("q2".to_string(), 1)));
    }

    #[test]
    fn stopped_timer_never_ticks() {
        let mut t = QuestionTimer::new();
        t.sync("q1", 0.0);
        t.stop();
        assert_eq!(t.tick(50.0), None);
        assert!(!t.is_running());
    }

    #[test]
    fn drive_accumulates_on_the_active_question() {
        let mut session = QuizSession::new(three_question_bundle()).unwrap();
        let mut t = QuestionTimer::new();
        t.drive(&mut session, 0.0);
        t.drive(&mut session, 2.5);
        session.next_question();
        t.drive(&mut session, 2.6);
        t.drive(&mut session, 3.7);

        assert_eq!(session.time_on("q1"), 2);
        assert_eq!(session.time_on("q2"), 1);
        assert_eq!(session.time_on("q3"), 0);
    }
}
