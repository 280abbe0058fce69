/// Segundos que se muestra cada aviso.
pub const TOAST_SECONDS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub created: f64,
}

/// Avisos no bloqueantes. El tiempo lo pone el caller (`InputState::time`).
#[derive(Debug, Default, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    now: f64,
}

impl Toasts {
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Info, text.into());
    }

    fn push(&mut self, kind: ToastKind, text: String) {
        self.items.push(Toast {
            kind,
            text,
            created: self.now,
        });
    }

    /// Avanza el reloj y descarta los caducados.
    pub fn advance(&mut self, now: f64) {
        self.now = now;
        self.items.retain(|t| now - t.created < TOAST_SECONDS);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }
}
