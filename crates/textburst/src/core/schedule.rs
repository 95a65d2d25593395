//! One-shot, cancellable redirect owned by the application shell.

/// Performs page navigation. The browser bridge sets `location.href`.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskState {
    Pending,
    Fired,
    Cancelled,
}

/// A redirect that becomes due at a fixed time and fires at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectTask {
    url: String,
    due_at: f64,
    state: TaskState,
}

impl RedirectTask {
    pub fn new(url: impl Into<String>, due_at: f64) -> Self {
        Self {
            url: url.into(),
            due_at,
            state: TaskState::Pending,
        }
    }

    /// Returns the URL the first time this is polled at or after `due_at`.
    pub fn poll(&mut self, now: f64) -> Option<&str> {
        if self.state != TaskState::Pending || now < self.due_at {
            return None;
        }
        self.state = TaskState::Fired;
        Some(&self.url)
    }

    /// Prevent the task from ever firing. No effect once fired.
    pub fn cancel(&mut self) {
        if self.state == TaskState::Pending {
            self.state = TaskState::Cancelled;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == TaskState::Pending
    }

    pub fn has_fired(&self) -> bool {
        self.state == TaskState::Fired
    }

    pub fn due_at(&self) -> f64 {
        self.due_at
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
