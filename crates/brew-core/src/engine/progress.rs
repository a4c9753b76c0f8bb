/// Events emitted while a batch of recipes is being calculated.
#[derive(Debug, Clone)]
pub enum Progress {
    /// A batch of `total_steps` recipes has started.
    TaskStart { total_steps: u64 },
    /// One more recipe has been calculated.
    TaskIncrement,
    TaskFinish,

    /// Free-form note for the user, e.g. about recipes with incomplete metrics.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback; without one, events are dropped.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
