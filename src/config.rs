use crate::executor::ExecutorKind;
use crate::output::PREVIEW_LIMIT;

/// Knobs for one run. None of them change the prompt sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fixed seed for the random fill; the wall clock is used when unset.
    pub seed: Option<u64>,
    pub executor: ExecutorKind,
    /// Elements shown per array after the sum.
    pub preview: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed: None,
            executor: ExecutorKind::Threads,
            preview: PREVIEW_LIMIT,
        }
    }
}

impl Settings {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_executor(mut self, executor: ExecutorKind) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_preview(mut self, preview: usize) -> Self {
        self.preview = preview;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.executor, ExecutorKind::Threads);
        assert_eq!(settings.preview, 10);
    }

    #[test]
    fn test_builder() {
        let settings = Settings::default()
            .with_seed(7)
            .with_executor(ExecutorKind::Serial)
            .with_preview(3);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.executor, ExecutorKind::Serial);
        assert_eq!(settings.preview, 3);
    }
}
