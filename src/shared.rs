//! An evaluator that can be shared across threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{config::EvalConfig, evaluator::EvalError, evaluator::Evaluator};

/// Cloneable handle to one [`Evaluator`].
///
/// Each call holds the lock for the whole evaluation, so the answer read by
/// `a` and the answer written on success belong to the same transaction.
#[derive(Debug, Clone, Default)]
pub struct SharedEvaluator {
    inner: Arc<Mutex<Evaluator>>,
}

impl SharedEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Self {
        SharedEvaluator {
            inner: Arc::new(Mutex::new(Evaluator::with_config(config))),
        }
    }

    pub fn evaluate(&self, input: &str) -> Result<f64, EvalError> {
        self.inner.lock().evaluate(input)
    }

    pub fn evaluate_to_string(&self, input: &str) -> String {
        self.inner.lock().evaluate_to_string(input)
    }

    pub fn last_answer(&self) -> f64 {
        self.inner.lock().last_answer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_increments() {
        let shared = SharedEvaluator::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared.evaluate("a+1").unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.last_answer(), 200.0);
    }
}
