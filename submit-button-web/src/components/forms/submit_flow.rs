use std::future::Future;

use leptos::*;

use super::FormError;

/// Drives a caller-owned loading flag around one asynchronous submission.
#[derive(Clone, Copy)]
pub struct SubmitFlow {
    loading: RwSignal<bool>,
}

impl SubmitFlow {
    pub fn new(loading: RwSignal<bool>) -> Self {
        Self { loading }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get_untracked()
    }

    /// Sets the flag, awaits `submission` and clears the flag again,
    /// whatever the outcome. Only one submission may be in flight.
    pub async fn run<T, Fut>(&self, submission: Fut) -> Result<T, FormError>
    where
        Fut: Future<Output = Result<T, FormError>>,
    {
        if self.is_loading() {
            log::warn!("submission ignored, previous one still running");
            return Err(FormError::SubmitInProgress);
        }
        let _guard = LoadingGuard::engage(self.loading);
        submission.await
    }
}

struct LoadingGuard {
    loading: RwSignal<bool>,
}

impl LoadingGuard {
    fn engage(loading: RwSignal<bool>) -> Self {
        loading.set(true);
        Self { loading }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loading.set(false);
    }
}
