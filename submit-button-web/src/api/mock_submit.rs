use std::time::Duration;

use futures::channel::oneshot;
use leptos::set_timeout;
use serde::Serialize;
use uuid::Uuid;

use crate::components::forms::FormError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub id: String,
    pub size: usize,
}

/// Resolves after `duration`, driven by a browser timer.
pub async fn sleep(duration: Duration) {
    let (tx, rx) = oneshot::channel::<()>();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        duration,
    );
    if rx.await.is_err() {
        log::warn!("timer dropped before firing");
    }
}

/// Stand-in for a backend call: waits `delay`, then accepts the payload
/// or fails when `fail` is set.
pub async fn submit<P>(
    payload: &P,
    delay: Duration,
    fail: bool,
) -> Result<SubmitReceipt, FormError>
where
    P: Serialize,
{
    let body = serde_json::to_string(payload)?;
    log::debug!("submitting {}", body);

    sleep(delay).await;

    if fail {
        log::error!("simulated submission failure");
        return Err(FormError::SubmitError(
            "The server rejected the request, please try again".to_string(),
        ));
    }

    let receipt = SubmitReceipt {
        id: Uuid::new_v4().to_string(),
        size: body.len(),
    };
    log::info!("submission {} accepted", receipt.id);
    Ok(receipt)
}
