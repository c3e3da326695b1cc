//! Background worker draining the click audit channel.

use tokio::sync::mpsc;

use crate::audit::click_event::ClickEvent;

/// Consumes click events and writes one structured audit record per click.
///
/// Runs until every sender is dropped. Events arrive fire-and-forget from the
/// resolve handler, so a slow log sink can only ever cost dropped audit
/// records, never redirect latency.
pub async fn run_click_worker(mut rx: mpsc::Receiver<ClickEvent>) {
    while let Some(ev) = rx.recv().await {
        metrics::counter!("clicks_total", "outcome" => ev.outcome()).increment(1);

        tracing::info!(
            target: "audit",
            outcome = ev.outcome(),
            token = ev.token.as_deref().unwrap_or("-"),
            destination = %ev.destination,
            ip = ev.ip.as_deref().unwrap_or("-"),
            user_agent = ev.user_agent.as_deref().unwrap_or("-"),
            referer = ev.referer.as_deref().unwrap_or("-"),
            clicked_at = %ev.clicked_at.to_rfc3339(),
            "click",
        );
    }

    tracing::info!("Click worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_worker_drains_channel_and_stops() {
        let (tx, rx) = mpsc::channel(10);

        for i in 0..3 {
            tx.send(ClickEvent::new(
                Some(format!("t{i}")),
                format!("https://landing.example.com/login/t{i}"),
                None,
                None,
                None,
            ))
            .await
            .unwrap();
        }
        drop(tx);

        // Completes once the channel is closed and empty.
        run_click_worker(rx).await;
    }
}
