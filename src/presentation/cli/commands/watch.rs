use std::time::Duration;

use crate::application::services::account::AccountHealthService;

/// Re-evaluate an account at a fixed interval until Ctrl+C.
///
/// Every cycle recomputes the report from storage; nothing is carried over between
/// cycles. Errors in a single cycle are logged and the loop continues.
///
/// # Errors
///
/// Returns an error if `interval_secs` is zero.
pub async fn run_watch(
    service: &AccountHealthService<'_>,
    account_id: &str,
    interval_secs: u64,
) -> anyhow::Result<()> {
    if interval_secs == 0 {
        anyhow::bail!("Watch interval must be greater than 0");
    }
    tracing::info!(account = %account_id, "watch started (interval: {interval_secs}s)");
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match service.evaluate_account(account_id) {
                    Ok(report) => {
                        let breakdown = &report.summary.alerts_breakdown;
                        tracing::info!(
                            locations = report.summary.locations_count,
                            with_alerts = report.summary.locations_with_alerts,
                            unavailable = report.unavailable.len(),
                            "cycle complete: {} alert(s), avg rating {:.2}",
                            breakdown.total(),
                            report.summary.avg_rating
                        );
                    }
                    Err(e) => {
                        tracing::error!("evaluation cycle failed: {e:#}");
                    }
                }
            }
            _ = &mut shutdown => {
                tracing::info!("shutdown signal received, stopping watch");
                break;
            }
        }
    }
    Ok(())
}
