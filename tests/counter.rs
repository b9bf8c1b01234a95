#[cfg(test)]
mod tests {
    use shiftlog::libs::counter::run_counter;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_cancelled_before_start_never_ticks() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut calls = 0;
        let delivered = run_counter(Duration::from_millis(1), cancel, || calls += 1).await;

        assert_eq!(delivered, 0);
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_stops_on_the_tick_that_cancels() {
        let cancel = CancellationToken::new();
        let stop = cancel.clone();

        let mut calls = 0;
        let delivered = run_counter(Duration::from_millis(1), cancel, || {
            calls += 1;
            if calls == 3 {
                stop.cancel();
            }
        })
        .await;

        assert_eq!(delivered, 3);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_first_tick_is_immediate() {
        let cancel = CancellationToken::new();
        let stop = cancel.clone();

        let delivered = tokio::time::timeout(
            Duration::from_secs(5),
            run_counter(Duration::from_secs(3600), cancel, move || stop.cancel()),
        )
        .await
        .unwrap();

        assert_eq!(delivered, 1);
    }

    #[tokio::test]
    async fn test_cancel_from_another_task() {
        let cancel = CancellationToken::new();
        let stop = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            stop.cancel();
        });

        let delivered = tokio::time::timeout(
            Duration::from_secs(5),
            run_counter(Duration::from_secs(3600), cancel, || {}),
        )
        .await
        .unwrap();

        assert_eq!(delivered, 1);
    }
}
