use crate::ShutdownCoordinator;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::eq;

#[tokio::test]
async fn given_signal_when_shutdown_triggered_then_wait_returns() {
    let coordinator = ShutdownCoordinator::new();
    let mut signal = coordinator.signal();

    coordinator.trigger();

    tokio::time::timeout(Duration::from_secs(1), signal.wait())
        .await
        .unwrap();
}

#[tokio::test]
async fn given_triggered_coordinator_when_signal_taken_later_then_resolves_immediately() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.clone().trigger();

    let mut late = coordinator.signal();

    tokio::time::timeout(Duration::from_secs(1), late.wait())
        .await
        .unwrap();
    assert_that!(coordinator.is_triggered(), eq(true));
}

#[tokio::test]
async fn given_untriggered_coordinator_when_waited_then_still_pending() {
    let coordinator = ShutdownCoordinator::new();
    let mut signal = coordinator.signal();

    let waited = tokio::time::timeout(Duration::from_millis(50), signal.wait()).await;

    assert!(waited.is_err());
    assert_that!(coordinator.is_triggered(), eq(false));
}
