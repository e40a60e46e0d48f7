// ABOUTME: Tests for pod start/stop ordering and bounded pod removal.
// ABOUTME: Runs the deploy steps against the recording FakeRuntime.

mod support;

use simpledeploy::deploy::{
    DeployError, Deployment, PodRemoval, RemovalPolicy, StopPolicy, remove_pod, start_pod,
    stop_pod,
};
use simpledeploy::diagnostics::{Diagnostics, WarningKind};
use simpledeploy::types::{PodName, VolumeName};
use std::time::Duration;
use support::{FakeRuntime, init_tracing, shop_pod};

#[tokio::test]
async fn start_creates_pod_then_services_then_primary() {
    init_tracing();
    let runtime = FakeRuntime::new();
    let mut diag = Diagnostics::default();

    let ids = start_pod(&runtime, &shop_pod(), &mut diag).await.unwrap();

    assert_eq!(
        runtime.calls(),
        vec![
            "pod create shop [8080:80,5432:5432]",
            "volume shared",
            "run db",
            "run cache",
            "run web",
        ]
    );
    assert_eq!(ids.len(), 3);
    assert!(ids[2].as_str().starts_with("web-"));
    assert!(!diag.has_warnings());
}

#[tokio::test]
async fn container_volumes_are_created_before_its_launch() {
    let runtime = FakeRuntime::new();
    let mut pod = shop_pod();
    pod.services[0].volume_names = vec![VolumeName::new("pgdata").unwrap()];
    let mut diag = Diagnostics::default();

    start_pod(&runtime, &pod, &mut diag).await.unwrap();

    let calls = runtime.calls();
    let volume = calls.iter().position(|c| c == "volume pgdata").unwrap();
    let launch = calls.iter().position(|c| c == "run db").unwrap();
    assert!(volume < launch);
}

#[tokio::test]
async fn volume_failures_are_warnings() {
    let runtime = FakeRuntime::new().failing_volumes();
    let mut diag = Diagnostics::default();

    start_pod(&runtime, &shop_pod(), &mut diag).await.unwrap();

    assert_eq!(diag.count(WarningKind::VolumeCreate), 1);
    assert!(runtime.is_running("web"));
}

#[tokio::test]
async fn stop_tears_down_primary_before_services() {
    let runtime = FakeRuntime::new().with_running(&["web", "db", "cache"]);
    let mut diag = Diagnostics::default();

    let removal = stop_pod(&runtime, &shop_pod(), &StopPolicy::default(), &mut diag).await;

    assert_eq!(
        runtime.calls(),
        vec![
            "stop web 10",
            "rm web",
            "stop db 10",
            "rm db",
            "stop cache 10",
            "rm cache",
            "pod rm shop",
        ]
    );
    assert_eq!(removal, PodRemoval::Removed { attempts: 1 });
    assert!(!diag.has_warnings());
}

#[tokio::test]
async fn stop_with_nothing_running_only_warns() {
    let runtime = FakeRuntime::new();
    let mut diag = Diagnostics::default();

    let removal = stop_pod(&runtime, &shop_pod(), &StopPolicy::default(), &mut diag).await;

    assert_eq!(removal, PodRemoval::Removed { attempts: 1 });
    assert_eq!(diag.count(WarningKind::ContainerStop), 3);
    assert_eq!(diag.count(WarningKind::ContainerRemove), 3);
    // removal is attempted once per container even after a failed stop
    assert_eq!(runtime.calls_starting_with("rm ").len(), 3);
}

#[tokio::test]
async fn stop_twice_is_harmless() {
    let runtime = FakeRuntime::new().with_running(&["web", "db", "cache"]);
    let mut diag = Diagnostics::default();
    let pod = shop_pod();

    stop_pod(&runtime, &pod, &StopPolicy::default(), &mut diag).await;
    assert!(!diag.has_warnings());
    let second = stop_pod(&runtime, &pod, &StopPolicy::default(), &mut diag).await;

    assert_eq!(second, PodRemoval::Removed { attempts: 1 });
    assert_eq!(diag.count(WarningKind::ContainerStop), 3);
}

#[tokio::test]
async fn pod_removal_gives_up_after_three_attempts() {
    let runtime = FakeRuntime::new().failing_pod_removal(10);
    let mut diag = Diagnostics::default();
    let name = PodName::new("shop").unwrap();

    let removal = remove_pod(&runtime, &name, &RemovalPolicy::default(), &mut diag).await;

    assert_eq!(removal, PodRemoval::Abandoned { attempts: 3 });
    assert_eq!(runtime.calls_starting_with("pod rm").len(), 3);
    assert_eq!(
        runtime.pod_remove_timeouts(),
        vec![Duration::from_secs(5); 3]
    );
    assert_eq!(diag.count(WarningKind::PodRemove), 1);
}

#[tokio::test]
async fn pod_removal_stops_retrying_once_it_succeeds() {
    let runtime = FakeRuntime::new().failing_pod_removal(2);
    let mut diag = Diagnostics::default();
    let name = PodName::new("shop").unwrap();

    let removal = remove_pod(&runtime, &name, &RemovalPolicy::default(), &mut diag).await;

    assert_eq!(removal, PodRemoval::Removed { attempts: 3 });
    assert_eq!(removal.attempts(), 3);
    assert!(!diag.has_warnings());
}

#[tokio::test]
async fn service_launch_failure_is_fatal_and_primary_never_starts() {
    let runtime = FakeRuntime::new().failing_launch("db");
    let mut diag = Diagnostics::default();

    let err = start_pod(&runtime, &shop_pod(), &mut diag)
        .await
        .unwrap_err();

    match err {
        DeployError::ContainerLaunch { container, source } => {
            assert_eq!(container.as_str(), "db");
            assert_eq!(source.stderr(), Some("image not known"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(runtime.calls_starting_with("run web").is_empty());
}

#[tokio::test]
async fn pod_create_failure_launches_nothing() {
    let runtime = FakeRuntime::new().failing_pod_create();
    let mut diag = Diagnostics::default();

    let err = start_pod(&runtime, &shop_pod(), &mut diag)
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::PodCreate { ref pod, .. } if pod.as_str() == "shop"));
    assert!(err.to_string().contains("port already in use"));
    assert_eq!(runtime.calls().len(), 1);
}

#[tokio::test]
async fn deployment_stops_before_it_starts() {
    let runtime = FakeRuntime::new().with_running(&["web"]);
    let mut diag = Diagnostics::default();
    let policy = StopPolicy {
        container_timeout: Duration::from_secs(2),
        removal: RemovalPolicy::default(),
    };

    let (stopped, _) = Deployment::new(shop_pod())
        .stop(&runtime, &policy, &mut diag)
        .await;
    let (started, ids) = stopped.start(&runtime, &mut diag).await.unwrap();

    let calls = runtime.calls();
    let last_stop = calls.iter().rposition(|c| c == "pod rm shop").unwrap();
    let pod_create = calls.iter().position(|c| c.starts_with("pod create")).unwrap();
    assert!(last_stop < pod_create);
    assert_eq!(calls[0], "stop web 2");
    assert_eq!(ids.len(), 3);
    assert_eq!(started.finish().name.as_str(), "shop");
}
