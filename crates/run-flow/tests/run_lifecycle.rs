//! End-to-end lifecycle tests driving the executor against the in-memory
//! document.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dom_port::{DomWrite, ElementSnapshot, MemoryDom};
use pagepilot_core_types::{RunStatus, ScrollDirection, Step, StepStatus};
use run_flow::{AutoApprove, FlowError, RunExecutor, RunSnapshot};
use tokio::sync::broadcast::Receiver;
use tokio::time::timeout;

fn studio_page() -> Arc<MemoryDom> {
    let dom = MemoryDom::new("https://studio.youtube.com/channel");
    dom.set_elements(vec![
        ElementSnapshot::new(1, 0, "button").with_text("Create"),
        ElementSnapshot::new(2, 1, "input").with_placeholder("Video title"),
        ElementSnapshot::new(3, 2, "button").with_text("Submit upload"),
    ]);
    dom
}

fn approving_executor(dom: &Arc<MemoryDom>) -> Arc<RunExecutor> {
    RunExecutor::builder(dom.clone() as Arc<dyn dom_port::DomPort>)
        .confirm(Arc::new(AutoApprove))
        .build()
}

/// Drain snapshots until the run leaves its active states.
async fn await_terminal(rx: &mut Receiver<RunSnapshot>) -> RunSnapshot {
    timeout(Duration::from_secs(30), async {
        loop {
            match rx.recv().await {
                Ok(snapshot) if !snapshot.status.is_active() => return snapshot,
                Ok(_) => continue,
                Err(err) => panic!("progress channel closed: {err}"),
            }
        }
    })
    .await
    .expect("run did not reach a terminal state in time")
}

#[tokio::test(flavor = "multi_thread")]
async fn steps_execute_in_order_and_complete() {
    let dom = studio_page();
    let executor = approving_executor(&dom);
    let mut rx = executor.subscribe();

    executor
        .start(vec![
            Step::click("create"),
            Step::type_text("video title", "lo-fi"),
            Step::scroll(ScrollDirection::Down, 500),
            Step::capture(),
        ])
        .await
        .unwrap();

    let done = await_terminal(&mut rx).await;
    assert_eq!(done.status, RunStatus::Completed);
    assert_eq!(done.completed_steps(), 4);
    assert!(done.steps.iter().all(|s| s.status == StepStatus::Completed));

    // The document saw the effects in step order.
    let journal = dom.journal();
    let activate_at = journal
        .iter()
        .position(|w| matches!(w, DomWrite::Activated(_)))
        .unwrap();
    let scroll_at = journal
        .iter()
        .position(|w| matches!(w, DomWrite::ScrolledBy { .. }))
        .unwrap();
    let shot_at = journal
        .iter()
        .position(|w| matches!(w, DomWrite::ScreenshotRequested))
        .unwrap();
    assert!(activate_at < scroll_at && scroll_at < shot_at);
    assert_eq!(dom.value_of(dom_port::NodeId(2)).as_deref(), Some("lo-fi"));
    assert_eq!(dom.scroll_offset(), (0, 500));
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_sensitive_step_fails_locally_and_run_continues() {
    let dom = studio_page();
    // Default confirmation is deny-everything.
    let executor = RunExecutor::builder(dom.clone() as Arc<dyn dom_port::DomPort>).build();
    let mut rx = executor.subscribe();

    executor
        .start(vec![Step::click("submit upload"), Step::wait(10)])
        .await
        .unwrap();

    let done = await_terminal(&mut rx).await;
    assert_eq!(done.status, RunStatus::Completed);
    assert_eq!(done.steps[0].status, StepStatus::Failed);
    assert_eq!(done.steps[0].error.as_deref(), Some("Cancelled by user"));
    assert_eq!(done.steps[1].status, StepStatus::Completed);

    // The refused click never touched the document.
    assert!(dom
        .journal()
        .iter()
        .all(|w| !matches!(w, DomWrite::Activated(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn approved_sensitive_step_runs_normally() {
    let dom = studio_page();
    let executor = approving_executor(&dom);
    let mut rx = executor.subscribe();

    executor
        .start(vec![Step::click("submit upload")])
        .await
        .unwrap();

    let done = await_terminal(&mut rx).await;
    assert_eq!(done.status, RunStatus::Completed);
    assert!(dom
        .journal()
        .iter()
        .any(|w| matches!(w, DomWrite::Activated(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn disallowed_surface_is_fatal_before_any_step() {
    let dom = MemoryDom::new("https://bank.example.com/login");
    let executor = approving_executor(&dom);

    let err = executor
        .start(vec![Step::click("transfer")])
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::SurfaceDenied(_)));

    let snapshot = executor.progress();
    assert_eq!(snapshot.status, RunStatus::Error);
    assert_eq!(snapshot.completed_steps(), 0);
    assert!(snapshot
        .steps
        .iter()
        .all(|s| s.status == StepStatus::Pending));
    assert!(dom.journal().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn stop_interrupts_a_long_wait_promptly() {
    let dom = studio_page();
    let executor = approving_executor(&dom);
    let mut rx = executor.subscribe();

    executor.start(vec![Step::wait(30_000)]).await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;

    let asked = Instant::now();
    executor.stop();
    let done = await_terminal(&mut rx).await;

    assert!(asked.elapsed() < Duration::from_secs(2));
    assert_eq!(done.status, RunStatus::Idle);
    assert_eq!(done.description, "Stopped by caller");
    assert_eq!(done.steps[0].status, StepStatus::Failed);
    assert_eq!(done.steps[0].error.as_deref(), Some("cancelled"));
}

#[tokio::test(flavor = "multi_thread")]
async fn pause_holds_between_steps_and_resume_continues() {
    let dom = studio_page();
    let executor = approving_executor(&dom);
    let mut rx = executor.subscribe();

    executor
        .start(vec![Step::wait(100), Step::wait(100), Step::wait(100)])
        .await
        .unwrap();
    executor.pause();

    // Any in-flight step may finish, but nothing further starts.
    tokio::time::sleep(Duration::from_millis(400)).await;
    let held = executor.progress().completed_steps();
    assert!(held <= 1, "paused run kept executing: {held} steps done");

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(executor.progress().completed_steps(), held);

    executor.resume();
    let done = await_terminal(&mut rx).await;
    assert_eq!(done.status, RunStatus::Completed);
    assert_eq!(done.completed_steps(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn second_start_is_rejected_while_a_run_is_live() {
    let dom = studio_page();
    let executor = approving_executor(&dom);
    let mut rx = executor.subscribe();

    executor.start(vec![Step::wait(5_000)]).await.unwrap();
    let err = executor.start(vec![Step::capture()]).await.unwrap_err();
    assert!(matches!(err, FlowError::Busy));

    executor.stop();
    await_terminal(&mut rx).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn stop_issued_right_after_start_halts_only_that_run() {
    let dom = studio_page();
    let executor = approving_executor(&dom);
    let mut rx = executor.subscribe();

    // No await between start returning and stop: the token installed by
    // start must be the one stop cancels.
    executor.start(vec![Step::wait(30_000)]).await.unwrap();
    executor.stop();

    let done = await_terminal(&mut rx).await;
    assert_eq!(done.status, RunStatus::Idle);
    assert_eq!(done.description, "Stopped by caller");

    // The next run gets a fresh token and runs to completion.
    executor.start(vec![Step::capture()]).await.unwrap();
    let next = await_terminal(&mut rx).await;
    assert_eq!(next.status, RunStatus::Completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn executor_accepts_a_new_run_after_the_previous_ends() {
    let dom = studio_page();
    let executor = approving_executor(&dom);
    let mut rx = executor.subscribe();

    executor.start(vec![Step::wait(10)]).await.unwrap();
    let first = await_terminal(&mut rx).await;
    assert_eq!(first.status, RunStatus::Completed);

    // A stopped token from the previous run must not leak into this one.
    executor.stop();
    executor.start(vec![Step::capture()]).await.unwrap();
    let second = await_terminal(&mut rx).await;
    assert_eq!(second.status, RunStatus::Completed);
    assert_ne!(first.run_id, second.run_id);
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_resolution_ends_the_run_in_error() {
    let dom = studio_page();
    let executor = approving_executor(&dom);
    let mut rx = executor.subscribe();

    executor
        .start(vec![Step::click("no such control"), Step::capture()])
        .await
        .unwrap();

    let done = await_terminal(&mut rx).await;
    assert_eq!(done.status, RunStatus::Error);
    assert_eq!(done.steps[0].status, StepStatus::Failed);
    assert_eq!(done.steps[1].status, StepStatus::Pending);
    assert_eq!(dom.screenshot_requests(), 0);
}

#[tokio::test]
async fn empty_sequence_is_rejected() {
    let executor = approving_executor(&studio_page());
    assert!(matches!(
        executor.start(vec![]).await,
        Err(FlowError::EmptySequence)
    ));
}
