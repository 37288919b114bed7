//! Run lifecycle controller.
//!
//! One executor owns at most one live run. `start` validates the surface,
//! installs the run and spawns the drive loop; `pause`/`resume`/`stop` are
//! control signals observed between steps and inside every delay. All
//! shared state sits behind a `parking_lot` mutex that is never held across
//! an await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use action_tools::{run_step, ToolDeps};
use dom_port::DomPort;
use pagepilot_core_types::{RunId, RunStatus, Step, StepStatus};
use pagepilot_policy_center::PolicyGate;
use parking_lot::Mutex;
use target_locator::{DefaultTargetResolver, TargetResolver};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::confirm::{ConfirmPort, DenyAll};
use crate::errors::FlowError;
use crate::progress::ProgressBus;
use crate::types::{Run, RunSnapshot};

/// How often a paused drive loop re-checks for resume or stop.
const PAUSE_POLL: Duration = Duration::from_millis(50);

const STOPPED_BY_CALLER: &str = "Stopped by caller";

pub struct RunExecutor {
    dom: Arc<dyn DomPort>,
    resolver: Arc<dyn TargetResolver>,
    policy: PolicyGate,
    confirm: Arc<dyn ConfirmPort>,
    bus: ProgressBus,
    run: Mutex<Run>,
    cancel: Mutex<CancellationToken>,
    paused: AtomicBool,
}

impl RunExecutor {
    pub fn builder(dom: Arc<dyn DomPort>) -> RunExecutorBuilder {
        RunExecutorBuilder::new(dom)
    }

    /// Begin executing a step sequence on the current page. Exactly one run
    /// may be live; a second `start` is rejected, never queued.
    #[instrument(skip_all, fields(steps = steps.len()))]
    pub async fn start(self: &Arc<Self>, steps: Vec<Step>) -> Result<RunId, FlowError> {
        if steps.is_empty() {
            return Err(FlowError::EmptySequence);
        }
        if self.is_running() {
            return Err(FlowError::Busy);
        }

        let address = self
            .dom
            .current_url()
            .await
            .map_err(|err| FlowError::Dom(err.to_string()))?;

        if let Err(err) = self.policy.check_surface(&address) {
            // Surface denial is fatal before any step runs. The denied run
            // is still installed and published so observers see the reason.
            warn!("run rejected: {}", err);
            let snapshot = {
                let mut run = self.run.lock();
                if run.status.is_active() {
                    return Err(FlowError::Busy);
                }
                *run = Run::new(steps);
                run.status = RunStatus::Error;
                run.description = err.to_string();
                run.snapshot()
            };
            self.bus.publish(snapshot);
            return Err(FlowError::SurfaceDenied(address));
        }

        let token = CancellationToken::new();
        let run_id = {
            let mut run = self.run.lock();
            if run.status.is_active() {
                return Err(FlowError::Busy);
            }
            *run = Run::new(steps);
            run.status = RunStatus::Running;
            run.description = format!("Executing {} steps", run.steps.len());
            // Token swap happens while the run lock is held: a concurrent
            // `stop` cancels either the outgoing run's token or this one,
            // never a token the new run no longer observes.
            *self.cancel.lock() = token.clone();
            self.paused.store(false, Ordering::SeqCst);
            run.id.clone()
        };
        self.publish_current();

        info!(run = %run_id, surface = %address, "run started");
        let executor = Arc::clone(self);
        let id = run_id.clone();
        tokio::spawn(async move {
            executor.drive(id, token).await;
        });

        Ok(run_id)
    }

    /// Suspend after the in-flight step finishes. Idempotent.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
        let snapshot = {
            let mut run = self.run.lock();
            if run.status != RunStatus::Running {
                return;
            }
            run.status = RunStatus::Paused;
            run.description = "Paused".to_string();
            Some(run.snapshot())
        };
        if let Some(snapshot) = snapshot {
            info!("run paused");
            self.bus.publish(snapshot);
        }
    }

    /// Continue from the step the pause landed on. Idempotent.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        let snapshot = {
            let mut run = self.run.lock();
            if run.status != RunStatus::Paused {
                return;
            }
            run.status = RunStatus::Running;
            run.description = format!("Executing {} steps", run.steps.len());
            Some(run.snapshot())
        };
        if let Some(snapshot) = snapshot {
            info!("run resumed");
            self.bus.publish(snapshot);
        }
    }

    /// Abort the run. The in-flight step is interrupted at its next
    /// suspension point; unreached steps stay pending.
    pub fn stop(&self) {
        info!("stop requested");
        self.cancel.lock().cancel();
        self.paused.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.run.lock().status.is_active()
    }

    pub fn progress(&self) -> RunSnapshot {
        self.run.lock().snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<RunSnapshot> {
        self.bus.subscribe()
    }

    fn publish_current(&self) {
        let snapshot = self.run.lock().snapshot();
        self.bus.publish(snapshot);
    }

    /// The drive loop carries the id of the run it was spawned for; once a
    /// newer run replaces it, a stale loop returns without touching state.
    async fn drive(self: Arc<Self>, run_id: RunId, cancel: CancellationToken) {
        loop {
            if cancel.is_cancelled() {
                self.finish_stopped(&run_id);
                return;
            }
            if self.paused.load(Ordering::SeqCst) {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        self.finish_stopped(&run_id);
                        return;
                    }
                    _ = sleep(PAUSE_POLL) => {}
                }
                continue;
            }

            let next = {
                let mut run = self.run.lock();
                if run.id != run_id {
                    return;
                }
                let index = run.current_index;
                if index >= run.steps.len() {
                    run.status = RunStatus::Completed;
                    run.description = "All steps completed".to_string();
                    Ok(run.snapshot())
                } else {
                    run.steps[index].mark_running();
                    Err((run.steps[index].clone(), run.snapshot()))
                }
            };
            let (step, snapshot) = match next {
                Ok(final_snapshot) => {
                    info!(run = %run_id, "run completed");
                    self.bus.publish(final_snapshot);
                    return;
                }
                Err(started) => started,
            };
            self.bus.publish(snapshot.clone());

            if self.policy.is_sensitive(&step) {
                info!(step = %step.label(), "sensitive step, requesting confirmation");
                let approved = tokio::select! {
                    _ = cancel.cancelled() => {
                        self.finish_stopped(&run_id);
                        return;
                    }
                    approved = self.confirm.confirm(&step, &snapshot) => approved,
                };
                if !approved {
                    self.fail_step_and_advance(&run_id, "Cancelled by user");
                    continue;
                }
            }

            let deps = ToolDeps {
                dom: self.dom.as_ref(),
                resolver: self.resolver.as_ref(),
                policy: &self.policy,
                cancel: &cancel,
            };
            match run_step(&deps, &step.kind).await {
                Ok(()) => {
                    let snapshot = {
                        let mut run = self.run.lock();
                        if run.id != run_id {
                            return;
                        }
                        let index = run.current_index;
                        run.steps[index].mark_completed();
                        run.current_index += 1;
                        run.snapshot()
                    };
                    self.bus.publish(snapshot);
                }
                Err(err) if err.is_cancelled() => {
                    self.finish_stopped(&run_id);
                    return;
                }
                Err(err) => {
                    // Any other tool failure ends the run; nothing after the
                    // failed step executes.
                    warn!(step = %step.label(), "step failed: {}", err);
                    let snapshot = {
                        let mut run = self.run.lock();
                        if run.id != run_id {
                            return;
                        }
                        let index = run.current_index;
                        run.steps[index].mark_failed(err.to_string());
                        run.status = RunStatus::Error;
                        run.description = format!("Failed at step {}: {}", index + 1, err);
                        run.snapshot()
                    };
                    self.bus.publish(snapshot);
                    return;
                }
            }
        }
    }

    /// A refused sensitive step fails locally; the run keeps going.
    fn fail_step_and_advance(&self, run_id: &RunId, reason: &str) {
        let snapshot = {
            let mut run = self.run.lock();
            if &run.id != run_id {
                return;
            }
            let index = run.current_index;
            run.steps[index].mark_failed(reason.to_string());
            run.current_index += 1;
            run.snapshot()
        };
        self.bus.publish(snapshot);
    }

    fn finish_stopped(&self, run_id: &RunId) {
        let snapshot = {
            let mut run = self.run.lock();
            if &run.id != run_id {
                return;
            }
            let index = run.current_index;
            if let Some(step) = run.steps.get_mut(index) {
                if step.status == StepStatus::Running {
                    step.mark_failed("cancelled".to_string());
                }
            }
            run.status = RunStatus::Idle;
            run.description = STOPPED_BY_CALLER.to_string();
            run.snapshot()
        };
        info!(run = %run_id, "run stopped");
        self.bus.publish(snapshot);
    }
}

pub struct RunExecutorBuilder {
    dom: Arc<dyn DomPort>,
    resolver: Option<Arc<dyn TargetResolver>>,
    policy: Option<PolicyGate>,
    confirm: Option<Arc<dyn ConfirmPort>>,
    bus_capacity: usize,
}

impl RunExecutorBuilder {
    pub fn new(dom: Arc<dyn DomPort>) -> Self {
        Self {
            dom,
            resolver: None,
            policy: None,
            confirm: None,
            bus_capacity: 64,
        }
    }

    pub fn resolver(mut self, resolver: Arc<dyn TargetResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn policy(mut self, policy: PolicyGate) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn confirm(mut self, confirm: Arc<dyn ConfirmPort>) -> Self {
        self.confirm = Some(confirm);
        self
    }

    pub fn bus_capacity(mut self, capacity: usize) -> Self {
        self.bus_capacity = capacity;
        self
    }

    /// Unset ports fall back to the defaults: the strategy-cascade resolver
    /// over the same document, the built-in policy, and `DenyAll`
    /// confirmation.
    pub fn build(self) -> Arc<RunExecutor> {
        let resolver = self
            .resolver
            .unwrap_or_else(|| Arc::new(DefaultTargetResolver::new(self.dom.clone())));
        Arc::new(RunExecutor {
            dom: self.dom,
            resolver,
            policy: self.policy.unwrap_or_default(),
            confirm: self.confirm.unwrap_or_else(|| Arc::new(DenyAll)),
            bus: ProgressBus::new(self.bus_capacity),
            run: Mutex::new(Run::idle()),
            cancel: Mutex::new(CancellationToken::new()),
            paused: AtomicBool::new(false),
        })
    }
}
