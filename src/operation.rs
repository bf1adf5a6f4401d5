//! In-flight requests and the context their completions run on.
//!
//! Every endpoint call returns an [`Operation`]. The network work runs on a
//! tokio task; its completion is handed to a [`CallbackContext`], which runs
//! completions one at a time on a single thread. Callers therefore observe
//! all completions serialized, whatever runtime threads did the I/O.
//!
//! State machine: `Created -> Dispatched -> {Succeeded | Failed}`, or
//! `Dispatched -> Cancelled`. Both exits from `Dispatched` are a single
//! compare-and-swap, so a completion and a cancel can never both win.

use crate::transport_error;
use crate::types::{MphResult, TransportErrorKind};
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Name of the thread started by [`CallbackContext::spawn`]
pub const CALLBACK_THREAD_NAME: &str = "mph-callbacks";

static NEXT_OPERATION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationState {
    Created,
    Dispatched,
    Succeeded,
    Failed,
    Cancelled,
}

impl OperationState {
    fn as_u8(self) -> u8 {
        match self {
            OperationState::Created => 0,
            OperationState::Dispatched => 1,
            OperationState::Succeeded => 2,
            OperationState::Failed => 3,
            OperationState::Cancelled => 4,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => OperationState::Created,
            1 => OperationState::Dispatched,
            2 => OperationState::Succeeded,
            3 => OperationState::Failed,
            _ => OperationState::Cancelled,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OperationState::Succeeded | OperationState::Failed | OperationState::Cancelled
        )
    }
}

/// A cancellable request handle
pub trait ProviderOperation: Send + Sync {
    /// Stop the request. No completion fires after this returns unless one
    /// already has. Safe to call repeatedly.
    fn cancel(&self);

    fn state(&self) -> OperationState;

    fn is_cancelled(&self) -> bool {
        self.state() == OperationState::Cancelled
    }

    fn is_finished(&self) -> bool {
        self.state().is_terminal()
    }
}

#[derive(Debug)]
pub(crate) struct OperationShared {
    state: AtomicU8,
}

impl OperationShared {
    fn new() -> Self {
        Self {
            state: AtomicU8::new(OperationState::Created.as_u8()),
        }
    }

    fn state(&self) -> OperationState {
        OperationState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn transition(&self, from: OperationState, to: OperationState) -> bool {
        self.state
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// One in-flight API request
pub struct Operation {
    id: u64,
    action: String,
    shared: Arc<OperationShared>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Operation {
    pub(crate) fn new(action: impl Into<String>) -> Self {
        Self {
            id: NEXT_OPERATION_ID.fetch_add(1, Ordering::Relaxed),
            action: action.into(),
            shared: Arc::new(OperationShared::new()),
            task: Mutex::new(None),
        }
    }

    /// Process-unique id, handy for correlating log lines
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The API action this operation calls
    pub fn action(&self) -> &str {
        &self.action
    }

    pub(crate) fn shared(&self) -> Arc<OperationShared> {
        self.shared.clone()
    }

    pub(crate) fn mark_dispatched(&self) {
        self.shared
            .transition(OperationState::Created, OperationState::Dispatched);
    }

    /// Keep the task so `cancel` can abort it
    pub(crate) fn attach(&self, task: JoinHandle<()>) {
        if self.shared.state() == OperationState::Cancelled {
            task.abort();
            return;
        }
        if let Ok(mut guard) = self.task.lock() {
            *guard = Some(task);
        }
    }
}

impl ProviderOperation for Operation {
    fn cancel(&self) {
        let cancelled = self
            .shared
            .transition(OperationState::Dispatched, OperationState::Cancelled)
            || self
                .shared
                .transition(OperationState::Created, OperationState::Cancelled);

        if !cancelled {
            return;
        }

        if let Ok(mut guard) = self.task.lock() {
            if let Some(task) = guard.take() {
                task.abort();
            }
        }
        tracing::debug!(operation = self.id, action = %self.action, "operation cancelled");
    }

    fn state(&self) -> OperationState {
        self.shared.state()
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("state", &self.state())
            .finish()
    }
}

type Job = Box<dyn FnOnce() + Send + 'static>;

/// The single execution context completions are delivered on.
///
/// Cloning shares the same underlying queue.
#[derive(Clone)]
pub struct CallbackContext {
    sender: mpsc::UnboundedSender<Job>,
}

impl CallbackContext {
    /// Start a dedicated thread that runs completions in arrival order.
    ///
    /// The thread exits once every clone of the context has been dropped.
    pub fn spawn() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

        let spawned = std::thread::Builder::new()
            .name(CALLBACK_THREAD_NAME.to_string())
            .spawn(move || {
                while let Some(job) = receiver.blocking_recv() {
                    job();
                }
            });

        if let Err(e) = spawned {
            // deliver() falls back to running jobs inline once the receiver is gone
            log::error!("Failed to start callback thread: {}", e);
        }

        Self { sender }
    }

    /// A context whose completions run wherever the caller drains the
    /// returned [`CallbackQueue`], e.g. inside an application's main loop.
    pub fn manual() -> (Self, CallbackQueue) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, CallbackQueue { receiver })
    }

    /// Queue a job. If the context is gone the job runs on the calling
    /// thread, so a completion is never lost.
    pub(crate) fn deliver(&self, job: Job) {
        if let Err(mpsc::error::SendError(job)) = self.sender.send(job) {
            log::warn!("Callback context closed; running completion inline");
            job();
        }
    }

    /// Hand `result` to `completion` on this context, unless the operation
    /// was cancelled first.
    pub(crate) fn complete<T, F>(&self, shared: Arc<OperationShared>, result: MphResult<T>, completion: F)
    where
        T: Send + 'static,
        F: FnOnce(MphResult<T>) + Send + 'static,
    {
        self.deliver(Box::new(move || {
            let terminal = if result.is_ok() {
                OperationState::Succeeded
            } else {
                OperationState::Failed
            };
            if shared.transition(OperationState::Dispatched, terminal) {
                completion(result);
            }
        }));
    }
}

/// Owns a completion while its request is in flight.
///
/// If the guard is dropped without [`CompletionGuard::finish`] (the task was
/// aborted, or its runtime shut down before or during the request), the
/// completion still receives a `NoRuntime` transport error. A cancelled
/// operation stays silent because `complete` loses the state race.
pub(crate) struct CompletionGuard<T, F>
where
    T: Send + 'static,
    F: FnOnce(MphResult<T>) + Send + 'static,
{
    pending: Option<(CallbackContext, Arc<OperationShared>, F)>,
    _result: PhantomData<fn() -> T>,
}

impl<T, F> CompletionGuard<T, F>
where
    T: Send + 'static,
    F: FnOnce(MphResult<T>) + Send + 'static,
{
    pub(crate) fn new(context: CallbackContext, shared: Arc<OperationShared>, completion: F) -> Self {
        Self {
            pending: Some((context, shared, completion)),
            _result: PhantomData,
        }
    }

    pub(crate) fn finish(mut self, result: MphResult<T>) {
        if let Some((context, shared, completion)) = self.pending.take() {
            context.complete(shared, result, completion);
        }
    }
}

impl<T, F> Drop for CompletionGuard<T, F>
where
    T: Send + 'static,
    F: FnOnce(MphResult<T>) + Send + 'static,
{
    fn drop(&mut self) {
        if let Some((context, shared, completion)) = self.pending.take() {
            let error = transport_error!(
                TransportErrorKind::NoRuntime,
                "runtime shut down before the request finished"
            );
            context.complete(shared, Err(error), completion);
        }
    }
}

impl fmt::Debug for CallbackContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackContext")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

/// Receiving half of [`CallbackContext::manual`]
pub struct CallbackQueue {
    receiver: mpsc::UnboundedReceiver<Job>,
}

impl CallbackQueue {
    /// Run every completion queued so far without waiting. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Wait for the next completion and run it. Returns false once every
    /// context sender is gone.
    pub async fn run_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Blocking variant of [`CallbackQueue::run_next`]; must not be called
    /// from inside an async runtime.
    pub fn blocking_run_next(&mut self) -> bool {
        match self.receiver.blocking_recv() {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }
}
