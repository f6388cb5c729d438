use crate::algorithm::AlgorithmKind;
use crate::graph::Graph;
use crate::sink::{format_route, RouteSink};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Configuration for the route calculation worker pool
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Number of worker threads; fixed, independent of request volume
    pub workers: usize,
    /// How long shutdown waits for queued work before cancelling the rest
    pub drain_timeout: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            drain_timeout: Duration::from_secs(60),
        }
    }
}

/// One queued route computation
#[derive(Debug, Clone, Copy)]
struct RouteRequest {
    source: usize,
    destination: usize,
    algorithm: AlgorithmKind,
}

/// Fixed-size worker pool that executes route requests against a shared
/// read-only network and forwards completed routes to the sink.
///
/// Submission is fire-and-forget: it enqueues the request and returns without
/// waiting for the computation. Requests may complete in any order. A failure
/// inside one task (negative cycle, sink write error) is logged and never
/// affects sibling tasks or the pool itself.
///
/// Shutdown is two-phase: stop accepting submissions, then wait up to the
/// configured drain timeout for queued and in-flight work. If the timeout
/// elapses, tasks still queued are dropped without execution. Either way the
/// sink is closed exactly once afterwards, so completed writes are never
/// lost. The executor owns the sink for its whole lifecycle.
pub struct RouteCalculationExecutor {
    sender: Mutex<Option<Sender<RouteRequest>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    done: Mutex<Receiver<()>>,
    worker_count: usize,
    sink: Arc<dyn RouteSink>,
    cancelled: Arc<AtomicBool>,
    dropped: Arc<AtomicUsize>,
    drain_timeout: Duration,
}

impl RouteCalculationExecutor {
    /// Spawns the worker pool over a shared network and sink.
    ///
    /// Fails only if the operating system refuses to spawn a worker thread.
    pub fn new<W, G>(
        graph: Arc<G>,
        sink: Arc<dyn RouteSink>,
        config: ExecutorConfig,
    ) -> Result<Self>
    where
        W: Float + Zero + Debug + Copy + Ord + Send + Sync + 'static,
        G: Graph<W> + Send + Sync + 'static,
    {
        let worker_count = config.workers.max(1);
        let (sender, receiver) = mpsc::channel();
        let (done_tx, done) = mpsc::channel();
        let queue = Arc::new(Mutex::new(receiver));
        let cancelled = Arc::new(AtomicBool::new(false));
        let dropped = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::with_capacity(worker_count);
        for id in 0..worker_count {
            let queue = Arc::clone(&queue);
            let graph = Arc::clone(&graph);
            let sink = Arc::clone(&sink);
            let cancelled = Arc::clone(&cancelled);
            let dropped = Arc::clone(&dropped);
            let done_tx = done_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("route-worker-{id}"))
                .spawn(move || {
                    worker_loop::<W, G>(queue, graph, sink, cancelled, dropped);
                    let _ = done_tx.send(());
                })?;
            handles.push(handle);
        }

        Ok(Self {
            sender: Mutex::new(Some(sender)),
            workers: Mutex::new(handles),
            done: Mutex::new(done),
            worker_count,
            sink,
            cancelled,
            dropped,
            drain_timeout: config.drain_timeout,
        })
    }

    /// Enqueues a route request for execution by the pool.
    ///
    /// Never blocks on computation; results surface through logging and the
    /// sink. Returns [`Error::ExecutorClosed`] once shutdown has begun.
    pub fn submit(
        &self,
        source: usize,
        destination: usize,
        algorithm: AlgorithmKind,
    ) -> Result<()> {
        let guard = self.sender.lock().unwrap();
        match guard.as_ref() {
            Some(sender) => sender
                .send(RouteRequest {
                    source,
                    destination,
                    algorithm,
                })
                .map_err(|_| Error::ExecutorClosed {
                    origin: source,
                    destination,
                }),
            None => Err(Error::ExecutorClosed {
                origin: source,
                destination,
            }),
        }
    }

    /// Stops accepting submissions and drains the pool.
    ///
    /// Waits up to the configured drain timeout for queued and in-flight
    /// tasks, then cancels whatever is still queued and reports it as
    /// [`Error::ShutdownTimeout`]. The sink is closed exactly once on every
    /// path. Calling shutdown again is a no-op.
    pub fn shutdown(&self) -> Result<()> {
        // Phase one: refuse new submissions; dropping the sender lets idle
        // workers observe the disconnect once the queue runs dry.
        let sender = self.sender.lock().unwrap().take();
        if sender.is_none() {
            return Ok(());
        }
        drop(sender);

        // Phase two: bounded drain.
        let deadline = Instant::now() + self.drain_timeout;
        let mut timed_out = false;
        {
            let done = self.done.lock().unwrap();
            for _ in 0..self.worker_count {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if done.recv_timeout(remaining).is_err() {
                    timed_out = true;
                    break;
                }
            }
        }
        if timed_out {
            // Workers skip anything still queued; each finishes at most its
            // current task before the join below returns.
            self.cancelled.store(true, Ordering::SeqCst);
            log::warn!(
                "shutdown drain timed out after {:?}, cancelling queued tasks",
                self.drain_timeout
            );
        }
        for handle in self.workers.lock().unwrap().drain(..) {
            let _ = handle.join();
        }

        if let Err(e) = self.sink.close() {
            log::error!("failed to close route sink: {}", e);
        }

        if timed_out {
            return Err(Error::ShutdownTimeout {
                dropped: self.dropped.load(Ordering::SeqCst),
            });
        }
        Ok(())
    }
}

impl Drop for RouteCalculationExecutor {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::warn!("executor dropped with unfinished work: {}", e);
        }
    }
}

fn worker_loop<W, G>(
    queue: Arc<Mutex<Receiver<RouteRequest>>>,
    graph: Arc<G>,
    sink: Arc<dyn RouteSink>,
    cancelled: Arc<AtomicBool>,
    dropped: Arc<AtomicUsize>,
) where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    loop {
        let request = {
            let guard = match queue.lock() {
                Ok(guard) => guard,
                Err(_) => return,
            };
            guard.recv()
        };
        let request = match request {
            Ok(request) => request,
            // All senders gone and the queue is drained
            Err(_) => return,
        };
        if cancelled.load(Ordering::SeqCst) {
            dropped.fetch_add(1, Ordering::SeqCst);
            continue;
        }
        execute::<W, G>(graph.as_ref(), sink.as_ref(), request);
    }
}

fn execute<W, G>(graph: &G, sink: &dyn RouteSink, request: RouteRequest)
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let RouteRequest {
        source,
        destination,
        algorithm,
    } = request;
    match algorithm.calculate_route(graph, source, destination) {
        Ok(route) if route.is_empty() => {
            log::info!("no available route from {} to {}", source, destination);
        }
        Ok(route) => {
            log::info!(
                "route from {} to {} ({}): {}",
                source,
                destination,
                algorithm,
                format_route(&route)
            );
            if let Err(e) = sink.save_route(source, destination, &route) {
                log::error!(
                    "failed to persist route from {} to {}: {}",
                    source,
                    destination,
                    e
                );
            }
        }
        Err(e) => {
            log::warn!(
                "route calculation from {} to {} failed: {}",
                source,
                destination,
                e
            );
        }
    }
}
