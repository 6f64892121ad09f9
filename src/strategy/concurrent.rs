//! Concurrent execution strategy
//!
//! Every client runs as its own task on a multi-threaded tokio runtime, all
//! sharing one `Arc<Bank>`.
//!
//! # Architecture
//!
//! ```text
//! ConcurrentStrategy
//!     ├── ConcurrencyConfig (worker_threads)
//!     ├── ProfileGenerator  (all profiles drawn before launch)
//!     └── tokio runtime
//!         └── one task per Client ──► Arc<Bank> (single mutex)
//! ```
//!
//! Tasks are scheduled across the worker pool in parallel. While a client
//! waits between approval and repayment it only holds a timer, never the bank
//! lock, so other clients keep going. The run ends once every task has joined.

use crate::core::{Bank, Client, EventLog, ProfileGenerator, RandomSource};
use crate::io::summary_line;
use crate::strategy::{ExecutionStrategy, StrategyType, MAIN_LABEL};
use crate::types::{ClientLabel, ClientOutcome, RunReport, SimulationConfig, SimulationError};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Configuration of the worker pool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConcurrencyConfig {
    /// Number of tokio worker threads
    pub worker_threads: usize,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus::get(),
        }
    }
}

impl ConcurrencyConfig {
    /// Create a config with a custom worker count
    ///
    /// Zero falls back to the default with a warning.
    pub fn new(worker_threads: usize) -> Self {
        let default = Self::default();

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                "Invalid worker_threads ({}), using default ({})",
                worker_threads,
                default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self { worker_threads }
    }
}

/// Concurrent execution strategy
///
/// All profiles are drawn up front, then every client is launched at once.
/// Which loans get approved when funds run low depends on scheduling and
/// differs between runs; the final balance always satisfies conservation.
#[derive(Debug, Clone)]
pub struct ConcurrentStrategy {
    config: ConcurrencyConfig,
}

impl ConcurrentStrategy {
    pub fn new(config: ConcurrencyConfig) -> Self {
        Self { config }
    }
}

impl ExecutionStrategy for ConcurrentStrategy {
    fn strategy_type(&self) -> StrategyType {
        StrategyType::Concurrent
    }

    /// Run all clients in parallel against one bank
    ///
    /// 1. Builds a multi-threaded runtime with the configured worker count
    /// 2. Draws every client profile
    /// 3. Spawns one task per client and starts the clock
    /// 4. Waits for every task, then stops the clock
    /// 5. Logs the summary line and returns the report
    ///
    /// # Errors
    ///
    /// Returns `RuntimeBuild` if the runtime cannot start and `TaskFailed` if a
    /// client task panicked.
    fn run(
        &self,
        config: &SimulationConfig,
        source: &mut dyn RandomSource,
        log: Arc<dyn EventLog>,
    ) -> Result<RunReport, SimulationError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .thread_name("bank-worker")
            .enable_time()
            .build()
            .map_err(|e| SimulationError::runtime_build(e.to_string()))?;

        let generator = ProfileGenerator::new(config);
        let clients: Vec<Client> = (1..=config.num_clients)
            .map(|id| Client::new(generator.draw(id, &mut *source)))
            .collect();
        let ids: Vec<u32> = clients.iter().map(|c| c.profile().id).collect();

        let bank = Arc::new(Bank::new(config.initial_funds, Arc::clone(&log)));

        tracing::debug!(
            clients = clients.len(),
            workers = self.config.worker_threads,
            "starting concurrent run"
        );

        let (joined, duration) = runtime.block_on(async {
            let start = Instant::now();

            let tasks: Vec<_> = clients
                .into_iter()
                .map(|client| {
                    let bank = Arc::clone(&bank);
                    let label = ClientLabel(client.profile().id);
                    let span = tracing::info_span!("client", label = %label);
                    tokio::spawn(async move { client.run(&bank).await }.instrument(span))
                })
                .collect();

            let joined = join_all(tasks).await;
            (joined, start.elapsed())
        });

        let mut outcomes: Vec<ClientOutcome> = Vec::with_capacity(joined.len());
        for (id, result) in ids.into_iter().zip(joined) {
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    tracing::error!(client = id, error = %e, "client task failed");
                    return Err(SimulationError::task_failed(id, e.to_string()));
                }
            }
        }

        let report = RunReport {
            label: StrategyType::Concurrent.label(),
            initial_funds: config.initial_funds,
            final_balance: bank.balance(),
            duration,
            outcomes,
            journal: bank.journal(),
        };
        log.record(MAIN_LABEL, &summary_line(&report));

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RngSource, ScriptedSource};
    use crate::io::MemoryLog;
    use crate::types::Amount;
    use std::fmt;
    use std::sync::Mutex;
    use std::time::Duration;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    /// Collects the `label` field of every `client` span
    #[derive(Clone, Default)]
    struct ClientSpans(Arc<Mutex<Vec<String>>>);

    struct LabelVisitor(Option<String>);

    impl Visit for LabelVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "label" {
                self.0 = Some(format!("{:?}", value));
            }
        }
    }

    impl<S: Subscriber> Layer<S> for ClientSpans {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            if attrs.metadata().name() != "client" {
                return;
            }
            let mut visitor = LabelVisitor(None);
            attrs.record(&mut visitor);
            if let Some(label) = visitor.0 {
                self.0.lock().unwrap().push(label);
            }
        }
    }

    fn fast_config(funds: i64, clients: u32) -> SimulationConfig {
        SimulationConfig::new(Amount::from(funds), clients)
            .unwrap()
            .with_delay_range(Duration::from_millis(1), Duration::from_millis(5))
            .unwrap()
    }

    #[test]
    fn test_default_config_uses_cpu_count() {
        assert_eq!(ConcurrencyConfig::default().worker_threads, num_cpus::get());
    }

    #[test]
    fn test_zero_workers_falls_back_to_default() {
        assert_eq!(ConcurrencyConfig::new(0), ConcurrencyConfig::default());
        assert_eq!(ConcurrencyConfig::new(3).worker_threads, 3);
    }

    #[test]
    fn test_each_task_runs_in_a_labelled_span() {
        let spans = ClientSpans::default();
        let subscriber = tracing_subscriber::registry().with(spans.clone());
        let config = fast_config(100_000, 3);
        let mut source = RngSource::seeded(5);
        let strategy = ConcurrentStrategy::new(ConcurrencyConfig::new(2));

        let report = tracing::subscriber::with_default(subscriber, || {
            strategy.run(&config, &mut source, Arc::new(MemoryLog::new()))
        })
        .unwrap();

        let mut labels = spans.0.lock().unwrap().clone();
        labels.sort();
        assert_eq!(labels, vec!["Client-1", "Client-2", "Client-3"]);
        assert!(report.is_conserved());
    }

    #[test]
    fn test_single_client_full_balance() {
        let config = fast_config(10_000, 1);
        let mut source = ScriptedSource::new([10_000.0, 0.001]);
        let log = Arc::new(MemoryLog::new());
        let strategy = ConcurrentStrategy::new(ConcurrencyConfig::new(2));

        let report = strategy.run(&config, &mut source, log.clone()).unwrap();

        assert_eq!(report.final_balance, Amount::from(10_500));
        assert_eq!(report.approved_count(), 1);
        assert!(report.is_conserved());
        assert_eq!(
            log.messages_for(MAIN_LABEL),
            vec![summary_line(&report)]
        );
    }

    #[test]
    fn test_all_clients_finish_and_conserve() {
        let config = fast_config(100_000, 10);
        let mut source = RngSource::seeded(5);
        let strategy = ConcurrentStrategy::new(ConcurrencyConfig::default());

        let report = strategy
            .run(&config, &mut source, Arc::new(MemoryLog::new()))
            .unwrap();

        assert_eq!(report.outcomes.len(), 10);
        let ids: Vec<u32> = report.outcomes.iter().map(|o| o.profile.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert!(report.is_conserved());
        assert!(report.never_negative());
        assert_eq!(report.label, "Concurrent");
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConcurrentStrategy>();
    }
}
