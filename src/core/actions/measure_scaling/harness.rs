use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::core::actions::measure_scaling::errors::HarnessError;
use crate::core::actions::measure_scaling::ports::workload::Workload;
use crate::core::actions::measure_scaling::report::{
    ConfigurationFailure, FailureStage, ScalingEntry, ScalingProtocol, ScalingReport,
};
use crate::core::actions::measure_scaling::scaling_config::ScalingConfig;
use crate::core::actions::measure_scaling::scheduler_workload::SchedulerWorkload;
use crate::core::actions::measure_scaling::statistics::Statistics;
use crate::core::actions::schedule::errors::ScheduleError;
use crate::core::actions::schedule::scheduler::{Scheduler, mode_label};
use crate::core::data::execution_mode::{ExecutionMode, PartitionPolicy};
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::viewport::Viewport;

/// Runs strong and weak scaling sweeps against a [`Workload`].
///
/// The configuration is validated on construction, so a harness that exists
/// never refuses a sweep. Failures during a sweep are recorded in the report
/// and the sweep moves on to the next worker count.
#[derive(Debug, Clone)]
pub struct ScalingHarness<W: Workload> {
    workload: W,
    worker_counts: Vec<NonZeroUsize>,
    repetitions: usize,
    baseline_repetitions: usize,
}

impl<W: Workload> ScalingHarness<W> {
    pub fn new(workload: W, config: &ScalingConfig) -> Result<Self, HarnessError> {
        let worker_counts = config.validated_worker_counts()?;

        Ok(Self {
            workload,
            worker_counts,
            repetitions: config.repetitions,
            baseline_repetitions: config.baseline_repetitions,
        })
    }

    /// Times `repetitions` runs with identical inputs. The first failing run
    /// aborts the measurement.
    pub fn measure(
        &self,
        viewport: &Viewport,
        cap: IterationCap,
        workers: Option<NonZeroUsize>,
        repetitions: usize,
    ) -> Result<Vec<Duration>, ScheduleError> {
        (0..repetitions)
            .map(|repetition| {
                let elapsed = self.workload.run(viewport, cap, workers)?;
                debug!(
                    repetition,
                    mode = mode_label(workers),
                    workers = ?workers.map(NonZeroUsize::get),
                    elapsed_secs = elapsed.as_secs_f64(),
                    "repetition finished"
                );
                Ok(elapsed)
            })
            .collect()
    }

    /// Fixed problem size. The serial baseline is measured once and shared by
    /// every worker count.
    #[tracing::instrument(skip_all, fields(width = viewport.width(), height = viewport.height()))]
    pub fn strong_scaling(&self, viewport: &Viewport, cap: IterationCap) -> ScalingReport {
        let mut failures = Vec::new();

        let serial_mean_secs = self
            .baseline(viewport, cap, None, &mut failures)
            .map(|stats| {
                info!(serial_mean_secs = stats.mean, "serial baseline measured");
                stats.mean
            });

        let entries = self
            .worker_counts
            .iter()
            .filter_map(|&workers| {
                self.parallel_entry(viewport, cap, workers, serial_mean_secs, &mut failures)
            })
            .collect();

        ScalingReport {
            protocol: ScalingProtocol::Strong,
            max_iterations: cap.get(),
            base_width: viewport.width(),
            base_height: viewport.height(),
            serial_mean_secs,
            entries,
            failures,
        }
    }

    /// Problem size grows with the worker count: `N` workers get `N` times
    /// the rows of `base`, compared against a serial run of the same size.
    ///
    /// Every scaled viewport is built before anything runs, so an
    /// unrepresentable size refuses the whole sweep.
    #[tracing::instrument(skip_all, fields(width = base.width(), height = base.height()))]
    pub fn weak_scaling(
        &self,
        base: &Viewport,
        cap: IterationCap,
    ) -> Result<ScalingReport, HarnessError> {
        let scaled = self
            .worker_counts
            .iter()
            .map(|&workers| {
                let factor = u32::try_from(workers.get()).unwrap_or(u32::MAX);
                base.scale_height(factor)
                    .map(|viewport| (workers, viewport))
                    .map_err(|source| HarnessError::Viewport {
                        workers: workers.get(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut failures = Vec::new();
        let mut entries = Vec::with_capacity(scaled.len());

        for (workers, viewport) in scaled {
            let baseline = self
                .baseline(&viewport, cap, Some(workers), &mut failures)
                .map(|stats| stats.mean);

            entries.extend(self.parallel_entry(&viewport, cap, workers, baseline, &mut failures));
        }

        Ok(ScalingReport {
            protocol: ScalingProtocol::Weak,
            max_iterations: cap.get(),
            base_width: base.width(),
            base_height: base.height(),
            serial_mean_secs: None,
            entries,
            failures,
        })
    }

    /// Serial runs of `viewport`. `label` is the worker count the baseline
    /// belongs to, if any.
    fn baseline(
        &self,
        viewport: &Viewport,
        cap: IterationCap,
        label: Option<NonZeroUsize>,
        failures: &mut Vec<ConfigurationFailure>,
    ) -> Option<Statistics> {
        match self.measure(viewport, cap, None, self.baseline_repetitions) {
            Ok(samples) => Statistics::from_samples(&samples),
            Err(error) => {
                warn!(
                    width = viewport.width(),
                    height = viewport.height(),
                    %error,
                    "serial baseline failed"
                );
                failures.push(ConfigurationFailure {
                    worker_count: label.map(NonZeroUsize::get),
                    width: viewport.width(),
                    height: viewport.height(),
                    stage: FailureStage::Baseline,
                    error,
                });
                None
            }
        }
    }

    fn parallel_entry(
        &self,
        viewport: &Viewport,
        cap: IterationCap,
        workers: NonZeroUsize,
        baseline_secs: Option<f64>,
        failures: &mut Vec<ConfigurationFailure>,
    ) -> Option<ScalingEntry> {
        match self.measure(viewport, cap, Some(workers), self.repetitions) {
            Ok(samples) => {
                let stats = Statistics::from_samples(&samples)?;
                let entry = ScalingEntry::new(
                    workers.get(),
                    viewport.width(),
                    viewport.height(),
                    stats,
                    baseline_secs,
                );
                info!(
                    workers = entry.worker_count,
                    width = entry.width,
                    height = entry.height,
                    mean_secs = entry.mean_secs,
                    std_dev_secs = entry.std_dev_secs,
                    speedup = entry.speedup,
                    "configuration measured"
                );
                Some(entry)
            }
            Err(error) => {
                warn!(
                    workers = workers.get(),
                    width = viewport.width(),
                    height = viewport.height(),
                    %error,
                    "configuration failed, continuing with the next one"
                );
                failures.push(ConfigurationFailure {
                    worker_count: Some(workers.get()),
                    width: viewport.width(),
                    height: viewport.height(),
                    stage: FailureStage::Parallel,
                    error,
                });
                None
            }
        }
    }
}

/// Elapsed times of `repetitions` computations of `viewport`.
pub fn measure(
    cap: IterationCap,
    viewport: &Viewport,
    mode: ExecutionMode,
    repetitions: usize,
) -> Result<Vec<Duration>, HarnessError> {
    if repetitions == 0 {
        return Err(HarnessError::ZeroRepetitions);
    }

    let scheduler = Scheduler::new(mode, PartitionPolicy::default());

    (0..repetitions)
        .map(|_| {
            scheduler
                .run(viewport, cap)
                .map(|run| run.elapsed)
                .map_err(HarnessError::from)
        })
        .collect()
}

pub fn strong_scaling(
    cap: IterationCap,
    base_viewport: &Viewport,
    worker_counts: &[usize],
    repetitions: usize,
) -> Result<ScalingReport, HarnessError> {
    let config = ScalingConfig::with_worker_counts(worker_counts.to_vec(), repetitions);
    let harness = ScalingHarness::new(SchedulerWorkload::default(), &config)?;

    Ok(harness.strong_scaling(base_viewport, cap))
}

pub fn weak_scaling(
    cap: IterationCap,
    base_viewport: &Viewport,
    worker_counts: &[usize],
    repetitions: usize,
) -> Result<ScalingReport, HarnessError> {
    let config = ScalingConfig::with_worker_counts(worker_counts.to_vec(), repetitions);
    let harness = ScalingHarness::new(SchedulerWorkload::default(), &config)?;

    harness.weak_scaling(base_viewport, cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const NANOS_PER_PIXEL: u64 = 1_000;

    /// Zero-overhead workload: work is split perfectly between workers.
    struct PerfectlyParallel;

    impl Workload for PerfectlyParallel {
        fn run(
            &self,
            viewport: &Viewport,
            _: IterationCap,
            workers: Option<NonZeroUsize>,
        ) -> Result<Duration, ScheduleError> {
            let n = workers.map_or(1, NonZeroUsize::get) as u64;
            Ok(Duration::from_nanos(viewport.pixel_count() * NANOS_PER_PIXEL / n))
        }
    }

    /// A program whose serial fraction is exactly `serial_fraction`.
    struct AmdahlWorkload {
        serial_fraction: f64,
    }

    impl Workload for AmdahlWorkload {
        fn run(
            &self,
            viewport: &Viewport,
            _: IterationCap,
            workers: Option<NonZeroUsize>,
        ) -> Result<Duration, ScheduleError> {
            let n = workers.map_or(1, NonZeroUsize::get) as f64;
            let total = viewport.pixel_count() as f64 * 1e-3;
            let parallel_fraction = 1.0 - self.serial_fraction;
            Ok(Duration::from_secs_f64(
                total * (self.serial_fraction + parallel_fraction / n),
            ))
        }
    }

    /// Fails every run with `failing_workers`, or every serial run when
    /// `failing_workers` is `None`.
    struct FailingWorkload {
        failing_workers: Option<usize>,
        calls: RefCell<Vec<Option<usize>>>,
    }

    impl FailingWorkload {
        fn new(failing_workers: Option<usize>) -> Self {
            Self {
                failing_workers,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Workload for FailingWorkload {
        fn run(
            &self,
            _: &Viewport,
            _: IterationCap,
            workers: Option<NonZeroUsize>,
        ) -> Result<Duration, ScheduleError> {
            let workers = workers.map(NonZeroUsize::get);
            self.calls.borrow_mut().push(workers);

            if workers == self.failing_workers {
                return Err(ScheduleError::WorkerFailure {
                    row: 3,
                    message: "synthetic failure".to_string(),
                });
            }
            Ok(Duration::from_millis(10))
        }
    }

    fn base_viewport() -> Viewport {
        Viewport::new(-2.5, 1.0, -1.0, 1.0, 40, 25).unwrap()
    }

    fn cap() -> IterationCap {
        IterationCap::new(50).unwrap()
    }

    fn config(worker_counts: &[usize], repetitions: usize) -> ScalingConfig {
        ScalingConfig::with_worker_counts(worker_counts.to_vec(), repetitions)
    }

    #[test]
    fn test_weak_scaling_zero_overhead_speedup_equals_worker_count() {
        let harness = ScalingHarness::new(PerfectlyParallel, &config(&[1, 2, 4, 8], 3)).unwrap();
        let report = harness.weak_scaling(&base_viewport(), cap()).unwrap();

        assert_eq!(report.protocol, ScalingProtocol::Weak);
        assert!(report.is_complete());
        for entry in &report.entries {
            let speedup = entry.speedup.unwrap();
            assert!(
                (speedup - entry.ideal_speedup).abs() < 1e-9,
                "{} workers gave {speedup}",
                entry.worker_count
            );
            assert_eq!(entry.width, 40);
            assert_eq!(entry.height, 25 * entry.worker_count as u32);
        }
    }

    #[test]
    fn test_weak_scaling_keeps_per_worker_work_constant() {
        let harness = ScalingHarness::new(PerfectlyParallel, &config(&[1, 2, 4], 2)).unwrap();
        let report = harness.weak_scaling(&base_viewport(), cap()).unwrap();
        let means: Vec<f64> = report.entries.iter().map(|e| e.mean_secs).collect();

        assert!(means.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
    }

    #[test]
    fn test_strong_scaling_speedups_follow_the_workload() {
        let workload = AmdahlWorkload {
            serial_fraction: 0.25,
        };
        let harness = ScalingHarness::new(workload, &config(&[1, 2, 4, 8], 2)).unwrap();
        let report = harness.strong_scaling(&base_viewport(), cap());

        assert_eq!(report.protocol, ScalingProtocol::Strong);
        assert_eq!(report.entries.len(), 4);
        assert!((report.serial_mean_secs.unwrap() - 1.0).abs() < 1e-6);

        // T(N) = S + P / N with T(1) = 1
        let at_four = report.entry(4).unwrap().speedup.unwrap();
        assert!((at_four - 1.0 / (0.25 + 0.75 / 4.0)).abs() < 1e-6);

        // largest worker count is the reference: (T(8) - 1 / 8) / T(8)
        let t8 = 0.25 + 0.75 / 8.0;
        let model = report.fit_model(None).unwrap();
        assert!((model.serial_fraction() - (t8 - 0.125) / t8).abs() < 1e-6);
    }

    #[test]
    fn test_strong_scaling_baseline_is_measured_once() {
        let workload = FailingWorkload::new(Some(99));
        let harness = ScalingHarness::new(workload, &config(&[1, 2, 4], 2)).unwrap();
        harness.strong_scaling(&base_viewport(), cap());

        let calls = harness.workload.calls.borrow();
        assert_eq!(calls.iter().filter(|c| c.is_none()).count(), 1);
        assert_eq!(calls.len(), 1 + 3 * 2);
    }

    #[test]
    fn test_repeated_worker_count_gives_one_entry() {
        let workload = FailingWorkload::new(Some(99));
        let harness = ScalingHarness::new(workload, &config(&[2, 2, 1], 1)).unwrap();
        let report = harness.strong_scaling(&base_viewport(), cap());
        let counts: Vec<usize> = report.entries.iter().map(|e| e.worker_count).collect();

        assert_eq!(counts, vec![1, 2]);
        assert_eq!(harness.workload.calls.borrow().len(), 1 + 2);
    }

    #[test]
    fn test_failed_configuration_is_recorded_and_sweep_continues() {
        let workload = FailingWorkload::new(Some(2));
        let harness = ScalingHarness::new(workload, &config(&[1, 2, 4], 2)).unwrap();
        let report = harness.strong_scaling(&base_viewport(), cap());

        let measured: Vec<usize> = report.entries.iter().map(|e| e.worker_count).collect();
        assert_eq!(measured, vec![1, 4]);
        assert_eq!(report.failures.len(), 1);

        let failure = &report.failures[0];
        assert_eq!(failure.worker_count, Some(2));
        assert_eq!(failure.stage, FailureStage::Parallel);
        assert_eq!((failure.width, failure.height), (40, 25));
        assert!(matches!(failure.error, ScheduleError::WorkerFailure { row: 3, .. }));
    }

    #[test]
    fn test_failed_strong_baseline_leaves_speedups_absent() {
        let workload = FailingWorkload::new(None);
        let harness = ScalingHarness::new(workload, &config(&[1, 2], 1)).unwrap();
        let report = harness.strong_scaling(&base_viewport(), cap());

        assert_eq!(report.serial_mean_secs, None);
        assert_eq!(report.entries.len(), 2);
        assert!(report.entries.iter().all(|e| e.speedup.is_none()));
        assert_eq!(report.failures[0].stage, FailureStage::Baseline);
        assert_eq!(report.failures[0].worker_count, None);
    }

    #[test]
    fn test_failed_weak_baseline_keeps_parallel_statistics() {
        let workload = FailingWorkload::new(None);
        let harness = ScalingHarness::new(workload, &config(&[1, 2], 1)).unwrap();
        let report = harness.weak_scaling(&base_viewport(), cap()).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[1].worker_count, Some(2));
        assert_eq!(report.failures[1].height, 50);
    }

    #[test]
    fn test_invalid_configuration_is_refused() {
        assert!(matches!(
            ScalingHarness::new(PerfectlyParallel, &config(&[1, 0], 1)),
            Err(HarnessError::ZeroWorkerCount { index: 1 })
        ));
        assert!(matches!(
            ScalingHarness::new(PerfectlyParallel, &config(&[1, 2], 0)),
            Err(HarnessError::ZeroRepetitions)
        ));
        assert!(matches!(
            ScalingHarness::new(PerfectlyParallel, &config(&[], 1)),
            Err(HarnessError::NoWorkerCounts)
        ));
    }

    #[test]
    fn test_unrepresentable_weak_size_refuses_sweep() {
        let tall = Viewport::new(-2.5, 1.0, -1.0, 1.0, 1, u32::MAX / 2 + 1).unwrap();
        let harness = ScalingHarness::new(FailingWorkload::new(None), &config(&[1, 2], 1)).unwrap();

        assert!(matches!(
            harness.weak_scaling(&tall, cap()),
            Err(HarnessError::Viewport { workers: 2, .. })
        ));
        assert!(harness.workload.calls.borrow().is_empty());
    }

    #[test]
    fn test_measure_real_computation() {
        let samples = measure(cap(), &base_viewport(), ExecutionMode::Serial, 3).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(
            measure(cap(), &base_viewport(), ExecutionMode::Serial, 0),
            Err(HarnessError::ZeroRepetitions)
        );
    }

    #[test]
    fn test_real_strong_and_weak_sweeps() {
        let strong = strong_scaling(cap(), &base_viewport(), &[1, 2], 1).unwrap();
        let weak = weak_scaling(cap(), &base_viewport(), &[1, 2], 1).unwrap();

        assert!(strong.is_complete());
        assert_eq!(strong.entries.len(), 2);
        assert!(weak.is_complete());
        assert_eq!(weak.entry(2).unwrap().height, 50);
        assert_eq!(
            strong_scaling(cap(), &base_viewport(), &[2, 0], 1),
            Err(HarnessError::ZeroWorkerCount { index: 1 })
        );
    }
}
