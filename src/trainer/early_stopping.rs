use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::error::ConsError;

/// Direction in which the monitored metric is expected to improve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Inferred from the metric name: accuracies are maximized, everything else minimized.
    Auto,
    Min,
    Max,
}

/// Policy which halts training once the monitored metric has not improved for
/// `patience` epochs in a row.
///
/// The policy itself is only configuration. Whatever drives training can call
/// [watch](self::EarlyStopping::watch) to get a [StopWatch](self::StopWatch) which
/// applies it epoch by epoch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EarlyStoppingBuilder")]
pub struct EarlyStopping {
    monitor: String,
    mode: Mode,
    patience: usize,
    verbose: bool,
    min_delta: f32,
}

impl EarlyStopping {
    pub fn builder() -> EarlyStoppingBuilder {
        Default::default()
    }

    pub fn monitor(&self) -> &str {
        &self.monitor
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn patience(&self) -> usize {
        self.patience
    }
    pub fn verbose(&self) -> bool {
        self.verbose
    }
    pub fn min_delta(&self) -> f32 {
        self.min_delta
    }

    /// The mode actually used for comparisons, never `Mode::Auto`.
    pub fn resolved_mode(&self) -> Mode {
        match self.mode {
            Mode::Auto if self.monitor.contains("acc") || self.monitor.starts_with("fmeasure") => {
                Mode::Max
            }
            Mode::Auto => Mode::Min,
            mode => mode,
        }
    }

    /// Starts tracking a fresh training run.
    pub fn watch(&self) -> StopWatch {
        StopWatch {
            mode: self.resolved_mode(),
            policy: self.clone(),
            best: None,
            best_epoch: None,
            wait: 0,
            stopped_epoch: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EarlyStoppingBuilder {
    monitor: String,
    mode: Mode,
    patience: usize,
    verbose: bool,
    min_delta: f32,
}

impl Default for EarlyStoppingBuilder {
    fn default() -> Self {
        Self {
            monitor: "val_loss".to_owned(),
            mode: Mode::Auto,
            patience: 10,
            verbose: false,
            min_delta: 0.,
        }
    }
}

impl EarlyStoppingBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn monitor<S: Into<String>>(mut self, monitor: S) -> Self {
        self.monitor = monitor.into();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Smallest change that counts as an improvement. The sign is ignored.
    pub fn min_delta(mut self, min_delta: f32) -> Self {
        self.min_delta = min_delta.abs();
        self
    }

    pub fn build(self) -> Result<EarlyStopping, ConsError> {
        if self.patience == 0 {
            return Err(ConsError::Patience);
        }
        Ok(EarlyStopping {
            monitor: self.monitor,
            mode: self.mode,
            patience: self.patience,
            verbose: self.verbose,
            min_delta: self.min_delta.abs(),
        })
    }
}

impl TryFrom<EarlyStoppingBuilder> for EarlyStopping {
    type Error = ConsError;

    fn try_from(builder: EarlyStoppingBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Stop,
}

/// Applies an [EarlyStopping](self::EarlyStopping) policy to the metric values
/// reported after each epoch.
#[derive(Clone, Debug)]
pub struct StopWatch {
    policy: EarlyStopping,
    mode: Mode,
    best: Option<f32>,
    best_epoch: Option<usize>,
    wait: usize,
    stopped_epoch: Option<usize>,
}

impl StopWatch {
    /// Records the metric value of `epoch`. Once `Stop` is returned every
    /// further call returns `Stop` as well.
    pub fn observe(&mut self, epoch: usize, value: f32) -> Decision {
        if self.stopped_epoch.is_some() {
            return Decision::Stop;
        }

        if self.improves(value) {
            self.best = Some(value);
            self.best_epoch = Some(epoch);
            self.wait = 0;
            return Decision::Continue;
        }

        self.wait += 1;
        // the first epoch never stops training
        if self.wait < self.policy.patience || epoch == 0 {
            return Decision::Continue;
        }

        self.stopped_epoch = Some(epoch);
        if self.policy.verbose {
            log::info!(
                "Epoch {}: early stopping, {} did not improve for {} epochs",
                epoch + 1,
                self.policy.monitor,
                self.wait
            );
        }
        Decision::Stop
    }

    // NaN never improves
    fn improves(&self, value: f32) -> bool {
        let delta = self.policy.min_delta;
        match (self.best, self.mode) {
            (None, _) => !value.is_nan(),
            (Some(best), Mode::Max) => value > best + delta,
            (Some(best), _) => value < best - delta,
        }
    }

    pub fn best(&self) -> Option<f32> {
        self.best
    }
    pub fn best_epoch(&self) -> Option<usize> {
        self.best_epoch
    }
    pub fn stopped_epoch(&self) -> Option<usize> {
        self.stopped_epoch
    }
    pub fn wait(&self) -> usize {
        self.wait
    }
    pub fn policy(&self) -> &EarlyStopping {
        &self.policy
    }
}
