//! Options passed along with a network to whatever trains it.

pub mod early_stopping;

pub use early_stopping::{Decision, EarlyStopping, EarlyStoppingBuilder, Mode, StopWatch};

use serde::{Deserialize, Serialize};

/// A hook the training loop should apply while fitting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Callback {
    EarlyStopping(EarlyStopping),
}

impl From<EarlyStopping> for Callback {
    fn from(es: EarlyStopping) -> Self {
        Callback::EarlyStopping(es)
    }
}

/// Recognized training options. The default value requests nothing special.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingOptions {
    #[serde(default)]
    pub callbacks: Vec<Callback>,
}

impl TrainingOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a callback.
    pub fn callback<C: Into<Callback>>(mut self, callback: C) -> Self {
        self.callbacks.push(callback.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// The first early stopping policy, if any was requested.
    pub fn early_stopping(&self) -> Option<&EarlyStopping> {
        self.callbacks.iter().find_map(|c| match c {
            Callback::EarlyStopping(es) => Some(es),
        })
    }
}
