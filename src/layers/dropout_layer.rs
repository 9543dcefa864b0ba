use crate::{
    a_funcs::Activation,
    error::ConsError,
    layers::{Layer, LayerBuilder, Shape},
};
use serde::{Deserialize, Serialize};

/// Randomly zeroes a fraction `rate` of its inputs while training.
/// Passes its input through unchanged and has no weights.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DropoutLayer {
    size: usize,
    rate: f32,
}

impl DropoutLayer {
    pub fn new(size: usize, rate: f32) -> Self {
        Self { size, rate }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }
}

impl Layer for DropoutLayer {
    fn input(&self) -> Shape {
        Shape::new(self.size)
    }

    fn output(&self) -> Shape {
        Shape::new(self.size)
    }

    fn weight_count(&self) -> usize {
        0
    }

    fn activation(&self) -> Option<Activation> {
        None
    }

    fn validate(&self, index: usize) -> Result<(), ConsError> {
        // also rejects NaN
        if !(0. ..1.).contains(&self.rate) {
            return Err(ConsError::DropRate {
                index,
                rate: self.rate,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct DropoutBuilder {
    rate: f32,
}

impl DropoutBuilder {
    pub fn new(rate: f32) -> Self {
        Self { rate }
    }
}

impl LayerBuilder for DropoutBuilder {
    type Output = DropoutLayer;

    fn connect(self, previous: Shape) -> Self::Output {
        DropoutLayer::new(previous.size(), self.rate)
    }
}
