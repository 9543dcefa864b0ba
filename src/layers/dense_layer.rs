use crate::{
    a_funcs::Activation,
    error::ConsError,
    layers::{Layer, LayerBuilder, Shape},
};
use serde::{Deserialize, Serialize};

/// Your run of the mill fully connected (dense) layer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DenseLayer {
    in_size: usize,
    size: usize,
    activation: Activation,
    use_bias: bool,
}

impl DenseLayer {
    pub fn new(in_size: usize, size: usize, activation: Activation, use_bias: bool) -> Self {
        Self {
            in_size,
            size,
            activation,
            use_bias,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn use_bias(&self) -> bool {
        self.use_bias
    }
}

impl Layer for DenseLayer {
    fn input(&self) -> Shape {
        Shape::new(self.in_size)
    }

    fn output(&self) -> Shape {
        Shape::new(self.size)
    }

    fn weight_count(&self) -> usize {
        let biases = if self.use_bias { self.size } else { 0 };
        self.in_size * self.size + biases
    }

    fn activation(&self) -> Option<Activation> {
        Some(self.activation)
    }

    fn validate(&self, index: usize) -> Result<(), ConsError> {
        if self.size == 0 {
            return Err(ConsError::ZeroWidth { index: Some(index) });
        }
        let biases = if self.use_bias { self.size } else { 0 };
        self.in_size
            .checked_mul(self.size)
            .and_then(|w| w.checked_add(biases))
            .map(|_| ())
            .ok_or(ConsError::TooManyParameters { index })
    }
}

/// Builds a [DenseLayer](self::DenseLayer). Biases are enabled unless turned off.
#[derive(Clone, Debug)]
pub struct DenseBuilder {
    activation: Activation,
    size: usize,
    use_bias: bool,
}

impl DenseBuilder {
    pub fn new(activation: Activation, size: usize) -> Self {
        Self {
            activation,
            size,
            use_bias: true,
        }
    }

    pub fn use_bias(mut self, use_bias: bool) -> Self {
        self.use_bias = use_bias;
        self
    }
}

impl LayerBuilder for DenseBuilder {
    type Output = DenseLayer;

    fn connect(self, previous: Shape) -> Self::Output {
        DenseLayer::new(previous.size(), self.size, self.activation, self.use_bias)
    }
}
