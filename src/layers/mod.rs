pub mod dense_layer;
pub mod dropout_layer;

pub use dense_layer::{DenseBuilder, DenseLayer};
pub use dropout_layer::{DropoutBuilder, DropoutLayer};

use crate::a_funcs::Activation;
use crate::error::ConsError;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use std::fmt;

/// Number of features flowing between two layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(usize);

impl Shape {
    pub fn new(size: usize) -> Self {
        Shape(size)
    }

    pub fn size(self) -> usize {
        self.0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},)", self.0)
    }
}

#[enum_dispatch]
pub trait Layer {
    /// Shape the layer accepts.
    fn input(&self) -> Shape;
    /// Shape the layer produces.
    fn output(&self) -> Shape;
    /// Number of learnable parameters.
    fn weight_count(&self) -> usize;
    /// Activation applied to the output, if the layer has one.
    fn activation(&self) -> Option<Activation>;
    /// Checks the layer's own parameters. `index` is the layer's position in the network.
    fn validate(&self, index: usize) -> Result<(), ConsError>;
}

/// Trait all layer builders must implement in order to be added to a LinearBuilder.
pub trait LayerBuilder {
    type Output: Layer;
    /// Connect a layer to the output of the previous one, or to the network input.
    fn connect(self, previous: Shape) -> Self::Output;
}

/// Every kind of layer a network definition can hold.
#[enum_dispatch(Layer)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BasicLayer {
    Dense(DenseLayer),
    Dropout(DropoutLayer),
}

impl BasicLayer {
    pub fn as_dense(&self) -> Option<&DenseLayer> {
        match self {
            BasicLayer::Dense(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dropout(&self) -> Option<&DropoutLayer> {
        match self {
            BasicLayer::Dropout(d) => Some(d),
            _ => None,
        }
    }

    /// Short name of the layer kind.
    pub fn kind(&self) -> &'static str {
        match self {
            BasicLayer::Dense(_) => "dense",
            BasicLayer::Dropout(_) => "dropout",
        }
    }
}
