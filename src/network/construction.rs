use crate::{
    error::ConsError,
    layers::{BasicLayer, Layer, LayerBuilder, Shape},
    loss::Loss,
    optimizer::Optimizer,
};
use serde::{Deserialize, Serialize};

/// Training configuration a network is compiled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compiled {
    pub optimizer: Optimizer,
    pub loss: Loss,
}

/// This trait allows network backends to be built using the LinearBuilder.
/// The builder hands over a validated layer sequence, any error the backend
/// raises past that point is returned unchanged.
pub trait LinearConstruction {
    type Output;
    type Error: From<ConsError>;

    fn construct(
        in_shape: Shape,
        layers: Vec<BasicLayer>,
        compiled: Compiled,
    ) -> Result<Self::Output, Self::Error>;
}

/// Builder for networks where all layers have only a single input and output.
#[derive(Clone, Debug)]
pub struct LinearBuilder {
    layers: Vec<BasicLayer>,
    in_shape: Shape,
    compiled: Option<Compiled>,
}

impl LinearBuilder {
    pub fn new(in_size: usize) -> Self {
        LinearBuilder {
            layers: Vec::new(),
            in_shape: Shape::new(in_size),
            compiled: None,
        }
    }

    fn last_out_shape(&self) -> Shape {
        self.layers.last().map_or(self.in_shape, |l| l.output())
    }

    /// Adds a single layer to the network.
    pub fn layer<T>(mut self, layer: T) -> Self
    where
        T: LayerBuilder,
        T::Output: Into<BasicLayer>,
    {
        let in_shape = self.last_out_shape();
        let layer: BasicLayer = layer.connect(in_shape).into();
        log::trace!(
            "connected {} layer {}: {} -> {}",
            layer.kind(),
            self.layers.len(),
            in_shape,
            layer.output()
        );
        self.layers.push(layer);
        self
    }

    /// Adds all of the layers provided by the `builders` argument.
    pub fn layers<T>(mut self, builders: T) -> Self
    where
        T: IntoIterator,
        T::Item: LayerBuilder,
        <T::Item as LayerBuilder>::Output: Into<BasicLayer>,
    {
        for builder in builders {
            self = self.layer(builder);
        }
        self
    }

    /// Chooses the optimizer and loss the network will be trained with.
    pub fn compile(mut self, optimizer: Optimizer, loss: Loss) -> Self {
        self.compiled = Some(Compiled { optimizer, loss });
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Validates the collected layers and hands them to the backend `T`.
    pub fn build<T>(self) -> Result<T::Output, T::Error>
    where
        T: LinearConstruction,
    {
        let compiled = self.compiled.ok_or(ConsError::Uncompiled)?;
        validate(self.in_shape, &self.layers)?;
        log::debug!(
            "building {} layer network {} -> {} ({}, {})",
            self.layers.len(),
            self.in_shape,
            self.last_out_shape(),
            compiled.optimizer,
            compiled.loss
        );
        T::construct(self.in_shape, self.layers, compiled)
    }
}

/// Checks that the network is non-empty, that every layer is valid on its own
/// and that every layer accepts what the previous one produces.
pub fn validate(in_shape: Shape, layers: &[BasicLayer]) -> Result<(), ConsError> {
    if layers.is_empty() {
        return Err(ConsError::Empty);
    }
    if in_shape.size() == 0 {
        return Err(ConsError::ZeroWidth { index: None });
    }

    let mut previous = in_shape;
    let mut weights: usize = 0;
    for (index, layer) in layers.iter().enumerate() {
        layer.validate(index)?;
        weights = weights
            .checked_add(layer.weight_count())
            .ok_or(ConsError::TooManyParameters { index })?;
        if layer.input() != previous {
            return Err(ConsError::Incompatible {
                index,
                received_input: previous.size(),
                expected_input: layer.input().size(),
            });
        }
        previous = layer.output();
    }
    Ok(())
}
