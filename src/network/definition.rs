use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::construction::{validate, Compiled, LinearConstruction};
use crate::a_funcs::Activation;
use crate::error::ConsError;
use crate::layers::{BasicLayer, DenseLayer, Layer, Shape};
use crate::loss::Loss;
use crate::optimizer::Optimizer;

/// Architecture of an untrained network together with the optimizer and loss it
/// should be trained with. Can be both saved to and loaded from a file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "DefinitionUnvalidated", try_from = "DefinitionUnvalidated")]
pub struct NetworkDefinition {
    in_shape: Shape,
    layers: Vec<BasicLayer>,
    compiled: Compiled,
}

impl NetworkDefinition {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<NetworkDefinition> {
        let s = fs::read_to_string(path)?;
        let network: NetworkDefinition = serde_json::from_str(&s)?;
        Ok(network)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    //getters
    pub fn in_size(&self) -> usize {
        self.in_shape.size()
    }
    pub fn out_size(&self) -> usize {
        // construction guarantees at least one layer
        self.layers.last().map_or(0, |l| l.output().size())
    }
    pub fn layers(&self) -> &[BasicLayer] {
        &self.layers
    }
    pub fn optimizer(&self) -> Optimizer {
        self.compiled.optimizer
    }
    pub fn loss(&self) -> Loss {
        self.compiled.loss
    }
    pub fn compiled(&self) -> Compiled {
        self.compiled
    }

    /// Iterates over the dense layers, skipping dropout.
    pub fn dense_layers(&self) -> impl Iterator<Item = &DenseLayer> + '_ {
        self.layers.iter().filter_map(BasicLayer::as_dense)
    }

    /// Widths of all dense layers, output layer included.
    pub fn widths(&self) -> Vec<usize> {
        self.dense_layers().map(DenseLayer::size).collect()
    }

    /// Widths of the dense layers before the output layer.
    pub fn hidden_widths(&self) -> Vec<usize> {
        let mut widths = self.widths();
        widths.pop();
        widths
    }

    /// Activations of the dense layers, output layer included.
    pub fn activations(&self) -> Vec<Activation> {
        self.layers.iter().filter_map(Layer::activation).collect()
    }

    /// Total number of learnable parameters.
    pub fn weight_count(&self) -> usize {
        self.layers.iter().map(Layer::weight_count).sum()
    }
}

impl LinearConstruction for NetworkDefinition {
    type Output = NetworkDefinition;
    type Error = ConsError;

    fn construct(
        in_shape: Shape,
        layers: Vec<BasicLayer>,
        compiled: Compiled,
    ) -> Result<Self::Output, Self::Error> {
        Ok(NetworkDefinition {
            in_shape,
            layers,
            compiled,
        })
    }
}

/// When deserializing, we first construct this object, validate that it's structure is correct and convert to NetworkDefinition
#[derive(Serialize, Deserialize)]
struct DefinitionUnvalidated {
    in_size: usize,
    layers: Vec<BasicLayer>,
    optimizer: Optimizer,
    loss: Loss,
}

impl From<NetworkDefinition> for DefinitionUnvalidated {
    fn from(def: NetworkDefinition) -> Self {
        DefinitionUnvalidated {
            in_size: def.in_shape.size(),
            layers: def.layers,
            optimizer: def.compiled.optimizer,
            loss: def.compiled.loss,
        }
    }
}

impl TryFrom<DefinitionUnvalidated> for NetworkDefinition {
    type Error = ConsError;

    fn try_from(value: DefinitionUnvalidated) -> Result<Self, Self::Error> {
        let in_shape = Shape::new(value.in_size);
        validate(in_shape, &value.layers)?;
        Ok(NetworkDefinition {
            in_shape,
            layers: value.layers,
            compiled: Compiled {
                optimizer: value.optimizer,
                loss: value.loss,
            },
        })
    }
}
