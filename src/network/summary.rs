use std::fmt;

use super::construction::{Compiled, LinearConstruction};
use super::definition::NetworkDefinition;
use crate::a_funcs::Activation;
use crate::error::ConsError;
use crate::layers::{BasicLayer, Layer, Shape};

/// One line of a [Summary](self::Summary).
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub kind: &'static str,
    pub activation: Option<Activation>,
    pub output: Shape,
    pub params: usize,
}

/// Backend which, instead of a network, produces a table of layer output
/// shapes and parameter counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    in_shape: Shape,
    rows: Vec<SummaryRow>,
    compiled: Compiled,
}

impl Summary {
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn total_params(&self) -> usize {
        self.rows.iter().map(|r| r.params).sum()
    }

    fn from_layers(in_shape: Shape, layers: &[BasicLayer], compiled: Compiled) -> Self {
        let rows = layers
            .iter()
            .map(|l| SummaryRow {
                kind: l.kind(),
                activation: l.activation(),
                output: l.output(),
                params: l.weight_count(),
            })
            .collect();
        Summary {
            in_shape,
            rows,
            compiled,
        }
    }
}

impl LinearConstruction for Summary {
    type Output = Summary;
    type Error = ConsError;

    fn construct(
        in_shape: Shape,
        layers: Vec<BasicLayer>,
        compiled: Compiled,
    ) -> Result<Self::Output, Self::Error> {
        Ok(Summary::from_layers(in_shape, &layers, compiled))
    }
}

impl From<&NetworkDefinition> for Summary {
    fn from(def: &NetworkDefinition) -> Self {
        Summary::from_layers(Shape::new(def.in_size()), def.layers(), def.compiled())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24}{:<16}{:>10}", "Layer (type)", "Output Shape", "Param #")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "{:<24}{:<16}{:>10}", "input", self.in_shape.to_string(), 0)?;
        for (i, row) in self.rows.iter().enumerate() {
            let name = match row.activation {
                Some(a) => format!("{}_{} ({})", row.kind, i, a),
                None => format!("{}_{}", row.kind, i),
            };
            writeln!(
                f,
                "{:<24}{:<16}{:>10}",
                name,
                row.output.to_string(),
                row.params
            )?;
        }
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Total params: {}", self.total_params())?;
        write!(
            f,
            "Optimizer: {}, loss: {}",
            self.compiled.optimizer, self.compiled.loss
        )
    }
}
