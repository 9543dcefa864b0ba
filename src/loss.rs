use serde::{Deserialize, Serialize};

/// Loss a network is compiled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Loss {
    #[serde(rename = "mse")]
    MeanSquared,
    #[serde(rename = "hinge")]
    Hinge,
    #[serde(rename = "categorical_crossentropy")]
    CategoricalCrossentropy,
    #[serde(rename = "binary_crossentropy")]
    BinaryCrossentropy,
}

impl_tokens!(Loss, UnknownLoss, {
    MeanSquared => "mse",
    Hinge => "hinge",
    CategoricalCrossentropy => "categorical_crossentropy",
    BinaryCrossentropy => "binary_crossentropy",
});
