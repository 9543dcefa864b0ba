//! Pairs of networks which differ in exactly one design property.
//!
//! Every pair is available generically over the backend (`deep_and_wide::<T>`
//! and friends) and as a shorthand producing [NetworkDefinition]s.

use crate::a_funcs::Activation;
use crate::error::ConsError;
use crate::layers::{DenseBuilder, DropoutBuilder};
use crate::loss::Loss;
use crate::network::{LinearBuilder, LinearConstruction, NetworkDefinition};
use crate::optimizer::Optimizer;
use crate::trainer::{EarlyStopping, Mode, TrainingOptions};

/// Optimizer every network in this module is compiled with.
pub const OPTIMIZER: Optimizer = Optimizer::RmsProp;

pub const DEEP_UNITS: [usize; 10] = [3, 9, 15, 18, 20, 24, 33, 36, 43, 48];
pub const WIDE_UNITS: [usize; 2] = [65, 100];
pub const DEEP_WIDE_FIRST_LAYER: usize = 4;

pub const ACTIVATION_UNITS: [usize; 2] = [200, 300];
pub const ACTIVATION_FIRST_LAYER: usize = 100;

pub const DROPOUT_UNITS: [usize; 2] = [200, 300];
pub const DROPOUT_FIRST_LAYER: usize = 100;
pub const DROPOUT_RATE: f32 = 0.14;

pub const EARLY_STOPPING_UNITS: [usize; 2] = [50, 100];
pub const EARLY_STOPPING_PATIENCE: usize = 10;

/// Starts a network with a bias-free layer of width `first_layer` accepting
/// `n_inputs` features, followed by one biased layer per entry of `units`.
/// All layers use `activation`, which has to be relu or tanh.
pub fn stack(
    units: &[usize],
    n_inputs: usize,
    first_layer: usize,
    activation: Activation,
) -> Result<LinearBuilder, ConsError> {
    if !activation.is_hidden() {
        return Err(ConsError::UnsupportedActivation(activation.to_string()));
    }
    Ok(LinearBuilder::new(n_inputs)
        .layer(DenseBuilder::new(activation, first_layer).use_bias(false))
        .layers(units.iter().map(|&u| DenseBuilder::new(activation, u))))
}

/// Same as [stack](self::stack) but takes the activation as a token such as `"relu"`.
pub fn stack_from_token(
    units: &[usize],
    n_inputs: usize,
    first_layer: usize,
    activation: &str,
) -> Result<LinearBuilder, ConsError> {
    stack(units, n_inputs, first_layer, activation.parse()?)
}

/// A deep and a wide relu network with close to the same number of parameters,
/// meant to predict miles per gallon on the Auto MPG dataset.
///
/// Returns `(deep, wide)`.
pub fn deep_and_wide<T>(
    n_inputs: usize,
    n_outputs: usize,
) -> Result<(T::Output, T::Output), T::Error>
where
    T: LinearConstruction,
{
    let build = |units: &[usize]| -> Result<T::Output, T::Error> {
        stack(units, n_inputs, DEEP_WIDE_FIRST_LAYER, Activation::ReLU)?
            .layer(DenseBuilder::new(Activation::Linear, n_outputs).use_bias(false))
            .compile(OPTIMIZER, Loss::MeanSquared)
            .build::<T>()
    };

    let deep = build(&DEEP_UNITS)?;
    let wide = build(&WIDE_UNITS)?;
    log::debug!("built deep/wide pair ({} -> {})", n_inputs, n_outputs);
    Ok((deep, wide))
}

/// Two identical multi-label networks, one with relu hidden layers and one
/// with tanh hidden layers, meant for the del.icio.us bookmark tags.
///
/// Returns `(relu, tanh)`.
pub fn relu_vs_tanh<T>(
    n_inputs: usize,
    n_outputs: usize,
) -> Result<(T::Output, T::Output), T::Error>
where
    T: LinearConstruction,
{
    let build = |activation: Activation| -> Result<T::Output, T::Error> {
        stack(&ACTIVATION_UNITS, n_inputs, ACTIVATION_FIRST_LAYER, activation)?
            .layer(DenseBuilder::new(Activation::Sigmoid, n_outputs))
            .compile(OPTIMIZER, Loss::Hinge)
            .build::<T>()
    };

    let relu = build(Activation::ReLU)?;
    let tanh = build(Activation::TanH)?;
    log::debug!("built relu/tanh pair ({} -> {})", n_inputs, n_outputs);
    Ok((relu, tanh))
}

/// Two identical classifiers for the six UCI-HAR activities, the first with a
/// dropout layer after its second hidden layer.
///
/// Returns `(dropout, no_dropout)`.
pub fn dropout_and_no_dropout<T>(
    n_inputs: usize,
    n_outputs: usize,
) -> Result<(T::Output, T::Output), T::Error>
where
    T: LinearConstruction,
{
    let [second, third] = DROPOUT_UNITS;
    let dropout = LinearBuilder::new(n_inputs)
        .layer(DenseBuilder::new(Activation::ReLU, DROPOUT_FIRST_LAYER))
        .layer(DenseBuilder::new(Activation::ReLU, second))
        .layer(DropoutBuilder::new(DROPOUT_RATE))
        .layer(DenseBuilder::new(Activation::ReLU, third))
        .layer(DenseBuilder::new(Activation::Softmax, n_outputs))
        .compile(OPTIMIZER, Loss::CategoricalCrossentropy)
        .build::<T>()?;

    let no_dropout = LinearBuilder::new(n_inputs)
        .layer(DenseBuilder::new(Activation::ReLU, DROPOUT_FIRST_LAYER))
        .layers(DROPOUT_UNITS.iter().map(|&u| DenseBuilder::new(Activation::ReLU, u)))
        .layer(DenseBuilder::new(Activation::Softmax, n_outputs))
        .compile(OPTIMIZER, Loss::CategoricalCrossentropy)
        .build::<T>()?;

    log::debug!("built dropout/no-dropout pair ({} -> {})", n_inputs, n_outputs);
    Ok((dropout, no_dropout))
}

/// Two identical income classifiers for the Adult dataset. Only the first comes
/// with options asking the trainer to stop early on the validation loss.
///
/// Returns `(early_stopping, its options, no_early_stopping, its options)`.
pub fn earlystopping_and_no_earlystopping<T>(
    n_inputs: usize,
    n_outputs: usize,
) -> Result<(T::Output, TrainingOptions, T::Output, TrainingOptions), T::Error>
where
    T: LinearConstruction,
{
    let build = || -> Result<T::Output, T::Error> {
        LinearBuilder::new(n_inputs)
            .layers(
                EARLY_STOPPING_UNITS
                    .iter()
                    .map(|&u| DenseBuilder::new(Activation::ReLU, u)),
            )
            .layer(DenseBuilder::new(Activation::Sigmoid, n_outputs))
            .compile(OPTIMIZER, Loss::BinaryCrossentropy)
            .build::<T>()
    };

    let early_stopping = build()?;
    let no_early_stopping = build()?;

    let policy = EarlyStopping::builder()
        .monitor("val_loss")
        .mode(Mode::Auto)
        .patience(EARLY_STOPPING_PATIENCE)
        .verbose(true)
        .build()?;

    log::debug!("built early stopping pair ({} -> {})", n_inputs, n_outputs);
    Ok((
        early_stopping,
        TrainingOptions::new().callback(policy),
        no_early_stopping,
        TrainingOptions::new(),
    ))
}

pub fn create_auto_mpg_deep_and_wide_networks(
    n_inputs: usize,
    n_outputs: usize,
) -> Result<(NetworkDefinition, NetworkDefinition), ConsError> {
    deep_and_wide::<NetworkDefinition>(n_inputs, n_outputs)
}

pub fn create_delicious_relu_vs_tanh_networks(
    n_inputs: usize,
    n_outputs: usize,
) -> Result<(NetworkDefinition, NetworkDefinition), ConsError> {
    relu_vs_tanh::<NetworkDefinition>(n_inputs, n_outputs)
}

pub fn create_activity_dropout_and_nodropout_networks(
    n_inputs: usize,
    n_outputs: usize,
) -> Result<(NetworkDefinition, NetworkDefinition), ConsError> {
    dropout_and_no_dropout::<NetworkDefinition>(n_inputs, n_outputs)
}

pub fn create_income_earlystopping_and_noearlystopping_networks(
    n_inputs: usize,
    n_outputs: usize,
) -> Result<
    (
        NetworkDefinition,
        TrainingOptions,
        NetworkDefinition,
        TrainingOptions,
    ),
    ConsError,
> {
    earlystopping_and_no_earlystopping::<NetworkDefinition>(n_inputs, n_outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::Layer;

    fn widths(b: LinearBuilder) -> Vec<usize> {
        b.compile(OPTIMIZER, Loss::MeanSquared)
            .build::<NetworkDefinition>()
            .unwrap()
            .widths()
    }

    #[test]
    fn stack_layout() {
        let net = stack(&[3, 9], 8, 4, Activation::TanH)
            .unwrap()
            .compile(OPTIMIZER, Loss::MeanSquared)
            .build::<NetworkDefinition>()
            .unwrap();

        assert_eq!(net.widths(), vec![4, 3, 9]);
        assert_eq!(net.in_size(), 8);
        assert!(net.activations().iter().all(|a| *a == Activation::TanH));

        let biases: Vec<bool> = net.dense_layers().map(|l| l.use_bias()).collect();
        assert_eq!(biases, vec![false, true, true]);
        assert_eq!(net.layers()[0].input().size(), 8);
    }

    #[test]
    fn stack_without_units() {
        assert_eq!(widths(stack(&[], 2, 7, Activation::ReLU).unwrap()), vec![7]);
    }

    #[test]
    fn stack_rejects_output_activations() {
        for a in [Activation::Sigmoid, Activation::Softmax, Activation::Linear].iter() {
            match stack(&[1], 1, 1, *a) {
                Err(ConsError::UnsupportedActivation(t)) => assert_eq!(t, a.as_str()),
                other => panic!("expected UnsupportedActivation, got {:?}", other.map(|b| b.len())),
            }
        }
    }

    #[test]
    fn stack_tokens() {
        assert_eq!(
            widths(stack_from_token(&[5], 3, 2, "relu").unwrap()),
            vec![2, 5]
        );
        assert!(matches!(
            stack_from_token(&[5], 3, 2, "swish"),
            Err(ConsError::UnsupportedActivation(_))
        ));
        assert!(matches!(
            stack_from_token(&[5], 3, 2, "sigmoid"),
            Err(ConsError::UnsupportedActivation(_))
        ));
    }
}
