//! Small feed-forward network architectures built in pairs, where the two
//! networks of a pair differ only in the property being compared.
//!
//! Networks are assembled with a [LinearBuilder](network::LinearBuilder) and
//! handed to a backend implementing [LinearConstruction](network::LinearConstruction).

#[macro_use]
mod misc;

pub mod a_funcs;
pub mod error;
pub mod factory;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optimizer;
pub mod trainer;

pub use error::ConsError;
pub use factory::{
    create_activity_dropout_and_nodropout_networks, create_auto_mpg_deep_and_wide_networks,
    create_delicious_relu_vs_tanh_networks,
    create_income_earlystopping_and_noearlystopping_networks,
};
