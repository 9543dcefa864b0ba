use serde::{Deserialize, Serialize};

/// Gradient based update rule a network is compiled with. Only the identifier
/// is recorded, the update itself belongs to whatever trains the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimizer {
    RmsProp,
    Sgd,
    Adam,
    Adagrad,
}

impl_tokens!(Optimizer, UnknownOptimizer, {
    RmsProp => "rmsprop",
    Sgd => "sgd",
    Adam => "adam",
    Adagrad => "adagrad",
});

impl Default for Optimizer {
    fn default() -> Self {
        Optimizer::RmsProp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rmsprop() {
        assert_eq!(Optimizer::default().to_string(), "rmsprop");
    }

    #[test]
    fn tokens_match_serde() {
        for opt in Optimizer::ALL {
            assert_eq!(
                serde_json::to_string(opt).unwrap(),
                format!("\"{}\"", opt.as_str())
            );
            assert_eq!(opt.as_str().parse::<Optimizer>().unwrap(), *opt);
        }
        assert!("RMSprop".parse::<Optimizer>().is_err());
    }
}
