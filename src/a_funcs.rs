use serde::{Deserialize, Serialize};

/// Nonlinearity applied after a layer's linear transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    ReLU,
    TanH,
    Sigmoid,
    Softmax,
    Linear,
}

impl_tokens!(Activation, UnsupportedActivation, {
    ReLU => "relu",
    TanH => "tanh",
    Sigmoid => "sigmoid",
    Softmax => "softmax",
    Linear => "linear",
});

impl Activation {
    /// Whether hidden stacks may be built from this activation.
    pub fn is_hidden(self) -> bool {
        matches!(self, Activation::ReLU | Activation::TanH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsError;

    #[test]
    fn tokens_parse_back() {
        for a in Activation::ALL.iter() {
            assert_eq!(a.as_str().parse::<Activation>().unwrap(), *a);
        }
    }

    #[test]
    fn unknown_token() {
        match "gelu".parse::<Activation>() {
            Err(ConsError::UnsupportedActivation(t)) => assert_eq!(t, "gelu"),
            other => panic!("expected UnsupportedActivation, got {:?}", other),
        }
        assert!("ReLU".parse::<Activation>().is_err());
    }

    #[test]
    fn serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&Activation::ReLU).unwrap(), "\"relu\"");
        assert_eq!(serde_json::to_string(&Activation::TanH).unwrap(), "\"tanh\"");
        assert_eq!(
            serde_json::from_str::<Activation>("\"softmax\"").unwrap(),
            Activation::Softmax
        );
    }

    #[test]
    fn only_relu_and_tanh_are_hidden() {
        let hidden: Vec<_> = Activation::ALL.iter().filter(|a| a.is_hidden()).collect();
        assert_eq!(hidden, [&Activation::ReLU, &Activation::TanH]);
    }
}
