#![allow(dead_code)]

use paired_nets::layers::{BasicLayer, Layer};
use paired_nets::network::NetworkDefinition;

/// Input and output widths every factory is exercised with.
pub fn dims() -> Vec<(usize, usize)> {
    vec![(1, 1), (8, 1), (500, 983), (561, 6), (105, 1), (3, 17)]
}

/// Checks the input and output widths of a built network.
pub fn check_io(net: &NetworkDefinition, n_inputs: usize, n_outputs: usize, id: &str) {
    assert_eq!(
        net.in_size(),
        n_inputs,
        "{}: network input width is wrong",
        id
    );
    assert_eq!(
        net.layers()[0].input().size(),
        n_inputs,
        "{}: first layer accepts the wrong width",
        id
    );
    assert_eq!(net.out_size(), n_outputs, "{}: output width is wrong", id);
    assert_eq!(
        *net.widths().last().unwrap(),
        n_outputs,
        "{}: final dense layer has the wrong width",
        id
    );
}

/// Layers with every dropout layer removed.
pub fn without_dropout(net: &NetworkDefinition) -> Vec<BasicLayer> {
    net.layers()
        .iter()
        .filter(|l| l.as_dropout().is_none())
        .cloned()
        .collect()
}
