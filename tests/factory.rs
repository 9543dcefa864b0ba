mod common;

use common::{check_io, dims, without_dropout};

use paired_nets::a_funcs::Activation;
use paired_nets::factory::{self, DEEP_UNITS, WIDE_UNITS};
use paired_nets::layers::Layer;
use paired_nets::loss::Loss;
use paired_nets::network::{NetworkDefinition, Summary};
use paired_nets::optimizer::Optimizer;
use paired_nets::trainer::{Decision, Mode};
use paired_nets::*;

#[test]
fn auto_mpg_example() {
    let (deep, wide) = create_auto_mpg_deep_and_wide_networks(8, 1).unwrap();

    assert_eq!(deep.hidden_widths(), vec![4, 3, 9, 15, 18, 20, 24, 33, 36, 43, 48]);
    assert_eq!(wide.hidden_widths(), vec![4, 65, 100]);

    for net in [&deep, &wide].iter() {
        let output = net.dense_layers().last().unwrap();
        assert_eq!(output.size(), 1);
        assert_eq!(output.activation(), Some(Activation::Linear));
        assert!(!output.use_bias());
        assert!(!net.dense_layers().next().unwrap().use_bias());
        assert_eq!(net.loss(), Loss::MeanSquared);
        assert_eq!(net.optimizer(), Optimizer::RmsProp);
        assert!(net.activations()[..net.widths().len() - 1]
            .iter()
            .all(|a| *a == Activation::ReLU));
    }
}

#[test]
fn deep_and_wide_units_do_not_depend_on_dims() {
    for &(n_in, n_out) in dims().iter() {
        let (deep, wide) = create_auto_mpg_deep_and_wide_networks(n_in, n_out).unwrap();
        check_io(&deep, n_in, n_out, "deep");
        check_io(&wide, n_in, n_out, "wide");
        assert_eq!(deep.hidden_widths()[1..], DEEP_UNITS[..]);
        assert_eq!(wide.hidden_widths()[1..], WIDE_UNITS[..]);
    }
}

#[test]
fn deep_and_wide_have_similar_parameter_counts() {
    let (deep, wide) = create_auto_mpg_deep_and_wide_networks(8, 1).unwrap();
    assert_eq!(deep.weight_count(), 7205);
    assert_eq!(wide.weight_count(), 7057);

    let (deep, wide) = (deep.weight_count() as f32, wide.weight_count() as f32);
    assert!((deep - wide).abs() / deep < 0.05);
}

#[test]
fn relu_vs_tanh_differ_only_in_activation() {
    for &(n_in, n_out) in dims().iter() {
        let (relu, tanh) = create_delicious_relu_vs_tanh_networks(n_in, n_out).unwrap();
        check_io(&relu, n_in, n_out, "relu");
        check_io(&tanh, n_in, n_out, "tanh");

        assert_eq!(relu.widths(), vec![100, 200, 300, n_out]);
        assert_eq!(relu.widths(), tanh.widths());
        assert_eq!(relu.weight_count(), tanh.weight_count());
        assert_eq!(relu.loss(), Loss::Hinge);
        assert_eq!(tanh.loss(), Loss::Hinge);

        let hidden = relu.widths().len() - 1;
        assert!(relu.activations()[..hidden].iter().all(|a| *a == Activation::ReLU));
        assert!(tanh.activations()[..hidden].iter().all(|a| *a == Activation::TanH));
        assert_eq!(relu.activations()[hidden], Activation::Sigmoid);
        assert_eq!(tanh.activations()[hidden], Activation::Sigmoid);

        for (r, t) in relu.dense_layers().zip(tanh.dense_layers()) {
            assert_eq!(r.input(), t.input());
            assert_eq!(r.use_bias(), t.use_bias());
        }
    }
}

#[test]
fn dropout_is_the_only_difference() {
    for &(n_in, n_out) in dims().iter() {
        let (dropout, plain) = create_activity_dropout_and_nodropout_networks(n_in, n_out).unwrap();
        check_io(&dropout, n_in, n_out, "dropout");
        check_io(&plain, n_in, n_out, "no dropout");

        assert_eq!(plain.widths(), vec![100, 200, 300, n_out]);
        assert_eq!(without_dropout(&dropout), plain.layers());
        assert_eq!(dropout.layers().len(), plain.layers().len() + 1);

        let inserted = dropout.layers()[2].as_dropout().expect("dropout after the second dense layer");
        assert!((inserted.rate() - 0.14).abs() < f32::EPSILON);
        assert_eq!(inserted.output().size(), 200);

        assert!(plain.layers().iter().all(|l| l.as_dropout().is_none()));
        assert!(plain.dense_layers().all(|l| l.use_bias()));
        assert_eq!(dropout.loss(), Loss::CategoricalCrossentropy);
        assert_eq!(plain.activations().last(), Some(&Activation::Softmax));
    }
}

#[test]
fn early_stopping_options() {
    for &(n_in, n_out) in dims().iter() {
        let (es_net, es_options, plain_net, plain_options) =
            create_income_earlystopping_and_noearlystopping_networks(n_in, n_out).unwrap();
        check_io(&es_net, n_in, n_out, "early stopping");
        check_io(&plain_net, n_in, n_out, "no early stopping");

        assert_eq!(es_net, plain_net);
        assert_eq!(es_net.widths(), vec![50, 100, n_out]);
        assert_eq!(es_net.loss(), Loss::BinaryCrossentropy);
        assert_eq!(es_net.activations().last(), Some(&Activation::Sigmoid));

        assert_eq!(es_options.callbacks.len(), 1);
        let policy = es_options.early_stopping().unwrap();
        assert_eq!(policy.patience(), 10);
        assert_eq!(policy.monitor(), "val_loss");
        assert_eq!(policy.mode(), Mode::Auto);
        assert!(policy.verbose());

        assert!(plain_options.is_empty());
    }
}

#[test]
fn early_stopping_policy_halts_a_plateau() {
    let (_, options, _, _) = create_income_earlystopping_and_noearlystopping_networks(105, 1).unwrap();
    let mut watch = options.early_stopping().unwrap().watch();

    let mut losses = vec![0.7, 0.6, 0.5];
    losses.extend(std::iter::repeat(0.55).take(20));

    let stopped = losses
        .iter()
        .enumerate()
        .position(|(epoch, loss)| watch.observe(epoch, *loss) == Decision::Stop);
    assert_eq!(stopped, Some(12));
    assert_eq!(watch.best(), Some(0.5));
}

#[test]
fn builders_are_independent() {
    let (a, _) = create_delicious_relu_vs_tanh_networks(20, 3).unwrap();
    let (b, _) = create_delicious_relu_vs_tanh_networks(20, 3).unwrap();
    assert_eq!(a, b);

    let (c, _) = create_delicious_relu_vs_tanh_networks(21, 3).unwrap();
    assert_ne!(a, c);
    assert_eq!(a.in_size(), 20);
}

#[test]
fn zero_dims_fail() {
    assert!(create_auto_mpg_deep_and_wide_networks(0, 1).is_err());
    assert!(create_auto_mpg_deep_and_wide_networks(8, 0).is_err());
    assert!(create_delicious_relu_vs_tanh_networks(0, 4).is_err());
    assert!(create_activity_dropout_and_nodropout_networks(5, 0).is_err());

    match create_income_earlystopping_and_noearlystopping_networks(0, 1) {
        Err(ConsError::ZeroWidth { index: None }) => (),
        other => panic!("expected ZeroWidth, got {:?}", other.map(|_| ())),
    }
    match create_income_earlystopping_and_noearlystopping_networks(3, 0) {
        Err(e) => assert!(e.is_configuration()),
        Ok(_) => panic!("zero outputs accepted"),
    }
}

#[test]
fn summary_backend() {
    let (deep, wide) = factory::deep_and_wide::<Summary>(8, 1).unwrap();
    let (deep_def, wide_def) = factory::deep_and_wide::<NetworkDefinition>(8, 1).unwrap();

    assert_eq!(deep.total_params(), deep_def.weight_count());
    assert_eq!(wide.total_params(), wide_def.weight_count());
    assert_eq!(deep.rows().len(), 12);
    assert_eq!(wide.rows()[0].params, 32);

    let (es, options, _, _) = factory::earlystopping_and_no_earlystopping::<Summary>(10, 2).unwrap();
    assert_eq!(es.rows().len(), 3);
    assert!(!options.is_empty());
}

#[test]
fn huge_dims_fail_instead_of_overflowing() {
    match factory::deep_and_wide::<Summary>(usize::MAX / 2, 1) {
        Err(ConsError::TooManyParameters { index: 0 }) => (),
        other => panic!("expected TooManyParameters, got {:?}", other.map(|_| ())),
    }
    match create_delicious_relu_vs_tanh_networks(3, usize::MAX) {
        Err(ConsError::TooManyParameters { index: 3 }) => (),
        other => panic!("expected TooManyParameters, got {:?}", other.map(|_| ())),
    }
}
