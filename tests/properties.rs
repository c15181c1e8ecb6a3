use backprop_coach::{Example, Network, Topology, TrainConfig};
use proptest::prelude::*;

fn network(inputs: usize, hidden: usize, outputs: usize, seed: u64) -> Network {
    let topology = Topology::new(inputs, hidden, outputs).unwrap();
    Network::new(topology, TrainConfig::default().with_seed(seed)).unwrap()
}

proptest! {
    #[test]
    fn outputs_stay_strictly_inside_unit_interval(
        seed in any::<u64>(),
        hidden in 2usize..6,
        outputs in 1usize..4,
        input in prop::collection::vec(-1e3f64..1e3, 3),
    ) {
        let net = network(3, hidden, outputs, seed);
        let out = net.predict(&input).unwrap();
        prop_assert_eq!(out.len(), outputs);
        for y in out {
            prop_assert!(y > 0.0 && y < 1.0, "output {}", y);
        }
    }

    #[test]
    fn prediction_is_deterministic(
        seed in any::<u64>(),
        input in prop::collection::vec(-10.0f64..10.0, 2),
    ) {
        let net = network(2, 3, 2, seed);
        let a = net.predict(&input).unwrap();
        let b = net.predict(&input).unwrap();
        prop_assert_eq!(
            a.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
            b.iter().map(|x| x.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn training_keeps_weights_finite_and_outputs_in_range(
        seed in any::<u64>(),
        rows in prop::collection::vec((prop::collection::vec(-5.0f64..5.0, 2), 0u8..2), 1..6),
    ) {
        let topology = Topology::new(2, 2, 1).unwrap();
        let config = TrainConfig { max_epoch: 200, ..TrainConfig::default() }.with_seed(seed);
        let mut net = Network::new(topology, config).unwrap();
        let examples: Vec<Example> = rows
            .into_iter()
            .map(|(x, y)| Example::new(&topology, x, vec![y]).unwrap())
            .collect();

        let report = net.train(&examples, true).unwrap();

        prop_assert!(report.epochs >= 1 && report.epochs <= 200);
        prop_assert!(report.final_error.is_finite());
        prop_assert!(net.is_finite());
        for example in &examples {
            let y = net.predict(example.inputs()).unwrap()[0];
            prop_assert!(y > 0.0 && y < 1.0);
        }
    }
}
