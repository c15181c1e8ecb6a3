use std::f64::consts::E;

/// Beyond this magnitude `1 / (1 + e^-x)` rounds to exactly 1.0 in f64,
/// so pre-activations are clamped to keep σ strictly inside (0, 1).
const SATURATION: f64 = 36.0;

/// Logistic activation `σ(x) = 1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    let x = x.clamp(-SATURATION, SATURATION);
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of σ expressed in terms of its output: `σ'(x) = a (1 - a)` where `a = σ(x)`.
///
/// Takes the activation, not the pre-activation, since that is what the
/// forward pass keeps around.
pub fn sigmoid_derivative(activation: f64) -> f64 {
    activation * (1.0 - activation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_one_half_at_zero() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert_eq!(sigmoid_derivative(sigmoid(0.0)), 0.25);
    }

    #[test]
    fn sigmoid_is_symmetric() {
        for x in [0.1, 1.0, 3.5, 12.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sigmoid_never_reaches_the_bounds() {
        for x in [-1e6, -800.0, -40.0, 40.0, 800.0, 1e6] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "σ({x}) = {y}");
        }
    }
}
