use crate::config::ReverseConfig;
use crate::error::Result;
use crate::infer::ReverseSpec;
use crate::value::{Reverse, Value};

// Gradient rule for reverse
//
// Out = reverse(X, A) only moves elements: Out[i] = X[src(i)] where src is a
// permutation of positions. Its Jacobian is therefore a permutation matrix,
// and since reversing twice is the identity, that permutation is its own
// inverse, so J^T = J^-1 = J:
//
//   grad(X) = J^T · grad(Out) = reverse(grad(Out), A)
//
// The backward node is another reverse node with the same axis attribute,
// reading the gradient of Out and writing the gradient of X. No input or
// output values of the forward pass are needed.

/// Name of the op type a reverse (and its gradient) is registered under.
pub const REVERSE_OP: &str = "reverse";

/// Name of the gradient variable for `var`.
pub fn grad_var_name(var: &str) -> String {
    format!("{var}.grad")
}

/// Compute `grad(X)` from `grad(Out)`.
pub fn reverse_grad(spec: &ReverseSpec, grad_out: &Value, config: &ReverseConfig) -> Result<Value> {
    grad_out.reverse(spec.axes(), config)
}

/// Description of the backward node a host autodiff engine should create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradOpDesc {
    pub op_type: &'static str,
    /// Variable read by the backward node: the gradient of Out.
    pub input: String,
    /// Variable written by the backward node: the gradient of X.
    pub output: String,
    /// The forward node's `axis` attribute, copied verbatim.
    pub axis: Vec<i64>,
}

/// Backward node for a forward reverse reading `x` and writing `out`.
pub fn grad_op_desc(spec: &ReverseSpec, x: &str, out: &str) -> GradOpDesc {
    GradOpDesc {
        op_type: REVERSE_OP,
        input: grad_var_name(out),
        output: grad_var_name(x),
        axis: spec.raw_axes().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::sequence::TensorSequence;
    use crate::tensor::Tensor;

    fn dense(data: Vec<f64>, dims: &[usize]) -> Value {
        Tensor::from_vec(data, dims.to_vec()).unwrap().into()
    }

    fn values(v: &Value) -> Vec<f64> {
        v.as_dense().unwrap().to_vec::<f64>().unwrap()
    }

    #[test]
    fn test_grad_is_reverse_of_output_grad() {
        let spec = ReverseSpec::dense(&[0, 2], 3).unwrap();
        let config = ReverseConfig::default();
        let grad_out = dense((0..16).map(|i| i as f64 * 0.5 - 3.0).collect(), &[2, 2, 4]);
        let grad_x = reverse_grad(&spec, &grad_out, &config).unwrap();
        let expected = grad_out.reverse(spec.axes(), &config).unwrap();
        let bits = |v: &Value| values(v).iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&grad_x), bits(&expected));
    }

    #[test]
    fn test_grad_matches_brute_force_vjp() {
        // Out is linear in X, so column j of the Jacobian is reverse(e_j).
        let mut rng = StdRng::seed_from_u64(42);
        let dims = [3, 2, 4];
        let n: usize = dims.iter().product();
        let spec = ReverseSpec::dense(&[-1, 0], 3).unwrap();
        let config = ReverseConfig::default();
        let g: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

        let brute: Vec<f64> = (0..n)
            .map(|j| {
                let mut e = vec![0.0; n];
                e[j] = 1.0;
                let col = values(&dense(e, &dims).reverse(spec.axes(), &config).unwrap());
                col.iter().zip(&g).map(|(d, gi)| d * gi).sum()
            })
            .collect();

        let rule = reverse_grad(&spec, &dense(g, &dims), &config).unwrap();
        assert_eq!(values(&rule), brute);
    }

    #[test]
    fn test_grad_flows_for_non_float_dtypes() {
        let spec = ReverseSpec::dense(&[1], 2).unwrap();
        let config = ReverseConfig::default();
        let grad_out: Value = Tensor::from_vec(vec![1i64, 2, 3, 4, 5, 6], (2, 3))
            .unwrap()
            .into();
        let grad_x = reverse_grad(&spec, &grad_out, &config).unwrap();
        assert_eq!(
            grad_x.as_dense().unwrap().to_vec::<i64>().unwrap(),
            vec![3, 2, 1, 6, 5, 4]
        );

        let mask: Value = Tensor::from_vec(vec![true, false, false, true, true, false], (2, 3))
            .unwrap()
            .into();
        let grad_x = reverse_grad(&spec, &mask, &config).unwrap();
        assert_eq!(
            grad_x.as_dense().unwrap().to_vec::<bool>().unwrap(),
            vec![false, false, true, false, true, true]
        );
    }

    #[test]
    fn test_sequence_grad_reverses_steps() {
        let spec = ReverseSpec::sequence(&[0]).unwrap();
        let steps = vec![
            Tensor::from_vec(vec![1.0f32], (1, 1)).unwrap(),
            Tensor::from_vec(vec![2.0f32, 3.0], (2, 1)).unwrap(),
        ];
        let grad_out: Value = TensorSequence::new(steps.clone()).unwrap().into();
        let grad_x = reverse_grad(&spec, &grad_out, &ReverseConfig::default()).unwrap();
        let grad_x = grad_x.as_sequence().unwrap();
        assert_eq!(grad_x.get(0), Some(&steps[1]));
        assert_eq!(grad_x.get(1), Some(&steps[0]));
    }

    #[test]
    fn test_grad_op_desc_wiring() {
        let spec = ReverseSpec::dense(&[1, -1], 3).unwrap();
        let desc = grad_op_desc(&spec, "x", "out");
        assert_eq!(desc.op_type, REVERSE_OP);
        assert_eq!(desc.input, "out.grad");
        assert_eq!(desc.output, "x.grad");
        assert_eq!(desc.axis, vec![1, -1]);
    }
}
