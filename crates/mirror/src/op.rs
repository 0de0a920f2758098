// ReverseNode — The graph-node adapter a host framework registers
//
// mirror-core exposes plain functions; this is the thin layer between them
// and a host graph. A host that wants a `reverse` operator:
//
//   1. At construction: ReverseNode::build(x, out, &x_desc, &axis)?
//      → validates the attribute, returns the node and Out's description
//   2. At execution:    node.forward(&x_value, &config)?
//   3. For autodiff:    node.grad_node()  (or node.grad_op_desc())
//      → another reverse node with the same spec, wired grad(Out) → grad(X)
//
// Registration under a name, attribute storage and scheduling stay on the
// host side.

use mirror_core::{
    grad_op_desc, grad_var_name, infer_reverse, reverse_grad, DataModel, Error, GradOpDesc,
    Result, Reverse, ReverseConfig, ReverseSpec, Value, VarDesc,
};
use tracing::debug;

/// A reverse node: one input variable, one output variable, one spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseNode {
    input: String,
    output: String,
    spec: ReverseSpec,
}

impl ReverseNode {
    /// Run inference for a node reading `input` and writing `output`.
    ///
    /// Returns the node and the static description of its output. Any
    /// invalid `axis` attribute aborts construction here.
    pub fn build(
        input: impl Into<String>,
        output: impl Into<String>,
        input_desc: &VarDesc,
        axis: &[i64],
    ) -> Result<(Self, VarDesc)> {
        let inferred = infer_reverse(input_desc, axis)?;
        let node = ReverseNode {
            input: input.into(),
            output: output.into(),
            spec: inferred.spec,
        };
        Ok((node, inferred.output))
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn spec(&self) -> &ReverseSpec {
        &self.spec
    }

    /// Execute the node on a runtime value.
    pub fn forward(&self, x: &Value, config: &ReverseConfig) -> Result<Value> {
        self.check_value(x)?;
        x.reverse(self.spec.axes(), config)
    }

    /// Map the gradient of the output to the gradient of the input.
    pub fn backward(&self, grad_out: &Value, config: &ReverseConfig) -> Result<Value> {
        self.check_value(grad_out)?;
        reverse_grad(&self.spec, grad_out, config)
    }

    /// The backward node: reads `grad(output)`, writes `grad(input)`.
    pub fn grad_node(&self) -> ReverseNode {
        debug!(input = %self.input, output = %self.output, "building reverse grad node");
        ReverseNode {
            input: grad_var_name(&self.output),
            output: grad_var_name(&self.input),
            spec: self.spec.clone(),
        }
    }

    /// The backward node as a plain description for a host autodiff engine.
    pub fn grad_op_desc(&self) -> GradOpDesc {
        grad_op_desc(&self.spec, &self.input, &self.output)
    }

    // The runtime value must have the data model the spec was inferred for,
    // and a dense value must have the rank its axes were resolved against.
    fn check_value(&self, value: &Value) -> Result<()> {
        if value.data_model() != self.spec.data_model() {
            return Err(Error::invalid_argument(format!(
                "reverse node '{}' expects a {} input, got {}",
                self.output,
                self.spec.data_model(),
                value.data_model()
            )));
        }
        if let (DataModel::Dense, Some(rank), Some(t)) =
            (self.spec.data_model(), self.spec.rank(), value.as_dense())
        {
            if t.rank() != rank {
                return Err(Error::RankMismatch {
                    expected: rank,
                    got: t.rank(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirror_core::{DType, Shape, Tensor, TensorSequence};

    fn dense_desc(dims: &[usize]) -> VarDesc {
        VarDesc::dense(DType::F32, Shape::from(dims))
    }

    #[test]
    fn test_build_and_forward() {
        let (node, out_desc) = ReverseNode::build("x", "out", &dense_desc(&[2, 3]), &[1]).unwrap();
        assert_eq!(out_desc, dense_desc(&[2, 3]));
        assert_eq!(node.input(), "x");
        assert_eq!(node.output(), "out");

        let x: Value = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], (2, 3))
            .unwrap()
            .into();
        let out = node.forward(&x, &ReverseConfig::default()).unwrap();
        assert_eq!(
            out.as_dense().unwrap().to_vec::<f32>().unwrap(),
            vec![3.0, 2.0, 1.0, 6.0, 5.0, 4.0]
        );
    }

    #[test]
    fn test_build_rejects_bad_axis() {
        assert!(matches!(
            ReverseNode::build("x", "out", &dense_desc(&[2, 3]), &[]).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        assert!(matches!(
            ReverseNode::build("x", "out", &dense_desc(&[2, 3]), &[5]).unwrap_err(),
            Error::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_forward_checks_runtime_value() {
        let (node, _) = ReverseNode::build("x", "out", &dense_desc(&[2, 3]), &[0]).unwrap();
        let seq: Value = TensorSequence::default().into();
        assert!(matches!(
            node.forward(&seq, &ReverseConfig::default()).unwrap_err(),
            Error::InvalidArgument(_)
        ));
        let rank_one: Value = Tensor::from_vec(vec![1.0f32, 2.0], 2).unwrap().into();
        assert!(matches!(
            node.forward(&rank_one, &ReverseConfig::default()).unwrap_err(),
            Error::RankMismatch { expected: 2, got: 1 }
        ));
    }

    #[test]
    fn test_grad_node_wiring() {
        let (node, _) = ReverseNode::build("x", "out", &dense_desc(&[4, 4]), &[0, -1]).unwrap();
        let grad = node.grad_node();
        assert_eq!(grad.input(), "out.grad");
        assert_eq!(grad.output(), "x.grad");
        assert_eq!(grad.spec(), node.spec());

        let desc = node.grad_op_desc();
        assert_eq!(desc.op_type, "reverse");
        assert_eq!(desc.input, grad.input());
        assert_eq!(desc.output, grad.output());
        assert_eq!(desc.axis, vec![0, -1]);
    }
}
