//! The twist correction job: bind state captured once, then a per-frame
//! evaluation pass that extracts the source twist and blends every node.
//!
//! Evaluation is allocation-free: the weight buffer and bind-rotation array
//! are sized at bind time and only overwritten afterwards. Per-node
//! blending has no cross-node data dependency; nodes may be processed in
//! any order (or in parallel by a host that provides it) once the shared
//! `TwistFrame` is computed.

use log::{debug, warn};

use crate::binding::{RigStream, TargetHandle};
use crate::data::TwistCorrectionData;
use crate::error::RigError;
use crate::quat::{inverse_quat, mul_quat, slerp_quat, Quat};
use crate::twist::TwistFrame;

/// Bind state plus per-frame buffers for one constraint instance.
///
/// `source_inverse_bind_rotation` and `twist_bind_rotations` are captured
/// at bind time and never mutated afterwards; mutating the live transforms
/// through evaluation does not feed back into them.
#[derive(Clone, Debug)]
pub struct TwistCorrectionJob {
    pub source: TargetHandle,
    pub source_inverse_bind_rotation: Quat,
    pub axis_mask: [f32; 3],
    pub zero_angle_shift: f32,
    pub twist_transforms: Vec<TargetHandle>,
    pub twist_bind_rotations: Vec<Quat>,
    /// Scratch for this frame's sampled weights, one per node.
    pub weight_buffer: Vec<f32>,
}

impl TwistCorrectionJob {
    /// Capture bind state from the current stream and size the buffers.
    ///
    /// Fails with `InvalidConfiguration` when the source or any node
    /// transform reference is unset.
    pub fn bind(data: &TwistCorrectionData, stream: &impl RigStream) -> Result<Self, RigError> {
        data.validate()?;

        let node_count = data.twist_nodes.len();
        let mut twist_transforms = Vec::with_capacity(node_count);
        let mut twist_bind_rotations = Vec::with_capacity(node_count);
        for node in &data.twist_nodes {
            twist_transforms.push(node.transform.clone());
            twist_bind_rotations.push(stream.local_rotation(&node.transform));
        }

        let axis_mask = data.twist_axis.mask();
        debug!(
            "bound twist correction: source={}, nodes={}, axis={:?}, shift={}",
            data.source, node_count, data.twist_axis, data.zero_angle_shift
        );

        Ok(Self {
            source: data.source.clone(),
            source_inverse_bind_rotation: inverse_quat(stream.local_rotation(&data.source)),
            axis_mask,
            zero_angle_shift: data.zero_angle_shift,
            twist_transforms,
            twist_bind_rotations,
            weight_buffer: vec![0.0; node_count],
        })
    }

    /// One evaluation pass over every node.
    ///
    /// A global weight of zero (or below) is a pass-through: no node is
    /// touched, none is reset to its bind rotation. Otherwise the weight
    /// buffer is refreshed in place, the twist is extracted once from the
    /// current source rotation, and each node is blended independently in
    /// sequence order.
    pub fn evaluate(&mut self, stream: &mut impl RigStream) -> Result<(), RigError> {
        let global_weight = sanitize_global_weight(stream.global_weight());
        if global_weight <= 0.0 {
            return Ok(());
        }
        if self.twist_transforms.is_empty() {
            return Ok(());
        }

        let node_count = self.twist_transforms.len();
        if self.weight_buffer.len() != node_count {
            return Err(RigError::BufferSizeMismatch {
                expected: node_count,
                found: self.weight_buffer.len(),
            });
        }
        if self.twist_bind_rotations.len() != node_count {
            return Err(RigError::BufferSizeMismatch {
                expected: node_count,
                found: self.twist_bind_rotations.len(),
            });
        }

        // Refresh raw weights for this frame; clamping happens per node.
        for i in 0..node_count {
            self.weight_buffer[i] = stream.sample_weight(i);
        }

        let frame = TwistFrame::extract(
            self.axis_mask,
            self.zero_angle_shift,
            self.source_inverse_bind_rotation,
            stream.local_rotation(&self.source),
        );

        for i in 0..node_count {
            let mut raw = self.weight_buffer[i];
            if !raw.is_finite() {
                warn!("non-finite weight {raw} at twist node {i}, treating as 0");
                raw = 0.0;
            }
            let rotation = blend_node(&frame, self.twist_bind_rotations[i], raw, global_weight);
            stream.set_local_rotation(&self.twist_transforms[i], rotation);
        }

        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.twist_transforms.len()
    }
}

/// Blend one node's rotation for this frame. Pure. Order of operations:
/// clamp, sign branch, reapply shift, spherical interpolation from the bind
/// rotation, then post-multiply the inverse shift. The interpolate-then-
/// shift order is load-bearing: interpolation does not distribute over the
/// shift multiplication.
pub fn blend_node(frame: &TwistFrame, bind_rotation: Quat, raw_weight: f32, global_weight: f32) -> Quat {
    let weight = raw_weight.clamp(-1.0, 1.0);
    // Weight exactly 0 takes the forward branch; the blend factor is 0
    // either way, so only the branch shape matters.
    let target = if weight < 0.0 {
        frame.inv_twist
    } else {
        frame.twist
    };
    let target = mul_quat(frame.shift, target);
    let blend = weight.abs() * global_weight;
    let rotation = slerp_quat(bind_rotation, target, blend);
    mul_quat(rotation, frame.inv_shift)
}

fn sanitize_global_weight(weight: f32) -> f32 {
    if weight.is_finite() {
        weight.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
