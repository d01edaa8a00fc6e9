//! Host seam: transform handles and the per-frame stream trait.
//!
//! v1 uses small string keys as TargetHandle, resolved and owned by the
//! host. The core never walks a scene graph; it reads and writes local
//! rotations through `RigStream` once per evaluation.

use crate::quat::Quat;

/// Opaque target handle (small string key). An unset reference is the
/// empty string; configuration validation rejects it before binding.
pub type TargetHandle = String;

/// Per-evaluation view of the host rig. Adapters implement this over their
/// scene representation and pass it into `TwistCorrectionJob::bind` /
/// `evaluate`.
pub trait RigStream {
    /// Current local rotation of a bound transform.
    fn local_rotation(&self, handle: &TargetHandle) -> Quat;

    /// Write a transform's new local rotation.
    fn set_local_rotation(&mut self, handle: &TargetHandle, rotation: Quat);

    /// Raw per-node weight for this frame, by node index. Not clamped here;
    /// blending clamps to [-1, 1].
    fn sample_weight(&self, node_index: usize) -> f32;

    /// Overall blend strength in [0, 1] gating the whole effect.
    fn global_weight(&self) -> f32;
}
