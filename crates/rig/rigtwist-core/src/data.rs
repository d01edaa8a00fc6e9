//! Configuration surface for the twist correction constraint.
//!
//! A plain serde struct supplied in-process by the host (or parsed from
//! JSON); no persisted format is owned here. Field defaults are the reset
//! values: axis Z, zero shift, empty node list, full global weight.

use serde::{Deserialize, Serialize};

use crate::binding::TargetHandle;
use crate::error::RigError;

/// The local axis of the source on which to evaluate twist rotation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwistAxis {
    X,
    Y,
    #[default]
    Z,
}

impl TwistAxis {
    /// 0/1 axis mask used to isolate the twist component of a quaternion's
    /// vector part.
    #[inline]
    pub fn mask(self) -> [f32; 3] {
        match self {
            TwistAxis::X => [1.0, 0.0, 0.0],
            TwistAxis::Y => [0.0, 1.0, 0.0],
            TwistAxis::Z => [0.0, 0.0, 1.0],
        }
    }
}

/// One twist node: a transform driven by the constraint and a signed blend
/// weight in [-1, 1]. Positive weights follow the source twist, negative
/// weights follow the opposite twist.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TwistNode {
    pub transform: TargetHandle,
    #[serde(default)]
    pub weight: f32,
}

impl TwistNode {
    pub fn new(transform: impl Into<TargetHandle>, weight: f32) -> Self {
        Self {
            transform: transform.into(),
            weight,
        }
    }
}

/// Full configuration for one constraint instance. Immutable once bound;
/// node identity is positional (index), not by name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TwistCorrectionData {
    /// The source transform whose twist is redistributed. Required.
    pub source: TargetHandle,
    #[serde(default)]
    pub twist_axis: TwistAxis,
    /// Offset in degrees about the up axis, applied before twist extraction
    /// and undone after blending.
    #[serde(default)]
    pub zero_angle_shift: f32,
    #[serde(default)]
    pub twist_nodes: Vec<TwistNode>,
    /// Overall blend strength in [0, 1].
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

impl Default for TwistCorrectionData {
    fn default() -> Self {
        Self {
            source: TargetHandle::new(),
            twist_axis: TwistAxis::default(),
            zero_angle_shift: 0.0,
            twist_nodes: Vec::new(),
            weight: 1.0,
        }
    }
}

impl TwistCorrectionData {
    /// Structural prerequisites for binding: the source and every node
    /// transform must be set. Not recoverable at evaluation time.
    pub fn validate(&self) -> Result<(), RigError> {
        if self.source.is_empty() {
            return Err(RigError::InvalidConfiguration(
                "source transform is unset".into(),
            ));
        }
        for (i, node) in self.twist_nodes.iter().enumerate() {
            if node.transform.is_empty() {
                return Err(RigError::InvalidConfiguration(format!(
                    "twist node {i} transform is unset"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_masks() {
        assert_eq!(TwistAxis::X.mask(), [1.0, 0.0, 0.0]);
        assert_eq!(TwistAxis::Y.mask(), [0.0, 1.0, 0.0]);
        assert_eq!(TwistAxis::Z.mask(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn defaults_match_reset_values() {
        let data = TwistCorrectionData::default();
        assert_eq!(data.twist_axis, TwistAxis::Z);
        assert_eq!(data.zero_angle_shift, 0.0);
        assert!(data.twist_nodes.is_empty());
        assert_eq!(data.weight, 1.0);
    }

    #[test]
    fn json_defaults_fill_missing_fields() {
        let data: TwistCorrectionData =
            serde_json::from_str(r#"{ "source": "rig/forearm" }"#).unwrap();
        assert_eq!(data.source, "rig/forearm");
        assert_eq!(data.twist_axis, TwistAxis::Z);
        assert_eq!(data.weight, 1.0);
    }

    #[test]
    fn validate_rejects_unset_references() {
        let mut data = TwistCorrectionData::default();
        assert!(matches!(
            data.validate(),
            Err(RigError::InvalidConfiguration(_))
        ));

        data.source = "rig/forearm".into();
        data.twist_nodes.push(TwistNode::new("", 0.5));
        assert!(matches!(
            data.validate(),
            Err(RigError::InvalidConfiguration(_))
        ));

        data.twist_nodes[0].transform = "rig/forearm_twist".into();
        assert!(data.validate().is_ok());
    }
}
