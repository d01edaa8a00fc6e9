//! Shared fixtures for rigtwist crates: canned constraint configurations
//! and an in-memory `RigStream` implementation for tests and benches.

use anyhow::{bail, Context, Result};
use hashbrown::HashMap;

use rigtwist_core::quat::IDENTITY;
use rigtwist_core::{Quat, RigStream, TargetHandle, TwistCorrectionData};

/// Load a canned constraint configuration by name.
pub fn load_config(name: &str) -> Result<TwistCorrectionData> {
    let raw = match name {
        "forearm" => include_str!("../fixtures/forearm.json"),
        "thigh" => include_str!("../fixtures/thigh.json"),
        other => bail!("unknown rig fixture `{other}`"),
    };
    serde_json::from_str(raw).with_context(|| format!("rig fixture `{name}` should parse"))
}

/// Minimal in-memory rig: local rotations keyed by handle, per-node weights
/// by index, one global weight. Unknown handles read as identity.
#[derive(Clone, Debug, Default)]
pub struct FixtureRig {
    rotations: HashMap<TargetHandle, Quat>,
    weights: Vec<f32>,
    global_weight: f32,
    write_count: usize,
}

impl FixtureRig {
    pub fn new() -> Self {
        Self {
            global_weight: 1.0,
            ..Self::default()
        }
    }

    /// Build a rig seeded from a configuration: every referenced transform
    /// at identity, per-node weights taken from the node list.
    pub fn from_config(data: &TwistCorrectionData) -> Self {
        let mut rig = Self::new();
        rig.rotations.insert(data.source.clone(), IDENTITY);
        for node in &data.twist_nodes {
            rig.rotations.insert(node.transform.clone(), IDENTITY);
            rig.weights.push(node.weight);
        }
        rig.global_weight = data.weight;
        rig
    }

    pub fn set_rotation(&mut self, handle: impl Into<TargetHandle>, rotation: Quat) {
        self.rotations.insert(handle.into(), rotation);
    }

    pub fn rotation(&self, handle: &str) -> Quat {
        self.rotations.get(handle).copied().unwrap_or(IDENTITY)
    }

    pub fn set_weight(&mut self, node_index: usize, weight: f32) {
        if node_index >= self.weights.len() {
            self.weights.resize(node_index + 1, 0.0);
        }
        self.weights[node_index] = weight;
    }

    pub fn set_global_weight(&mut self, weight: f32) {
        self.global_weight = weight;
    }

    /// Number of `set_local_rotation` calls observed so far; lets tests
    /// assert the pass-through path writes nothing.
    pub fn write_count(&self) -> usize {
        self.write_count
    }
}

impl RigStream for FixtureRig {
    fn local_rotation(&self, handle: &TargetHandle) -> Quat {
        self.rotations.get(handle).copied().unwrap_or(IDENTITY)
    }

    fn set_local_rotation(&mut self, handle: &TargetHandle, rotation: Quat) {
        self.rotations.insert(handle.clone(), rotation);
        self.write_count += 1;
    }

    fn sample_weight(&self, node_index: usize) -> f32 {
        self.weights.get(node_index).copied().unwrap_or(0.0)
    }

    fn global_weight(&self) -> f32 {
        self.global_weight
    }
}
