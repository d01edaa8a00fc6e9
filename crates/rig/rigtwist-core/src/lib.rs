//! Twist correction rig constraint (engine-agnostic core).
//!
//! Distributes the twist of one source transform across a set of twist
//! nodes, each blended by an independent signed weight. The host owns the
//! scene graph: it implements [`RigStream`], binds a [`TwistCorrectionJob`]
//! once from a [`TwistCorrectionData`] configuration, and calls
//! [`TwistCorrectionJob::evaluate`] once per animation frame. Evaluation is
//! allocation-free and safe to drive from a real-time scheduler.

pub mod binding;
pub mod data;
pub mod error;
pub mod job;
pub mod quat;
pub mod twist;

// Re-exports for consumers (adapters)
pub use binding::{RigStream, TargetHandle};
pub use data::{TwistAxis, TwistCorrectionData, TwistNode};
pub use error::RigError;
pub use job::{blend_node, TwistCorrectionJob};
pub use quat::Quat;
pub use twist::TwistFrame;
