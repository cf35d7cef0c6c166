//! Node condition model shared by the clear-conditions tooling.
//!
//! A node reports its health through a list of `NodeCondition` entries.
//! Only four condition types are owned by the kubelet and understood here,
//! see [`ConditionKind`]. Everything else on the node is treated as noise.

use std::collections::HashSet;
use std::fmt;
use std::str;

use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

pub use error::Error;
pub use healthy::HealthyConditions;
pub use kind::ConditionKind;
pub use kind::ConditionStatus;
pub use policy::Policy;
pub use policy::prune;

mod error;
mod healthy;
mod kind;
mod policy;
