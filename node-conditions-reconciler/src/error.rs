use node_conditions_kubeapi as kubeapi;

use super::*;

/// Errors that stop the whole run
///
/// Nodes processed before the failure keep their new conditions.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to list nodes")]
    ListNodes(#[source] kubeapi::Error),

    #[error("failed to get node {name:?}")]
    GetNode {
        name: String,
        #[source]
        source: kubeapi::Error,
    },

    #[error("failed to read confirmation")]
    Confirm(#[source] io::Error),

    #[error("failed to write report")]
    Report(#[source] io::Error),
}

/// Errors confined to a single node, recorded as a failed outcome
///
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("failed to update status of node {name:?}")]
    UpdateStatus {
        name: String,
        #[source]
        source: kubeapi::Error,
    },
}

impl ItemError {
    pub fn name(&self) -> &str {
        match self {
            Self::UpdateStatus { name, .. } => name,
        }
    }
}
