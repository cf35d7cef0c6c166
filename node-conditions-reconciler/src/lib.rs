//! One pass of node condition clearing.
//!
//! The flow is select, confirm, reconcile, report:
//! [`Target`] resolves into a [`RunPlan`], the [`Gate`] asks the operator,
//! the [`Reconciler`] rewrites every node in turn and the [`Report`] prints
//! one line per node.

use std::fmt;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;

use node_conditions::Policy;
use node_conditions_ext as k8s;
use node_conditions_kubeapi::NodeApi;

use k8s::TimeExt as _;
use k8s::metav1;

pub use error::Error;
pub use error::ItemError;
pub use gate::Decision;
pub use gate::Gate;
pub use gate::accepts;
pub use plan::RunPlan;
pub use reconciler::Reconciler;
pub use report::Outcome;
pub use report::Report;
pub use selector::Target;

mod error;
mod gate;
mod plan;
mod reconciler;
mod report;
mod selector;

/// How a run ended when nothing fatal happened
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The operator declined, the cluster was not touched
    Canceled,
    /// Every planned node was processed, in plan order
    Done(Vec<Outcome>),
}

/// Confirm `plan` through `gate`, then clear conditions on every planned node
///
/// Prompt, per-node lines and the closing marker go to `out`, the answer is read from `input`.
/// The overwrite defaults are stamped once here and shared by every node of the run.
///
pub async fn clear_conditions<A, R, W>(
    api: &A,
    plan: &RunPlan,
    gate: &Gate<'_>,
    input: R,
    mut out: W,
) -> Result<Completion, Error>
where
    A: NodeApi + ?Sized,
    R: BufRead,
    W: Write,
{
    let decision = gate.confirm(plan, input, &mut out).map_err(Error::Confirm)?;
    if decision == Decision::Canceled {
        tracing::info!("Operator declined");
        writeln!(out, "Canceled.").map_err(Error::Report)?;
        return Ok(Completion::Canceled);
    }

    let policy = Policy::new(plan.overwrite(), metav1::Time::now());
    let mut report = Report::new(out, !plan.consent());
    Reconciler::new(api, policy)
        .run(plan.nodes(), &mut report)
        .await?;

    report.finish().map(Completion::Done).map_err(Error::Report)
}
