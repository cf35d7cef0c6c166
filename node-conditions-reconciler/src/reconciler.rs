use k8s::NodeExt as _;

use super::*;

/// Rewrites node conditions one node at a time under a single policy
///
pub struct Reconciler<'a, A: ?Sized> {
    api: &'a A,
    policy: Policy,
}

impl<'a, A> Reconciler<'a, A>
where
    A: NodeApi + ?Sized,
{
    pub fn new(api: &'a A, policy: Policy) -> Self {
        Self { api, policy }
    }

    /// Process `nodes` strictly in order, recording one outcome per node
    ///
    /// A failed fetch aborts the loop, a failed update is recorded and the loop moves on.
    ///
    pub async fn run<W: Write>(&self, nodes: &[String], report: &mut Report<W>) -> Result<(), Error> {
        for name in nodes {
            let outcome = match self.clear(name).await? {
                Ok(()) => Outcome::Cleared(name.clone()),
                Err(err) => {
                    tracing::warn!(node = err.name(), error = ?err, "Failed to update node status");
                    Outcome::Failed(name.clone())
                }
            };
            report.record(outcome).map_err(Error::Report)?;
        }
        Ok(())
    }

    /// Fetch, rewrite and submit a single node
    ///
    /// The outer error is fatal for the run, the inner one only for this node.
    ///
    pub async fn clear(&self, name: &str) -> Result<Result<(), ItemError>, Error> {
        let mut node = self
            .api
            .get_node(name)
            .await
            .map_err(|source| Error::GetNode {
                name: name.to_string(),
                source,
            })?;

        let current = node.take_conditions();
        let before = current.len();
        let conditions = self.policy.apply(current);
        tracing::debug!(
            node = name,
            before,
            after = conditions.len(),
            overwrite = self.policy.is_overwrite(),
            "Rewriting conditions"
        );
        node.set_conditions(conditions);

        let updated = self
            .api
            .replace_node_status(&node)
            .await
            .map(|_| ())
            .map_err(|source| ItemError::UpdateStatus {
                name: name.to_string(),
                source,
            });
        Ok(updated)
    }
}

impl<A: ?Sized> fmt::Debug for Reconciler<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconciler")
            .field("api", &"<NodeApi>")
            .field("policy", &self.policy)
            .finish()
    }
}
