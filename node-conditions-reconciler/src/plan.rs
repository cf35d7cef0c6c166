use super::*;

/// Everything decided before the first node is touched
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunPlan {
    nodes: Vec<String>,
    overwrite: bool,
    consent: bool,
}

impl RunPlan {
    pub fn new(nodes: Vec<String>, overwrite: bool, consent: bool) -> Self {
        Self {
            nodes,
            overwrite,
            consent,
        }
    }

    /// Resolve `target` against the cluster and freeze the result
    ///
    pub async fn resolve<A>(
        api: &A,
        target: &Target,
        overwrite: bool,
        consent: bool,
    ) -> Result<Self, Error>
    where
        A: NodeApi + ?Sized,
    {
        let nodes = target.resolve(api).await?;
        tracing::debug!(?nodes, overwrite, consent, "Resolved run plan");
        Ok(Self::new(nodes, overwrite, consent))
    }

    /// Target node names in processing order
    ///
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Operator consent was given up front, no prompt is shown
    ///
    pub fn consent(&self) -> bool {
        self.consent
    }
}
