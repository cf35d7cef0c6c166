use std::fmt;

use async_trait::async_trait;
use kube::ResourceExt as _;
use kube::api;
use node_conditions_ext as k8s;

use k8s::corev1;

pub use error::Error;
pub use kubeconfig::KubeContext;

mod error;
mod kubeconfig;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Node operations needed to clear conditions
///
/// `KubeApi` talks to a real cluster, `MockNodeApi` (feature `mock`) stands in for it in tests.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Names of all nodes, in the order the API server returns them
    async fn list_nodes(&self) -> Result<Vec<String>>;

    /// Fetch a fresh copy of node `name`
    async fn get_node(&self, name: &str) -> Result<corev1::Node>;

    /// Replace the `status` subresource of `node` with its local contents
    async fn replace_node_status(&self, node: &corev1::Node) -> Result<corev1::Node>;
}

pub struct KubeApi {
    list_params: api::ListParams,
    post_params: api::PostParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi connected to the cluster of the selected kubeconfig context.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), node_conditions_kubeapi::Error> {
    /// use node_conditions_kubeapi::{KubeApi, KubeContext};
    ///
    /// let context = KubeContext::load("/home/operator/.kube/config", None)?;
    /// let api = KubeApi::with_context(&context).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn with_context(context: &KubeContext) -> Result<Self> {
        context.client().await.map(Self::with_client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// The returned KubeApi lists and replaces with default `ListParams` and `PostParams`.
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            post_params: api::PostParams::default(),
            client,
        }
    }

    /// Returns an Api handle scoped to all Nodes using the configured Kubernetes client.
    fn nodes(&self) -> api::Api<corev1::Node> {
        api::Api::all(self.client.clone())
    }

    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }

    fn post_params(&self) -> &api::PostParams {
        &self.post_params
    }
}

#[async_trait]
impl NodeApi for KubeApi {
    async fn list_nodes(&self) -> Result<Vec<String>> {
        let lp = self.list_params();
        let nodes = self.nodes().list_metadata(lp).await?;
        tracing::debug!(count = nodes.items.len(), "Listed nodes");
        Ok(nodes.items.iter().map(|node| node.name_any()).collect())
    }

    async fn get_node(&self, name: &str) -> Result<corev1::Node> {
        self.nodes()
            .get_opt(name)
            .await?
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    async fn replace_node_status(&self, node: &corev1::Node) -> Result<corev1::Node> {
        let name = node.name_any();
        let pp = self.post_params();
        let node = self.nodes().replace_status(&name, pp, node).await?;
        tracing::debug!(node = name, "Replaced node status");
        Ok(node)
    }
}

impl fmt::Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, showing `list_params` and `post_params` while redacting the `client`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("post_params", &self.post_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}
