use super::*;

/// Which nodes the operator asked for
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A single node, not checked for existence until it is fetched
    Node(String),
    /// Every node of the selected context
    All,
}

impl Target {
    /// `None` when neither a node nor `all` was given, `all` wins over a node name
    ///
    pub fn new(node: Option<String>, all: bool) -> Option<Self> {
        if all {
            Some(Self::All)
        } else {
            node.map(Self::Node)
        }
    }

    pub async fn resolve<A>(&self, api: &A) -> Result<Vec<String>, Error>
    where
        A: NodeApi + ?Sized,
    {
        match self {
            Self::Node(name) => Ok(vec![name.clone()]),
            Self::All => api.list_nodes().await.map_err(Error::ListNodes),
        }
    }
}
