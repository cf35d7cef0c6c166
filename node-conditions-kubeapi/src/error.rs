use std::path::PathBuf;

use kube::config::KubeconfigError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read kubeconfig {}", path.display())]
    ReadKubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("kubeconfig {} has no current context and none was selected", path.display())]
    NoContext { path: PathBuf },

    #[error("context {context:?} not found in kubeconfig {}", path.display())]
    UnknownContext { context: String, path: PathBuf },

    #[error("failed to load context {context:?}")]
    LoadContext {
        context: String,
        #[source]
        source: KubeconfigError,
    },

    #[error(r#"nodes "{0}" not found"#)]
    NotFound(String),

    #[error(transparent)]
    Kube(#[from] kube::Error),
}
