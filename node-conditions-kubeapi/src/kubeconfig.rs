use std::env;
use std::path::Path;
use std::path::PathBuf;

use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;

use super::*;

/// A kubeconfig file together with the context selected from it
///
#[derive(Clone, Debug)]
pub struct KubeContext {
    kubeconfig: PathBuf,
    context: String,
    config: Kubeconfig,
}

impl KubeContext {
    /// `$HOME/.kube/config`, when `HOME` is set
    ///
    pub fn default_kubeconfig() -> Option<PathBuf> {
        env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(".kube").join("config"))
    }

    /// Read `kubeconfig` and select `context`, falling back to its `current-context`
    ///
    pub fn load(kubeconfig: impl AsRef<Path>, context: Option<String>) -> Result<Self> {
        let kubeconfig = kubeconfig.as_ref();
        let config = Kubeconfig::read_from(kubeconfig).map_err(|source| Error::ReadKubeconfig {
            path: kubeconfig.to_path_buf(),
            source,
        })?;
        Self::with_kubeconfig(kubeconfig, config, context)
    }

    fn with_kubeconfig(
        kubeconfig: &Path,
        config: Kubeconfig,
        context: Option<String>,
    ) -> Result<Self> {
        let kubeconfig = kubeconfig.to_path_buf();
        let context = context
            .or_else(|| config.current_context.clone())
            .filter(|context| !context.is_empty())
            .ok_or_else(|| Error::NoContext {
                path: kubeconfig.clone(),
            })?;

        if !config.contexts.iter().any(|named| named.name == context) {
            return Err(Error::UnknownContext {
                context,
                path: kubeconfig,
            });
        }

        tracing::debug!(%context, kubeconfig = %kubeconfig.display(), "Selected context");

        Ok(Self {
            kubeconfig,
            context,
            config,
        })
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn kubeconfig(&self) -> &Path {
        &self.kubeconfig
    }

    /// Build a client talking to the cluster behind the selected context
    ///
    pub async fn client(&self) -> Result<kube::Client> {
        let options = KubeConfigOptions {
            context: Some(self.context.clone()),
            ..k8s::default()
        };
        let config = kube::Config::from_custom_kubeconfig(self.config.clone(), &options)
            .await
            .map_err(|source| Error::LoadContext {
                context: self.context.clone(),
                source,
            })?;
        kube::Client::try_from(config).map_err(Error::Kube)
    }
}
