use super::*;

/// Clear non-kubelet conditions from nodes, or reset them to a healthy state
#[derive(Debug, Parser)]
#[command(name = "kubectl-clear-conditions", version, about, long_about = None)]
pub(crate) struct Cli {
    /// Node to clear, required unless --all is given
    pub(crate) node: Option<String>,

    /// Run without confirmation
    #[arg(short = 'y', long = "yes", visible_alias = "consent")]
    pub(crate) consent: bool,

    /// Run on all nodes in context
    #[arg(short, long)]
    pub(crate) all: bool,

    /// Overwrite conditions with default status
    #[arg(long)]
    pub(crate) overwrite: bool,

    /// Select context/cluster [default: current-context of the kubeconfig]
    #[arg(long)]
    pub(crate) context: Option<String>,

    /// Override kube config file name [default: $HOME/.kube/config]
    #[arg(long, visible_alias = "config-path", value_name = "PATH")]
    pub(crate) kubeconfig: Option<PathBuf>,

    /// Log diagnostics at debug level to stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn target(&self) -> Option<Target> {
        Target::new(self.node.clone(), self.all)
    }

    pub(crate) fn kubeconfig(&self) -> Option<PathBuf> {
        self.kubeconfig
            .clone()
            .or_else(KubeContext::default_kubeconfig)
    }

    /// `RUST_LOG` wins, otherwise warnings only unless `--verbose`
    pub(crate) fn log_filter(&self) -> EnvFilter {
        let level = if self.verbose { "debug" } else { "warn" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}
