use std::io;
use std::path::PathBuf;

use clap::CommandFactory as _;
use clap::Parser;
use node_conditions_kubeapi::KubeApi;
use node_conditions_kubeapi::KubeContext;
use node_conditions_reconciler as reconciler;
use tracing_subscriber::EnvFilter;

use reconciler::Completion;
use reconciler::Gate;
use reconciler::RunPlan;
use reconciler::Target;

use cli::Cli;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(io::stderr)
        .init();

    let Some(target) = cli.target() else {
        Cli::command().print_long_help()?;
        return Ok(());
    };

    let kubeconfig = cli
        .kubeconfig()
        .ok_or("cannot locate kubeconfig: HOME is not set, use --kubeconfig")?;
    let context = KubeContext::load(&kubeconfig, cli.context.clone())?;
    let api = KubeApi::with_context(&context).await?;
    tracing::debug!(context = context.context(), ?api, "Connected");

    let plan = RunPlan::resolve(&api, &target, cli.overwrite, cli.consent).await?;
    let gate = Gate::new(context.context(), context.kubeconfig());

    let completion =
        reconciler::clear_conditions(&api, &plan, &gate, io::stdin().lock(), io::stdout().lock())
            .await?;

    match completion {
        Completion::Canceled => tracing::debug!("Canceled by operator"),
        Completion::Done(outcomes) => {
            let failed = outcomes.iter().filter(|outcome| !outcome.is_cleared()).count();
            tracing::debug!(nodes = outcomes.len(), failed, "Run complete");
        }
    }

    Ok(())
}
