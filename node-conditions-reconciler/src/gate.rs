use super::*;

const COLUMNS: usize = 3;
const COLUMN_WIDTH: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Canceled,
}

/// Operator confirmation, asked once per run
///
#[derive(Clone, Copy, Debug)]
pub struct Gate<'a> {
    context: &'a str,
    kubeconfig: &'a Path,
}

impl<'a> Gate<'a> {
    pub fn new(context: &'a str, kubeconfig: &'a Path) -> Self {
        Self {
            context,
            kubeconfig,
        }
    }

    /// Show the plan summary on `out` and read one answer line from `input`
    ///
    /// With consent already given nothing is written and nothing is read.
    ///
    pub fn confirm(
        &self,
        plan: &RunPlan,
        mut input: impl BufRead,
        mut out: impl Write,
    ) -> io::Result<Decision> {
        if plan.consent() {
            return Ok(Decision::Proceed);
        }

        self.summary(plan, &mut out)?;
        write!(out, "Do you want to continue? [y/N] ")?;
        out.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;

        let decision = if accepts(&answer) {
            Decision::Proceed
        } else {
            Decision::Canceled
        };
        Ok(decision)
    }

    fn summary(&self, plan: &RunPlan, mut out: impl Write) -> io::Result<()> {
        if plan.overwrite() {
            writeln!(out, "Main conditions will be OVERWRITTEN with default values.\n")?;
        }
        writeln!(out, "Clear conditions for: \n")?;
        writeln!(out, "Context: {}", self.context)?;
        writeln!(out, "Kubeconfig: {}", self.kubeconfig.display())?;
        writeln!(out, "Node(s):")?;
        for row in plan.nodes().chunks(COLUMNS) {
            for node in row {
                write!(out, "{node:<COLUMN_WIDTH$}")?;
            }
            writeln!(out)?;
        }
        writeln!(out)
    }
}

/// Only `y` or `Y` proceeds, anything else including an empty line declines
///
pub fn accepts(answer: &str) -> bool {
    answer
        .split_whitespace()
        .next()
        .is_some_and(|word| word.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> Gate<'static> {
        Gate::new("prod-eu", Path::new("/home/operator/.kube/config"))
    }

    fn plan(nodes: &[&str], overwrite: bool, consent: bool) -> RunPlan {
        let nodes = nodes.iter().map(|name| name.to_string()).collect();
        RunPlan::new(nodes, overwrite, consent)
    }

    fn confirm(plan: &RunPlan, answer: &str) -> (Decision, String) {
        let mut out = Vec::new();
        let decision = gate().confirm(plan, answer.as_bytes(), &mut out).unwrap();
        (decision, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_only_y() {
        assert!(accepts("y"));
        assert!(accepts("Y"));
        assert!(accepts("y\n"));
        assert!(accepts("  Y  \r\n"));

        assert!(!accepts(""));
        assert!(!accepts("\n"));
        assert!(!accepts("n"));
        assert!(!accepts("yes"));
        assert!(!accepts("N"));
        assert!(!accepts("yy"));
    }

    #[test]
    fn proceed_on_y() {
        let (decision, _) = confirm(&plan(&["n1"], false, false), "y\n");
        assert_eq!(decision, Decision::Proceed);
    }

    #[test]
    fn cancel_on_eof() {
        let (decision, out) = confirm(&plan(&["n1"], false, false), "");
        assert_eq!(decision, Decision::Canceled);
        assert!(out.ends_with("Do you want to continue? [y/N] "));
    }

    #[test]
    fn consent_writes_and_reads_nothing() {
        let (decision, out) = confirm(&plan(&["n1"], true, true), "");
        assert_eq!(decision, Decision::Proceed);
        assert!(out.is_empty());
    }

    #[test]
    fn summary_layout() {
        let (_, out) = confirm(&plan(&["n1", "n2"], false, false), "n\n");

        let expected = format!(
            "Clear conditions for: \n\nContext: prod-eu\nKubeconfig: /home/operator/.kube/config\nNode(s):\n{:<50}{:<50}\n\nDo you want to continue? [y/N] ",
            "n1", "n2"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn summary_warns_on_overwrite() {
        let (_, out) = confirm(&plan(&["n1"], true, false), "n\n");
        assert!(out.starts_with(
            "Main conditions will be OVERWRITTEN with default values.\n\nClear conditions for: \n"
        ));
    }

    #[test]
    fn nodes_three_per_row() {
        let nodes = ["a", "b", "c", "d"];
        let (_, out) = confirm(&plan(&nodes, false, false), "n\n");

        let rows = out
            .lines()
            .skip_while(|line| *line != "Node(s):")
            .skip(1)
            .take_while(|line| !line.is_empty())
            .map(str::trim_end)
            .collect::<Vec<_>>();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], format!("{:<50}{:<50}c", "a", "b"));
        assert_eq!(rows[1], "d");
    }
}
