use super::*;

/// Terminal result for one node
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Cleared(String),
    Failed(String),
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Cleared(name) | Self::Failed(name) => name,
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleared(name) => write!(f, "Cleared: {name}"),
            Self::Failed(name) => write!(f, "Failed: {name}"),
        }
    }
}

/// Prints every outcome as it happens and keeps them in processing order
///
#[derive(Debug)]
pub struct Report<W> {
    out: W,
    interactive: bool,
    outcomes: Vec<Outcome>,
}

impl<W: Write> Report<W> {
    /// `interactive` runs end with a `Done.` marker
    ///
    pub fn new(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: Outcome) -> io::Result<()> {
        writeln!(self.out, "{outcome}")?;
        self.outcomes.push(outcome);
        Ok(())
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn finish(mut self) -> io::Result<Vec<Outcome>> {
        if self.interactive {
            writeln!(self.out, "Done.")?;
        }
        self.out.flush()?;
        let cleared = self.outcomes.iter().filter(|outcome| outcome.is_cleared()).count();
        tracing::info!(
            cleared,
            failed = self.outcomes.len() - cleared,
            "Finished clearing conditions"
        );
        Ok(self.outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_lines() {
        assert_eq!(Outcome::Cleared("n1".to_string()).to_string(), "Cleared: n1");
        assert_eq!(Outcome::Failed("n2".to_string()).to_string(), "Failed: n2");
    }

    #[test]
    fn interactive_report_is_closed() {
        let mut out = Vec::new();
        let mut report = Report::new(&mut out, true);
        report.record(Outcome::Failed("a".to_string())).unwrap();
        report.record(Outcome::Cleared("b".to_string())).unwrap();

        let outcomes = report.finish().unwrap();

        assert_eq!(outcomes.iter().map(Outcome::name).collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(String::from_utf8(out).unwrap(), "Failed: a\nCleared: b\nDone.\n");
    }

    #[test]
    fn consented_report_has_no_marker() {
        let mut out = Vec::new();
        let mut report = Report::new(&mut out, false);
        report.record(Outcome::Cleared("a".to_string())).unwrap();
        assert_eq!(report.outcomes().len(), 1);

        report.finish().unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Cleared: a\n");
    }

    #[test]
    fn empty_report() {
        let mut out = Vec::new();
        let outcomes = Report::new(&mut out, true).finish().unwrap();

        assert!(outcomes.is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "Done.\n");
    }
}
