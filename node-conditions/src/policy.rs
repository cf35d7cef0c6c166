use super::*;

/// How a node's condition list is rewritten
///
#[derive(Clone, Debug, PartialEq)]
pub enum Policy {
    /// Drop every condition that is not kubelet owned, keep the rest verbatim
    ///
    Prune,
    /// Throw away the current conditions and install the healthy defaults
    ///
    Overwrite(HealthyConditions),
}

impl Policy {
    /// Select the policy for a run, `now` stamps the healthy defaults
    ///
    pub fn new(overwrite: bool, now: metav1::Time) -> Self {
        if overwrite {
            Self::Overwrite(HealthyConditions::new(now))
        } else {
            Self::Prune
        }
    }

    pub fn is_overwrite(&self) -> bool {
        matches!(self, Self::Overwrite(_))
    }

    /// Compute the new condition list from the current one
    ///
    pub fn apply(&self, conditions: Vec<corev1::NodeCondition>) -> Vec<corev1::NodeCondition> {
        match self {
            Self::Prune => prune(conditions),
            Self::Overwrite(healthy) => healthy.to_vec(),
        }
    }
}

/// Keep only kubelet owned conditions, preserving their order and values
///
/// Only the first entry of each kind survives. Missing kinds are not filled in.
///
pub fn prune(
    conditions: impl IntoIterator<Item = corev1::NodeCondition>,
) -> Vec<corev1::NodeCondition> {
    let mut seen = HashSet::new();
    conditions
        .into_iter()
        .filter(|condition| {
            ConditionKind::recognize(&condition.type_).is_some_and(|kind| seen.insert(kind))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use k8s_openapi::jiff::Timestamp;

    use super::*;

    fn time(seconds: i64) -> metav1::Time {
        metav1::Time(Timestamp::from_second(seconds).unwrap())
    }

    fn condition(type_: &str, status: &str, reason: &str) -> corev1::NodeCondition {
        corev1::NodeCondition {
            type_: type_.to_string(),
            status: status.to_string(),
            last_heartbeat_time: Some(time(1_700_000_000)),
            last_transition_time: Some(time(1_600_000_000)),
            reason: Some(reason.to_string()),
            message: Some(format!("{type_} is {status}")),
        }
    }

    fn n1() -> Vec<corev1::NodeCondition> {
        vec![
            condition("Ready", "True", "KubeletReady"),
            condition("DiskPressure", "True", "KubeletHasDiskPressure"),
            condition("CustomTaintCondition", "X", "SomethingElse"),
        ]
    }

    #[test]
    fn prune_drops_unrecognized() {
        let conditions = n1();
        let pruned = Policy::Prune.apply(conditions.clone());

        assert_eq!(pruned, conditions[..2]);
    }

    #[test]
    fn prune_preserves_order_and_values() {
        let conditions = vec![
            condition("NetworkUnavailable", "False", "RouteCreated"),
            condition("PIDPressure", "Unknown", "NodeStatusUnknown"),
            condition("Ready", "False", "KubeletNotReady"),
            condition("FrequentKubeletRestart", "False", "NoFrequentKubeletRestart"),
            condition("MemoryPressure", "True", "KubeletHasInsufficientMemory"),
        ];

        let pruned = prune(conditions.clone());

        assert_eq!(
            pruned,
            [
                conditions[1].clone(),
                conditions[2].clone(),
                conditions[4].clone()
            ]
        );
    }

    #[test]
    fn prune_does_not_synthesize() {
        let pruned = prune(vec![condition("Ready", "True", "KubeletReady")]);
        assert_eq!(pruned.len(), 1);

        assert!(prune(Vec::new()).is_empty());
    }

    #[test]
    fn prune_keeps_first_of_each_kind() {
        let conditions = vec![
            condition("Ready", "True", "KubeletReady"),
            condition("Ready", "False", "KubeletNotReady"),
            condition("Foo", "X", "SomethingElse"),
            condition("DiskPressure", "False", "KubeletHasNoDiskPressure"),
            condition("DiskPressure", "True", "KubeletHasDiskPressure"),
        ];

        let pruned = prune(conditions.clone());

        assert_eq!(pruned, [conditions[0].clone(), conditions[3].clone()]);
        assert_eq!(prune(pruned.clone()), pruned);
    }

    #[test]
    fn prune_is_idempotent() {
        let once = prune(n1());
        let twice = prune(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn overwrite_discards_everything() {
        let now = time(1_800_000_000);
        let policy = Policy::new(true, now.clone());
        let conditions = policy.apply(n1());

        assert!(policy.is_overwrite());
        assert_eq!(conditions, HealthyConditions::new(now).to_vec());
        let disk = conditions
            .iter()
            .find(|condition| condition.type_ == "DiskPressure")
            .unwrap();
        assert_eq!(disk.status, "False");
    }

    #[test]
    fn overwrite_is_convergent() {
        let policy = Policy::new(true, time(1_800_000_000));

        let from_empty = policy.apply(Vec::new());
        let from_n1 = policy.apply(n1());
        let again = policy.apply(from_n1.clone());

        assert_eq!(from_empty, from_n1);
        assert_eq!(from_n1, again);
        assert_eq!(again.len(), 4);
    }

    #[test]
    fn default_is_prune() {
        let policy = Policy::new(false, time(0));

        assert_eq!(policy, Policy::Prune);
        assert!(!policy.is_overwrite());
    }
}
