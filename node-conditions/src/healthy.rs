use super::*;

/// The four conditions a healthy kubelet posts, in the order it posts them
///
/// Built once per run from a single timestamp so every node touched in the
/// same run ends up with identical heartbeat and transition times.
///
#[derive(Clone, Debug, PartialEq)]
pub struct HealthyConditions([corev1::NodeCondition; 4]);

impl HealthyConditions {
    pub fn new(now: metav1::Time) -> Self {
        Self([
            condition(
                ConditionKind::MemoryPressure,
                ConditionStatus::False,
                "KubeletHasSufficientMemory",
                "kubelet has sufficient memory available",
                &now,
            ),
            condition(
                ConditionKind::DiskPressure,
                ConditionStatus::False,
                "KubeletHasNoDiskPressure",
                "kubelet has no disk pressure",
                &now,
            ),
            condition(
                ConditionKind::PIDPressure,
                ConditionStatus::False,
                "KubeletHasSufficientPID",
                "kubelet has sufficient PID available",
                &now,
            ),
            condition(
                ConditionKind::Ready,
                ConditionStatus::True,
                "KubeletReady",
                "kubelet is posting ready status",
                &now,
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &corev1::NodeCondition> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<corev1::NodeCondition> {
        self.0.to_vec()
    }
}

fn condition(
    kind: ConditionKind,
    status: ConditionStatus,
    reason: &str,
    message: &str,
    now: &metav1::Time,
) -> corev1::NodeCondition {
    corev1::NodeCondition {
        type_: kind.to_string(),
        status: status.to_string(),
        last_heartbeat_time: Some(now.clone()),
        last_transition_time: Some(now.clone()),
        reason: Some(reason.to_string()),
        message: Some(message.to_string()),
    }
}
