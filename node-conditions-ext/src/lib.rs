pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
pub use node_conditions as conditions;

pub use time::TimeExt;

mod time;

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }
}

pub trait NodeExt {
    fn new(name: impl ToString) -> Self;

    /// Name of the node, empty when the object carries none
    ///
    fn name(&self) -> &str;

    /// Current status conditions, empty when the node has no status yet
    ///
    fn conditions(&self) -> &[corev1::NodeCondition];

    /// Detach the condition list from the node, leaving it empty
    ///
    fn take_conditions(&mut self) -> Vec<corev1::NodeCondition>;

    /// Replace the condition list, creating `status` if needed
    ///
    fn set_conditions(&mut self, conditions: Vec<corev1::NodeCondition>);

    fn with_conditions(self, conditions: Vec<corev1::NodeCondition>) -> Self;
}

impl NodeExt for corev1::Node {
    fn new(name: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::new(name);
        Self {
            metadata,
            ..default()
        }
    }

    fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    fn conditions(&self) -> &[corev1::NodeCondition] {
        self.status
            .as_ref()
            .and_then(|status| status.conditions.as_deref())
            .unwrap_or_default()
    }

    fn take_conditions(&mut self) -> Vec<corev1::NodeCondition> {
        self.status
            .as_mut()
            .and_then(|status| status.conditions.take())
            .unwrap_or_default()
    }

    fn set_conditions(&mut self, conditions: Vec<corev1::NodeCondition>) {
        self.status.get_or_insert_with(default).conditions = Some(conditions);
    }

    fn with_conditions(mut self, conditions: Vec<corev1::NodeCondition>) -> Self {
        self.set_conditions(conditions);
        self
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(type_: &str, status: &str) -> corev1::NodeCondition {
        corev1::NodeCondition {
            type_: type_.to_string(),
            status: status.to_string(),
            ..default()
        }
    }

    #[test]
    fn node_new() {
        let node = corev1::Node::new("worker-1");

        assert_eq!(node.name(), "worker-1");
        assert!(node.status.is_none());
        assert!(node.conditions().is_empty());
    }

    #[test]
    fn unnamed_node() {
        let node = corev1::Node::default();
        assert_eq!(node.name(), "");
    }

    #[test]
    fn set_conditions_creates_status() {
        let ready = condition("Ready", "True");
        let node = corev1::Node::new("worker-1").with_conditions(vec![ready.clone()]);

        assert_eq!(node.conditions(), [ready]);
    }

    #[test]
    fn take_conditions_leaves_status() {
        let ready = condition("Ready", "False");
        let mut node = corev1::Node::new("worker-1").with_conditions(vec![ready.clone()]);

        let taken = node.take_conditions();

        assert_eq!(taken, [ready]);
        assert!(node.status.is_some());
        assert!(node.conditions().is_empty());
    }
}
