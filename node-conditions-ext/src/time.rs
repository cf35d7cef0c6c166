use k8s_openapi::jiff::Timestamp;

use super::*;

pub trait TimeExt {
    fn now() -> metav1::Time;
}

impl TimeExt for metav1::Time {
    /// Create a metav1::Time set to the current UTC time.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_conditions_ext::TimeExt as _;
    /// use node_conditions_ext::metav1;
    ///
    /// let now = metav1::Time::now();
    /// ```
    fn now() -> metav1::Time {
        Self(Timestamp::now())
    }
}
