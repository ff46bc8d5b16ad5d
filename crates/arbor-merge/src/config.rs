use serde::{Deserialize, Serialize};

/// How much the merger trusts the ordering of its inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Callers guarantee sorted, duplicate-free inputs. Nothing is checked.
    #[default]
    Trusted,
    /// Both inputs are checked for strict ordering before merging.
    Validated,
}

/// What the merger does with tombstones that target missing names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyPolicy {
    /// Report to the sink and finish the merge.
    #[default]
    Report,
    /// Report to the sink, then fail the merge.
    Reject,
}

/// Configuration for a [`Merger`](crate::Merger).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Whether input ordering is validated.
    pub input_policy: InputPolicy,
    /// Whether anomalous tombstones fail the merge.
    pub anomaly_policy: AnomalyPolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            input_policy: InputPolicy::Trusted,
            anomaly_policy: AnomalyPolicy::Report,
        }
    }
}

impl MergeConfig {
    /// Validate inputs and reject anomalous tombstones.
    ///
    /// Suited to staging layers that should never produce an impossible
    /// delete, where one showing up means the workspace is corrupt.
    pub fn strict() -> Self {
        Self {
            input_policy: InputPolicy::Validated,
            anomaly_policy: AnomalyPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_tolerant() {
        let c = MergeConfig::default();
        assert_eq!(c.input_policy, InputPolicy::Trusted);
        assert_eq!(c.anomaly_policy, AnomalyPolicy::Report);
    }

    #[test]
    fn strict_config() {
        let c = MergeConfig::strict();
        assert_eq!(c.input_policy, InputPolicy::Validated);
        assert_eq!(c.anomaly_policy, AnomalyPolicy::Reject);
    }

    #[test]
    fn json_fields_are_optional() {
        let c: MergeConfig = serde_json::from_str(r#"{"anomaly_policy":"reject"}"#).unwrap();
        assert_eq!(c.input_policy, InputPolicy::Trusted);
        assert_eq!(c.anomaly_policy, AnomalyPolicy::Reject);

        let json = serde_json::to_string(&MergeConfig::strict()).unwrap();
        assert_eq!(json, r#"{"input_policy":"validated","anomaly_policy":"reject"}"#);
    }
}
