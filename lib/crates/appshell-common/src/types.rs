use serde::{Deserialize, Serialize};

/// Lifecycle state of a deployed application or service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentState {
    #[default]
    Started,
    InProgress,
    Failed,
    /// A state this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// A service deployed within an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescription {
    #[serde(default)]
    pub application_name: String,
    pub service_name: String,
    #[serde(default)]
    pub instance_count: u32,
    #[serde(default)]
    pub planned_instances: u32,
    #[serde(default)]
    pub service_state: DeploymentState,
}

/// Description of an application and the services deployed under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescription {
    pub application_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_groups: Option<String>,
    #[serde(default)]
    pub application_state: DeploymentState,
    /// Services in the order the management server reports them.
    #[serde(default)]
    pub services_description: Vec<ServiceDescription>,
}

impl ApplicationDescription {
    /// Names of the deployed services, in server order.
    #[must_use]
    pub fn service_names(&self) -> Vec<&str> {
        self.services_description
            .iter()
            .map(|s| s.service_name.as_str())
            .collect()
    }
}
