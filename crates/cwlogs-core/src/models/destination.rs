use serde::{Deserialize, Serialize};

use crate::identifier::PrimaryIdentifier;

/// `AWS::Logs::Destination` — a cross-account subscription target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DestinationModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// IAM policy document controlling who may subscribe to the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_policy: Option<String>,
    /// Read-only, assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl DestinationModel {
    pub const TYPE_NAME: &'static str = "AWS::Logs::Destination";

    pub fn primary_identifier(&self) -> PrimaryIdentifier {
        PrimaryIdentifier::new().with("DestinationName", self.destination_name.as_deref())
    }
}
