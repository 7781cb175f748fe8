use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identifier::PrimaryIdentifier;

/// `AWS::Logs::MetricFilter` — a pattern on a log group that emits metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricFilterModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_transformations: Option<Vec<MetricTransformation>>,
}

impl MetricFilterModel {
    pub const TYPE_NAME: &'static str = "AWS::Logs::MetricFilter";

    pub fn primary_identifier(&self) -> PrimaryIdentifier {
        PrimaryIdentifier::new()
            .with("LogGroupName", self.log_group_name.as_deref())
            .with("FilterName", self.filter_name.as_deref())
    }
}

/// How matched log events become a metric data point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricTransformation {
    pub metric_name: String,
    pub metric_namespace: String,
    pub metric_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<BTreeMap<String, String>>,
}
