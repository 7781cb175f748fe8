use aws_sdk_cloudwatchlogs::Client;

use crate::aws::CloudWatchLogs;
use crate::config::ClientConfig;

/// Build a CloudWatch Logs client from the default AWS config, applying any
/// region or endpoint override.
pub async fn build_client(config: &ClientConfig) -> CloudWatchLogs {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;

    tracing::debug!(
        region = ?sdk_config.region().map(|r| r.to_string()),
        endpoint = ?config.endpoint_url,
        "cloudwatch logs client configured"
    );

    CloudWatchLogs::new(Client::new(&sdk_config))
}
