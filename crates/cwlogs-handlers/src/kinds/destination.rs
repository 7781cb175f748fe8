use cwlogs_client::{BoxFuture, ClientConfig, LogsApi};
use cwlogs_core::{DestinationModel, PrimaryIdentifier};

use crate::error::HandlerError;
use crate::kind::{Page, ResourceKind};
use crate::kinds::{check_length, clamp_page_size};
use crate::translator;

/// `AWS::Logs::Destination`.
///
/// The remote `PutDestination` is an upsert, so create and update share one
/// put path: destination attributes first, then the access policy.
#[derive(Debug, Clone)]
pub struct DestinationKind {
    page_size: i32,
}

impl DestinationKind {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            page_size: clamp_page_size(config.page_size),
        }
    }
}

impl Default for DestinationKind {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl ResourceKind for DestinationKind {
    type Model = DestinationModel;

    const TYPE_NAME: &'static str = DestinationModel::TYPE_NAME;
    const MAX_NAME_LENGTH: usize = 512;
    const REREAD_AFTER_CREATE: bool = true;

    fn primary_identifier(&self, model: &DestinationModel) -> PrimaryIdentifier {
        model.primary_identifier()
    }

    fn name<'m>(&self, model: &'m DestinationModel) -> Option<&'m str> {
        model.destination_name.as_deref()
    }

    fn with_name(&self, model: DestinationModel, name: String) -> DestinationModel {
        DestinationModel {
            destination_name: Some(name),
            ..model
        }
    }

    fn validate(&self, model: &DestinationModel) -> Result<(), HandlerError> {
        let name = model
            .destination_name
            .as_deref()
            .ok_or_else(|| HandlerError::InvalidRequest("DestinationName is required".into()))?;
        check_length("DestinationName", name, Self::MAX_NAME_LENGTH)?;
        if name.contains([':', '*']) {
            return Err(HandlerError::InvalidRequest(format!(
                "DestinationName must not contain ':' or '*': {name}"
            )));
        }
        translator::destination_put_request(model)?;
        Ok(())
    }

    fn validate_update(
        &self,
        current: &DestinationModel,
        desired: &DestinationModel,
    ) -> Result<(), HandlerError> {
        // PutDestinationPolicy can replace a policy but never remove one.
        if current.destination_policy.is_some() && desired.destination_policy.is_none() {
            return Err(HandlerError::InvalidRequest(format!(
                "DestinationPolicy cannot be removed from {}",
                desired.destination_name.as_deref().unwrap_or_default()
            )));
        }
        Ok(())
    }

    fn fetch<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a DestinationModel,
    ) -> BoxFuture<'a, Result<Option<DestinationModel>, HandlerError>> {
        Box::pin(async move {
            let Some(name) = model.destination_name.as_deref() else {
                return Ok(None);
            };
            let identifier = model.primary_identifier();

            let mut next_token: Option<String> = None;
            loop {
                let request = translator::destination_read_request(model, next_token.clone());
                let resp = api
                    .describe_destinations(request)
                    .await
                    .map_err(|e| HandlerError::from_remote(e, Self::TYPE_NAME, &identifier))?;

                if let Some(found) = translator::destination_for_read(name, &resp.destinations)? {
                    return Ok(Some(found));
                }
                match resp.next_token {
                    Some(token) if next_token.as_deref() != Some(token.as_str()) => {
                        next_token = Some(token);
                    }
                    _ => return Ok(None),
                }
            }
        })
    }

    fn put<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a DestinationModel,
    ) -> BoxFuture<'a, Result<(), HandlerError>> {
        Box::pin(async move {
            let identifier = model.primary_identifier();
            let request = translator::destination_put_request(model)?;

            api.put_destination(request)
                .await
                .map_err(|e| HandlerError::from_remote(e, Self::TYPE_NAME, &identifier))?;
            tracing::debug!(identifier = %identifier, "destination put");

            if let Some(policy) = translator::destination_policy_request(model) {
                api.put_destination_policy(policy)
                    .await
                    .map_err(|e| HandlerError::from_remote(e, Self::TYPE_NAME, &identifier))?;
                tracing::debug!(identifier = %identifier, "destination policy put");
            }
            Ok(())
        })
    }

    fn remove<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a DestinationModel,
    ) -> BoxFuture<'a, Result<(), HandlerError>> {
        Box::pin(async move {
            let identifier = model.primary_identifier();
            let name = model
                .destination_name
                .as_deref()
                .ok_or_else(|| HandlerError::InvalidRequest("DestinationName is required".into()))?;

            api.delete_destination(name)
                .await
                .map_err(|e| HandlerError::from_remote(e, Self::TYPE_NAME, &identifier))
        })
    }

    fn list_page<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        filter: &'a DestinationModel,
        next_token: Option<String>,
    ) -> BoxFuture<'a, Result<Page<DestinationModel>, HandlerError>> {
        Box::pin(async move {
            let request = translator::destination_list_request(filter, next_token, self.page_size);
            let resp = api
                .describe_destinations(request)
                .await
                .map_err(|e| {
                    HandlerError::from_remote(e, Self::TYPE_NAME, &filter.primary_identifier())
                })?;

            Ok(Page {
                models: resp
                    .destinations
                    .iter()
                    .map(translator::destination_from_remote)
                    .collect(),
                next_token: resp.next_token,
            })
        })
    }
}
