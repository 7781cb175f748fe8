use cwlogs_client::LogsApi;
use cwlogs_core::{Action, CallbackContext, ProgressEvent, ResourceHandlerRequest};

use crate::error::HandlerError;
use crate::kind::{Page, ResourceKind};
use crate::naming::generate_resource_identifier;

/// Entry point for the orchestrating host.
///
/// Runs one lifecycle action to completion and folds the result into a
/// `ProgressEvent`. Every action here is synchronous, so the callback
/// context is accepted for contract compatibility and never returned.
#[tracing::instrument(
    skip_all,
    fields(
        type_name = K::TYPE_NAME,
        action = ?action,
        identifier = %kind.primary_identifier(&request.desired_resource_state),
    )
)]
pub async fn handle<K: ResourceKind>(
    kind: &K,
    api: &dyn LogsApi,
    action: Action,
    request: ResourceHandlerRequest<K::Model>,
    callback_context: Option<CallbackContext>,
) -> ProgressEvent<K::Model> {
    if let Some(ctx) = callback_context.filter(|c| !c.is_empty()) {
        tracing::debug!(?ctx, "ignoring callback context");
    }

    let result = match action {
        Action::Create => create(kind, api, &request).await.map(ProgressEvent::success),
        Action::Read => read(kind, api, &request.desired_resource_state)
            .await
            .map(ProgressEvent::success),
        Action::Update => update(kind, api, &request).await.map(ProgressEvent::success),
        Action::Delete => delete(kind, api, &request)
            .await
            .map(|()| ProgressEvent::Success { model: None }),
        Action::List => list(kind, api, &request).await.map(|page| ProgressEvent::SuccessList {
            models: page.models,
            next_token: page.next_token,
        }),
    };

    match result {
        Ok(event) => event,
        Err(err) => {
            let identifier = err
                .identifier()
                .cloned()
                .or_else(|| Some(kind.primary_identifier(&request.desired_resource_state)))
                .filter(|id| !id.is_empty());
            tracing::warn!(error = %err, code = ?err.code(), "handler failed");
            ProgressEvent::Failed {
                error_code: err.code(),
                message: err.to_string(),
                identifier,
            }
        }
    }
}

/// Fetch the remote record for `model`'s identity.
///
/// Absence reported as an empty listing and absence reported as a remote
/// not-found error both come back as `HandlerError::NotFound`.
pub async fn read<K: ResourceKind>(
    kind: &K,
    api: &dyn LogsApi,
    model: &K::Model,
) -> Result<K::Model, HandlerError> {
    let identifier = kind.primary_identifier(model);
    let not_found = || HandlerError::NotFound {
        type_name: K::TYPE_NAME,
        identifier: identifier.clone(),
    };

    if kind.name(model).is_none() {
        return Err(not_found());
    }

    match kind.fetch(api, model).await {
        Ok(Some(found)) => Ok(found),
        Ok(None) => Err(not_found()),
        Err(e) if e.is_not_found() => Err(not_found()),
        Err(e) => Err(e),
    }
}

/// Create a resource that must not already exist.
///
/// The remote put is an upsert, so existence is checked first and an
/// existing record fails with `AlreadyExists` before anything is written.
/// Check and put are not atomic; one writer per identity is assumed.
pub async fn create<K: ResourceKind>(
    kind: &K,
    api: &dyn LogsApi,
    request: &ResourceHandlerRequest<K::Model>,
) -> Result<K::Model, HandlerError> {
    let model = with_physical_name(kind, request)?;
    kind.validate(&model)?;
    let identifier = kind.primary_identifier(&model);

    match read(kind, api, &model).await {
        Ok(existing) if kind.primary_identifier(&existing).similar(&identifier) => {
            tracing::info!(identifier = %identifier, "{} already exists", K::TYPE_NAME);
            return Err(HandlerError::AlreadyExists {
                type_name: K::TYPE_NAME,
                identifier,
            });
        }
        Ok(_) => {}
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    kind.put(api, &model).await?;
    tracing::info!(identifier = %identifier, "{} created successfully", K::TYPE_NAME);

    if K::REREAD_AFTER_CREATE {
        confirm(kind, api, &model).await
    } else {
        Ok(model)
    }
}

/// Apply the desired state to an existing resource and return what the
/// service now holds.
///
/// A failure partway through a multi-call put is surfaced as is; retrying
/// the same update converges because every put is idempotent.
pub async fn update<K: ResourceKind>(
    kind: &K,
    api: &dyn LogsApi,
    request: &ResourceHandlerRequest<K::Model>,
) -> Result<K::Model, HandlerError> {
    let model = &request.desired_resource_state;
    let identifier = kind.primary_identifier(model);

    if let Some(previous) = &request.previous_resource_state {
        let previous_id = kind.primary_identifier(previous);
        if !previous_id.is_empty() && !previous_id.similar(&identifier) {
            return Err(HandlerError::InvalidRequest(format!(
                "primary identifier cannot change from {previous_id} to {identifier}"
            )));
        }
    }
    kind.validate(model)?;

    let current = read(kind, api, model).await?;
    kind.validate_update(&current, model)?;

    kind.put(api, model).await?;
    tracing::info!(identifier = %identifier, "{} updated successfully", K::TYPE_NAME);

    confirm(kind, api, model).await
}

/// Delete by identity. A resource that is already gone yields `NotFound`.
pub async fn delete<K: ResourceKind>(
    kind: &K,
    api: &dyn LogsApi,
    request: &ResourceHandlerRequest<K::Model>,
) -> Result<(), HandlerError> {
    let model = &request.desired_resource_state;
    let identifier = kind.primary_identifier(model);

    kind.remove(api, model).await?;
    tracing::info!(identifier = %identifier, "{} deleted successfully", K::TYPE_NAME);
    Ok(())
}

/// One page of resources, narrowed by the scope fields set on the desired
/// state and resumed from `request.next_token`.
pub async fn list<K: ResourceKind>(
    kind: &K,
    api: &dyn LogsApi,
    request: &ResourceHandlerRequest<K::Model>,
) -> Result<Page<K::Model>, HandlerError> {
    let page = kind
        .list_page(api, &request.desired_resource_state, request.next_token.clone())
        .await?;
    tracing::debug!(
        count = page.models.len(),
        more = page.next_token.is_some(),
        "listed page"
    );
    Ok(page)
}

/// Desired model with a name, synthesizing one if the caller left it unset.
fn with_physical_name<K: ResourceKind>(
    kind: &K,
    request: &ResourceHandlerRequest<K::Model>,
) -> Result<K::Model, HandlerError> {
    let model = request.desired_resource_state.clone();
    if kind.name(&model).is_some_and(|n| !n.is_empty()) {
        return Ok(model);
    }
    if request.client_request_token.is_empty() {
        return Err(HandlerError::InvalidRequest(
            "a client request token is required to generate a name".into(),
        ));
    }

    let name = generate_resource_identifier(
        request.logical_resource_identifier.as_deref(),
        &request.client_request_token,
        K::MAX_NAME_LENGTH,
    );
    tracing::debug!(name = %name, "generated physical name");
    Ok(kind.with_name(model, name))
}

/// Re-read after a write. A record missing right after a successful write
/// is a service inconsistency, not an absence.
async fn confirm<K: ResourceKind>(
    kind: &K,
    api: &dyn LogsApi,
    model: &K::Model,
) -> Result<K::Model, HandlerError> {
    match read(kind, api, model).await {
        Err(HandlerError::NotFound { identifier, .. }) => Err(HandlerError::RemoteFailure(format!(
            "{} [{identifier}] missing after a successful write",
            K::TYPE_NAME
        ))),
        other => other,
    }
}
