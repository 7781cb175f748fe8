use cwlogs_client::LogsApi;

use crate::error::HandlerError;
use crate::kind::ResourceKind;

/// Lazy page-by-page enumeration of one resource kind.
///
/// Each `next_page` issues exactly one remote call. A caller may stop after
/// any page and later restart from `resume_token()` with `Paginator::resume`.
pub struct Paginator<'a, K: ResourceKind> {
    kind: &'a K,
    api: &'a dyn LogsApi,
    filter: K::Model,
    next_token: Option<String>,
    done: bool,
}

impl<'a, K: ResourceKind> Paginator<'a, K> {
    pub fn new(kind: &'a K, api: &'a dyn LogsApi, filter: K::Model) -> Self {
        Self::resume(kind, api, filter, None)
    }

    /// Continue from a token returned by an earlier page.
    pub fn resume(
        kind: &'a K,
        api: &'a dyn LogsApi,
        filter: K::Model,
        next_token: Option<String>,
    ) -> Self {
        Self {
            kind,
            api,
            filter,
            next_token,
            done: false,
        }
    }

    /// Token for the page that `next_page` would fetch; `None` once the
    /// listing is exhausted or before the first page of a fresh listing.
    pub fn resume_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// `None` once the remote stops returning a token. An error ends the
    /// sequence but keeps the token, so the same page can be retried.
    pub async fn next_page(&mut self) -> Option<Result<Vec<K::Model>, HandlerError>> {
        if self.done {
            return None;
        }

        match self
            .kind
            .list_page(self.api, &self.filter, self.next_token.clone())
            .await
        {
            Ok(page) => {
                self.done = page.next_token.is_none();
                self.next_token = page.next_token;
                Some(Ok(page.models))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    /// Drain every remaining page.
    pub async fn collect_all(mut self) -> Result<Vec<K::Model>, HandlerError> {
        let mut models = Vec::new();
        while let Some(page) = self.next_page().await {
            models.extend(page?);
        }
        Ok(models)
    }
}
