//! Convention-based CRUD client for one REST base path.
//!
//! Every domain resource gets the identical operation set, parameterized
//! only by its path; the named services in [`crate::net::api`] bolt their
//! ad-hoc endpoints onto this.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;

/// Pagination and filter parameters for list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    page: Option<u32>,
    per_page: Option<u32>,
    filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Add an arbitrary filter pair, serialized verbatim into the query
    /// string.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }

    /// Serialize into query-string pairs, pagination first.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_owned(), per_page.to_string()));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

/// Uniform CRUD operations over `{base}` for records of type `R`.
///
/// The client never constructs or retires records on its own: creation,
/// mutation and deletion are requests to the backend, and callers refetch
/// to observe the outcome.
pub struct ResourceClient<T: Transport, R> {
    api: Arc<ApiClient<T>>,
    base: String,
    _record: PhantomData<fn() -> R>,
}

impl<T: Transport, R> Clone for ResourceClient<T, R> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            base: self.base.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Transport, R: DeserializeOwned> ResourceClient<T, R> {
    pub fn new(api: Arc<ApiClient<T>>, base: impl Into<String>) -> Self {
        Self {
            api,
            base: base.into(),
            _record: PhantomData,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET {base}` with pagination/filter params.
    ///
    /// # Errors
    ///
    /// Rejects with the mapped [`ApiError`]; no retry is attempted.
    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<R>, ApiError> {
        self.api.get_list(&self.base, query.to_pairs()).await
    }

    /// `GET {base}/{id}`.
    pub async fn get_by_id(&self, id: u64) -> Result<R, ApiError> {
        self.api.get_one(&self.id_path(id), Vec::new()).await
    }

    /// `POST {base}` with the new record's payload (no id).
    pub async fn create(&self, payload: &impl Serialize) -> Result<R, ApiError> {
        self.api.post_one(&self.base, payload).await
    }

    /// `PUT {base}/{id}` with a partial payload.
    pub async fn update(&self, id: u64, payload: &impl Serialize) -> Result<R, ApiError> {
        self.api.put_one(&self.id_path(id), payload).await
    }

    /// `DELETE {base}/{id}`.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.api.delete(&self.id_path(id)).await
    }

    /// List from an ad-hoc sub-operation, e.g. `GET {base}/search`.
    pub async fn get_all_at(&self, op: &str, query: &ListQuery) -> Result<Vec<R>, ApiError> {
        self.api.get_list(&self.op_path(op), query.to_pairs()).await
    }

    /// Post to an ad-hoc sub-operation returning a list, e.g.
    /// `POST {base}/bulk`.
    pub async fn post_list_at(
        &self,
        op: &str,
        payload: &impl Serialize,
    ) -> Result<Vec<R>, ApiError> {
        self.api.post_list(&self.op_path(op), payload).await
    }

    fn id_path(&self, id: u64) -> String {
        format!("{}/{id}", self.base)
    }

    fn op_path(&self, op: &str) -> String {
        format!("{}/{op}", self.base)
    }
}
