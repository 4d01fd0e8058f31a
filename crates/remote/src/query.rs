//! Read-query builder mirroring the provider's filter syntax.
//!
//! ```text
//! select=*&featured=eq.true&order=created_at.desc&limit=4
//! ```

use std::fmt::Display;

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::client::ContentClient;
use crate::error::RemoteError;
use crate::schema::decode_rows;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// A pending read against one table.
#[derive(Debug)]
pub struct Select<'c> {
    client: &'c ContentClient,
    table: &'static str,
    columns: &'static str,
    filters: Vec<(String, String)>,
    order: Option<(&'static str, Order)>,
    limit: Option<usize>,
}

impl<'c> Select<'c> {
    pub(crate) fn new(client: &'c ContentClient, table: &'static str) -> Self {
        Self {
            client,
            table,
            columns: "*",
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Restrict the returned columns (comma-separated).
    pub fn columns(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    /// Keep rows where `column` equals `value`.
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order(mut self, column: &'static str, order: Order) -> Self {
        self.order = Some((column, order));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Query-string pairs in the order the provider documents them.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.columns.to_string())];
        params.extend(self.filters.iter().cloned());
        if let Some((column, order)) = self.order {
            params.push(("order".to_string(), format!("{column}.{}", order.as_str())));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }

    /// Fetch every matching row.
    pub async fn fetch_all<T>(self) -> Result<Vec<T>, RemoteError>
    where
        T: DeserializeOwned + Validate,
    {
        let params = self.params();
        tracing::debug!(table = self.table, ?params, "Remote select");
        let payload = self.client.get_rows(self.table, &params).await?;
        decode_rows(self.table, payload)
    }

    /// Fetch at most one row.
    pub async fn fetch_optional<T>(self) -> Result<Option<T>, RemoteError>
    where
        T: DeserializeOwned + Validate,
    {
        let rows = self.limit(1).fetch_all::<T>().await?;
        Ok(rows.into_iter().next())
    }
}
