//! SWQL queries and result-envelope unwrapping.

use crate::{Client, ClientError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use swis_core::endpoints;
use swis_core::models::{QueryRequest, ResultEnvelope};

impl Client {
    /// Run a query and return the `results` value exactly as the service sent it.
    ///
    /// `parameters` is any serializable map of `@name` values; sequences are
    /// passed through for `IN @name` expansion.
    pub async fn query<P: Serialize + ?Sized>(
        &self,
        query: &str,
        parameters: &P,
    ) -> Result<Box<RawValue>> {
        self.fetch_results(query, parameters)
            .await
            .map_err(|e| e.context("query"))
    }

    /// Run a query and decode `results` into `T`
    pub async fn query_as<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        query: &str,
        parameters: &P,
    ) -> Result<T> {
        let results = self.query(query, parameters).await?;
        decode(&results).map_err(|e| e.context("query"))
    }

    /// Run a query known to return exactly one row and return that row's JSON.
    ///
    /// A one-element array yields its element byte-for-byte and a bare object
    /// yields itself. Any other row count fails instead of guessing.
    pub async fn query_row<P: Serialize + ?Sized>(
        &self,
        query: &str,
        parameters: &P,
    ) -> Result<Box<RawValue>> {
        let results = self.query(query, parameters).await?;
        single_row(results).map_err(|e| e.context("query row"))
    }

    /// Run a single-row query and decode that row into `T`
    pub async fn query_row_as<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        query: &str,
        parameters: &P,
    ) -> Result<T> {
        let row = self.query_row(query, parameters).await?;
        decode(&row).map_err(|e| e.context("query row"))
    }

    /// Run a single-row, single-column query and return the one value
    pub async fn query_one<P: Serialize + ?Sized>(
        &self,
        query: &str,
        parameters: &P,
    ) -> Result<Value> {
        let row = self.query_row(query, parameters).await?;
        single_value(&row).map_err(|e| e.context("query one"))
    }

    /// Like [`query_one`](Self::query_one), decoding the value into `T`
    pub async fn query_one_as<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        query: &str,
        parameters: &P,
    ) -> Result<T> {
        let value = self.query_one(query, parameters).await?;
        serde_json::from_value(value)
            .map_err(|e| ClientError::Decoding(e).context("query one"))
    }

    /// Run a query and flatten every field of every row into one list.
    ///
    /// Meant for single-column projections. Rows keep their order and each
    /// row contributes its fields in the order the service sent them.
    pub async fn query_column<P: Serialize + ?Sized>(
        &self,
        query: &str,
        parameters: &P,
    ) -> Result<Vec<Value>> {
        let results = self.query(query, parameters).await?;
        let rows: Vec<Map<String, Value>> =
            decode(&results).map_err(|e| e.context("query column"))?;

        Ok(rows
            .into_iter()
            .flat_map(|row| row.into_iter().map(|(_, value)| value))
            .collect())
    }

    async fn fetch_results<P: Serialize + ?Sized>(
        &self,
        query: &str,
        parameters: &P,
    ) -> Result<Box<RawValue>> {
        let request = QueryRequest { query, parameters };
        let body = self.post_json(endpoints::QUERY, &request).await?;

        let envelope: ResultEnvelope =
            serde_json::from_slice(&body).map_err(ClientError::Decoding)?;
        if envelope.results.get().trim() == "null" {
            return Err(ClientError::UnexpectedShape(
                "response has a null results field".to_string(),
            ));
        }
        Ok(envelope.results)
    }
}

fn decode<T: DeserializeOwned>(raw: &RawValue) -> Result<T> {
    serde_json::from_str(raw.get()).map_err(ClientError::Decoding)
}

fn single_row(results: Box<RawValue>) -> Result<Box<RawValue>> {
    match results.get().trim_start().as_bytes().first() {
        Some(b'{') => Ok(results),
        Some(b'[') => {
            let mut rows: Vec<Box<RawValue>> = decode(&results)?;
            match (rows.pop(), rows.is_empty()) {
                (Some(row), true) => Ok(row),
                (None, _) => Err(ClientError::UnexpectedShape(
                    "expected exactly one row, got none".to_string(),
                )),
                (Some(_), false) => Err(ClientError::UnexpectedShape(format!(
                    "expected exactly one row, got {}",
                    rows.len() + 1
                ))),
            }
        }
        _ => Err(ClientError::UnexpectedShape(format!(
            "expected a row or a list of rows, got {}",
            results.get()
        ))),
    }
}

fn single_value(row: &RawValue) -> Result<Value> {
    let fields: Map<String, Value> = decode(row)?;
    if fields.len() != 1 {
        let columns: Vec<&str> = fields.keys().map(String::as_str).collect();
        return Err(ClientError::UnexpectedShape(format!(
            "expected exactly one column, got {} ({})",
            fields.len(),
            columns.join(", ")
        )));
    }

    Ok(fields.into_iter().next().map(|(_, value)| value).unwrap_or(Value::Null))
}
