//! multipart/form-data uploads (receipt files).

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use super::classify::decode;
use super::request::{Payload, Query};
use super::Client;
use crate::auth::TokenSource;
use crate::error::{Error, Result};

/// Form field freee reads the attached file from.
pub const FILE_FIELD: &str = "receipt";

/// Builds the upload form: the file part first, then `fields` in the given order.
pub fn receipt_form(fields: &[(String, String)], file_name: &str, file: Vec<u8>) -> Result<Form> {
    let part = Part::bytes(file)
        .file_name(file_name.to_string())
        .mime_str("application/octet-stream")
        .map_err(|e| Error::Build(format!("file part: {}", e)))?;

    Ok(fields
        .iter()
        .fold(Form::new().part(FILE_FIELD, part), |form, (k, v)| {
            form.text(k.clone(), v.clone())
        }))
}

impl Client {
    /// Uploads `file` together with scalar `fields` and decodes the JSON response.
    #[allow(clippy::too_many_arguments)]
    pub async fn post_files<T: DeserializeOwned>(
        &self,
        token_source: &dyn TokenSource,
        method: Method,
        path: &str,
        query: &Query,
        fields: &[(String, String)],
        file_name: &str,
        file: Vec<u8>,
    ) -> Result<T> {
        let form = receipt_form(fields, file_name, file)?;
        let response = self
            .send(token_source, method, path, query, Payload::Multipart(form))
            .await?;
        decode(response).await
    }
}
