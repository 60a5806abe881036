//! Sections (部門).

use serde::{Deserialize, Serialize};

use super::FieldOrder;
use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "sections";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SectionResponse {
    section: Section,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: i32,
    pub name: String,
    pub available: bool,
    pub long_name: Option<String>,
    pub company_id: i32,
    pub shortcut1: Option<String>,
    pub shortcut2: Option<String>,
    /// Depth in the section hierarchy (advanced plans only).
    pub indent_count: Option<i32>,
    pub parent_id: Option<i32>,
}

impl FieldOrder for Section {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "available",
        "long_name",
        "company_id",
        "shortcut1",
        "shortcut2",
        "indent_count",
        "parent_id",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionParams {
    pub company_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
}

impl Client {
    /// Lists sections.
    pub async fn get_sections(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
    ) -> Result<Sections> {
        self.get(token_source, PATH, &Query::with_company_id(company_id))
            .await
    }

    /// Creates a section.
    pub async fn create_section(
        &self,
        token_source: &dyn TokenSource,
        params: &SectionParams,
    ) -> Result<Section> {
        let response: SectionResponse = self.post(token_source, PATH, params).await?;
        Ok(response.section)
    }

    /// Updates a section.
    pub async fn update_section(
        &self,
        token_source: &dyn TokenSource,
        section_id: i32,
        params: &SectionParams,
    ) -> Result<Section> {
        let response: SectionResponse = self
            .put(token_source, &format!("{}/{}", PATH, section_id), params)
            .await?;
        Ok(response.section)
    }

    /// Deletes a section.
    pub async fn destroy_section(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        section_id: i32,
    ) -> Result<()> {
        self.delete(
            token_source,
            &format!("{}/{}", PATH, section_id),
            &Query::with_company_id(company_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_field_order, test_client, test_token};
    use mockito::Matcher;

    const SECTION: &str = r#"{
        "id": 5,
        "name": "開発部",
        "available": true,
        "long_name": "プロダクト開発部",
        "company_id": 1,
        "shortcut1": "DEV",
        "shortcut2": "100",
        "indent_count": 1,
        "parent_id": 2
    }"#;

    fn params() -> SectionParams {
        SectionParams {
            company_id: 1,
            name: "開発部".to_string(),
            long_name: None,
            shortcut1: Some("DEV".to_string()),
            shortcut2: None,
            parent_id: Some(2),
        }
    }

    #[test]
    fn test_section_field_order() {
        let section: Section = serde_json::from_str(SECTION).unwrap();
        assert_field_order(&section);
    }

    #[tokio::test]
    async fn test_get_sections() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/1/sections?company_id=1")
            .with_status(200)
            .with_body(format!(r#"{{"sections": [{}]}}"#, SECTION))
            .create_async()
            .await;

        let client = test_client(&server.url());
        let sections = client.get_sections(&test_token(), 1).await.unwrap();

        assert_eq!(sections.sections[0].parent_id, Some(2));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_section() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/sections")
            .match_body(Matcher::Json(serde_json::json!({
                "company_id": 1,
                "name": "開発部",
                "shortcut1": "DEV",
                "parent_id": 2
            })))
            .with_status(201)
            .with_body(format!(r#"{{"section": {}}}"#, SECTION))
            .create_async()
            .await;

        let client = test_client(&server.url());
        let section = client
            .create_section(&test_token(), &params())
            .await
            .unwrap();

        assert_eq!(section.id, 5);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_section() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/1/sections/5")
            .with_status(200)
            .with_body(format!(r#"{{"section": {}}}"#, SECTION))
            .create_async()
            .await;

        let client = test_client(&server.url());
        let section = client
            .update_section(&test_token(), 5, &params())
            .await
            .unwrap();

        assert_eq!(section.long_name.as_deref(), Some("プロダクト開発部"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_destroy_section() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/1/sections/5?company_id=1")
            .with_status(204)
            .create_async()
            .await;

        let client = test_client(&server.url());
        client.destroy_section(&test_token(), 1, 5).await.unwrap();

        mock.assert_async().await;
    }
}
