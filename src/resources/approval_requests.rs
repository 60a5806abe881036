//! Approval requests (各種申請) and their forms.

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "approval_requests";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetApprovalRequestsOpts {
    /// draft, in_progress, approved, rejected, feedback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_application_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_application_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequests {
    pub approval_requests: Vec<ApprovalRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub id: i32,
    pub company_id: i32,
    pub application_date: String,
    pub title: String,
    pub applicant_id: i32,
    pub application_number: String,
    pub status: String,
    pub request_items: Vec<RequestItem>,
    pub form_id: i32,
    pub current_step_id: Option<i32>,
    pub current_round: i32,
    pub deal_id: Option<i32>,
    pub manual_journal_id: Option<i32>,
    pub deal_status: Option<String>,
}

/// One answered field of the request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequestForms {
    pub approval_request_forms: Vec<ApprovalRequestForm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequestForm {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub description: String,
    pub status: String,
    pub created_date: String,
    pub form_order: i32,
    pub route_setting_count: i32,
}

impl Client {
    /// Lists approval requests (各種申請).
    pub async fn get_approval_requests(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetApprovalRequestsOpts,
    ) -> Result<ApprovalRequests> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }

    /// Lists the forms approval requests can be filed with.
    pub async fn get_approval_request_forms(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
    ) -> Result<ApprovalRequestForms> {
        self.get(
            token_source,
            &format!("{}/forms", PATH),
            &Query::with_company_id(company_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_client, test_token};

    #[tokio::test]
    async fn test_get_approval_requests() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/api/1/approval_requests?status=in_progress&limit=10&company_id=1",
            )
            .with_status(200)
            .with_body(
                r#"{"approval_requests": [{
                    "id": 1,
                    "company_id": 1,
                    "application_date": "2021-02-01",
                    "title": "備品購入",
                    "applicant_id": 2,
                    "application_number": "3",
                    "status": "in_progress",
                    "request_items": [{"id": 1, "type": "title", "value": "備品購入"}],
                    "form_id": 4,
                    "current_step_id": 5,
                    "current_round": 0,
                    "deal_id": null,
                    "manual_journal_id": null,
                    "deal_status": null
                }]}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = GetApprovalRequestsOpts {
            status: Some("in_progress".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let result = client
            .get_approval_requests(&test_token(), 1, &opts)
            .await
            .unwrap();

        let request = &result.approval_requests[0];
        assert_eq!(request.request_items[0].kind, "title");
        assert_eq!(request.deal_id, None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_approval_request_forms() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/1/approval_requests/forms?company_id=1")
            .with_status(200)
            .with_body(
                r#"{"approval_request_forms": [{
                    "id": 4,
                    "company_id": 1,
                    "name": "稟議",
                    "description": "",
                    "status": "active",
                    "created_date": "2020-01-01T00:00:00+09:00",
                    "form_order": 1,
                    "route_setting_count": 2
                }]}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let forms = client
            .get_approval_request_forms(&test_token(), 1)
            .await
            .unwrap();

        assert_eq!(forms.approval_request_forms[0].name, "稟議");
        mock.assert_async().await;
    }
}
