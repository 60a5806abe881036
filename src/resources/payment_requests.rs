//! Payment requests (支払依頼).

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "payment_requests";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetPaymentRequestsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_application_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_application_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    /// none, domestic_bank_transfer, abroad_bank_transfer, account_transfer, credit_card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequests {
    pub payment_requests: Vec<PaymentRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub application_date: String,
    pub total_amount: i32,
    pub status: String,
    pub deal_id: Option<i32>,
    pub deal_status: Option<String>,
    pub applicant_id: i32,
    #[serde(default)]
    pub approvers: Vec<Approver>,
    pub application_number: String,
    pub current_step_id: Option<i32>,
    pub current_round: i32,
    pub document_code: Option<String>,
    pub issue_date: Option<String>,
    pub payment_date: Option<String>,
    pub payment_method: Option<String>,
    pub partner_id: Option<i32>,
    pub partner_code: Option<String>,
    pub partner_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    pub step_id: i32,
    pub user_id: Option<i32>,
    pub status: String,
    /// Approved on behalf of the assigned approver.
    pub is_force_action: bool,
    pub resource_type: String,
}

impl Client {
    /// Lists payment requests (支払依頼).
    pub async fn get_payment_requests(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetPaymentRequestsOpts,
    ) -> Result<PaymentRequests> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_client, test_token};

    #[tokio::test]
    async fn test_get_payment_requests() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/api/1/payment_requests?payment_method=domestic_bank_transfer&company_id=1",
            )
            .with_status(200)
            .with_body(
                r#"{"payment_requests": [{
                    "id": 1,
                    "company_id": 1,
                    "title": "外注費",
                    "application_date": "2021-04-01",
                    "total_amount": 110000,
                    "status": "approved",
                    "deal_id": null,
                    "deal_status": null,
                    "applicant_id": 2,
                    "approvers": [{
                        "step_id": 1,
                        "user_id": 3,
                        "status": "approved",
                        "is_force_action": false,
                        "resource_type": "user"
                    }],
                    "application_number": "7",
                    "current_step_id": null,
                    "current_round": 0,
                    "document_code": "INV-1",
                    "issue_date": "2021-03-31",
                    "payment_date": "2021-04-30",
                    "payment_method": "domestic_bank_transfer",
                    "partner_id": 201,
                    "partner_code": null,
                    "partner_name": "外注先"
                }]}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = GetPaymentRequestsOpts {
            payment_method: Some("domestic_bank_transfer".to_string()),
            ..Default::default()
        };
        let result = client
            .get_payment_requests(&test_token(), 1, &opts)
            .await
            .unwrap();

        let request = &result.payment_requests[0];
        assert_eq!(request.approvers[0].user_id, Some(3));
        assert_eq!(request.partner_name.as_deref(), Some("外注先"));
        mock.assert_async().await;
    }
}
