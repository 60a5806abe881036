//! Users and the signed-in user.

use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;
use crate::error::Result;
use crate::http::{Client, Query};

const PATH: &str = "users";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetUsersOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetUsersMeOpts {
    /// List the companies the user belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Users {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub first_name_kana: Option<String>,
    pub last_name_kana: Option<String>,
    /// Only present on `users/me` with `companies=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<UserCompany>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCompany {
    pub id: i32,
    pub display_name: String,
    /// admin, simple_accounting, self_only, read_only, workflow
    pub role: String,
    pub use_custom_role: bool,
}

impl Client {
    /// Lists the users of a company.
    pub async fn get_users(
        &self,
        token_source: &dyn TokenSource,
        company_id: i32,
        opts: &GetUsersOpts,
    ) -> Result<Users> {
        self.get(token_source, PATH, &Query::for_company(company_id, opts)?)
            .await
    }

    /// The user the access token belongs to. Not scoped to a company.
    #[tracing::instrument(skip(self, token_source))]
    pub async fn get_users_me(
        &self,
        token_source: &dyn TokenSource,
        opts: &GetUsersMeOpts,
    ) -> Result<Me> {
        self.get(
            token_source,
            &format!("{}/me", PATH),
            &Query::from_params(opts)?,
        )
        .await
    }
}
