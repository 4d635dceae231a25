//! Auth Operations
//!
//! `login` and `signup` share variables and selection.

use serde::Serialize;

use super::graphql::{GraphQlClient, Operation};
use crate::error::ApiResult;
use crate::models::{Credentials, User};

pub const LOGIN: Operation = Operation {
    name: "Login",
    document: "mutation Login($username: String!, $password: String!) {
  login(username: $username, password: $password) {
    id
    username
  }
}",
    root: "login",
};

pub const SIGNUP: Operation = Operation {
    name: "Signup",
    document: "mutation Signup($username: String!, $password: String!) {
  signup(username: $username, password: $password) {
    id
    username
  }
}",
    root: "signup",
};

#[derive(Serialize)]
struct CredentialsArgs<'a> {
    username: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for CredentialsArgs<'a> {
    fn from(creds: &'a Credentials) -> Self {
        Self {
            username: &creds.username,
            password: &creds.password,
        }
    }
}

pub async fn login(client: &GraphQlClient, credentials: &Credentials) -> ApiResult<User> {
    client.execute(&LOGIN, &CredentialsArgs::from(credentials)).await
}

pub async fn signup(client: &GraphQlClient, credentials: &Credentials) -> ApiResult<User> {
    client.execute(&SIGNUP, &CredentialsArgs::from(credentials)).await
}
