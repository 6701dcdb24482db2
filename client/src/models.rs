// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;

use aws_credential_types::Credentials;
use serde::{Deserialize, Serialize};
use zeroize::ZeroizeOnDrop;

use crate::constants::{
    CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME, MAX_K8S_NAME_LENGTH, SECRET_KEY_ACCESS_KEY_ID,
    SECRET_KEY_SECRET_ACCESS_KEY,
};
use crate::errors::AppError;

/// Access key pair as stored in the generated Secrets Manager secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ZeroizeOnDrop)]
pub struct IamCredentialSecret {
    #[serde(rename = "AWS_ACCESS_KEY_ID")]
    pub access_key_id: String,

    #[serde(rename = "AWS_SECRET_ACCESS_KEY")]
    pub secret_access_key: String,
}

// Custom Debug implementation to prevent accidental logging of sensitive data
impl fmt::Debug for IamCredentialSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamCredentialSecret")
            .field(SECRET_KEY_ACCESS_KEY_ID, &"[REDACTED]")
            .field(SECRET_KEY_SECRET_ACCESS_KEY, &"[REDACTED]")
            .finish()
    }
}

impl IamCredentialSecret {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    /// Parses a stored secret string. An empty string is parsed like any other
    /// and therefore fails.
    pub fn from_secret_string(secret_string: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(secret_string)?)
    }

    /// Long-lived IAM user keys carry no session token and no expiry.
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            None,
            None,
            "IamCredentialSecret",
        )
    }
}

/// A single `{OutputKey, OutputValue}` pair of a described stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackOutput {
    #[serde(rename = "OutputKey")]
    pub key: Option<String>,
    #[serde(rename = "OutputValue")]
    pub value: Option<String>,
}

impl StackOutput {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    pub fn is_credential_secret(&self) -> bool {
        self.key.as_deref() == Some(CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME)
    }
}

/// The parts of a `DescribeStacks` result this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDescription {
    #[serde(rename = "StackName")]
    pub stack_name: String,
    #[serde(rename = "Outputs")]
    pub outputs: Vec<StackOutput>,
}

impl StackDescription {
    pub fn new(stack_name: impl Into<String>, outputs: Vec<StackOutput>) -> Self {
        Self {
            stack_name: stack_name.into(),
            outputs,
        }
    }
}

/// Validates a Kubernetes object name (RFC 1123 subdomain), e.g. "aws-credentials-secret"
pub fn validate_k8s_name(name: &str) -> Result<(), AppError> {
    let invalid = || AppError::ValidationError(format!("invalid kubernetes object name: {name:?}"));

    if name.is_empty() || name.len() > MAX_K8S_NAME_LENGTH {
        return Err(invalid());
    }

    for label in name.split('.') {
        let bytes = label.as_bytes();
        let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
            return Err(invalid());
        };
        if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
            return Err(invalid());
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return Err(invalid());
        }
    }

    Ok(())
}
