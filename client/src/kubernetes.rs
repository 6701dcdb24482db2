// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Kubernetes `Secret` document built from a retrieved credential secret.
//!
//! The document has a fixed schema:
//!
//! ```yaml
//! apiVersion: v1
//! kind: Secret
//! metadata:
//!   name: aws-credentials-secret
//! data:
//!   AWS_ACCESS_KEY_ID: <base64>
//!   AWS_SECRET_ACCESS_KEY: <base64>
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use zeroize::ZeroizeOnDrop;

use crate::errors::AppError;
use crate::models::{IamCredentialSecret, validate_k8s_name};
use crate::utils::base64_encode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesSecret {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub data: SecretData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
}

/// Base64-encoded credential fields.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ZeroizeOnDrop)]
pub struct SecretData {
    #[serde(rename = "AWS_ACCESS_KEY_ID")]
    pub access_key_id: String,

    #[serde(rename = "AWS_SECRET_ACCESS_KEY")]
    pub secret_access_key: String,
}

impl fmt::Debug for SecretData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretData")
            .field("access_key_id", &"[REDACTED]")
            .field("secret_access_key", &"[REDACTED]")
            .finish()
    }
}

impl KubernetesSecret {
    /// Builds the document, base64-encoding both credential fields.
    pub fn from_credentials(
        name: impl Into<String>,
        secret: &IamCredentialSecret,
    ) -> Result<Self, AppError> {
        let name = name.into();
        validate_k8s_name(&name)?;

        Ok(Self {
            api_version: "v1".to_string(),
            kind: "Secret".to_string(),
            metadata: ObjectMeta { name },
            data: SecretData {
                access_key_id: base64_encode(&secret.access_key_id),
                secret_access_key: base64_encode(&secret.secret_access_key),
            },
        })
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(self)?)
    }

    #[tracing::instrument(skip(self), fields(name = %self.metadata.name))]
    pub fn write_yaml(&self, path: &Path) -> Result<(), AppError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)?;

        tracing::info!("[k8s] wrote secret document to {}", path.display());

        Ok(())
    }
}
