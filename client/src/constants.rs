// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

/// CloudFormation output key under which the generated secret name is published.
pub const CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME: &str = "IAMCredentialSecretName";

/// Context key that disables secret generation when set to `1`.
pub const CONTEXT_DISABLE_SECRET: &str = "disableSecret";

/// JSON keys of the stored secret value.
pub const SECRET_KEY_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_KEY_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

pub const DEFAULT_STACK_NAME: &str = "IAMUserStack";
pub const DEFAULT_K8S_SECRET_NAME: &str = "aws-credentials-secret";
pub const DEFAULT_K8S_SECRET_PATH: &str = "secret.yaml";

// Kubernetes object names are RFC 1123 subdomains
pub const MAX_K8S_NAME_LENGTH: usize = 253;

pub const LOG_FORMAT_ENV: &str = "IAM_CREDS_LOG_FORMAT";
