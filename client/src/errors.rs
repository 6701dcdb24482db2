// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use aws_sdk_cloudformation::operation::describe_stacks::DescribeStacksError;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::client::result::SdkError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed to find a secret in stack \"{0}\"")]
    StackSecretNotFound(String),
    #[error(transparent)]
    DescribeStacks(SdkError<DescribeStacksError, HttpResponse>),
    #[error(transparent)]
    GetSecretValue(SdkError<GetSecretValueError, HttpResponse>),
    #[error(transparent)]
    MalformedSecret(#[from] serde_json::Error),
    #[error(transparent)]
    Render(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl AppError {
    /// True when the error is the only condition raised by this crate itself.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StackSecretNotFound(_))
    }
}
