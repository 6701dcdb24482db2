// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Service seams used by the retrieval functions.
//!
//! [`StackDescriber`] and [`SecretStore`] are implemented by the AWS SDK
//! clients for CloudFormation and Secrets Manager. Both return plain data
//! (see [`crate::models`]) so the retrieval logic can run against in-memory
//! implementations in tests.

use std::future::Future;

use aws_config::{BehaviorVersion, Region};

use crate::errors::AppError;
use crate::models::{IamCredentialSecret, StackDescription, StackOutput};
use crate::retrieval;

/// Reads secret values by identifier (name or ARN).
pub trait SecretStore {
    /// Returns the `SecretString` of the secret, `None` if the secret only
    /// holds binary data.
    fn get_secret_string(
        &self,
        secret_id: &str,
    ) -> impl Future<Output = Result<Option<String>, AppError>> + Send;
}

/// Describes deployed stacks by name.
pub trait StackDescriber {
    fn describe_stacks_by_name(
        &self,
        stack_name: &str,
    ) -> impl Future<Output = Result<Vec<StackDescription>, AppError>> + Send;
}

impl SecretStore for aws_sdk_secretsmanager::Client {
    async fn get_secret_string(&self, secret_id: &str) -> Result<Option<String>, AppError> {
        let response = self
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(AppError::GetSecretValue)?;

        Ok(response.secret_string().map(str::to_string))
    }
}

impl StackDescriber for aws_sdk_cloudformation::Client {
    async fn describe_stacks_by_name(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackDescription>, AppError> {
        let response = self
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(AppError::DescribeStacks)?;

        let stacks = response
            .stacks()
            .iter()
            .map(|stack| StackDescription {
                stack_name: stack.stack_name().unwrap_or_default().to_string(),
                outputs: stack
                    .outputs()
                    .iter()
                    .map(|output| StackOutput {
                        key: output.output_key().map(str::to_string),
                        value: output.output_value().map(str::to_string),
                    })
                    .collect(),
            })
            .collect();

        Ok(stacks)
    }
}

/// CloudFormation and Secrets Manager clients sharing one loaded configuration.
#[derive(Debug, Clone)]
pub struct IamCredentialClient {
    cloudformation: aws_sdk_cloudformation::Client,
    secretsmanager: aws_sdk_secretsmanager::Client,
}

impl IamCredentialClient {
    /// Loads configuration from the default provider chain, optionally
    /// overriding the region.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;

        tracing::debug!("[retrieval] loaded aws config, region: {:?}", config.region());

        Self {
            cloudformation: aws_sdk_cloudformation::Client::new(&config),
            secretsmanager: aws_sdk_secretsmanager::Client::new(&config),
        }
    }

    pub async fn secret_by_name(&self, secret_name: &str) -> Result<IamCredentialSecret, AppError> {
        retrieval::get_iam_credential_secret_by_name(&self.secretsmanager, secret_name).await
    }

    pub async fn secret_by_stack(&self, stack_name: &str) -> Result<IamCredentialSecret, AppError> {
        retrieval::get_iam_credential_secret_by_stack(
            &self.cloudformation,
            &self.secretsmanager,
            stack_name,
        )
        .await
    }
}
