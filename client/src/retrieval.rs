// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Retrieval of the generated IAM credential secret.
//!
//! # Lookup Flow
//!
//! 1. [`get_iam_credential_secret_by_stack`] describes the stack and looks for
//!    the [`CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME`] output
//! 2. The output value is handed to [`get_iam_credential_secret_by_name`]
//! 3. The secret string is parsed as [`IamCredentialSecret`]
//!
//! Calls are strictly sequential. Upstream failures are returned as-is,
//! without retry.

use crate::clients::{SecretStore, StackDescriber};
use crate::constants::CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME;
use crate::errors::AppError;
use crate::models::IamCredentialSecret;

/// Retrieves the generated secret value by secret name (or ARN).
///
/// # Errors
///
/// - [`AppError::GetSecretValue`] - the secret could not be read
/// - [`AppError::MalformedSecret`] - the value is not the expected JSON object
#[tracing::instrument(skip(store))]
pub async fn get_iam_credential_secret_by_name<S>(
    store: &S,
    secret_name: &str,
) -> Result<IamCredentialSecret, AppError>
where
    S: SecretStore + ?Sized,
{
    let secret_string = store.get_secret_string(secret_name).await?;

    tracing::debug!(
        "[retrieval] fetched secret value ({} bytes)",
        secret_string.as_ref().map_or(0, String::len)
    );

    IamCredentialSecret::from_secret_string(secret_string.as_deref().unwrap_or_default())
}

/// Retrieves the generated secret value by the name of the stack that
/// published it.
///
/// Stacks are scanned in the order returned, then outputs in declaration
/// order. The first output keyed [`CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME`]
/// wins.
///
/// # Errors
///
/// - [`AppError::StackSecretNotFound`] - no stack output carries the key
/// - [`AppError::DescribeStacks`] - the stack could not be described
/// - any error of [`get_iam_credential_secret_by_name`]
#[tracing::instrument(skip(describer, store))]
pub async fn get_iam_credential_secret_by_stack<D, S>(
    describer: &D,
    store: &S,
    stack_name: &str,
) -> Result<IamCredentialSecret, AppError>
where
    D: StackDescriber + ?Sized,
    S: SecretStore + ?Sized,
{
    let stacks = describer.describe_stacks_by_name(stack_name).await?;

    let mut candidates = stacks
        .iter()
        .flat_map(|stack| stack.outputs.iter())
        .filter(|output| output.is_credential_secret());

    let Some(output) = candidates.next() else {
        return Err(AppError::StackSecretNotFound(stack_name.to_string()));
    };

    let ignored = candidates.count();
    if ignored > 0 {
        tracing::warn!(
            "[retrieval] stack {:?} has {} additional {} outputs, using the first",
            stack_name,
            ignored,
            CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME
        );
    }

    let secret_name = output.value.as_deref().unwrap_or_default();

    tracing::debug!("[retrieval] stack {:?} points at secret {:?}", stack_name, secret_name);

    get_iam_credential_secret_by_name(store, secret_name).await
}
