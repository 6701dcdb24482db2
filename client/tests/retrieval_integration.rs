// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Retrieval tests against in-memory CloudFormation and Secrets Manager.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashMap;
use std::sync::Mutex;

use aws_sdk_cloudformation::operation::describe_stacks::DescribeStacksError;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::client::result::SdkError;
use iam_creds::clients::{SecretStore, StackDescriber};
use iam_creds::constants::CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME;
use iam_creds::errors::AppError;
use iam_creds::kubernetes::KubernetesSecret;
use iam_creds::models::{IamCredentialSecret, StackDescription, StackOutput};
use iam_creds::retrieval::{get_iam_credential_secret_by_name, get_iam_credential_secret_by_stack};

/// Secrets keyed by name; records every requested identifier.
#[derive(Default)]
struct FakeSecrets {
    secrets: HashMap<String, Option<String>>,
    fail: bool,
    requests: Mutex<Vec<String>>,
}

impl FakeSecrets {
    fn with(name: &str, value: &str) -> Self {
        let mut fake = Self::default();
        fake.secrets.insert(name.to_string(), Some(value.to_string()));
        fake
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl SecretStore for FakeSecrets {
    async fn get_secret_string(&self, secret_id: &str) -> Result<Option<String>, AppError> {
        self.requests.lock().unwrap().push(secret_id.to_string());
        if self.fail {
            let err: SdkError<GetSecretValueError, HttpResponse> =
                SdkError::construction_failure("access denied");
            return Err(AppError::GetSecretValue(err));
        }
        match self.secrets.get(secret_id) {
            Some(value) => Ok(value.clone()),
            None => Err(AppError::GetSecretValue(SdkError::construction_failure(
                "Secrets Manager can't find the specified secret.",
            ))),
        }
    }
}

#[derive(Default)]
struct FakeStacks {
    stacks: Vec<StackDescription>,
    fail: bool,
}

impl StackDescriber for FakeStacks {
    async fn describe_stacks_by_name(
        &self,
        stack_name: &str,
    ) -> Result<Vec<StackDescription>, AppError> {
        if self.fail {
            let err: SdkError<DescribeStacksError, HttpResponse> =
                SdkError::construction_failure(format!("Stack with id {stack_name} does not exist"));
            return Err(AppError::DescribeStacks(err));
        }
        Ok(self
            .stacks
            .iter()
            .filter(|stack| stack.stack_name == stack_name)
            .cloned()
            .collect())
    }
}

const SECRET_JSON: &str = r#"{"AWS_ACCESS_KEY_ID":"AKIA...","AWS_SECRET_ACCESS_KEY":"abc"}"#;

fn stack_with_secret(stack_name: &str, secret_name: &str) -> StackDescription {
    StackDescription::new(
        stack_name,
        vec![
            StackOutput::new("SomethingElse", "ignored"),
            StackOutput::new(CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME, secret_name),
        ],
    )
}

// =============================================================================
// By Name
// =============================================================================

#[tokio::test]
async fn test_by_name_returns_stored_fields_unchanged() {
    let value = r#"{"AWS_ACCESS_KEY_ID":"AKIA/x+y=","AWS_SECRET_ACCESS_KEY":"s3cr3t/é"}"#;
    let store = FakeSecrets::with("X", value);

    let secret = get_iam_credential_secret_by_name(&store, "X").await.unwrap();

    assert_eq!(secret.access_key_id, "AKIA/x+y=");
    assert_eq!(secret.secret_access_key, "s3cr3t/é");
    assert_eq!(store.requests(), vec!["X".to_string()]);
}

#[tokio::test]
async fn test_by_name_upstream_error_propagates() {
    let store = FakeSecrets::default();

    let err = get_iam_credential_secret_by_name(&store, "missing").await.unwrap_err();

    assert!(matches!(err, AppError::GetSecretValue(_)));
    assert_eq!(err.to_string(), "failed to construct request");
}

#[tokio::test]
async fn test_by_name_access_denied_propagates() {
    let store = FakeSecrets {
        fail: true,
        ..FakeSecrets::with("X", SECRET_JSON)
    };

    let err = get_iam_credential_secret_by_name(&store, "X").await.unwrap_err();

    assert!(matches!(err, AppError::GetSecretValue(_)));
}

#[tokio::test]
async fn test_by_name_binary_secret_fails_to_parse() {
    let mut store = FakeSecrets::default();
    store.secrets.insert("X".to_string(), None);

    let err = get_iam_credential_secret_by_name(&store, "X").await.unwrap_err();

    assert!(matches!(err, AppError::MalformedSecret(_)));
}

#[tokio::test]
async fn test_by_name_malformed_payload_fails() {
    let store = FakeSecrets::with("X", "not json");

    let err = get_iam_credential_secret_by_name(&store, "X").await.unwrap_err();

    assert!(matches!(err, AppError::MalformedSecret(_)));
}

// =============================================================================
// By Stack
// =============================================================================

#[tokio::test]
async fn test_by_stack_matches_by_name() {
    let stacks = FakeStacks {
        stacks: vec![stack_with_secret("IAMUserStack", "IAMUserStackSecretXYZ")],
        fail: false,
    };
    let store = FakeSecrets::with("IAMUserStackSecretXYZ", SECRET_JSON);

    let by_stack = get_iam_credential_secret_by_stack(&stacks, &store, "IAMUserStack")
        .await
        .unwrap();
    let by_name = get_iam_credential_secret_by_name(&store, "IAMUserStackSecretXYZ")
        .await
        .unwrap();

    assert_eq!(by_stack, by_name);
    assert_eq!(by_stack, IamCredentialSecret::new("AKIA...", "abc"));
    assert_eq!(
        store.requests(),
        vec!["IAMUserStackSecretXYZ".to_string(), "IAMUserStackSecretXYZ".to_string()]
    );
}

#[tokio::test]
async fn test_by_stack_without_output_is_not_found() {
    let stacks = FakeStacks {
        stacks: vec![StackDescription::new(
            "IAMUserStack",
            vec![StackOutput::new("SomethingElse", "value")],
        )],
        fail: false,
    };
    let store = FakeSecrets::with("X", SECRET_JSON);

    let err = get_iam_credential_secret_by_stack(&stacks, &store, "IAMUserStack")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("IAMUserStack"));
    assert!(store.requests().is_empty());
}

#[tokio::test]
async fn test_by_stack_no_stacks_is_not_found() {
    let stacks = FakeStacks::default();
    let store = FakeSecrets::default();

    let err = get_iam_credential_secret_by_stack(&stacks, &store, "Unknown")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "failed to find a secret in stack \"Unknown\"");
}

#[tokio::test]
async fn test_by_stack_describe_failure_propagates() {
    let stacks = FakeStacks {
        stacks: vec![],
        fail: true,
    };
    let store = FakeSecrets::default();

    let err = get_iam_credential_secret_by_stack(&stacks, &store, "IAMUserStack")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DescribeStacks(_)));
    assert!(store.requests().is_empty());
}

#[tokio::test]
async fn test_by_stack_first_match_wins() {
    let stacks = FakeStacks {
        stacks: vec![
            StackDescription::new(
                "IAMUserStack",
                vec![
                    StackOutput::new(CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME, "first"),
                    StackOutput::new(CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME, "second"),
                ],
            ),
            stack_with_secret("IAMUserStack", "third"),
        ],
        fail: false,
    };
    let mut store = FakeSecrets::with("first", SECRET_JSON);
    store.secrets.insert(
        "second".to_string(),
        Some(r#"{"AWS_ACCESS_KEY_ID":"B","AWS_SECRET_ACCESS_KEY":"B"}"#.to_string()),
    );

    let secret = get_iam_credential_secret_by_stack(&stacks, &store, "IAMUserStack")
        .await
        .unwrap();

    assert_eq!(secret.access_key_id, "AKIA...");
    assert_eq!(store.requests(), vec!["first".to_string()]);
}

#[tokio::test]
async fn test_by_stack_output_without_value_reads_empty_id() {
    let stacks = FakeStacks {
        stacks: vec![StackDescription::new(
            "IAMUserStack",
            vec![StackOutput {
                key: Some(CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME.to_string()),
                value: None,
            }],
        )],
        fail: false,
    };
    let store = FakeSecrets::default();

    let err = get_iam_credential_secret_by_stack(&stacks, &store, "IAMUserStack")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::GetSecretValue(_)));
    assert_eq!(store.requests(), vec![String::new()]);
}

// =============================================================================
// Consumer
// =============================================================================

#[tokio::test]
async fn test_stack_secret_renders_kubernetes_document() {
    let stacks = FakeStacks {
        stacks: vec![stack_with_secret("IAMUserStack", "IAMUserStackSecretXYZ")],
        fail: false,
    };
    let store = FakeSecrets::with("IAMUserStackSecretXYZ", SECRET_JSON);

    let secret = get_iam_credential_secret_by_stack(&stacks, &store, "IAMUserStack")
        .await
        .unwrap();
    let document = KubernetesSecret::from_credentials("aws-credentials-secret", &secret).unwrap();

    let yaml: serde_yaml::Value = serde_yaml::from_str(&document.to_yaml().unwrap()).unwrap();
    assert_eq!(yaml["data"]["AWS_ACCESS_KEY_ID"].as_str(), Some("QUtJQS4uLg=="));
    assert_eq!(yaml["data"]["AWS_SECRET_ACCESS_KEY"].as_str(), Some("YWJj"));
    assert_eq!(yaml["metadata"]["name"].as_str(), Some("aws-credentials-secret"));
}
