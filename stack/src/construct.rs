// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! IAM credential secret construct.
//!
//! [`iam_credential_secret`] creates an access key for a user and, unless
//! disabled, a Secrets Manager secret holding the key pair:
//!
//! ```json
//! {"AWS_ACCESS_KEY_ID": "...", "AWS_SECRET_ACCESS_KEY": "..."}
//! ```
//!
//! The secret's identifier is published as the stack output
//! [`CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME`], which is what
//! `iam_creds::retrieval::get_iam_credential_secret_by_stack` looks for.
//!
//! Once the secret has been retrieved, redeploy with `disable_secret` set to
//! remove the secret and the output while keeping the access key.

use iam_creds::constants::{
    CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME, SECRET_KEY_ACCESS_KEY_ID, SECRET_KEY_SECRET_ACCESS_KEY,
};
use serde_json::{Value, json};

use crate::app::Stack;
use crate::constants::{
    ACCESS_KEY_ID, ACCESS_KEY_TYPE, SECRET_ARN_NAME_INDEX, SECRET_ID, SECRET_TYPE, USER_TYPE,
};
use crate::errors::StackError;
use crate::template::{
    Export, Output, RemovalPolicy, Resource, fn_get_att, fn_ref, fn_select, fn_split,
    json_object_join,
};

/// Handle to a declared `AWS::IAM::User`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    logical_id: String,
}

impl UserRef {
    pub fn declare(stack: &mut Stack, id: &str) -> Result<Self, StackError> {
        let logical_id = stack.add_resource(id, Resource::new(USER_TYPE))?;
        Ok(UserRef { logical_id })
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn user_name(&self) -> Value {
        fn_ref(&self.logical_id)
    }
}

/// Handle to a declared `AWS::IAM::AccessKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKeyRef {
    logical_id: String,
}

impl AccessKeyRef {
    pub fn declare(stack: &mut Stack, id: &str, user: &UserRef) -> Result<Self, StackError> {
        let resource = Resource::new(ACCESS_KEY_TYPE).property("UserName", user.user_name());
        let logical_id = stack.add_resource(id, resource)?;
        Ok(AccessKeyRef { logical_id })
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn access_key_id(&self) -> Value {
        fn_ref(&self.logical_id)
    }

    pub fn secret_access_key(&self) -> Value {
        fn_get_att(&self.logical_id, "SecretAccessKey")
    }
}

/// Handle to a declared `AWS::SecretsManager::Secret`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRef {
    logical_id: String,
    name: Option<String>,
}

impl SecretRef {
    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn secret_arn(&self) -> Value {
        fn_ref(&self.logical_id)
    }

    /// The configured name, or the resource name segment of the ARN when
    /// CloudFormation generates the name.
    ///
    /// ARNs have the form `arn:aws:secretsmanager:<region>:<account>:secret:<name>`,
    /// where a generated `<name>` already carries its random suffix.
    pub fn secret_name(&self) -> Value {
        match &self.name {
            Some(name) => Value::String(name.clone()),
            None => fn_select(SECRET_ARN_NAME_INDEX, fn_split(":", self.secret_arn())),
        }
    }
}

/// Secret settings the caller may override. The secret value is always the
/// generated access key, so there is no way to set it here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretOptions {
    pub secret_name: Option<String>,
    pub description: Option<String>,
    /// KMS key ARN, id or alias used to encrypt the secret
    pub kms_key_id: Option<String>,
    pub removal_policy: RemovalPolicy,
    pub replica_regions: Vec<String>,
}

/// Output settings the caller may override. The value is always the secret name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub description: Option<String>,
    pub export_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IamCredentialSecretProps {
    pub secret: SecretOptions,
    pub output: OutputOptions,
    /// Skip the secret and the output; the access key is still created.
    pub disable_secret: bool,
}

/// Interprets a context-style flag value: enabled iff it is numerically 1.
///
/// Decimal forms (`"1"`, `"1.0"`, `" 1 "`, `"1e0"`) and unsigned
/// `0x` / `0o` / `0b` literals (`"0x1"`) enable; absent, empty, `"0"`, `"2"`
/// and `"true"` do not.
pub fn context_flag_enabled(value: Option<&str>) -> bool {
    let Some(value) = value.map(str::trim) else {
        return false;
    };

    let radix = value.get(..2).and_then(|prefix| match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    });

    match radix {
        Some(_) if value[2..].starts_with('+') => false,
        Some(radix) => u64::from_str_radix(&value[2..], radix).is_ok_and(|number| number == 1),
        None => value.parse::<f64>().is_ok_and(|number| number == 1.0),
    }
}

/// Creates an access key for `user` and, unless disabled, a secret holding it
/// plus the [`CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME`] output.
///
/// Returns the secret handle, or `None` when secret creation is disabled.
///
/// # Errors
///
/// Returns [`StackError::DuplicateConstruct`] if the stack already contains
/// any of the construct ids used here.
#[tracing::instrument(skip(stack, props), fields(stack_id = stack.id()))]
pub fn iam_credential_secret(
    stack: &mut Stack,
    user: &UserRef,
    props: IamCredentialSecretProps,
) -> Result<Option<SecretRef>, StackError> {
    let access_key = AccessKeyRef::declare(stack, ACCESS_KEY_ID, user)?;

    if props.disable_secret {
        tracing::warn!("[stack] secret generation disabled, only the access key is declared");
        return Ok(None);
    }

    let SecretOptions {
        secret_name,
        description,
        kms_key_id,
        removal_policy,
        replica_regions,
    } = props.secret;

    let secret_string = json_object_join(&[
        (SECRET_KEY_ACCESS_KEY_ID, access_key.access_key_id()),
        (SECRET_KEY_SECRET_ACCESS_KEY, access_key.secret_access_key()),
    ]);

    let replicas = (!replica_regions.is_empty()).then(|| {
        replica_regions
            .iter()
            .map(|region| json!({ "Region": region }))
            .collect::<Vec<_>>()
    });

    let resource = Resource::new(SECRET_TYPE)
        .optional_property("Name", secret_name.clone())
        .optional_property("Description", description)
        .optional_property("KmsKeyId", kms_key_id)
        .optional_property("ReplicaRegions", replicas)
        .property("SecretString", secret_string)
        .removal_policy(removal_policy);

    let logical_id = stack.add_resource(SECRET_ID, resource)?;
    let secret = SecretRef {
        logical_id,
        name: secret_name,
    };

    stack.add_output(
        CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME,
        Output {
            description: props.output.description,
            value: secret.secret_name(),
            export: props.output.export_name.map(|name| Export { name }),
        },
    )?;

    Ok(Some(secret))
}
