// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use crate::app::{App, Stack, StackProps};
use crate::constants::USER_ID;
use crate::construct::{IamCredentialSecretProps, SecretRef, UserRef, iam_credential_secret};
use crate::errors::StackError;

#[derive(Debug, Clone, Default)]
pub struct IamUserStackProps {
    pub stack: StackProps,
    pub disable_secret: bool,
}

/// A stack with one IAM user whose access key is stored in Secrets Manager.
///
/// Policies are not managed here; attach them to the user out of band.
#[derive(Debug, Clone)]
pub struct IamUserStack {
    pub id: String,
    pub user: UserRef,
    pub secret: Option<SecretRef>,
}

impl IamUserStack {
    /// Declares the stack and registers it with `app`.
    pub fn new(app: &mut App, id: &str, props: IamUserStackProps) -> Result<Self, StackError> {
        let mut stack = Stack::new(id, props.stack)?;

        let user = UserRef::declare(&mut stack, USER_ID)?;

        let secret = iam_credential_secret(
            &mut stack,
            &user,
            IamCredentialSecretProps {
                disable_secret: props.disable_secret,
                ..IamCredentialSecretProps::default()
            },
        )?;

        app.add_stack(stack)?;

        Ok(IamUserStack {
            id: id.to_string(),
            user,
            secret,
        })
    }
}
