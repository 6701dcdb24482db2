// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # IAM Credentials Stack
//!
//! Declaration side of the IAM credential secret solution.
//!
//! This crate synthesizes a CloudFormation stack that creates an IAM user,
//! an access key for that user and a Secrets Manager secret holding the key
//! pair. The secret identifier is published as the `IAMCredentialSecretName`
//! stack output so that the `iam-creds` crate can read it back.
//!
//! ```text
//! IamUserStack -> User
//!              -> iam_credential_secret -> AccessKey
//!                                       -> Secret (unless disabled)
//!                                       -> Output IAMCredentialSecretName
//! ```
//!
//! ## Modules
//!
//! - [`app`]: app and stack scopes, cloud assembly synthesis
//! - [`configuration`]: CLI argument parsing with clap
//! - [`constants`]: construct ids, resource types and limits
//! - [`construct`]: the IAM credential secret construct
//! - [`errors`]: error types
//! - [`iam_user_stack`]: the stack definition
//! - [`template`]: CloudFormation template model and intrinsics
//!
//! ## Usage
//!
//! ```bash
//! iam-user-stack --output cdk.out
//! aws cloudformation deploy --stack-name IAMUserStack \
//!     --template-file cdk.out/IAMUserStack.template.json --capabilities CAPABILITY_IAM
//! # after retrieving the secret
//! iam-user-stack --disable-secret 1
//! ```

pub mod app;
pub mod configuration;
pub mod constants;
pub mod construct;
pub mod errors;
pub mod iam_user_stack;
pub mod template;
