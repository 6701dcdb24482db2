// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # IAM Credentials
//!
//! Retrieval side of the IAM credential secret solution.
//!
//! The companion `iam-creds-stack` crate synthesizes a stack that creates an
//! IAM user, an access key for it and a Secrets Manager secret holding the
//! key pair. The secret's identifier is published as the stack output
//! [`IAMCredentialSecretName`](constants::CFN_OUTPUT_IAM_CREDENTIAL_SECRET_NAME).
//! This crate reads it back.
//!
//! ```text
//! iam-creds -> DescribeStacks -> output IAMCredentialSecretName
//!                                  |
//!                                  +-> GetSecretValue -> IamCredentialSecret
//! ```
//!
//! ## Modules
//!
//! - [`clients`]: service traits and the AWS SDK client bundle
//! - [`configuration`]: CLI argument parsing with clap
//! - [`constants`]: contract keys and defaults shared with the stack crate
//! - [`errors`]: error types
//! - [`kubernetes`]: Kubernetes `Secret` document rendering
//! - [`models`]: retrieved secret and stack description types
//! - [`retrieval`]: lookup by secret name or by stack name
//! - [`telemetry`]: tracing subscriber setup for the binaries
//!
//! ## Usage
//!
//! ```bash
//! iam-creds IAMUserStack
//! k8s-secret IAMUserStack aws-credentials-secret | kubectl apply -f -
//! k8s-secret-file IAMUserStack
//! ```

pub mod clients;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod kubernetes;
pub mod models;
pub mod retrieval;
pub mod telemetry;
pub mod utils;
