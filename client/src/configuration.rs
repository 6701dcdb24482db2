// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_K8S_SECRET_NAME, DEFAULT_K8S_SECRET_PATH, DEFAULT_STACK_NAME};

/// Print the generated IAM credential secret as JSON.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CredentialOptions {
    /// Stack that published the secret name output
    #[arg(default_value = DEFAULT_STACK_NAME)]
    pub stack_name: String,
    /// Read this secret directly instead of looking it up through the stack
    #[arg(long)]
    pub secret_name: Option<String>,
    #[arg(long, env("AWS_REGION"))]
    pub region: Option<String>,
}

impl Default for CredentialOptions {
    fn default() -> Self {
        CredentialOptions {
            stack_name: DEFAULT_STACK_NAME.to_string(),
            secret_name: None,
            region: None,
        }
    }
}

/// Print a Kubernetes Secret holding the generated IAM credentials.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct SecretPrintOptions {
    #[arg(default_value = DEFAULT_STACK_NAME)]
    pub stack_name: String,
    /// metadata.name of the printed Secret
    #[arg(default_value = DEFAULT_K8S_SECRET_NAME)]
    pub secret_name: String,
    #[arg(long, env("AWS_REGION"))]
    pub region: Option<String>,
}

impl Default for SecretPrintOptions {
    fn default() -> Self {
        SecretPrintOptions {
            stack_name: DEFAULT_STACK_NAME.to_string(),
            secret_name: DEFAULT_K8S_SECRET_NAME.to_string(),
            region: None,
        }
    }
}

/// Write a Kubernetes Secret holding the generated IAM credentials to a file.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct SecretFileOptions {
    #[arg(default_value = DEFAULT_STACK_NAME)]
    pub stack_name: String,
    #[arg(long, short, default_value = DEFAULT_K8S_SECRET_PATH)]
    pub output: PathBuf,
    #[arg(long, env("AWS_REGION"))]
    pub region: Option<String>,
}

impl Default for SecretFileOptions {
    fn default() -> Self {
        SecretFileOptions {
            stack_name: DEFAULT_STACK_NAME.to_string(),
            output: PathBuf::from(DEFAULT_K8S_SECRET_PATH),
            region: None,
        }
    }
}
