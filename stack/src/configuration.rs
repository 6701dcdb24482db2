// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::path::PathBuf;

use clap::Parser;
use iam_creds::constants::CONTEXT_DISABLE_SECRET;

use crate::app::{Environment, StackProps};
use crate::constants::DEFAULT_OUTDIR;
use crate::construct::context_flag_enabled;
use crate::iam_user_stack::IamUserStackProps;

/// Synthesize the IAM user stack into a cloud assembly directory.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct StackOptions {
    /// Deployed stack name, defaults to the stack id
    #[arg(long, env("IAM_CREDS_STACK_NAME"))]
    pub stack_name: Option<String>,
    #[arg(long, env("CDK_DEFAULT_ACCOUNT"))]
    pub account: Option<String>,
    #[arg(long, env("CDK_DEFAULT_REGION"))]
    pub region: Option<String>,
    /// Set to 1 to skip secret generation once the secret has been retrieved
    #[arg(long, value_name = "VALUE", env("IAM_CREDS_DISABLE_SECRET"))]
    pub disable_secret: Option<String>,
    #[arg(long, short, default_value = DEFAULT_OUTDIR, env("CDK_OUTDIR"))]
    pub output: PathBuf,
}

impl Default for StackOptions {
    fn default() -> Self {
        StackOptions {
            stack_name: None,
            account: None,
            region: None,
            disable_secret: None,
            output: PathBuf::from(DEFAULT_OUTDIR),
        }
    }
}

impl StackOptions {
    pub fn secret_disabled(&self) -> bool {
        let disabled = context_flag_enabled(self.disable_secret.as_deref());
        if self.disable_secret.is_some() {
            tracing::debug!(
                "[stack] {}={:?} -> {}",
                CONTEXT_DISABLE_SECRET,
                self.disable_secret,
                disabled
            );
        }
        disabled
    }

    pub fn stack_props(&self) -> IamUserStackProps {
        IamUserStackProps {
            stack: StackProps {
                stack_name: self.stack_name.clone(),
                description: Some(
                    "IAM user with an access key stored in Secrets Manager".to_string(),
                ),
                env: Environment {
                    account: self.account.clone(),
                    region: self.region.clone(),
                },
            },
            disable_secret: self.secret_disabled(),
        }
    }
}
