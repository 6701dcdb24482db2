// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

pub use iam_creds::constants::DEFAULT_STACK_NAME as DEFAULT_STACK_ID;

pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";
pub const DEFAULT_OUTDIR: &str = "cdk.out";
pub const MANIFEST_FILE: &str = "manifest.json";
pub const TEMPLATE_SUFFIX: &str = ".template.json";

// Construct ids, used verbatim as logical ids
pub const USER_ID: &str = "User";
pub const ACCESS_KEY_ID: &str = "AccessKey";
pub const SECRET_ID: &str = "Secret";

pub const USER_TYPE: &str = "AWS::IAM::User";
pub const ACCESS_KEY_TYPE: &str = "AWS::IAM::AccessKey";
pub const SECRET_TYPE: &str = "AWS::SecretsManager::Secret";

// arn:aws:secretsmanager:<region>:<account>:secret:<name>
pub const SECRET_ARN_NAME_INDEX: usize = 6;

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/cfn-using-console-create-stack-parameters.html
pub const MAX_STACK_NAME_LENGTH: usize = 128;
pub const MAX_CONSTRUCT_ID_LENGTH: usize = 255;

pub const UNKNOWN_ACCOUNT: &str = "unknown-account";
pub const UNKNOWN_REGION: &str = "unknown-region";
