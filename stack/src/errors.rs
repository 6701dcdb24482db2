// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

#[derive(thiserror::Error, Debug)]
pub enum StackError {
    #[error("there is already a construct with id {id:?} in stack {stack:?}")]
    DuplicateConstruct { stack: String, id: String },
    #[error("there is already a stack with id {0:?} in the app")]
    DuplicateStack(String),
    #[error("invalid construct id {0:?}: only alphanumeric characters are allowed")]
    InvalidConstructId(String),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("unable to serialize template: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unable to write cloud assembly: {0}")]
    Io(#[from] std::io::Error),
}
