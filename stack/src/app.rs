// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! App and stack scopes.
//!
//! A [`Stack`] collects resources and outputs under unique construct ids.
//! An [`App`] owns the stacks and synthesizes them into a cloud assembly
//! directory:
//!
//! ```text
//! cdk.out/
//!   manifest.json
//!   IAMUserStack.template.json
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    MANIFEST_FILE, MAX_CONSTRUCT_ID_LENGTH, MAX_STACK_NAME_LENGTH, TEMPLATE_SUFFIX,
    UNKNOWN_ACCOUNT, UNKNOWN_REGION,
};
use crate::errors::StackError;
use crate::template::{Output, Resource, Template};

/// Deployment target of a stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub account: Option<String>,
    pub region: Option<String>,
}

impl Environment {
    /// `aws://<account>/<region>`, with placeholders for unset parts.
    pub fn uri(&self) -> String {
        format!(
            "aws://{}/{}",
            self.account.as_deref().unwrap_or(UNKNOWN_ACCOUNT),
            self.region.as_deref().unwrap_or(UNKNOWN_REGION)
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct StackProps {
    /// Deployed stack name; defaults to the stack id.
    pub stack_name: Option<String>,
    pub description: Option<String>,
    pub env: Environment,
}

#[derive(Debug, Clone)]
pub struct Stack {
    id: String,
    stack_name: String,
    env: Environment,
    template: Template,
    construct_ids: BTreeSet<String>,
}

impl Stack {
    pub fn new(id: &str, props: StackProps) -> Result<Self, StackError> {
        let stack_name = props.stack_name.unwrap_or_else(|| id.to_string());
        validate_stack_name(&stack_name)?;

        let template = Template {
            description: props.description,
            ..Template::default()
        };

        Ok(Stack {
            id: id.to_string(),
            stack_name,
            env: props.env,
            template,
            construct_ids: BTreeSet::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Adds a resource and returns its logical id.
    pub fn add_resource(&mut self, id: &str, resource: Resource) -> Result<String, StackError> {
        self.claim(id)?;
        tracing::debug!("[stack] {}: adding {} {}", self.id, resource.resource_type, id);
        self.template.resources.insert(id.to_string(), resource);
        Ok(id.to_string())
    }

    pub fn add_output(&mut self, id: &str, output: Output) -> Result<(), StackError> {
        self.claim(id)?;
        tracing::debug!("[stack] {}: adding output {}", self.id, id);
        self.template.outputs.insert(id.to_string(), output);
        Ok(())
    }

    fn claim(&mut self, id: &str) -> Result<(), StackError> {
        validate_construct_id(id)?;
        if !self.construct_ids.insert(id.to_string()) {
            return Err(StackError::DuplicateConstruct {
                stack: self.id.clone(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn template_file(&self) -> String {
        format!("{}{}", self.id, TEMPLATE_SUFFIX)
    }
}

/// Cloud assembly manifest entry for one stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub environment: String,
    pub properties: ArtifactProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactProperties {
    pub template_file: String,
    pub stack_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyManifest {
    pub artifacts: BTreeMap<String, ArtifactManifest>,
}

#[derive(Debug)]
pub struct App {
    outdir: PathBuf,
    stacks: Vec<Stack>,
}

impl App {
    pub fn new(outdir: impl Into<PathBuf>) -> Self {
        App {
            outdir: outdir.into(),
            stacks: Vec::new(),
        }
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    pub fn add_stack(&mut self, stack: Stack) -> Result<(), StackError> {
        if self.stack(stack.id()).is_some() {
            return Err(StackError::DuplicateStack(stack.id().to_string()));
        }
        self.stacks.push(stack);
        Ok(())
    }

    pub fn stack(&self, id: &str) -> Option<&Stack> {
        self.stacks.iter().find(|stack| stack.id() == id)
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn manifest(&self) -> AssemblyManifest {
        let artifacts = self
            .stacks
            .iter()
            .map(|stack| {
                let artifact = ArtifactManifest {
                    artifact_type: "aws:cloudformation:stack".to_string(),
                    environment: stack.env().uri(),
                    properties: ArtifactProperties {
                        template_file: stack.template_file(),
                        stack_name: stack.stack_name().to_string(),
                    },
                };
                (stack.id().to_string(), artifact)
            })
            .collect();

        AssemblyManifest { artifacts }
    }

    /// Writes every stack template and the manifest, returning the template paths.
    #[tracing::instrument(skip(self), fields(outdir = %self.outdir.display()))]
    pub fn synth(&self) -> Result<Vec<PathBuf>, StackError> {
        fs::create_dir_all(&self.outdir)?;

        let mut written = Vec::with_capacity(self.stacks.len());
        for stack in &self.stacks {
            let path = self.outdir.join(stack.template_file());
            fs::write(&path, serde_json::to_string_pretty(stack.template())?)?;
            tracing::info!("[stack] synthesized {} to {}", stack.stack_name(), path.display());
            written.push(path);
        }

        let manifest = serde_json::to_string_pretty(&self.manifest())?;
        fs::write(self.outdir.join(MANIFEST_FILE), manifest)?;

        Ok(written)
    }
}

/// Construct ids double as logical ids, so they must be alphanumeric.
fn validate_construct_id(id: &str) -> Result<(), StackError> {
    if id.is_empty()
        || id.len() > MAX_CONSTRUCT_ID_LENGTH
        || !id.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(StackError::InvalidConstructId(id.to_string()));
    }
    Ok(())
}

/// Validates a CloudFormation stack name, e.g. "IAMUserStack" or "iam-user-dev"
fn validate_stack_name(name: &str) -> Result<(), StackError> {
    let invalid = || StackError::ValidationError(format!("invalid stack name: {name:?}"));

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return Err(invalid()),
    }
    if name.len() > MAX_STACK_NAME_LENGTH || !chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_name_defaults_to_id() {
        let stack = Stack::new("IAMUserStack", StackProps::default()).unwrap();
        assert_eq!(stack.stack_name(), "IAMUserStack");
        assert_eq!(stack.template_file(), "IAMUserStack.template.json");
    }

    #[test]
    fn test_stack_name_override() {
        let props = StackProps {
            stack_name: Some("iam-user-dev".to_string()),
            ..StackProps::default()
        };
        let stack = Stack::new("IAMUserStack", props).unwrap();
        assert_eq!(stack.id(), "IAMUserStack");
        assert_eq!(stack.stack_name(), "iam-user-dev");
    }

    #[test]
    fn test_validate_stack_name() {
        assert!(validate_stack_name("IAMUserStack").is_ok());
        assert!(validate_stack_name("a-1").is_ok());
        assert!(validate_stack_name("").is_err());
        assert!(validate_stack_name("1stack").is_err());
        assert!(validate_stack_name("under_score").is_err());
        assert!(validate_stack_name(&"a".repeat(129)).is_err());
        assert!(validate_stack_name(&"a".repeat(128)).is_ok());
    }

    #[test]
    fn test_duplicate_construct_rejected() {
        let mut stack = Stack::new("S", StackProps::default()).unwrap();
        stack.add_resource("User", Resource::new("AWS::IAM::User")).unwrap();
        let err = stack
            .add_output(
                "User",
                Output {
                    description: None,
                    value: serde_json::json!("x"),
                    export: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, StackError::DuplicateConstruct { .. }));
    }

    #[test]
    fn test_invalid_construct_id_rejected() {
        let mut stack = Stack::new("S", StackProps::default()).unwrap();
        let err = stack
            .add_resource("Access-Key", Resource::new("AWS::IAM::AccessKey"))
            .unwrap_err();
        assert!(matches!(err, StackError::InvalidConstructId(_)));
        assert!(stack.template().resources.is_empty());
    }

    #[test]
    fn test_environment_uri() {
        let env = Environment {
            account: Some("123456789012".to_string()),
            region: Some("us-east-1".to_string()),
        };
        assert_eq!(env.uri(), "aws://123456789012/us-east-1");
        assert_eq!(
            Environment::default().uri(),
            "aws://unknown-account/unknown-region"
        );
    }

    #[test]
    fn test_duplicate_stack_rejected() {
        let mut app = App::new("cdk.out");
        app.add_stack(Stack::new("S", StackProps::default()).unwrap())
            .unwrap();
        let err = app
            .add_stack(Stack::new("S", StackProps::default()).unwrap())
            .unwrap_err();
        assert!(matches!(err, StackError::DuplicateStack(_)));
    }
}
