// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::Result;
use clap::Parser;
use iam_creds::clients::IamCredentialClient;
use iam_creds::configuration::SecretFileOptions;
use iam_creds::constants::DEFAULT_K8S_SECRET_NAME;
use iam_creds::kubernetes::KubernetesSecret;
use iam_creds::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let options = SecretFileOptions::parse();

    tracing::info!("[k8s-secret-file] {:?}", &options);

    let client = IamCredentialClient::from_env(options.region.clone()).await;
    let secret = client.secret_by_stack(&options.stack_name).await?;

    KubernetesSecret::from_credentials(DEFAULT_K8S_SECRET_NAME, &secret)?
        .write_yaml(&options.output)?;

    Ok(())
}
