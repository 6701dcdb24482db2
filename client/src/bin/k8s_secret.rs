// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::Result;
use clap::Parser;
use iam_creds::clients::IamCredentialClient;
use iam_creds::configuration::SecretPrintOptions;
use iam_creds::kubernetes::KubernetesSecret;
use iam_creds::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let options = SecretPrintOptions::parse();

    tracing::info!("[k8s-secret] {:?}", &options);

    let client = IamCredentialClient::from_env(options.region.clone()).await;
    let secret = client.secret_by_stack(&options.stack_name).await?;

    let document = KubernetesSecret::from_credentials(options.secret_name, &secret)?;

    print!("{}", document.to_yaml()?);

    Ok(())
}
