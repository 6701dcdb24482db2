// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::Result;
use clap::Parser;
use iam_creds::clients::IamCredentialClient;
use iam_creds::configuration::CredentialOptions;
use iam_creds::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let options = CredentialOptions::parse();

    tracing::info!("[iam-creds] {:?}", &options);

    let client = IamCredentialClient::from_env(options.region.clone()).await;

    let secret = match options.secret_name.as_deref() {
        Some(secret_name) => client.secret_by_name(secret_name).await?,
        None => client.secret_by_stack(&options.stack_name).await?,
    };

    println!("{}", serde_json::to_string_pretty(&secret)?);

    Ok(())
}
