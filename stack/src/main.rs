// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::Result;
use clap::Parser;
use iam_creds::telemetry::init_tracing;
use iam_creds_stack::app::App;
use iam_creds_stack::configuration::StackOptions;
use iam_creds_stack::constants::DEFAULT_STACK_ID;
use iam_creds_stack::iam_user_stack::IamUserStack;

fn main() -> Result<()> {
    init_tracing();

    let options = StackOptions::parse();

    tracing::info!("[stack] {:?}", &options);

    let mut app = App::new(&options.output);
    IamUserStack::new(&mut app, DEFAULT_STACK_ID, options.stack_props())?;

    for path in app.synth()? {
        println!("{}", path.display());
    }

    Ok(())
}
