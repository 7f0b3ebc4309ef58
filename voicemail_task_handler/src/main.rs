#![recursion_limit = "256"]

use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use lambda_entrypoint::Entrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use std::sync::Arc;
use voicemail_task_handler::{
    config::Config, domain::service::VoicemailTaskServiceImpl, inbound::handler::handler,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = Entrypoint::default().init();

    tracing::trace!(environment=%entrypoint.environment(), "initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!("initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let connect = connect_client::Connect::new(aws_sdk_connect::Client::new(&aws_config));
    let s3 = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config));

    tracing::trace!("initialized aws clients");

    let service = Arc::new(VoicemailTaskServiceImpl::new(
        connect,
        s3,
        config.task_settings(),
    ));

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let service = service.clone();

        async move { handler(service.as_ref(), event).await }
    });

    run(func).await
}
