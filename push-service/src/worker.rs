use std::collections::HashMap;

use anyhow::{Error, Result};
use futures_util::StreamExt;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    clients::{rbmq::RabbitMqClient, template::TemplateServiceClient, users::UserServiceClient},
    error::WorkerError,
    models::{
        delivery::{PushDelivery, RenderedNotification},
        envelope::{InboundMessage, PUSH_TASK},
        job::PushJob,
    },
    render::render_template,
};

/// Consume loop: one message at a time per worker slot, ack on success,
/// reject without requeue on failure. Redelivery policy is the broker's
/// concern, not this loop's.
pub async fn run<D>(
    rabbit: &RabbitMqClient,
    templates: &TemplateServiceClient,
    users: &UserServiceClient,
    delivery: &D,
) -> Result<(), Error>
where
    D: PushDelivery + Sync,
{
    let mut consumer = rabbit.create_consumer().await?;

    info!("Worker started, waiting for push jobs");

    while let Some(attempt) = consumer.next().await {
        let message = match attempt {
            Ok(message) => message,
            Err(e) => {
                error!(error = %e, "Failed to read delivery from queue");
                continue;
            }
        };

        let delivery_tag = message.delivery_tag;

        match process_message(&message.data, templates, users, delivery).await {
            Ok(()) => rabbit.acknowledge(delivery_tag).await?,
            Err(e) => {
                error!(error = %e, "Push job failed");
                rabbit.reject(delivery_tag, false).await?;
            }
        }
    }

    Ok(())
}

/// Normalizes one dequeued payload into a task invocation and runs the push
/// handler on it.
pub async fn process_message<D>(
    payload: &[u8],
    templates: &TemplateServiceClient,
    users: &UserServiceClient,
    delivery: &D,
) -> Result<(), WorkerError>
where
    D: PushDelivery + Sync,
{
    let invocation = InboundMessage::decode(payload)?.into_invocation();

    if invocation.task != PUSH_TASK {
        return Err(WorkerError::Parse(format!(
            "unregistered task '{}'",
            invocation.task
        )));
    }

    let raw_job = invocation
        .args
        .into_iter()
        .next()
        .ok_or_else(|| WorkerError::Parse("task invocation carries no job payload".to_string()))?;

    let job: PushJob = serde_json::from_value(raw_job)?;

    handle_push(job, invocation.id.as_deref(), templates, users, delivery).await
}

/// The task entry point: resolve template, render, resolve recipient token,
/// dispatch, log the outcome. A provider-reported failure completes the job;
/// parse and lookup failures propagate to the consume loop.
pub async fn handle_push<D>(
    job: PushJob,
    task_id: Option<&str>,
    templates: &TemplateServiceClient,
    users: &UserServiceClient,
    delivery: &D,
) -> Result<(), WorkerError>
where
    D: PushDelivery + Sync,
{
    info!(
        task_id = task_id.unwrap_or("-"),
        user_id = job.user_id.as_deref().unwrap_or("-"),
        template_code = %job.template_code,
        "Processing push job"
    );

    let template = templates.fetch_template(&job.template_code).await?;

    let mut context = HashMap::new();
    if let Some(name) = &job.name {
        context.insert("name".to_string(), Value::String(name.clone()));
    }

    let notification = RenderedNotification {
        title: template.subject.clone(),
        body: render_template(&template.body, &context),
    };

    let user_id = job.user_id.as_deref().ok_or_else(|| WorkerError::Lookup {
        resource: "push token",
        reason: "job carries no user_id".to_string(),
    })?;

    let push_token = users.fetch_push_token(user_id).await?;

    let outcome = delivery.send(&notification, &push_token.token).await;

    if outcome.success {
        info!(
            user_id,
            response = outcome.response.as_deref().unwrap_or("-"),
            "Push notification sent"
        );
    } else {
        warn!(
            user_id,
            error = outcome.error.as_deref().unwrap_or("unknown"),
            "Push provider reported failure"
        );
    }

    Ok(())
}
