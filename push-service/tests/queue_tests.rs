use anyhow::Result;
use futures_util::StreamExt;
use push_service::{
    clients::rbmq::RabbitMqClient,
    config::Config,
    models::envelope::{InboundMessage, PUSH_TASK},
};
use serde_json::json;

/// Test: A raw job published to the queue comes back out and wraps cleanly
#[tokio::test]
#[ignore = "requires a running RabbitMQ broker and a configured environment"]
async fn published_raw_job_round_trips_through_queue() -> Result<()> {
    let config = Config::load()?;
    let rabbit = RabbitMqClient::connect(&config).await?;

    let job = json!({
        "user_id": "queue-roundtrip-user",
        "name": "Alice",
        "template_code": "TEMPLATE_001"
    });

    rabbit.publish_job(&job).await?;

    let mut consumer = rabbit.create_consumer().await?;

    if let Some(Ok(delivery)) = consumer.next().await {
        let invocation = InboundMessage::decode(&delivery.data)?.into_invocation();

        assert_eq!(invocation.task, PUSH_TASK);
        assert_eq!(invocation.args, vec![job]);

        rabbit.acknowledge(delivery.delivery_tag).await?;
    }

    Ok(())
}

/// Test: Rejected messages are not redelivered when requeue is off
#[tokio::test]
#[ignore = "requires a running RabbitMQ broker and a configured environment"]
async fn rejected_messages_are_not_requeued() -> Result<()> {
    let config = Config::load()?;
    let rabbit = RabbitMqClient::connect(&config).await?;

    let job = json!({ "user_id": "queue-reject-user", "name": "Bob" });
    rabbit.publish_job(&job).await?;

    let mut consumer = rabbit.create_consumer().await?;

    if let Some(Ok(delivery)) = consumer.next().await {
        rabbit.reject(delivery.delivery_tag, false).await?;
    }

    drop(consumer);

    let mut second_consumer = rabbit.create_consumer().await?;
    let redelivered = tokio::time::timeout(
        tokio::time::Duration::from_millis(500),
        second_consumer.next(),
    )
    .await;

    assert!(redelivered.is_err(), "rejected message must not come back");

    Ok(())
}
