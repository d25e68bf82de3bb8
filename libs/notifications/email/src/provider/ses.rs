//! AWS SES (Simple Email Service) provider
//!
//! Sends emails via the AWS SES v2 API using the SDK's standard
//! credential resolution (environment, IAM role, shared credentials).
//!
//! Required environment variables:
//! - `AWS_SES_REGION` or `AWS_REGION` - AWS region for SES
//! - `FROM_EMAIL` - default sender address

use crate::models::Email;
use crate::provider::{EmailProvider, SendResult};
use async_trait::async_trait;
use aws_sdk_sesv2::Client;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use eyre::{Result, eyre};
use tracing::{debug, error};

/// AWS SES email provider
pub struct SesProvider {
    client: Client,
    from_email: String,
}

impl SesProvider {
    pub fn new(client: Client, from_email: impl Into<String>) -> Self {
        Self {
            client,
            from_email: from_email.into(),
        }
    }

    /// Create from environment variables and the default AWS SDK config.
    pub async fn from_env() -> Result<Self> {
        let region = std::env::var("AWS_SES_REGION")
            .or_else(|_| std::env::var("AWS_REGION"))
            .ok();

        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region_str) = region {
            config_loader = config_loader.region(aws_config::Region::new(region_str));
        }

        let config = config_loader.load().await;
        let client = Client::new(&config);

        let from_email =
            std::env::var("FROM_EMAIL").map_err(|_| eyre!("FROM_EMAIL not set"))?;

        Ok(Self::new(client, from_email))
    }
}

#[async_trait]
impl EmailProvider for SesProvider {
    async fn send(&self, email: &Email) -> Result<SendResult> {
        let destination = Destination::builder().to_addresses(&email.to).build();

        let mut body = Body::builder();
        if let Some(text) = &email.body_text {
            body = body.text(Content::builder().data(text).charset("UTF-8").build()?);
        }
        if let Some(html) = &email.body_html {
            body = body.html(Content::builder().data(html).charset("UTF-8").build()?);
        }
        let body = body.build();

        let message = Message::builder()
            .subject(
                Content::builder()
                    .data(&email.subject)
                    .charset("UTF-8")
                    .build()?,
            )
            .body(body)
            .build();

        let email_content = EmailContent::builder().simple(message).build();
        let from_address = email.from.as_ref().unwrap_or(&self.from_email);

        debug!(
            to = %email.to,
            subject = %email.subject,
            from = %from_address,
            "Sending email via AWS SES"
        );

        let response = self
            .client
            .send_email()
            .from_email_address(from_address)
            .destination(destination)
            .content(email_content)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, to = %email.to, "AWS SES send failed");
                eyre!("SES error: {}", e)
            })?;

        let message_id = response.message_id().unwrap_or(&email.id).to_string();
        debug!(message_id = %message_id, "Email sent via AWS SES");

        Ok(SendResult { message_id })
    }

    async fn health_check(&self) -> Result<()> {
        // GetAccount is a lightweight call that confirms credentials and access
        self.client
            .get_account()
            .send()
            .await
            .map_err(|e| eyre!("AWS SES health check failed: {}", e))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "aws-ses"
    }
}
