use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::EmailSettings;
use crate::error::NotifyError;

use super::{Notification, Notifier};

/// Port on which relays expect TLS from the first byte instead of STARTTLS
const IMPLICIT_TLS_PORT: u16 = 465;

pub(crate) struct SmtpNotifier {
    transport: SmtpTransport,
    from: Mailbox,
    to: Vec<Mailbox>,
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, NotifyError> {
    raw.trim().parse().map_err(|_| NotifyError::Address {
        input: raw.to_string(),
    })
}

impl SmtpNotifier {
    pub(crate) fn new(settings: &EmailSettings) -> Result<Self, NotifyError> {
        let from = parse_mailbox(&settings.from)?;
        let to = settings
            .to
            .iter()
            .map(|addr| parse_mailbox(addr))
            .collect::<Result<Vec<_>, _>>()?;

        let builder = if settings.port == IMPLICIT_TLS_PORT {
            SmtpTransport::relay(&settings.host)?
        } else {
            SmtpTransport::starttls_relay(&settings.host)?
        };
        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    fn build_message(&self, notification: &Notification) -> Result<Message, NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN);
        for recipient in &self.to {
            builder = builder.to(recipient.clone());
        }
        Ok(builder.body(notification.body.clone())?)
    }
}

impl Notifier for SmtpNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let message = self.build_message(notification)?;
        self.transport.send(&message)?;
        tracing::info!(recipients = self.to.len(), subject = %notification.subject, "notification sent");
        Ok(())
    }
}
