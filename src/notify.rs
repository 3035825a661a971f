//! Operator notification.
//!
//! Placeholder transport: the confirmation is written to stdout and the log.
//! No mail delivery is wired up yet.

pub struct Notifier {
    address: String,
}

impl Notifier {
    pub fn new(address: String) -> Self {
        Notifier { address }
    }

    /// Emit the completion notice for the configured address.
    pub fn send_completion_notice(&self) {
        tracing::info!("Sending completion notice to {}", self.address);
        println!("Notification sent to {}", self.address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_does_not_panic() {
        Notifier::new("ops@example.com".to_string()).send_completion_notice();
    }
}
