use crate::{
    abstract_trait::NotifierTrait,
    domain::response::{Notification, Variant},
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{Level, error, info, warn};

/// Writes notifications to the log only.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn level(variant: Variant) -> Level {
        match variant {
            Variant::Error => Level::ERROR,
            Variant::Warning => Level::WARN,
            Variant::Info | Variant::Success => Level::INFO,
        }
    }
}

impl NotifierTrait for LogNotifier {
    fn notify(&self, notification: Notification) {
        let level = Self::level(notification.variant);
        if level == Level::ERROR {
            error!("{}", notification.message);
        } else if level == Level::WARN {
            warn!("{}", notification.message);
        } else {
            info!("{}", notification.message);
        }
    }
}

/// Forwards notifications to whatever displays them. Once the display is
/// gone, notifications go to the log instead.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: UnboundedSender<Notification>,
    fallback: LogNotifier,
}

impl ChannelNotifier {
    pub fn new() -> (Self, UnboundedReceiver<Notification>) {
        let (sender, receiver) = unbounded_channel();
        (
            Self {
                sender,
                fallback: LogNotifier,
            },
            receiver,
        )
    }
}

impl NotifierTrait for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(err) = self.sender.send(notification) {
            warn!("Display closed, logging notification instead");
            self.fallback.notify(err.0);
        }
    }
}
