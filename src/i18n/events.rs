//! Two-phase language-change notifications.
//!
//! Consumers that only need the new code subscribe for `Changing`, which
//! fires before any visible text mutates; consumers that re-render dynamic
//! lists subscribe for `Changed`, which fires after the document text has
//! been updated. Notifications are fire-and-forget, delivered in
//! subscription order.

use super::Language;

/// Where in the switch sequence a notification fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguagePhase {
    /// Before any visible text mutates.
    Changing,
    /// After the document text has been updated.
    Changed,
}

/// A language-switch notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEvent {
    pub phase: LanguagePhase,
    pub language: Language,
}

type Subscriber = Box<dyn Fn(&LanguageEvent)>;

/// Observer list owned by the registry.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> EventBus {
        EventBus::default()
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&LanguageEvent) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn emit(&self, phase: LanguagePhase, language: Language) {
        let event = LanguageEvent { phase, language };
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
    }
}
