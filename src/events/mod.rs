//! Order-lifecycle events
//!
//! The add-on hooks three moments in an order's life, and every one of
//! them runs the same reconciliation pass: adding a bundle, the order
//! assembler recomputing, and pre-create validation. Registration is
//! an explicit table that refuses duplicates, so a handler can never
//! run twice for one event.

use std::collections::BTreeMap;

use crate::basket::Basket;
use crate::error::{RebundleError, Result};
use crate::reconcile::{PassOutcome, WarningSink};

/// A bundle was attached to the order
pub const BUNDLE_ADD: &str = "bundle.add";
/// The order assembler recomputed the basket
pub const ASSEMBLER_UPDATE: &str = "order.assembler.update";
/// The order is validated just before creation
pub const CREATE_VALIDATE: &str = "order.create.validate";

/// Every event the add-on subscribes to, in registration order
pub const SUBSCRIBED_EVENTS: &[&str] = &[BUNDLE_ADD, ASSEMBLER_UPDATE, CREATE_VALIDATE];

/// Handles one order-lifecycle event against a basket
pub trait OrderEventHandler {
    fn handle(&self, basket: &mut Basket, warnings: &mut dyn WarningSink) -> Result<PassOutcome>;
}

/// Maps event names to their single registered handler
#[derive(Default)]
pub struct EventRegistry<'a> {
    handlers: BTreeMap<&'static str, &'a dyn OrderEventHandler>,
}

impl<'a> EventRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for an event
    ///
    /// Each event takes exactly one handler; registering a second is
    /// an error, not a silent replacement.
    pub fn register(
        &mut self,
        event: &'static str,
        handler: &'a dyn OrderEventHandler,
    ) -> Result<()> {
        if self.handlers.contains_key(event) {
            return Err(RebundleError::DuplicateSubscription {
                event: event.to_string(),
            });
        }
        self.handlers.insert(event, handler);
        Ok(())
    }

    /// Whether an event has a registered handler
    pub fn is_registered(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }

    /// The registered event names in name order
    pub fn registered_events(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Dispatches an event to its handler
    pub fn dispatch(
        &self,
        event: &str,
        basket: &mut Basket,
        warnings: &mut dyn WarningSink,
    ) -> Result<PassOutcome> {
        let handler = self
            .handlers
            .get(event)
            .ok_or_else(|| RebundleError::UnknownEvent {
                event: event.to_string(),
            })?;
        handler.handle(basket, warnings)
    }
}

/// Registers one handler for all three order events
pub fn register_order_events<'a>(
    registry: &mut EventRegistry<'a>,
    handler: &'a dyn OrderEventHandler,
) -> Result<()> {
    for event in SUBSCRIBED_EVENTS {
        registry.register(event, handler)?;
    }
    Ok(())
}
