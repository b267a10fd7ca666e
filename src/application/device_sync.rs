// SPDX-License-Identifier: MPL-2.0
//! Keeps a [`DeviceLink`] in step with the store.
//!
//! Outbound: every applied mutation except a device report is forwarded as a
//! [`SwitchCommand`] through a store listener. Inbound: [`DeviceSync::poll`]
//! drains reports and applies them with [`SwitchStore::apply_report`].
//! Reports are never echoed back to the device.

use crate::application::port::{DeviceLink, LinkStatus, SwitchCommand};
use crate::application::store::{ChangeKind, ListenerId, SwitchStore};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type SharedLink = Rc<RefCell<Box<dyn DeviceLink>>>;

pub struct DeviceSync {
    link: SharedLink,
    listener: ListenerId,
}

impl fmt::Debug for DeviceSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceSync")
            .field("status", &self.status())
            .field("listener", &self.listener)
            .finish()
    }
}

impl DeviceSync {
    /// Connects `link` to `store`.
    pub fn attach(store: &mut SwitchStore, link: Box<dyn DeviceLink>) -> Self {
        let link: SharedLink = Rc::new(RefCell::new(link));
        let outbound = Rc::clone(&link);

        let listener = store.subscribe(move |change, switches| {
            if change.kind == ChangeKind::Reported {
                return;
            }
            let Some(switch) = switches.iter().find(|s| s.id == change.id) else {
                return;
            };
            match outbound.try_borrow_mut() {
                Ok(mut device) => device.send_command(SwitchCommand::from(switch)),
                Err(_) => tracing::warn!(id = change.id.value(), "device busy, command dropped"),
            }
        });

        Self { link, listener }
    }

    /// Applies pending device reports. Returns how many changed the store.
    pub fn poll(&self, store: &mut SwitchStore) -> usize {
        // Release the borrow before the store notifies listeners
        let reports = match self.link.try_borrow_mut() {
            Ok(mut device) => device.receive_state(),
            Err(_) => return 0,
        };
        reports
            .into_iter()
            .filter(|report| store.apply_report(*report))
            .count()
    }

    #[must_use]
    pub fn status(&self) -> LinkStatus {
        self.link
            .try_borrow()
            .map_or(LinkStatus::Disconnected, |device| device.status())
    }

    #[must_use]
    pub fn firmware_version(&self) -> String {
        self.link
            .try_borrow()
            .map(|device| device.firmware_version().to_string())
            .unwrap_or_default()
    }

    /// Stops forwarding store changes.
    pub fn detach(self, store: &mut SwitchStore) -> bool {
        store.unsubscribe(self.listener)
    }
}
