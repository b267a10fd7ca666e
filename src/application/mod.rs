// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`store`]: The authoritative, observable switch roster
//! - [`editor`]: Buffered editing sessions over one switch
//! - [`device_sync`]: Forwards store changes to a device link and applies its reports
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Device adapters implement application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use powerswitch::application::{EditorSession, SwitchStore};
//! use powerswitch::domain::SwitchId;
//!
//! let mut store = SwitchStore::default();
//! let mut editor = EditorSession::open(&store, SwitchId::new(1)).unwrap();
//! editor.set_name("Roof Bar");
//! editor.change_intensity(&mut store, 40);
//! editor.close(&mut store, true);
//! assert_eq!(store.get(SwitchId::new(1)).unwrap().name, "Roof Bar");
//! ```

pub mod device_sync;
pub mod editor;
pub mod port;
pub mod store;

pub use device_sync::DeviceSync;
pub use editor::EditorSession;
pub use store::{ChangeKind, ListenerId, StoreChange, SwitchStore};
