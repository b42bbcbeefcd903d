//! Global pointer listener registry.
//!
//! Hosts own one registry per screen and route pointer-move and pointer-up
//! events to whoever is subscribed, regardless of where the pointer is.
//! Subscriptions are only ever held through a [`ListenerGuard`], so a
//! listener cannot outlive the drag session that acquired it.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use log::trace;

use crate::slider::SliderId;

/// Kind of global pointer listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

impl ListenerKind {
    /// Every listener kind a drag session acquires.
    pub const DRAG: [ListenerKind; 2] = [ListenerKind::PointerMove, ListenerKind::PointerUp];
}

/// Shared table of global pointer listeners.
///
/// Cloning yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<RwLock<HashMap<ListenerKind, BTreeSet<SliderId>>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `owner` to both drag listeners until the guard drops.
    pub fn acquire(&self, owner: SliderId) -> ListenerGuard {
        if let Ok(mut table) = self.inner.write() {
            for kind in ListenerKind::DRAG {
                table.entry(kind).or_default().insert(owner);
            }
        }
        trace!("Listeners acquired for {}", owner);
        ListenerGuard {
            registry: self.clone(),
            owner,
        }
    }

    /// Owners currently subscribed to `kind`, in creation order.
    pub fn subscribers(&self, kind: ListenerKind) -> Vec<SliderId> {
        self.inner
            .read()
            .map(|table| {
                table
                    .get(&kind)
                    .map(|owners| owners.iter().copied().collect())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// Check whether `owner` is subscribed to `kind`.
    pub fn is_subscribed(&self, owner: SliderId, kind: ListenerKind) -> bool {
        self.inner
            .read()
            .map(|table| table.get(&kind).is_some_and(|owners| owners.contains(&owner)))
            .unwrap_or(false)
    }

    /// Total number of live subscriptions across all kinds.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|table| table.values().map(BTreeSet::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn release(&self, owner: SliderId) {
        if let Ok(mut table) = self.inner.write() {
            for kind in ListenerKind::DRAG {
                if let Some(owners) = table.get_mut(&kind) {
                    owners.remove(&owner);
                    if owners.is_empty() {
                        table.remove(&kind);
                    }
                }
            }
        }
        trace!("Listeners released for {}", owner);
    }
}

/// Live subscription of one owner to the drag listeners.
///
/// Dropping the guard unsubscribes, on every exit path.
#[derive(Debug)]
#[must_use = "listeners are released as soon as the guard is dropped"]
pub struct ListenerGuard {
    registry: ListenerRegistry,
    owner: SliderId,
}

impl ListenerGuard {
    pub fn owner(&self) -> SliderId {
        self.owner
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.release(self.owner);
    }
}
