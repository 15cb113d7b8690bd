// SPDX-License-Identifier: MPL-2.0
//! Mount point for a provider.
//!
//! Callers reach the toast API through a scope. When no provider is mounted
//! the call fails with [`Error::OutsideProvider`] instead of being dropped.

use super::provider::{Enqueued, ProviderConfig, ToastProvider};
use super::queue::Behavior;
use super::request::ToastParams;
use crate::error::{Error, Result};
use std::time::Instant;

#[derive(Debug, Default)]
pub struct ToastScope {
    provider: Option<ToastProvider>,
}

impl ToastScope {
    /// A scope with nothing mounted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope with a freshly mounted provider.
    #[must_use]
    pub fn mounted(config: ProviderConfig) -> Self {
        Self {
            provider: Some(ToastProvider::new(config)),
        }
    }

    /// Mounts a new provider, tearing down any previous one.
    pub fn mount(&mut self, config: ProviderConfig) -> &mut ToastProvider {
        self.unmount();
        tracing::debug!("toast provider mounted");
        self.provider.insert(ToastProvider::new(config))
    }

    /// Tears the provider down and removes it. Returns whether one was
    /// mounted.
    pub fn unmount(&mut self) -> bool {
        match self.provider.take() {
            Some(mut provider) => {
                provider.teardown();
                tracing::debug!("toast provider unmounted");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.provider.is_some()
    }

    /// The mounted provider, or a usage error.
    pub fn use_toast(&mut self) -> Result<&mut ToastProvider> {
        match self.provider.as_mut() {
            Some(provider) => Ok(provider),
            None => {
                tracing::error!("toast API used outside of a mounted provider");
                Err(Error::OutsideProvider)
            }
        }
    }

    pub fn show_toast(
        &mut self,
        params: ToastParams,
        behavior: Behavior,
        now: Instant,
    ) -> Result<Enqueued> {
        Ok(self.use_toast()?.show_toast(params, behavior, now))
    }

    #[must_use]
    pub fn provider(&self) -> Option<&ToastProvider> {
        self.provider.as_ref()
    }

    pub fn provider_mut(&mut self) -> Option<&mut ToastProvider> {
        self.provider.as_mut()
    }
}
