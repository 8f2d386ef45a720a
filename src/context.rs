//! Application Context
//!
//! Shared services provided via Leptos Context API: configuration and the
//! API client holding the session. Controllers are built per view.

use std::rc::Rc;

use leptos::prelude::*;
use paged_list::{ClientConfig, ListConfig, ListController};
use serde::de::DeserializeOwned;

use crate::api::{Client, GlooSleeper};

#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ClientConfig>,
    client: StoredValue<Client, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ClientConfig, client: Client) -> Self {
        Self {
            config: StoredValue::new(config),
            client: StoredValue::new_local(client),
        }
    }

    pub fn client(&self) -> Client {
        self.client.get_value()
    }

    pub fn page_size(&self) -> u32 {
        self.config.with_value(|c| c.page_size())
    }

    /// Fresh controller for one list view; each view owns its own state
    pub fn list_controller<R>(&self, list: ListConfig) -> ListController<R, paged_list::HttpTransport>
    where
        R: DeserializeOwned + Clone + 'static,
    {
        let window = self.config.with_value(|c| c.debounce());
        ListController::new(list, self.client(), Rc::new(GlooSleeper), window)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
