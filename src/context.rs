//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;
use crate::listings::Calendar;
use crate::mock_data::MockData;
use crate::models::Role;
use crate::routes::{Page, Route};
use crate::session::Session;

/// App-wide data and the current route, provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub data: &'static MockData,
    pub config: &'static AppConfig,
    pub calendar: Calendar,
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(
        data: &'static MockData,
        config: &'static AppConfig,
        route: (ReadSignal<Route>, WriteSignal<Route>),
    ) -> Self {
        Self {
            data,
            config,
            calendar: Calendar::from_config(config),
            route: route.0,
            set_route: route.1,
        }
    }

    /// Session of the current route; `None` outside the dashboard
    pub fn session(&self) -> Option<Session> {
        self.route
            .get()
            .role()
            .map(|role| Session::for_role(role, self.config, self.data))
    }

    /// Session of the dashboard being shown. The layout is rebuilt whenever
    /// the role changes, so pages read it once without tracking.
    pub fn dashboard_session(&self) -> Session {
        let role = self.route.get_untracked().role().unwrap_or(Role::AgencyOwner);
        Session::for_role(role, self.config, self.data)
    }

    /// Push a new history entry and switch to `route`
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        let path = route.path();
        if let Err(e) = push_history(&path) {
            log::warn!("pushState to {path} failed: {e:?}");
        }
        log::debug!("navigate to {path}");
        self.set_route.set(route);
    }

    /// Another page of the current role
    pub fn open(&self, page: Page) {
        if let Some(role) = self.route.get_untracked().role() {
            self.navigate(Route::Dashboard { role, page });
        }
    }

    /// Re-read the route from the address bar (back/forward buttons)
    pub fn sync_with_location(&self) {
        let route = Route::parse(&current_path());
        log::debug!("history moved to {}", route.path());
        self.set_route.set(route);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Path of the address bar, `/` when it cannot be read
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history(path: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.history()?.push_state_with_url(&JsValue::NULL, "", Some(path))
}
