// ============================================================================
// APP ROUTES - Two views and History API navigation
// ============================================================================

use wasm_bindgen::JsValue;

use crate::config::CONFIG;
use crate::utils::constants::CONSOLE_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Console,
    SignIn,
}

impl AppRoute {
    pub fn from_path(path: &str, sign_in_path: &str) -> Self {
        if path.trim_end_matches('/') == sign_in_path.trim_end_matches('/') {
            AppRoute::SignIn
        } else {
            AppRoute::Console
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Console => CONSOLE_PATH.to_string(),
            AppRoute::SignIn => CONFIG.sign_in_path.clone(),
        }
    }

    /// Route of the current `window.location`
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| CONSOLE_PATH.to_string());
        Self::from_path(&path, &CONFIG.sign_in_path)
    }

    /// Push the route onto the browser history
    pub fn push(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&self.path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_path_is_matched_loosely() {
        assert_eq!(AppRoute::from_path("/sign-in", "/sign-in"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path("/sign-in/", "/sign-in"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path("/", "/sign-in"), AppRoute::Console);
        assert_eq!(AppRoute::from_path("/orders", "/sign-in"), AppRoute::Console);
    }
}
