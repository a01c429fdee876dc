use web_sys::Element;

pub const DEFAULT_MOUNT_ID: &str = "app";
pub const API_BASE_ATTR: &str = "data-api-base";

pub const SIGNUP_MESSAGE_MS: u32 = 5000;
pub const UNREGISTER_MESSAGE_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every endpoint; empty means same origin.
    pub api_base: String,
    pub mount_id: String,
    pub signup_message_ms: u32,
    pub unregister_message_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            signup_message_ms: SIGNUP_MESSAGE_MS,
            unregister_message_ms: UNREGISTER_MESSAGE_MS,
        }
    }
}

impl BoardConfig {
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    /// Applies `<div id="app" data-api-base="https://...">` overrides from
    /// the element found at `mount_id`.
    pub fn with_mount_attrs(self, root: &Element) -> Self {
        match root.get_attribute(API_BASE_ATTR) {
            Some(base) => self.with_api_base(&base),
            None => self,
        }
    }
}
