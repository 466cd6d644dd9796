//! Hand-offs to things outside the page: the visitor's mail client and the
//! mobile app stores.

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlAnchorElement};

use crate::config;
use crate::forms::Origin;

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("no browser window available")]
    NoWindow,
    #[error("no document attached to the window")]
    NoDocument,
    #[error("browser rejected the hand-off: {0}")]
    Script(String),
}

impl From<JsValue> for HandoffError {
    fn from(value: JsValue) -> Self {
        HandoffError::Script(format!("{:?}", value))
    }
}

/// Asks the environment to compose an email about a captured address.
pub trait MailIntent {
    fn request_mail_intent(&self, address: &str, origin: Origin) -> Result<(), HandoffError>;
}

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn compose_mailto(address: &str, origin: Origin, timestamp: &str) -> String {
    let body = format!(
        "Premium access email request from: {}\n\nType: {}\nDate: {}",
        address,
        origin.label(),
        timestamp
    );
    format!(
        "mailto:{}?subject={}&body={}",
        config::SUPPORT_EMAIL,
        urlencoding::encode(config::MAIL_SUBJECT),
        urlencoding::encode(&body)
    )
}

/// Opens a `mailto:` link by clicking a detached anchor.
#[derive(Clone, Copy, Debug, Default)]
pub struct MailtoHandoff;

impl MailIntent for MailtoHandoff {
    fn request_mail_intent(&self, address: &str, origin: Origin) -> Result<(), HandoffError> {
        let timestamp = format_timestamp(&Local::now().naive_local());
        let href = compose_mailto(address, origin, &timestamp);

        let document = window()
            .ok_or(HandoffError::NoWindow)?
            .document()
            .ok_or(HandoffError::NoDocument)?;
        let link = document
            .create_element("a")?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| HandoffError::Script("created element is not an anchor".to_string()))?;
        link.set_href(&href);
        link.click();
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreLink {
    PlayStore,
    AppStore,
}

impl StoreLink {
    pub fn url(self) -> &'static str {
        match self {
            StoreLink::PlayStore => config::PLAY_STORE_URL,
            StoreLink::AppStore => config::APP_STORE_URL,
        }
    }
}

pub fn open_store_link(link: StoreLink) -> Result<(), HandoffError> {
    let window = window().ok_or(HandoffError::NoWindow)?;
    window.open_with_url_and_target(link.url(), "_blank")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_reads_like_a_locale_string() {
        let at = NaiveDate::from_ymd_opt(2025, 8, 3)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        assert_eq!(format_timestamp(&at), "8/3/2025, 2:05:09 PM");
    }

    #[test]
    fn mailto_targets_support_with_encoded_subject() {
        let href = compose_mailto("a@b.c", Origin::Hero, "1/2/2025, 3:04:05 AM");
        assert!(href.starts_with("mailto:official.fundr@gmail.com?subject="));
        assert!(href.contains("subject=Premium%20Access%20Request%20-%20Fundr&body="));
    }

    #[test]
    fn mailto_body_carries_address_origin_and_date() {
        let href = compose_mailto("founder@x.io", Origin::PremiumAccess, "now");
        let (_, body) = href.split_once("&body=").unwrap();
        let body = urlencoding::decode(body).unwrap();

        assert_eq!(
            body,
            "Premium access email request from: founder@x.io\n\nType: Premium Access\nDate: now"
        );
    }

    #[test]
    fn store_links_point_at_the_stores() {
        assert_eq!(StoreLink::PlayStore.url(), "https://play.google.com/store");
        assert_eq!(StoreLink::AppStore.url(), "https://apps.apple.com/");
    }
}
