use reqwest::Url;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ReplyMarkup,
};

use crate::bot::reply::KeyboardSpec;
use crate::bot::texts::{RECHECK_BUTTON, RECHECK_CALLBACK, SUBSCRIBE_BUTTON};

/// One region per row, resized to fit.
pub fn regions_keyboard<S: AsRef<str>>(regions: &[S]) -> KeyboardMarkup {
    let rows = regions
        .iter()
        .map(|name| vec![KeyboardButton::new(name.as_ref())])
        .collect::<Vec<_>>();

    KeyboardMarkup::new(rows).resize_keyboard(true)
}

/// Join-channel link on the first row, re-check button on the second.
///
/// Falls back to the re-check button alone if the link does not parse.
pub fn subscribe_keyboard(join_url: &str) -> InlineKeyboardMarkup {
    let recheck = vec![InlineKeyboardButton::callback(RECHECK_BUTTON, RECHECK_CALLBACK)];

    match Url::parse(join_url) {
        Ok(url) => InlineKeyboardMarkup::new(vec![
            vec![InlineKeyboardButton::url(SUBSCRIBE_BUTTON, url)],
            recheck,
        ]),
        Err(e) => {
            tracing::warn!("Invalid channel join link '{}': {}", join_url, e);
            InlineKeyboardMarkup::new(vec![recheck])
        }
    }
}

pub fn to_markup(spec: &KeyboardSpec) -> Option<ReplyMarkup> {
    match spec {
        KeyboardSpec::None => None,
        KeyboardSpec::Subscribe { join_url } => {
            Some(ReplyMarkup::InlineKeyboard(subscribe_keyboard(join_url)))
        }
        KeyboardSpec::Regions(regions) => Some(ReplyMarkup::Keyboard(regions_keyboard(regions.as_slice()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_regions_keyboard_keeps_order() {
        let keyboard = regions_keyboard(&["Toshkent", "Andijon", "Xorazm"][..]);
        let labels: Vec<&str> = keyboard
            .keyboard
            .iter()
            .map(|row| row[0].text.as_str())
            .collect();
        assert_eq!(labels, vec!["Toshkent", "Andijon", "Xorazm"]);
        assert!(keyboard.keyboard.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn test_subscribe_keyboard_has_link_and_recheck() {
        let keyboard = subscribe_keyboard("https://t.me/ramazon_uz");
        assert_eq!(keyboard.inline_keyboard.len(), 2);

        match &keyboard.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::Url(url) => assert_eq!(url.as_str(), "https://t.me/ramazon_uz"),
            other => panic!("expected url button, got {other:?}"),
        }
        match &keyboard.inline_keyboard[1][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, RECHECK_CALLBACK),
            other => panic!("expected callback button, got {other:?}"),
        }
    }

    #[test]
    fn test_subscribe_keyboard_without_valid_link() {
        let keyboard = subscribe_keyboard("not a url");
        assert_eq!(keyboard.inline_keyboard.len(), 1);
    }

    #[test]
    fn test_no_markup_for_plain_messages() {
        assert!(to_markup(&KeyboardSpec::None).is_none());
        assert!(matches!(
            to_markup(&KeyboardSpec::Regions(vec!["Toshkent".into()])),
            Some(ReplyMarkup::Keyboard(_))
        ));
    }
}
