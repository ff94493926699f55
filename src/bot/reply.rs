use crate::bot::pipeline::Reply;
use crate::bot::texts;
use crate::utils::datetime::format_display_date;
use crate::utils::html::{bold, escape_html};

/// Which keyboard goes with an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardSpec {
    None,
    /// Join link plus re-check button.
    Subscribe { join_url: String },
    /// One reply-keyboard row per region, in directory order.
    Regions(Vec<String>),
}

/// Transport-neutral rendering of a [`Reply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Message { text: String, keyboard: KeyboardSpec },
    /// Popup answer to a callback query.
    Alert { text: String },
}

impl Outbound {
    pub fn text(&self) -> &str {
        match self {
            Outbound::Message { text, .. } | Outbound::Alert { text } => text,
        }
    }
}

pub fn render(reply: &Reply, join_url: &str) -> Outbound {
    match reply {
        Reply::SubscribePrompt { first_name } => {
            let text = match first_name {
                Some(name) => format!(
                    "⚠️ Assalomu alaykum, {}!\n\nBotdan foydalanish uchun avval kanalga obuna bo‘ling:",
                    escape_html(name)
                ),
                None => texts::SUBSCRIBE_FIRST.to_string(),
            };
            Outbound::Message {
                text,
                keyboard: KeyboardSpec::Subscribe { join_url: join_url.to_string() },
            }
        }
        Reply::RecheckDenied => Outbound::Alert {
            text: texts::RECHECK_DENIED.to_string(),
        },
        Reply::RegionPrompt { first_name, countdown, regions } => Outbound::Message {
            text: format!(
                "Assalomu alaykum, {}!\n{}\n\n{}",
                escape_html(first_name),
                texts::countdown_line(*countdown),
                texts::CHOOSE_REGION
            ),
            keyboard: KeyboardSpec::Regions(regions.clone()),
        },
        Reply::PrayerTimes(report) => Outbound::Message {
            text: format!(
                "📍 {}\n📅 {}\n{}\n⏰ Saharlik: {}\n🌇 Iftor: {}\n\n{}\n\n{}",
                bold(&escape_html(&report.region)),
                format_display_date(report.date),
                texts::day_line(report.day_index),
                report.window.dawn,
                report.window.dusk,
                texts::countdown_line(report.countdown),
                texts::dua_blocks()
            ),
            keyboard: KeyboardSpec::None,
        },
        Reply::LookupFailed => Outbound::Message {
            text: texts::LOOKUP_FAILED.to_string(),
            keyboard: KeyboardSpec::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::pipeline::PrayerReport;
    use crate::domain::Countdown;
    use crate::services::prayer_times::PrayerWindow;
    use chrono::NaiveDate;

    const JOIN: &str = "https://t.me/ramazon_uz";

    #[test]
    fn test_blocked_start_greets_and_links() {
        let out = render(&Reply::SubscribePrompt { first_name: Some("Aziz".into()) }, JOIN);
        assert!(out.text().contains("Assalomu alaykum, Aziz!"));
        assert_eq!(
            out,
            Outbound::Message {
                text: out.text().to_string(),
                keyboard: KeyboardSpec::Subscribe { join_url: JOIN.to_string() },
            }
        );
    }

    #[test]
    fn test_names_are_escaped() {
        let out = render(&Reply::SubscribePrompt { first_name: Some("<b>x</b>".into()) }, JOIN);
        assert!(out.text().contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_recheck_denied_is_alert() {
        assert_eq!(
            render(&Reply::RecheckDenied, JOIN),
            Outbound::Alert { text: texts::RECHECK_DENIED.to_string() }
        );
    }

    #[test]
    fn test_prayer_times_layout() {
        let report = PrayerReport {
            region: "Toshkent".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 19).unwrap(),
            day_index: 2,
            window: PrayerWindow::new("05:10", "18:02"),
            countdown: Countdown::Started,
        };
        let out = render(&Reply::PrayerTimes(report), JOIN);
        let text = out.text();

        assert!(text.starts_with("📍 <b>Toshkent</b>\n📅 19.02.2026\n🌙 2-Ramazon\n"));
        assert!(text.contains("⏰ Saharlik: 05:10"));
        assert!(text.contains("🌇 Iftor: 18:02"));
        assert!(text.contains(texts::SUHOOR_DUA));
        assert!(text.contains(texts::IFTAR_DUA));
    }
}
