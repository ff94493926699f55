//! User-facing Uzbek copy. HTML parse mode.

use crate::domain::{Countdown, ObservanceCalendar, ObservancePhase};

pub const SUBSCRIBE_BUTTON: &str = "🔔 Kanalga obuna bo‘lish";
pub const RECHECK_BUTTON: &str = "✅ Tekshirish";
pub const RECHECK_CALLBACK: &str = "check_sub";

pub const SUBSCRIBE_FIRST: &str = "❌ Avval kanalga obuna bo‘ling";
pub const RECHECK_DENIED: &str = "❌ Siz hali kanalga obuna bo‘lmadingiz";
pub const LOOKUP_FAILED: &str =
    "⚠️ Maʼlumotni olishda xatolik yuz berdi. Keyinroq qayta urinib ko‘ring.";
pub const CHOOSE_REGION: &str = "📍 Viloyatingizni tanlang:";

pub const SUHOOR_DUA_TITLE: &str = "🕋 <b>Saharlik duosi:</b>";
pub const SUHOOR_DUA: &str = "Navaytu an asuma sovma shahri ramazona minal fajri ilal mag‘ribi, xolisan lillahi ta’ala. Allohu akbar.";
pub const SUHOOR_DUA_MEANING: &str = "Ma’nosi: Ramazon oyining ro‘zasini subhdan to kun botguncha tutmoqni niyat qildim. Xolis Alloh uchun Alloh buyukdir.";

pub const IFTAR_DUA_TITLE: &str = "🌅 <b>Iftor duosi:</b>";
pub const IFTAR_DUA: &str = "Allohumma laka sumtu va bika amantu va a’layka tavakkaltu va a’la rizqika aftartu, fag‘firli ya g‘offaru ma qoddamtu va ma axxortu.";
pub const IFTAR_DUA_MEANING: &str = "Ma’nosi: Ey Alloh, ushbu Ro‘zamni Sen uchun tutdim va Senga iymon keltirdim va Senga tavakkal qildim va bergan rizqing bilan iftor qildim. Ey mehribonlarning eng mehriboni, mening avvalgi va keyingi gunohlarimni mag‘firat qilgil.";

pub fn countdown_line(countdown: Countdown) -> String {
    match countdown {
        Countdown::Started => "Ramazon allaqachon boshlandi 🌙".to_string(),
        Countdown::Remaining { days, hours, minutes } => format!(
            "⏳ Ramazon boshlanishigacha: {days} kun, {hours} soat, {minutes} daqiqa"
        ),
    }
}

pub fn day_line(day_index: i64) -> String {
    match ObservanceCalendar::phase(day_index) {
        ObservancePhase::Day(day) => format!("🌙 {day}-Ramazon"),
        ObservancePhase::NotStarted => "🌙 Ramazon hali boshlanmadi".to_string(),
        ObservancePhase::Finished => "🌙 Ramazon yakunlandi".to_string(),
    }
}

pub fn dua_blocks() -> String {
    format!(
        "{SUHOOR_DUA_TITLE}\n{SUHOOR_DUA}\n{SUHOOR_DUA_MEANING}\n\n{IFTAR_DUA_TITLE}\n{IFTAR_DUA}\n{IFTAR_DUA_MEANING}"
    )
}

pub fn help_text() -> String {
    [
        "🌙 Ramazon taqvimi boti",
        "",
        "/start - saharlik va iftor vaqtlarini olish",
        "/help - ushbu yordam",
        "",
        "Botdan foydalanish uchun kanalga obuna bo‘lishingiz kerak.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_line() {
        assert_eq!(
            countdown_line(Countdown::Remaining { days: 8, hours: 0, minutes: 0 }),
            "⏳ Ramazon boshlanishigacha: 8 kun, 0 soat, 0 daqiqa"
        );
        assert_eq!(countdown_line(Countdown::Started), "Ramazon allaqachon boshlandi 🌙");
    }

    #[test]
    fn test_day_line_outside_observance() {
        assert_eq!(day_line(2), "🌙 2-Ramazon");
        assert_eq!(day_line(0), "🌙 Ramazon hali boshlanmadi");
        assert_eq!(day_line(31), "🌙 Ramazon yakunlandi");
    }

    #[test]
    fn test_dua_blocks_contain_both() {
        let blocks = dua_blocks();
        assert!(blocks.contains(SUHOOR_DUA));
        assert!(blocks.contains(IFTAR_DUA));
    }
}
