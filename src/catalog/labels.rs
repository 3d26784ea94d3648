//! Button label vocabulary
//!
//! Every reply-keyboard button label the bot sends and matches
//! against. Matching elsewhere goes through semantic intents (see
//! [`super::intent`]); these constants are the single presentation
//! source for the decorated labels.

// Main menu
pub const BTN_ASSESSMENT: &str = "📊 ارزیابی تحصیلی";
pub const BTN_PLANNER: &str = "🎯 برنامه‌ریزی";
pub const BTN_ALARM: &str = "⏰ آلارم مطالعه";
pub const BTN_WEEKLY_SCHEDULE: &str = "📅 برنامه هفتگی";
pub const BTN_PROGRESS: &str = "📈 پیگیری پیشرفت";
pub const BTN_STRESS: &str = "😊 مدیریت استرس";
pub const BTN_COUNSELING: &str = "📞 مشاوره تخصصی";
pub const BTN_HELP: &str = "ℹ️ راهنما";

// Navigation
pub const BTN_BACK_TO_MENU: &str = "🔙 بازگشت به منو";
pub const BTN_BACK: &str = "🔙 بازگشت";

// Grade picker (icon + grade token)
pub const BTN_GRADE_SIX: &str = "📚 ششم";
pub const BTN_GRADE_SEVEN: &str = "📚 هفتم";
pub const BTN_GRADE_EIGHT: &str = "📚 هشتم";
pub const BTN_GRADE_NINE: &str = "📚 نهم";
pub const BTN_GRADE_TEN: &str = "🎯 دهم";
pub const BTN_GRADE_ELEVEN: &str = "🎯 یازدهم";
pub const BTN_GRADE_TWELVE: &str = "🎯 دوازدهم";

// Assessment answers
pub const BTN_ANSWER_STRONG: &str = "🟢 عالی";
pub const BTN_ANSWER_AVERAGE: &str = "🟡 متوسط";
pub const BTN_ANSWER_WEAK: &str = "🔴 ضعیف";

// Alarm system
pub const BTN_ALARM_SETUP: &str = "⏰ تنظیم آلارم";
pub const BTN_STUDY_HABITS: &str = "📊 عادات مطالعه";
pub const BTN_ALARM_STUDY: &str = "📚 آلارم مطالعه";
pub const BTN_ALARM_BREAK: &str = "☕ آلارم استراحت";
pub const BTN_CONFIRM: &str = "✅ تایید";
pub const BTN_ALL_DAYS: &str = "🎯 همه روزها";

/// Weekday labels accepted by the day-selection step, Saturday first.
pub const WEEKDAYS: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Time preset buttons (Persian digits, as rendered on the keyboard).
pub const TIME_PRESETS: [&str; 6] = ["۰۷:۰۰", "۰۸:۰۰", "۰۹:۰۰", "۱۴:۰۰", "۱۶:۰۰", "۱۸:۰۰"];

// Stress levels
pub const BTN_STRESS_LOW: &str = "🟢 کم";
pub const BTN_STRESS_MODERATE: &str = "🟡 متوسط";
pub const BTN_STRESS_HIGH: &str = "🟠 زیاد";
pub const BTN_STRESS_SEVERE: &str = "🔴 بسیار زیاد";

/// Specialist counseling contact shown on referral screens.
pub const COUNSELING_PHONE: &str = "09121094069";
