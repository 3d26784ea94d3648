//! Screen and message texts
//!
//! All user-facing prompt and result texts, in Persian with HTML
//! markup. Keyboards live in [`super::keyboards`], labels in
//! [`super::labels`].

use crate::models::{Alarm, AssessmentTier, Grade};

use super::labels;

/// Generic display name used when the platform provides none.
pub const FALLBACK_NAME: &str = "کاربر";

pub fn welcome(name: &str) -> String {
    format!(
        "🌟 <b>سلام {name} عزیز!</b>\n\n\
         🎓 <b>به رهنمای تحصیلی خوش آمدید</b>\n\n\
         📚 <b>خدمات تخصصی ما برای پایه‌های ششم تا دوازدهم:</b>\n\
         • ارزیابی دقیق وضعیت تحصیلی\n\
         • برنامه‌ریزی درسی شخصی‌سازی شده\n\
         • سیستم آلارم مطالعه هوشمند\n\
         • پیگیری پیشرفت تحصیلی\n\
         • مدیریت استرس و اضطراب امتحان\n\n\
         👇 <b>لطفاً یکی از خدمات را انتخاب کنید:</b>"
    )
}

pub const BACK_TO_MAIN_MENU: &str = "🔙 بازگشت به منوی اصلی";

pub const MENU_FALLBACK: &str = "⚠️ لطفاً از منوی زیر انتخاب کنید:";

pub const CHOOSE_FROM_OPTIONS: &str = "⚠️ لطفاً از گزینه‌های موجود انتخاب کنید.";

pub const SEND_RETRY_APOLOGY: &str = "⚠️ خطای موقت، لطفاً مجدد تلاش کنید";

// ---- Assessment ----

pub const ASSESSMENT_GRADE_PROMPT: &str = "📊 <b>ارزیابی تحصیلی</b>\n\n\
     🎒 <b>لطفاً پایه تحصیلی خود را انتخاب کنید:</b>";

/// Question sets per grade. Grades without a registered set fall back
/// to the sixth-grade list.
pub fn questions_for(grade: Grade) -> &'static [&'static str; 5] {
    match grade {
        Grade::Nine => &QUESTIONS_NINE,
        Grade::Twelve => &QUESTIONS_TWELVE,
        _ => &QUESTIONS_SIX,
    }
}

pub const QUESTIONS_SIX: [&str; 5] = [
    "۱. وضعیت شما در درس ریاضی چگونه است؟",
    "۲. عملکردتان در علوم چطور است؟",
    "۳. وضعیت درس فارسی چگونه است؟",
    "۴. ساعت مطالعه روزانه شما چقدر است؟",
    "۵. چه مشکلاتی در یادگیری دارید؟",
];

pub const QUESTIONS_NINE: [&str; 5] = [
    "۱. وضعیت دروس اصلی (ریاضی، علوم، فارسی) چگونه است؟",
    "۲. برای انتخاب رشته چه برنامه‌ای دارید؟",
    "۳. ساعت مطالعه روزانه چقدر است؟",
    "۴. در چه دروسی نیاز به کمک دارید؟",
    "۵. هدف تحصیلی شما چیست؟",
];

pub const QUESTIONS_TWELVE: [&str; 5] = [
    "۱. وضعیت دروس تخصصی چگونه است؟",
    "۲. برنامه‌ریزی کنکور دارید؟",
    "۳. ساعت مطالعه روزانه چقدر است؟",
    "۴. سطح استرس شما چقدر است؟",
    "۵. چه منابعی استفاده می‌کنید؟",
];

pub fn assessment_intro(grade: Grade, question_count: usize) -> String {
    format!(
        "📝 <b>ارزیابی تحصیلی پایه {}</b>\n\n\
         این ارزیابی {} سوال دارد و وضعیت تحصیلی شما را تحلیل می‌کند.\n\n\
         <b>لطفاً به سوالات با دقت پاسخ دهید:</b>",
        grade.label(),
        question_count
    )
}

pub fn assessment_question(index: usize, total: usize, question: &str) -> String {
    format!("<b>سوال {} از {}</b>\n\n{}", index + 1, total, question)
}

pub fn assessment_result(grade: Grade, total: u32, max: u32, tier: AssessmentTier) -> String {
    format!(
        "📊 <b>نتایج ارزیابی تحصیلی</b>\n\n\
         🎒 <b>پایه:</b> {}\n\
         📈 <b>امتیاز شما:</b> {} از {}\n\
         📋 <b>وضعیت:</b> {}\n\n\
         💡 <b>توصیه‌ها:</b>\n{}\n\n\
         🎯 <b>قدم بعدی:</b>\n\
         برای دریافت برنامه‌ریزی شخصی، از منوی اصلی گزینه «🎯 برنامه‌ریزی» را انتخاب کنید.",
        grade.label(),
        total,
        max,
        tier.status(),
        tier.recommendation()
    )
}

// ---- Study planner ----

pub const PLANNER_GRADE_PROMPT: &str = "🎯 <b>سیستم برنامه‌ریزی درسی هوشمند</b>\n\n\
     📊 این سیستم بر اساس:\n\
     • پایه تحصیلی شما\n\
     • سطح درسی\n\
     • زمان‌های در دسترس\n\
     • اهداف تحصیلی\n\n\
     برنامه‌ای شخصی‌سازی شده تولید می‌کند.\n\n\
     👇 لطفاً پایه تحصیلی خود را انتخاب کنید:";

pub fn study_plan(grade: Grade) -> String {
    match grade {
        Grade::Six => "📅 برنامه هفتگی پایه ششم\n\n\
             📋 <b>برنامه روزهای هفته:</b>\n\
             <b>شنبه:</b>\n\
             ⏰ ۱۶:۰۰-۱۷:۰۰ - ریاضی\n\
             ⏰ ۱۷:۳۰-۱۸:۱۵ - علوم\n\
             ⏰ ۱۹:۰۰-۱۹:۴۵ - فارسی\n\n\
             💡 <b>توصیه‌های تخصصی:</b>\n\
             • مطالعه روزانه ۲-۳ ساعت\n\
             • استراحت بین مطالعه\n\
             • حل تمرینات عملی"
            .to_string(),
        _ => format!(
            "📅 برنامه هفتگی پایه {grade}\n\n\
             📋 <b>برنامه پیشنهادی پایه {grade}:</b>\n\
             ⏰ ۱۶:۰۰-۱۷:۳۰ - دروس اصلی\n\
             ⏰ ۱۸:۰۰-۱۹:۰۰ - دروس فرعی\n\n\
             💡 <b>توصیه‌های پایه {grade}:</b>\n\
             • مطالعه منظم روزانه\n\
             • استراحت بین جلسات مطالعه",
            grade = grade.label()
        ),
    }
}

// ---- Alarm system ----

pub const ALARM_SYSTEM: &str = "⏰ <b>سیستم آلارم مطالعه هوشمند</b>\n\n\
     🎯 <b>ویژگی‌ها:</b>\n\
     • ⏰ یادآور زمان مطالعه\n\
     • ☕ هشدار زمان استراحت\n\n\
     👇 لطفاً نوع سرویس مورد نیاز را انتخاب کنید:";

pub const ALARM_TYPE_PROMPT: &str =
    "⏰ <b>تنظیم آلارم جدید</b>\nلطفاً نوع آلارم را انتخاب کنید:";

pub const ALARM_TIME_PROMPT: &str = "🕒 <b>زمان آلارم</b>\nلطفاً زمان آلارم را انتخاب کنید:";

pub const ALARM_DAYS_PROMPT: &str =
    "📅 <b>روزهای هفته</b>\nلطفاً روزهای فعال بودن آلارم را انتخاب کنید:";

pub const ALARM_INVALID_TIME: &str = "⚠️ زمان نامعتبر! لطفاً از دکمه‌ها استفاده کنید.";

pub fn alarm_days_ack(days: &[String]) -> String {
    format!("✅ روزهای انتخاب شده: {}", days.join("، "))
}

pub fn alarm_saved(alarm: &Alarm) -> String {
    format!(
        "✅ <b>آلارم با موفقیت تنظیم شد</b>\n\
         • نوع: {}\n\
         • زمان: {}\n\
         • روزها: {}",
        alarm.kind.as_str(),
        alarm.time,
        alarm.days.join(", ")
    )
}

pub const NO_ALARMS: &str = "⏰ شما هیچ آلارم فعالی ندارید.";

pub fn alarm_list(alarms: &[Alarm]) -> String {
    let mut text = String::from("⏰ <b>آلارم‌های فعال شما:</b>\n");
    for alarm in alarms {
        text.push_str(&format!("• {} - {}\n", alarm.kind.as_str(), alarm.time));
    }
    text
}

// ---- Stress triage ----

pub const STRESS_PROMPT: &str =
    "😊 <b>مدیریت استرس و اضطراب</b>\nلطفاً سطح استرس خود را انتخاب کنید:";

pub const STRESS_LOW_RESPONSE: &str = "🟢 وضعیت عالی! ادامه دهید.";
pub const STRESS_MODERATE_RESPONSE: &str = "🟡 نیاز به استراحت بیشتر دارید.";
pub const STRESS_SEVERE_RESPONSE: &str = "🔴 نیاز به مشاوره فوری دارید.";

pub fn stress_high_response() -> String {
    format!("🟠 با مشاور تماس بگیرید: {}", labels::COUNSELING_PHONE)
}

// ---- Static screens ----

pub const PROGRESS_PLACEHOLDER: &str =
    "📈 <b>پیگیری پیشرفت تحصیلی</b>\n\nاین سرویس به زودی فعال می‌شود...";

pub fn counseling_contact() -> String {
    format!(
        "📞 برای مشاوره با شماره {} تماس بگیرید",
        labels::COUNSELING_PHONE
    )
}

pub fn help_screen() -> String {
    format!(
        "ℹ️ <b>راهنمای استفاده</b>\n\n\
         🎓 <b>خدمات موجود:</b>\n\
         • 📊 ارزیابی تحصیلی\n\
         • 🎯 برنامه‌ریزی درسی\n\
         • ⏰ آلارم مطالعه\n\
         • 😊 مدیریت استرس\n\n\
         📞 <b>مشاوره:</b> {}",
        labels::COUNSELING_PHONE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_set_selection() {
        assert_eq!(questions_for(Grade::Six), &QUESTIONS_SIX);
        assert_eq!(questions_for(Grade::Nine), &QUESTIONS_NINE);
        assert_eq!(questions_for(Grade::Twelve), &QUESTIONS_TWELVE);
    }

    #[test]
    fn test_unlisted_grades_fall_back_to_default() {
        for grade in [Grade::Seven, Grade::Eight, Grade::Ten, Grade::Eleven] {
            assert_eq!(questions_for(grade), &QUESTIONS_SIX);
        }
    }

    #[test]
    fn test_every_question_set_has_five_questions() {
        for grade in Grade::ALL {
            assert_eq!(questions_for(grade).len(), 5);
        }
    }

    #[test]
    fn test_result_text_contains_tier_recommendation() {
        let text = assessment_result(Grade::Nine, 6, 10, AssessmentTier::Acceptable);
        assert!(text.contains("نهم"));
        assert!(text.contains("6 از 10"));
        assert!(text.contains(AssessmentTier::Acceptable.recommendation()));
    }
}
