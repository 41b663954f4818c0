//! Interface translations (en/ar)
//!
//! Keys fall back to themselves when a translation is missing, so an
//! untranslated label is visible instead of a blank.

use std::collections::HashMap;

use contracts::enums::Language;
use once_cell::sync::Lazy;

struct Entry {
    en: &'static str,
    ar: &'static str,
}

static TRANSLATIONS: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    let pairs: [(&'static str, &'static str, &'static str); 19] = [
        ("dashboard", "Dashboard", "لوحة التحكم"),
        ("users", "Users", "المستخدمون"),
        ("products", "Products", "المنتجات"),
        ("reports", "Reports", "التقارير"),
        ("totalSales", "Total Sales", "إجمالي المبيعات"),
        ("activeUsers", "Active Users", "المستخدمون النشطون"),
        ("totalRevenue", "Total Revenue", "إجمالي الإيرادات"),
        ("growthRate", "Growth Rate", "معدل النمو"),
        ("salesOverview", "Sales Overview", "نظرة عامة على المبيعات"),
        ("revenueByMonth", "Revenue by Month", "الإيرادات حسب الشهر"),
        ("deviceBreakdown", "Device Breakdown", "توزيع الأجهزة"),
        ("recentActivity", "Recent Activity", "النشاط الأخير"),
        ("userManagement", "User Management", "إدارة المستخدمين"),
        ("productManagement", "Product Management", "إدارة المنتجات"),
        ("reportsAnalytics", "Reports & Analytics", "التقارير والتحليلات"),
        ("logout", "Logout", "تسجيل الخروج"),
        ("welcomeBack", "Welcome Back", "مرحباً بعودتك"),
        ("signInToAccount", "Sign in to your account", "سجّل الدخول إلى حسابك"),
        ("signIn", "Sign In", "تسجيل الدخول"),
    ];

    pairs
        .into_iter()
        .map(|(key, en, ar)| (key, Entry { en, ar }))
        .collect()
});

/// Перевод по ключу; незнакомый ключ возвращается как есть
pub fn t(language: Language, key: &'static str) -> &'static str {
    match TRANSLATIONS.get(key) {
        Some(entry) => match language {
            Language::En => entry.en,
            Language::Ar => entry.ar,
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations() {
        assert_eq!(t(Language::En, "dashboard"), "Dashboard");
        assert_eq!(t(Language::Ar, "dashboard"), "لوحة التحكم");
    }

    #[test]
    fn test_unknown_key_falls_back_to_itself() {
        assert_eq!(t(Language::En, "missingKey"), "missingKey");
    }
}
