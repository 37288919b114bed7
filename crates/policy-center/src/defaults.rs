use crate::model::PolicySnapshot;

/// Builtin policy: the creator-platform surfaces the product automates, and
/// the keyword families that flag authentication, payment, destructive and
/// final-submission intent.
pub fn default_snapshot() -> PolicySnapshot {
    PolicySnapshot {
        allowed_domains: [
            "youtube.com",
            "studio.youtube.com",
            "tiktok.com",
            "instagram.com",
            "twitter.com",
            "x.com",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        sensitive_keywords: [
            "login", "sign in", "log in", "password", "passwd", "pay", "payment", "checkout",
            "purchase", "buy", "delete", "remove", "unsubscribe", "submit", "confirm", "agree",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    }
}
