use axum_extra::extract::CookieJar;

use atelier_core::locale::Locale;

/// Cookie carrying the visitor's language preference.
pub const LOCALE_COOKIE: &str = "locale";

/// One year, the preference's lifetime.
pub const LOCALE_COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

/// Resolve the locale for one request: explicit `lang` query parameter
/// first, then the cookie, then English. Resolved once per request and
/// threaded through every content fetch from there.
pub fn resolve_locale(lang: Option<&str>, jar: &CookieJar) -> Locale {
    lang.and_then(Locale::parse)
        .or_else(|| {
            jar.get(LOCALE_COOKIE)
                .and_then(|cookie| Locale::parse(cookie.value()))
        })
        .unwrap_or_default()
}

/// `Set-Cookie` value persisting the preference.
pub fn locale_cookie(locale: Locale) -> String {
    format!(
        "{LOCALE_COOKIE}={}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE}; SameSite=Lax",
        locale.as_str()
    )
}
