#[cfg(debug_assertions)]
pub fn form_endpoint() -> &'static str {
    "http://localhost:3001/api/inquiries" // Local form catcher when developing
}

#[cfg(not(debug_assertions))]
pub fn form_endpoint() -> &'static str {
    "https://api.web3forms.com/submit"
}

/// localStorage key holding the affiliate code a visitor arrived with.
pub const AFFILIATE_REF_KEY: &str = "affiliate_ref";

pub const STUDIO_NAME: &str = "K72";
pub const CONTACT_EMAIL: &str = "contact@amouraworks.com";
pub const AFFILIATE_EMAIL: &str = "affiliates@amouraworks.com";
pub const STUDIO_ADDRESS: &str = "22 ruelle du Clerc, 59126, Linselles (France)";
pub const STUDIO_HOURS: &str = "M–F: 9am – 7pm (UTC+1)";

pub const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("Instagram", "https://instagram.com/s111khar", "📷"),
    ("Facebook", "https://facebook.com/k72wedding", "📘"),
    ("LinkedIn", "https://linkedin.com/company/k72wedding", "💼"),
];
