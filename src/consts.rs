//! Shared constants: thresholds, delays, class names, and canned copy.

// ── Navigation ──────────────────────────────────────────────────

/// Vertical scroll offset, in CSS pixels, past which the header is "scrolled".
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// How far ahead of a section's top edge it becomes the active section.
pub const SECTION_LOOKAHEAD_PX: f64 = 150.0;

// ── Chat ────────────────────────────────────────────────────────

/// Delay before a scripted bot reply lands in the transcript.
pub const BOT_REPLY_DELAY_MS: u32 = 800;

/// Non-contextual replies the chat widget picks from.
pub const CANNED_REPLIES: [&str; 5] = [
    "Hi! Thanks for reaching out. How can I assist you today?",
    "Interested in WhatsApp Business API? I can guide you through onboarding!",
    "We also offer Google RCS, IVR, Bulk SMS, and custom web solutions.",
    "Want to book a free demo? Just fill the form and we'll contact you!",
    "Our team typically responds within 1-2 hours during business days.",
];

// ── CSS classes ─────────────────────────────────────────────────

/// Added to the header once the page scrolls past [`SCROLL_THRESHOLD_PX`].
pub const HEADER_SCROLLED_CLASS: &str = "header-scrolled";

/// Marks open menus, the open modal, and the highlighted nav link.
pub const ACTIVE_CLASS: &str = "active";

/// Transcript entry written by the visitor.
pub const USER_MESSAGE_CLASS: &str = "user-message";

/// Transcript entry written by the scripted agent.
pub const BOT_MESSAGE_CLASS: &str = "bot-message";

// ── Logging ─────────────────────────────────────────────────────

/// Logged once after every listener is attached.
pub const STARTUP_NOTICE: &str = "Pingvia Solutions JS Loaded Successfully ✔";
