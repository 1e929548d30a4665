// DOM hooks and styling constants for the web front-end.
//
// Markup opts into behaviour through data attributes.

// Floating background icons
pub const DRIFT_SELECTOR: &str = "[data-drift]";
pub const DRIFT_ATTR: &str = "data-drift"; // profile name: hero | about | technologies | projects
pub const DRIFT_SCOPE_SELECTOR: &str = "section"; // scroll bias follows the nearest enclosing section
pub const HIDDEN_CLASS: &str = "is-hidden";

// Tilt cards and their layers
pub const CARD_SELECTOR: &str = "[data-tilt-card]";
pub const CARD_IMAGE_SELECTOR: &str = "[data-tilt-image]";
pub const CARD_TITLE_SELECTOR: &str = "[data-tilt-title]";
pub const CARD_GLARE_SELECTOR: &str = "[data-tilt-glare]";
pub const GLARE_COLOR: &str = "rgba(100, 180, 255, 0.15)";
pub const GLARE_FADE_PCT: u32 = 80; // transparent stop of the radial gradient

// Navbar, back-to-top, scroll-linked sections
pub const NAVBAR_ID: &str = "navbar";
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "visible";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MENU_OVERLAY_ID: &str = "mobile-menu-overlay";
pub const MENU_LINK_SELECTOR: &str = "a"; // any link in the overlay closes it
pub const MENU_OPEN_CLASS: &str = "open"; // set on both the toggle and the overlay
pub const SCROLL_PROGRESS_SELECTOR: &str = "[data-scroll-progress]";
pub const SCROLL_PROGRESS_VAR: &str = "--scroll-progress"; // 0..1, written on the section itself

// Experience timeline
pub const TIMELINE_SELECTOR: &str = "[data-timeline]";
pub const TIMELINE_PATH_SELECTOR: &str = "[data-timeline-path]";
pub const TIMELINE_ENTRY_SELECTOR: &str = "[data-timeline-entry]";
pub const TIMELINE_DURATION_VAR: &str = "--draw-duration";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NOTICE_ID: &str = "contact-notice";
pub const CONTACT_SUBMIT_SELECTOR: &str = "button[type=submit]";
pub const FIELD_MESSAGE: &str = "user_message";
pub const FIELD_EMAIL: &str = "user_email";
pub const FIELD_NAME: &str = "user_name";
pub const NOTICE_SUCCESS_CLASS: &str = "notice-success";
pub const NOTICE_FAILURE_CLASS: &str = "notice-failure";

// Transactional email REST endpoint
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
