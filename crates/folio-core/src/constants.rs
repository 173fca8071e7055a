// Shared tuning constants for the page effects.
//
// Selectors name the markup hooks the page provides; everything else is a
// breakpoint, a count, a threshold or a delay.

// Breakpoints (CSS px)
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // width < this builds the small particle field
pub const MENU_BREAKPOINT_PX: f64 = 768.0; // width > this forces the menu closed

// Particle field
pub const PARTICLES_MOBILE: usize = 15;
pub const PARTICLES_DESKTOP: usize = 30;
pub const PARTICLE_SIZE_MIN_PX: f64 = 2.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 3.0; // size in [min, min + span)
pub const PARTICLE_DELAY_MAX_SEC: f64 = 20.0;
pub const PARTICLE_SCROLL_OPACITY: &str = "0.5";
pub const PARTICLE_REST_OPACITY: &str = "1";
pub const PARTICLE_REGEN_DELTA_PX: f64 = 100.0; // resize delta that rebuilds the field

// Scroll thresholds (px)
pub const NAVBAR_SCROLLED_AT_PX: f64 = 50.0;
pub const SCROLL_TOP_VISIBLE_AT_PX: f64 = 300.0;
pub const HEADER_OFFSET_PX: f64 = 80.0; // fixed header height for in-page navigation

// Delays (ms)
pub const PARTICLE_RESTORE_MS: u32 = 100;
pub const MENU_SYNC_DEBOUNCE_MS: u32 = 150;
pub const LAYOUT_DEBOUNCE_MS: u32 = 250;
pub const TOUCH_RELEASE_MS: u32 = 300;
pub const TAG_RIPPLE_MS: u32 = 600;
pub const BUTTON_RIPPLE_MS: u32 = 800;
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const HERO_STAGGER_MS: u32 = 200;

// Reveal observer options
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -30px 0px";
pub const REVEAL_HIDDEN_OPACITY: &str = "0";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str =
    "opacity 0.6s cubic-bezier(0.4, 0, 0.2, 1), transform 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

// Pointer feedback
pub const MAGNETIC_STRENGTH: f32 = 0.1; // fraction of the pointer's offset from center
pub const TAG_PULSE_ANIMATION: &str = "tagPulse 0.6s ease-in-out";

// Card hover lift
pub const CARD_LIFT_TRANSFORM: &str = "translateY(-8px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";

// Navbar variants: (transform, background, box-shadow)
pub const NAVBAR_SCROLLED_STYLE: [&str; 3] = [
    "translateY(-5px)",
    "rgba(15, 15, 35, 0.98)",
    "0 8px 40px rgba(0, 0, 0, 0.4)",
];
pub const NAVBAR_DEFAULT_STYLE: [&str; 3] = [
    "translateY(0px)",
    "rgba(15, 15, 35, 0.95)",
    "0 4px 30px rgba(0, 0, 0, 0.3)",
];

// Footer
pub const COPYRIGHT_PLACEHOLDER: &str = "2024";

// Markup hooks
pub const SEL_PARTICLES_ID: &str = "particles";
pub const SEL_PARTICLE: &str = ".particle";
pub const SEL_NAVBAR: &str = ".navbar";
pub const SEL_NAV_LINK: &str = ".nav-link";
pub const SEL_NAV_MENU: &str = ".nav-menu";
pub const SEL_MENU_BUTTON: &str = ".mobile-menu-btn";
pub const SEL_SCROLL_TOP: &str = ".scroll-to-top";
pub const SEL_REVEAL_TARGETS: &str =
    ".contact-item, .resume-card, .skill-category, .experience-item, .education-card";
pub const SEL_TAG: &str = ".tag";
pub const SEL_BUTTON: &str = ".btn";
pub const SEL_FOOTER_YEAR: &str = ".footer-left p";
pub const SEL_HERO: &str =
    ".hero-title, .hero-description, .hero-subdescription, .hero-tags, .hero-buttons, .hero-image";

// Class names toggled by the effects
pub const CLASS_PARTICLE: &str = "particle";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_ANIMATE_IN: &str = "animate-in";
pub const CLASS_RIPPLE: &str = "ripple";
pub const CLASS_BUTTON_RIPPLE: &str = "button-ripple";
pub const CLASS_PRIMARY_BUTTON: &str = "btn-primary";
pub const CLASS_LOADED: &str = "loaded";

pub const ARIA_EXPANDED: &str = "aria-expanded";
