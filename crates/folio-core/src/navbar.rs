use crate::constants::*;
use crate::dom::Dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarVariant {
    Default,
    Scrolled,
}

impl NavbarVariant {
    #[inline]
    pub fn for_offset(scroll_y: f64, scrolled_at_px: f64) -> Self {
        if scroll_y > scrolled_at_px {
            Self::Scrolled
        } else {
            Self::Default
        }
    }

    /// `[transform, background, box-shadow]`
    pub fn styles(self) -> [&'static str; 3] {
        match self {
            Self::Default => NAVBAR_DEFAULT_STYLE,
            Self::Scrolled => NAVBAR_SCROLLED_STYLE,
        }
    }
}

/// Restyle the navbar for the current scroll offset.
pub fn update<D: Dom>(dom: &D, scrolled_at_px: f64) -> Option<NavbarVariant> {
    let navbar = dom.query(SEL_NAVBAR)?;
    let variant = NavbarVariant::for_offset(dom.scroll_y(), scrolled_at_px);
    let [transform, background, shadow] = variant.styles();
    dom.set_style(&navbar, "transform", transform);
    dom.set_style(&navbar, "background", background);
    dom.set_style(&navbar, "box-shadow", shadow);
    Some(variant)
}
