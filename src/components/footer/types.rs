/// A key hint in the footer.
pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

/// Related hints, dropped as a unit when the footer runs out of room.
pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

impl FooterItem {
    pub(super) const fn new(key: &'static str, desc: &'static str) -> Self {
        Self {
            key,
            desc,
            highlighted: false,
        }
    }
}
