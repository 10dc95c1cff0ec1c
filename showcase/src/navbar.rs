//! Navbar widget state: scroll shadow, shortened contract address, and the
//! transient "Copied!" indicator.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

const ADDRESS_HEAD_CHARS: usize = 6;
const ADDRESS_TAIL_CHARS: usize = 4;

/// Whether the navbar should draw its scrolled shadow.
#[must_use]
pub fn is_scrolled(scroll_offset: f64) -> bool {
    scroll_offset > 0.0
}

/// `E7jDjY...pump` style display form of an address.
///
/// Addresses too short to elide are returned whole.
#[must_use]
pub fn shorten_address(address: &str) -> String {
    let chars = address.chars().collect::<Vec<_>>();
    if chars.len() <= ADDRESS_HEAD_CHARS + ADDRESS_TAIL_CHARS {
        return address.to_owned();
    }
    let head = chars[..ADDRESS_HEAD_CHARS].iter().collect::<String>();
    let tail = chars[chars.len() - ADDRESS_TAIL_CHARS..].iter().collect::<String>();
    format!("{head}...{tail}")
}

/// Identifies the copy that scheduled a hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket(u64);

/// Visibility of the "Copied!" indicator.
///
/// Each successful copy shows the indicator and hands out a ticket for the
/// delayed hide. Only the newest ticket hides it, so a second copy keeps the
/// indicator up for its full duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    visible: bool,
    latest: u64,
}

impl CopyIndicator {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> HideTicket {
        self.latest += 1;
        self.visible = true;
        HideTicket(self.latest)
    }

    /// Hide the indicator if `ticket` belongs to the most recent copy.
    pub fn hide(&mut self, ticket: HideTicket) {
        if ticket.0 == self.latest {
            self.visible = false;
        }
    }
}
