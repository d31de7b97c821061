//! Confirmation view

use std::fmt;

use shared::models::BookingResult;

/// Renders a confirmed booking as text
#[derive(Debug, Clone, Copy)]
pub struct Confirmation<'a> {
    booking: &'a BookingResult,
}

impl<'a> Confirmation<'a> {
    pub fn new(booking: &'a BookingResult) -> Self {
        Self { booking }
    }

    /// "1 lane • 2 players"
    pub fn party_line(&self) -> String {
        let b = self.booking;
        format!(
            "{} {} • {} {}",
            b.lanes,
            if b.lanes > 1 { "lanes" } else { "lane" },
            b.people,
            if b.people > 1 { "players" } else { "player" },
        )
    }

    /// Shoe sizes joined with ", "
    pub fn shoes_line(&self) -> String {
        self.booking
            .shoes
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Confirmation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.booking;
        writeln!(f, "Booking confirmed")?;
        writeln!(f, "See you on the lanes!")?;
        writeln!(f)?;
        writeln!(f, "Booking number:  {}", b.id)?;
        writeln!(f, "Total:           {} kr", b.price)?;
        writeln!(f, "When:            {}", b.when)?;
        writeln!(f, "Lanes & players: {}", self.party_line())?;
        write!(f, "Shoes:           {}", self.shoes_line())
    }
}
