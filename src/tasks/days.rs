// Weekly activation mask parsed from a compact day pattern

/// Canonical two-letter weekday abbreviations, Monday first.
const DAY_ABBREVS: [&str; 7] = ["mo", "tu", "we", "th", "fr", "sa", "su"];

/// Which weekdays a task is active on.
///
/// Parsed from a pattern of two characters per weekday, Monday through
/// Sunday — e.g. `"mo--we--frsasu"` is active Monday, Wednesday, Friday
/// through Sunday. A slot is active only when it exactly matches that
/// weekday's abbreviation; any other two characters act as a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDays {
    active: Vec<bool>,
}

impl ActiveDays {
    /// Parse a day pattern. Never fails: unparseable or short input
    /// degrades to "inactive" for the affected weekdays.
    pub fn parse(pattern: &str) -> Self {
        let active = pattern
            .as_bytes()
            .chunks(2)
            .enumerate()
            .map(|(index, chunk)| {
                DAY_ABBREVS
                    .get(index)
                    .is_some_and(|abbrev| chunk == abbrev.as_bytes())
            })
            .collect();
        Self { active }
    }

    /// Whether the mask is active on the given weekday (0 = Monday,
    /// 6 = Sunday). Indices beyond the parsed pattern are inactive.
    pub fn is_active_on(&self, weekday: usize) -> bool {
        self.active.get(weekday).copied().unwrap_or(false)
    }
}
