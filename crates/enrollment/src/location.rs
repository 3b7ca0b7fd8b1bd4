use strum::{Display, EnumIter};

/// Countries the form offers. Closed list; the record stores the display
/// name as typed into the select, not the enum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Country {
    India,
    #[strum(to_string = "USA")]
    Usa,
    #[strum(to_string = "UK")]
    Uk,
}

/// Cities the form offers. Independent of [`Country`]; no cross-check that
/// the city belongs to the selected country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum City {
    #[strum(to_string = "New York")]
    NewYork,
    London,
    Delhi,
}

impl Country {
    /// Select options in menu order. The leading empty entry renders as the
    /// "Select Country" placeholder.
    pub const OPTIONS: &'static [&'static str] = &["", "India", "USA", "UK"];
}

impl City {
    /// Select options in menu order. The leading empty entry renders as the
    /// "Select City" placeholder.
    pub const OPTIONS: &'static [&'static str] = &["", "New York", "London", "Delhi"];
}
