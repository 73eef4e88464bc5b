use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Closed,
    Open,
}

impl Phase {
    pub const fn toggled(self) -> Self {
        match self {
            Phase::Closed => Phase::Open,
            Phase::Open => Phase::Closed,
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Phase::Open)
    }
}

/// Text on the button face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Caption {
    #[default]
    Donate,
    ThankYou,
}

impl Caption {
    pub const fn as_str(self) -> &'static str {
        match self {
            Caption::Donate => "Donate",
            Caption::ThankYou => "Thank You",
        }
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a donate button remembers between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Donation {
    phase:   Phase,
    caption: Caption,
    amount:  f64,
    step:    f64,
}

impl Default for Donation {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl Donation {
    /// Negative steps are treated as zero, the total never goes down.
    pub fn new(step: f64) -> Self {
        Self {
            phase:   Phase::Closed,
            caption: Caption::Donate,
            amount:  0.0,
            step:    step.max(0.0),
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub const fn caption(&self) -> Caption {
        self.caption
    }

    pub const fn amount(&self) -> f64 {
        self.amount
    }

    pub const fn step(&self) -> f64 {
        self.step
    }

    pub fn toggle(&mut self) -> Phase {
        self.phase = self.phase.toggled();
        self.phase
    }

    /// Show the thank you caption. Closing again keeps it.
    pub fn reveal(&mut self) {
        self.caption = Caption::ThankYou;
    }

    /// Add one step to the total and return the new total.
    pub fn donate(&mut self) -> f64 {
        self.amount += self.step;
        self.amount
    }

    pub fn amount_text(&self) -> String {
        format_amount(self.amount)
    }
}

/// Whole amounts keep one decimal, `30.0$`.
fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}$")
    } else {
        format!("{amount}$")
    }
}
