mod donate;

pub use donate::{Caption, DonateButton, DonateStyle, DonateTimings, Donation, Phase, Region};
