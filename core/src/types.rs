//! Categorical attribute enums shared across the generator.
//!
//! Variant order is load-bearing: every `ALL` array lines up
//! positionally with a weight vector in `config`. Append only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    #[serde(rename = "Non-binary")]
    NonBinary,
    #[serde(rename = "Prefer not to say")]
    Undisclosed,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Female,
        Gender::Male,
        Gender::NonBinary,
        Gender::Undisclosed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-binary",
            Gender::Undisclosed => "Prefer not to say",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    #[serde(rename = "Gen Z")]
    GenZ,
    Millennial,
    #[serde(rename = "Gen X")]
    GenX,
    Boomer,
}

impl Generation {
    pub const ALL: [Generation; 4] = [
        Generation::GenZ,
        Generation::Millennial,
        Generation::GenX,
        Generation::Boomer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Generation::GenZ => "Gen Z",
            Generation::Millennial => "Millennial",
            Generation::GenX => "Gen X",
            Generation::Boomer => "Boomer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-30")]
    From18To30,
    #[serde(rename = "31-45")]
    From31To45,
    #[serde(rename = "46-60")]
    From46To60,
    #[serde(rename = "60+")]
    Over60,
}

impl AgeGroup {
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::From18To30 => "18-30",
            AgeGroup::From31To45 => "31-45",
            AgeGroup::From46To60 => "46-60",
            AgeGroup::Over60 => "60+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "<$50k")]
    Under50k,
    #[serde(rename = "$50k-$100k")]
    From50kTo100k,
    #[serde(rename = "$100k+")]
    Over100k,
    #[serde(rename = "Prefer not to say")]
    Undisclosed,
}

impl IncomeBracket {
    pub const ALL: [IncomeBracket; 4] = [
        IncomeBracket::Under50k,
        IncomeBracket::From50kTo100k,
        IncomeBracket::Over100k,
        IncomeBracket::Undisclosed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IncomeBracket::Under50k => "<$50k",
            IncomeBracket::From50kTo100k => "$50k-$100k",
            IncomeBracket::Over100k => "$100k+",
            IncomeBracket::Undisclosed => "Prefer not to say",
        }
    }
}

/// The primary segmentation axis. Every downstream distribution
/// (amount, frequency, campaign, acquisition) is keyed on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DonorType {
    #[serde(rename = "Foundation/Corporate")]
    FoundationCorporate,
    #[serde(rename = "Major Individual")]
    MajorIndividual,
    #[serde(rename = "Monthly Sustainers")]
    MonthlySustainers,
    #[serde(rename = "Event Donors")]
    EventDonors,
    #[serde(rename = "Small Online Donors")]
    SmallOnlineDonors,
}

impl DonorType {
    pub const ALL: [DonorType; 5] = [
        DonorType::FoundationCorporate,
        DonorType::MajorIndividual,
        DonorType::MonthlySustainers,
        DonorType::EventDonors,
        DonorType::SmallOnlineDonors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DonorType::FoundationCorporate => "Foundation/Corporate",
            DonorType::MajorIndividual => "Major Individual",
            DonorType::MonthlySustainers => "Monthly Sustainers",
            DonorType::EventDonors => "Event Donors",
            DonorType::SmallOnlineDonors => "Small Online Donors",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    Check,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    PayPal,
    Cash,
    Venmo,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Check,
        PaymentMethod::BankTransfer,
        PaymentMethod::PayPal,
        PaymentMethod::Cash,
        PaymentMethod::Venmo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Check => "Check",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Venmo => "Venmo",
        }
    }
}
